//! Text notation for resolutions (`1024x768`) and aspect ratios (`4:3`).
//!
//! Both forms share one grammar: a base-10 integer, exactly one separator
//! (`:` or `x`), another base-10 integer. Whitespace, signs and any other
//! characters are rejected. Zero is accepted here; the resolvers reject it.

use core::str::FromStr;

use crate::BucketError;
use crate::dims::{Aspect, Resolution};

/// Parse `"<int>:<int>"` or `"<int>x<int>"` into an ordered pair.
///
/// ```
/// use zenbucket::notation::parse_pair;
///
/// assert_eq!(parse_pair("1024x768"), Ok((1024, 768)));
/// assert_eq!(parse_pair("16:9"), Ok((16, 9)));
/// assert!(parse_pair("16/9").is_err());
/// ```
pub fn parse_pair(text: &str) -> Result<(u32, u32), BucketError> {
    if text.is_empty() {
        return Err(malformed("empty input"));
    }

    let mut separators = text.match_indices([':', 'x']);
    let Some((at, sep)) = separators.next() else {
        return Err(malformed("missing ':' or 'x' separator"));
    };
    if separators.next().is_some() {
        return Err(malformed("more than two fields"));
    }

    let left = parse_field(&text[..at])?;
    let right = parse_field(&text[at + sep.len()..])?;
    Ok((left, right))
}

fn parse_field(field: &str) -> Result<u32, BucketError> {
    if field.is_empty() {
        return Err(malformed("empty field"));
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("field is not a base-10 integer"));
    }
    field.parse::<u32>().map_err(|_| malformed("field out of range"))
}

fn malformed(reason: &'static str) -> BucketError {
    BucketError::MalformedInput { reason }
}

impl FromStr for Resolution {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s).map(|(w, h)| Resolution::new(w, h))
    }
}

impl FromStr for Aspect {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pair(s).map(|(w, h)| Aspect::new(w, h))
    }
}
