//! Resolving one source against a list of bucket aspects.
//!
//! Keys are the aspect strings exactly as given, in input order, duplicates
//! included. One bad entry fails the whole table.

use alloc::string::String;
use alloc::vec::Vec;

use crate::BucketError;
use crate::dims::{Aspect, Resolution};
use crate::resolver::{BucketResolver, CropOutcome};

/// Ordered `aspect string → value` mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketTable<T> {
    entries: Vec<(String, T)>,
}

impl<T> BucketTable<T> {
    /// Value for the first entry whose key is `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in input order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the aspect list was empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table into its entries.
    pub fn into_entries(self) -> Vec<(String, T)> {
        self.entries
    }

    /// Same keys, values transformed by `f`.
    pub fn map_values<U>(self, mut f: impl FnMut(T) -> U) -> BucketTable<U> {
        BucketTable {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    fn build<S, F>(aspects: &[S], mut f: F) -> Result<Self, BucketError>
    where
        S: AsRef<str>,
        F: FnMut(Aspect) -> Result<T, BucketError>,
    {
        let mut entries = Vec::with_capacity(aspects.len());
        for key in aspects {
            let key = key.as_ref();
            let value = f(key.parse()?)?;
            entries.push((String::from(key), value));
        }
        Ok(Self { entries })
    }
}

impl<T> IntoIterator for BucketTable<T> {
    type Item = (String, T);
    type IntoIter = alloc::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl BucketResolver {
    /// [`optimal_crop`](Self::optimal_crop) for every aspect in `aspects`.
    pub fn optimal_crop_table<S: AsRef<str>>(
        &self,
        source: Resolution,
        aspects: &[S],
    ) -> Result<BucketTable<CropOutcome>, BucketError> {
        BucketTable::build(aspects, |aspect| self.optimal_crop(source, aspect))
    }

    /// [`preserved_area`](Self::preserved_area) for every aspect in `aspects`.
    pub fn preserved_area_table<S: AsRef<str>>(
        &self,
        source: Resolution,
        aspects: &[S],
    ) -> Result<BucketTable<Resolution>, BucketError> {
        BucketTable::build(aspects, |aspect| self.preserved_area(source, aspect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> BucketResolver {
        BucketResolver::new().tolerance(0.05).quiet(true)
    }

    #[test]
    fn keys_keep_order_and_duplicates() {
        let table = resolver()
            .optimal_crop_table(Resolution::new(1024, 1024), &["16:9", "1:1", "4:3", "1:1"])
            .unwrap();
        let keys: Vec<&str> = table.keys().collect();
        assert_eq!(keys, ["16:9", "1:1", "4:3", "1:1"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn values_match_single_calls() {
        let src = Resolution::new(1024, 1024);
        let table = resolver()
            .optimal_crop_table(src, &["4:3", "16:9"])
            .unwrap();
        assert_eq!(
            table.get("4:3"),
            Some(&CropOutcome::InTolerance(Resolution::new(1024, 768)))
        );
        assert_eq!(
            table.get("16:9"),
            Some(&CropOutcome::InTolerance(Resolution::new(1024, 576)))
        );
        assert_eq!(table.get("3:2"), None);
    }

    #[test]
    fn keys_are_verbatim() {
        let table = resolver()
            .preserved_area_table(Resolution::new(1024, 1024), &["2:4", "1:2"])
            .unwrap();
        assert_eq!(table.get("2:4"), table.get("1:2"));
        assert!(table.get("2:4").is_some());
    }

    #[test]
    fn preserved_area_table() {
        let table = resolver()
            .preserved_area_table(Resolution::new(1024, 1024), &["16:9", "1:1"])
            .unwrap();
        let entries = table.into_entries();
        assert_eq!(
            entries,
            vec![
                (String::from("16:9"), Resolution::new(1344, 768)),
                (String::from("1:1"), Resolution::new(1024, 1024)),
            ]
        );
    }

    #[test]
    fn one_bad_entry_fails_all() {
        let err = resolver()
            .optimal_crop_table(Resolution::new(1024, 1024), &["4:3", "4:0"])
            .unwrap_err();
        assert_eq!(err, BucketError::InvalidDimensions);
        let err = resolver()
            .preserved_area_table(Resolution::new(1024, 1024), &["4:3", "four:three"])
            .unwrap_err();
        assert!(matches!(err, BucketError::MalformedInput { .. }));
    }

    #[test]
    fn empty_list_is_empty_table() {
        let list: [&str; 0] = [];
        let table = resolver()
            .optimal_crop_table(Resolution::new(1024, 1024), &list)
            .unwrap();
        assert!(table.is_empty());
    }
}
