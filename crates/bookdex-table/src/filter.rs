//! Text filtering over catalogue records.

use bookdex_core::CatalogueRecord;

/// Keeps the records whose name contains `query`, case-insensitively.
/// An empty query keeps everything. Record order is preserved.
#[must_use]
pub fn filter_by_name(records: Vec<CatalogueRecord>, query: &str) -> Vec<CatalogueRecord> {
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use bookdex_core::{BookDetail, Rating};

    use super::*;

    fn make_record(name: &str) -> CatalogueRecord {
        CatalogueRecord {
            name: name.to_owned(),
            rating: Rating::Three,
            price: "£10.00".to_owned(),
            url: String::new(),
            detail: BookDetail::default(),
        }
    }

    #[test]
    fn matches_are_case_insensitive() {
        let records = vec![make_record("The Grand Design"), make_record("Sapiens")];
        let kept = filter_by_name(records, "grand");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "The Grand Design");
    }

    #[test]
    fn query_matches_anywhere_in_the_name() {
        let records = vec![make_record("A Light in the Attic")];
        assert_eq!(filter_by_name(records, "in the").len(), 1);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let records = vec![make_record("One"), make_record("Two")];
        assert_eq!(filter_by_name(records, "").len(), 2);
    }

    #[test]
    fn no_match_yields_an_empty_set() {
        let records = vec![make_record("One"), make_record("Two")];
        assert!(filter_by_name(records, "three").is_empty());
    }

    #[test]
    fn surviving_records_keep_their_order() {
        let records = vec![
            make_record("Alpha Light"),
            make_record("Beta"),
            make_record("Gamma Light"),
        ];
        let kept = filter_by_name(records, "light");
        assert_eq!(kept[0].name, "Alpha Light");
        assert_eq!(kept[1].name, "Gamma Light");
    }
}
