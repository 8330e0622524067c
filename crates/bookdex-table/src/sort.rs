//! Ordering of catalogue records.

use std::cmp::Ordering;

use bookdex_core::CatalogueRecord;

/// Field to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic on the record name.
    Name,
    /// Integer rating scale; the unknown-rating sentinel orders below zero.
    Rating,
    /// Numeric on the display price with the currency symbol stripped.
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sorts records in place by `key` and `order`.
///
/// The sort is stable: records comparing equal keep their crawl discovery
/// order in either direction.
pub fn sort_records(records: &mut [CatalogueRecord], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &CatalogueRecord, b: &CatalogueRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Rating => a.rating.score().cmp(&b.rating.score()),
        SortKey::Price => compare_prices(&a.price, &b.price),
    }
}

/// Numeric price comparison. A price that does not parse orders before
/// every parseable one.
fn compare_prices(a: &str, b: &str) -> Ordering {
    match (parse_price(a), parse_price(b)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parses a display price by stripping everything ahead of the first digit
/// (the currency symbol) and reading the remainder as a decimal number.
#[must_use]
pub fn parse_price(display: &str) -> Option<f64> {
    display
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .parse::<f64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use bookdex_core::{BookDetail, Rating};

    use super::*;

    fn make_record(name: &str, rating: Rating, price: &str) -> CatalogueRecord {
        CatalogueRecord {
            name: name.to_owned(),
            rating,
            price: price.to_owned(),
            url: String::new(),
            detail: BookDetail::default(),
        }
    }

    fn names(records: &[CatalogueRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn parse_price_strips_the_currency_symbol() {
        assert_eq!(parse_price("£53.74"), Some(53.74));
        assert_eq!(parse_price("  £10.00 "), Some(10.0));
    }

    #[test]
    fn parse_price_rejects_non_numeric_text() {
        assert_eq!(parse_price("free"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn sort_by_name_is_lexicographic() {
        let mut records = vec![
            make_record("Gamma", Rating::One, "£1.00"),
            make_record("Alpha", Rating::One, "£2.00"),
            make_record("Beta", Rating::One, "£3.00"),
        ];
        sort_records(&mut records, SortKey::Name, SortOrder::Ascending);
        assert_eq!(names(&records), ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn price_ascending_then_descending_are_exact_reverses() {
        let mut ascending = vec![
            make_record("Mid", Rating::One, "£20.00"),
            make_record("Low", Rating::One, "£5.99"),
            make_record("High", Rating::One, "£53.74"),
        ];
        let mut descending = ascending.clone();

        sort_records(&mut ascending, SortKey::Price, SortOrder::Ascending);
        sort_records(&mut descending, SortKey::Price, SortOrder::Descending);

        assert_eq!(names(&ascending), ["Low", "Mid", "High"]);
        let reversed: Vec<&str> = names(&descending).into_iter().rev().collect();
        assert_eq!(names(&ascending), reversed);
    }

    #[test]
    fn equal_prices_keep_discovery_order() {
        let mut records = vec![
            make_record("First", Rating::One, "£9.99"),
            make_record("Second", Rating::One, "£9.99"),
            make_record("Cheaper", Rating::One, "£1.00"),
        ];
        sort_records(&mut records, SortKey::Price, SortOrder::Ascending);
        assert_eq!(names(&records), ["Cheaper", "First", "Second"]);

        sort_records(&mut records, SortKey::Price, SortOrder::Descending);
        assert_eq!(names(&records), ["First", "Second", "Cheaper"]);
    }

    #[test]
    fn unparseable_prices_sort_before_parseable_ones() {
        let mut records = vec![
            make_record("Priced", Rating::One, "£9.99"),
            make_record("Unpriced", Rating::One, ""),
        ];
        sort_records(&mut records, SortKey::Price, SortOrder::Ascending);
        assert_eq!(names(&records), ["Unpriced", "Priced"]);
    }

    #[test]
    fn rating_sort_uses_the_integer_scale() {
        let mut records = vec![
            make_record("Five", Rating::Five, "£1.00"),
            make_record("One", Rating::One, "£1.00"),
            make_record("Three", Rating::Three, "£1.00"),
        ];
        sort_records(&mut records, SortKey::Rating, SortOrder::Descending);
        assert_eq!(names(&records), ["Five", "Three", "One"]);
    }

    #[test]
    fn unknown_rating_sorts_below_zero_stars() {
        let mut records = vec![
            make_record("Zero Stars", Rating::Zero, "£1.00"),
            make_record("Unrated", Rating::Unknown, "£1.00"),
        ];
        sort_records(&mut records, SortKey::Rating, SortOrder::Ascending);
        assert_eq!(names(&records), ["Unrated", "Zero Stars"]);
    }
}
