use serde::{Deserialize, Serialize};

/// Star rating read from a listing entry's rating indicator.
///
/// A closed six-level category plus [`Rating::Unknown`] for entries with no
/// indicator at all. `Unknown` displays and serializes as the literal
/// `"None"` and is distinct from [`Rating::Zero`]: a zero-star book was
/// rated, an unknown one was not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "None")]
    Unknown,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    /// Maps a rating indicator's class token (e.g. `"Three"`) to its
    /// variant. Unrecognized tokens fold into `Unknown`.
    #[must_use]
    pub fn from_class_token(token: &str) -> Self {
        match token {
            "Zero" => Self::Zero,
            "One" => Self::One,
            "Two" => Self::Two,
            "Three" => Self::Three,
            "Four" => Self::Four,
            "Five" => Self::Five,
            _ => Self::Unknown,
        }
    }

    /// Display value; `"None"` is the unknown-rating sentinel.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "None",
            Self::Zero => "Zero",
            Self::One => "One",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
        }
    }

    /// Integer scale for ordering: `Zero` = 0 through `Five` = 5.
    /// `Unknown` maps to -1 so it orders below `Zero` without collapsing
    /// the sentinel into a real rating.
    #[must_use]
    pub fn score(self) -> i8 {
        match self {
            Self::Unknown => -1,
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extended attributes from an item's detail page.
///
/// Structurally complete: all seven fields exist on every record, and a
/// field whose row is absent from the source table stays empty text rather
/// than being omitted. [`Default`] is the all-empty starting point the
/// detail parser selectively overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub upc: String,
    pub product_type: String,
    pub price_excl_tax: String,
    pub price_incl_tax: String,
    pub tax: String,
    /// Availability text as displayed, e.g. `"In stock (22 available)"`.
    pub availability: String,
    pub num_reviews: String,
}

/// The merged, flat result record for one catalogue item: listing summary
/// fields, the absolute detail address, and the detail attributes.
///
/// Records are produced in crawl discovery order (page number ascending,
/// then in-page listing order); the order is reproducible but carries no
/// other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueRecord {
    pub name: String,
    pub rating: Rating,
    /// Currency-formatted display price, e.g. `"£53.74"`.
    pub price: String,
    /// Absolute address of the item's detail page.
    pub url: String,
    #[serde(flatten)]
    pub detail: BookDetail,
}
