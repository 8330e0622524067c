pub mod export;
pub mod filter;
pub mod sort;

pub use export::{export_csv, write_csv};
pub use filter::filter_by_name;
pub use sort::{sort_records, SortKey, SortOrder};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
