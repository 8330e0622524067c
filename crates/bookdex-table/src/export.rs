//! Delimiter-separated export of catalogue records.
//!
//! Semicolon-separated text prefixed with a UTF-8 byte-order mark, so
//! spreadsheet tools that assume that locale convention open the file with
//! correct columns and encoding.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use bookdex_core::CatalogueRecord;

use crate::TableError;

/// UTF-8 byte-order mark, written ahead of the CSV payload.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Column order of the export: summary fields first, then the detail
/// fields under the source site's own table labels.
const HEADERS: [&str; 11] = [
    "name",
    "rating",
    "price",
    "url",
    "upc",
    "product type",
    "price (excl. tax)",
    "price (incl. tax)",
    "tax",
    "availability",
    "number of reviews",
];

/// Writes records to `writer`: the byte-order mark, a header row, then one
/// row per record in the order given.
///
/// # Errors
///
/// Returns [`TableError`] on any write failure.
pub fn write_csv<W: Write>(mut writer: W, records: &[CatalogueRecord]) -> Result<(), TableError> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = WriterBuilder::new().delimiter(b';').from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.write_record([
            record.name.as_str(),
            record.rating.as_str(),
            record.price.as_str(),
            record.url.as_str(),
            record.detail.upc.as_str(),
            record.detail.product_type.as_str(),
            record.detail.price_excl_tax.as_str(),
            record.detail.price_incl_tax.as_str(),
            record.detail.tax.as_str(),
            record.detail.availability.as_str(),
            record.detail.num_reviews.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes records to the file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`TableError`] if the file cannot be created or written.
pub fn export_csv(path: &Path, records: &[CatalogueRecord]) -> Result<(), TableError> {
    let file = File::create(path)?;
    write_csv(file, records)
}
