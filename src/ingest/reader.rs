use std::path::Path;

use crate::error::Result;

use super::Row;

/// Load the data rows from the source table.
///
/// The first line is a header and is discarded. Rows where every field is
/// empty are dropped; everything else is kept in file order. Column counts
/// are not validated here — rows may be short or ragged, and later stages
/// read missing columns as empty text via [`Row::field`].
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let row = Row::from(&record?);
        if row.is_blank() {
            continue;
        }
        rows.push(row);
    }

    log::info!("Loaded {} data rows from {}", rows.len(), path.display());
    Ok(rows)
}
