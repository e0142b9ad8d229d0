//! File-backed stock symbol list.

use std::path::Path;

use serde::Deserialize;

/// One row of the symbols CSV; only the `Symbol` column matters.
#[derive(Debug, Deserialize)]
struct SymbolRow {
    #[serde(rename = "Symbol")]
    symbol: String,
}

/// Loads the selectable symbols from a CSV file with a `Symbol` header.
///
/// A missing or unreadable file is not fatal: it yields an empty list with a
/// warning, so the submission surface still works with free-form input.
/// Malformed rows are skipped individually.
pub fn load_symbols(path: &Path) -> Vec<String> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "symbols file not readable; using empty list"
            );
            return Vec::new();
        }
    };

    let mut symbols = Vec::new();
    for row in reader.deserialize::<SymbolRow>() {
        match row {
            Ok(row) => symbols.push(row.symbol),
            Err(error) => tracing::warn!(%error, "skipping malformed symbols row"),
        }
    }
    symbols
}
