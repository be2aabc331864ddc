pub mod extract;
pub mod inspect;
pub mod table;

use std::path::Path;
use suncheck_core::error::SuncheckError;
use suncheck_core::table::schema::ClassificationTable;

/// The table from `--table`, or the built-in one.
fn load_table(path: Option<&Path>) -> Result<ClassificationTable, SuncheckError> {
    match path {
        Some(path) => suncheck_core::table::load_table(path),
        None => Ok(ClassificationTable::default()),
    }
}
