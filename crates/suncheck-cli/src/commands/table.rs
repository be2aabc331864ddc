use suncheck_core::error::SuncheckError;
use suncheck_core::table::schema::ClassificationTable;

/// Print the built-in table; a starting point for a custom `--table` file.
pub fn print_default() -> Result<(), SuncheckError> {
    let json = serde_json::to_string_pretty(&ClassificationTable::default())?;
    println!("{json}");
    Ok(())
}
