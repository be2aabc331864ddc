use suncheck_core::error::SuncheckError;
use suncheck_core::store::ExtractedData;

pub fn to_string(data: &ExtractedData) -> Result<String, SuncheckError> {
    Ok(serde_json::to_string_pretty(data)?)
}
