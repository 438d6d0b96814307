//! License codes.

use serde_json::json;

use super::ResourceDefinition;

/// License codes used by the API for model records and the `license` filter.
pub const LICENSES: [&str; 7] = [
    "CC0",
    "CC-BY",
    "CC-BY-SA",
    "CC-BY-ND",
    "CC-BY-NC",
    "CC-BY-NC-SA",
    "CC-BY-NC-ND",
];

/// License code list resource.
pub struct LicensesResource;

impl ResourceDefinition for LicensesResource {
    const URI: &'static str = "polypizza://licenses";
    const NAME: &'static str = "Model Licenses";
    const DESCRIPTION: &'static str = "License codes accepted by the license filter of the search tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> String {
        format!("{:#}", json!(LICENSES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_licenses_content() {
        let content: Vec<String> = serde_json::from_str(&LicensesResource::content()).unwrap();
        assert_eq!(content.first().map(String::as_str), Some("CC0"));
        assert_eq!(content.len(), 7);
    }
}
