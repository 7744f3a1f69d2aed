// backend/src/models/mod.rs

use serde::Serialize;

// ───────────────────────────────────────
// Response envelope
// ───────────────────────────────────────

/// Uniform wrapper for every API response.
///
/// Successful responses carry only `data`; failures carry only `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDto<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorDto>,
}

impl<T> ResultDto<T> {
    pub fn data(data: T) -> Self {
        Self { data: Some(data), errors: vec![] }
    }

    pub fn error(details: impl Into<String>) -> Self {
        Self { data: None, errors: vec![ErrorDto { details: details.into() }] }
    }

    pub fn get_data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn get_errors(&self) -> &[ErrorDto] {
        &self.errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDto {
    pub details: String,
}

// ───────────────────────────────────────
// System information
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub name: String,
    pub version: String,
    pub legal_note: String,
}

impl SystemInfo {
    pub fn new(name: &str, version: &str, legal_note: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: version.to_owned(),
            legal_note: legal_note.to_owned(),
        }
    }

    /// Builds the system info already wrapped in the response envelope.
    pub fn from(name: &str, version: &str, legal_note: &str) -> ResultDto<Self> {
        ResultDto::data(Self::new(name, version, legal_note))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_copies_fields_verbatim() {
        let result = SystemInfo::from("nordnotes", "1.0.0", "legal");
        let info = result.get_data().unwrap();
        assert_eq!(info.name, "nordnotes");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.legal_note, "legal");
        assert!(result.get_errors().is_empty());
    }

    #[test]
    fn from_is_pure() {
        assert_eq!(SystemInfo::from("a", "b", "c"), SystemInfo::from("a", "b", "c"));
    }

    #[test]
    fn from_accepts_empty_strings() {
        let result = SystemInfo::from("", "", "");
        assert_eq!(result.get_data(), Some(&SystemInfo::new("", "", "")));
    }

    #[test]
    fn data_envelope_has_only_data_key() {
        let value = serde_json::to_value(SystemInfo::from("n", "v", "l")).unwrap();
        assert_eq!(value, json!({ "data": { "name": "n", "version": "v", "legalNote": "l" } }));
    }

    #[test]
    fn error_envelope_has_only_errors_key() {
        let value = serde_json::to_value(ResultDto::<SystemInfo>::error("boom")).unwrap();
        assert_eq!(value, json!({ "errors": [ { "details": "boom" } ] }));
    }
}
