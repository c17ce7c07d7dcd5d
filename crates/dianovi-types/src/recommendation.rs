//! Recommendation wire model.

use serde::{Deserialize, Serialize};

/// A short advisory text item associated with a patient.
///
/// Read-only from the client's perspective. The backend sends an `id`
/// alongside the text; it is carried for completeness but never displayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Backend-assigned identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display text.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_id() {
        let with_id: Recommendation =
            serde_json::from_str(r#"{"id": "rec_001", "text": "Check lab results."}"#)
                .expect("parse recommendation");
        assert_eq!(with_id.id.as_deref(), Some("rec_001"));
        assert_eq!(with_id.text, "Check lab results.");

        let without_id: Recommendation = serde_json::from_str(r#"{"text": "Review dosage."}"#)
            .expect("parse recommendation without id");
        assert!(without_id.id.is_none());
    }
}
