use serde::{Deserialize, Serialize};

/// Wrapper the remote API puts around every payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// An envelope with every field missing, used for empty response bodies.
    pub fn empty() -> Self {
        Self {
            status_code: None,
            success: None,
            message: None,
            data: None,
        }
    }

    /// Only an explicit `success: false` counts as a rejection.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"statusCode":200,"success":true,"message":"ok","data":[1,2]}"#,
        )
        .unwrap();

        assert_eq!(envelope.status_code, Some(200));
        assert_eq!(envelope.success, Some(true));
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert!(!envelope.is_rejected());
    }

    #[test]
    fn missing_fields_are_none() {
        let envelope: Envelope<String> = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope, Envelope::empty());
        assert!(!envelope.is_rejected());
    }

    #[test]
    fn explicit_false_is_rejected() {
        let envelope: Envelope<String> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert!(envelope.is_rejected());
    }
}
