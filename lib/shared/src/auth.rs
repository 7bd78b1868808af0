use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The `data` field of a login or register response.
///
/// Current deployments answer with `{"token": "..."}`. Older ones put the
/// token string directly in `data`; that shape is accepted until every
/// environment has migrated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenPayload {
    Wrapped { token: String },
    Legacy(String),
}

impl TokenPayload {
    pub fn into_token(self) -> String {
        match self {
            TokenPayload::Wrapped { token } => token,
            TokenPayload::Legacy(token) => token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_wrapped_token() {
        let payload: TokenPayload = serde_json::from_str(r#"{"token":"T1"}"#).unwrap();
        assert_eq!(payload.into_token(), "T1");
    }

    #[test]
    fn accepts_legacy_bare_token() {
        let payload: TokenPayload = serde_json::from_str(r#""T2""#).unwrap();
        assert_eq!(payload.into_token(), "T2");
    }

    #[test]
    fn rejects_unknown_shape() {
        assert!(serde_json::from_str::<TokenPayload>(r#"{"jwt":"T3"}"#).is_err());
    }
}
