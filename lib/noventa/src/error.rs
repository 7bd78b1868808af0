use thiserror::Error;

pub type Result<T> = std::result::Result<T, RequestError>;

/// Everything that can go wrong talking to the remote API.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed ({status}){}", body_suffix(.body))]
    Status { status: u16, body: String },

    /// The API answered 2xx but flagged the envelope with `success: false`.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No session token available")]
    Unauthenticated,
}

impl RequestError {
    /// HTTP status attached to the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } | RequestError::Rejected { status, .. } => {
                Some(*status)
            }
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {body}")
    }
}
