use thiserror::Error;

/// Failure of a single `search`. No partial data ever accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// City name was empty or whitespace. Nothing was sent.
    #[error("Enter City Name")]
    EmptyInput,

    /// The provider answered with a non-success status.
    #[error("{message}")]
    Provider { message: String },

    /// Transport failure or a response body that could not be understood.
    #[error("Network error: {message}")]
    Network { message: String },
}

impl SearchError {
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Whether the view must stop and show this before anything else.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Text for the notice shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Enter City Name".to_string(),
            Self::Provider { message } => message.clone(),
            Self::Network { .. } => {
                "Unable to reach the weather service. Please check your connection.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::network(format!("malformed response body: {err}"))
    }
}
