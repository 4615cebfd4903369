use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Validation error for '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("API request failed with status {status}")]
    Api { status: u16 },

    #[error("Malformed response: expected a JSON array of place records")]
    MalformedResponse,

    #[error("Configuration error for '{field}': {reason}")]
    Config { field: String, reason: String },
}

impl PlacesError {
    /// Message suitable for direct display to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlacesError::Timeout => {
                "The server took too long to respond. Please check your connection and try again."
                    .to_string()
            }
            PlacesError::Network(_) => {
                "Could not reach the places service. Please check your connection and try again."
                    .to_string()
            }
            PlacesError::Api { status: 404 } => {
                "The places service endpoint was not found.".to_string()
            }
            PlacesError::Api {
                status: status @ (500 | 503),
            } => format!(
                "The places service is temporarily unavailable ({}). Please try again later.",
                status
            ),
            PlacesError::Api { status } => format!(
                "The places service returned an unexpected status ({}).",
                status
            ),
            PlacesError::MalformedResponse => {
                "The places service returned data in an unexpected format.".to_string()
            }
            PlacesError::Validation { field, reason } => {
                format!("Invalid place data ({}: {}).", field, reason)
            }
            PlacesError::Config { field, reason } => {
                format!("Invalid configuration ({}: {}).", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_specific_messages() {
        let not_found = PlacesError::Api { status: 404 };
        assert!(not_found.user_friendly_message().contains("not found"));

        let unavailable = PlacesError::Api { status: 503 };
        assert!(unavailable
            .user_friendly_message()
            .contains("temporarily unavailable"));

        let teapot = PlacesError::Api { status: 418 };
        assert!(teapot.user_friendly_message().contains("418"));
    }

    #[test]
    fn test_connectivity_messages() {
        assert!(PlacesError::Timeout
            .user_friendly_message()
            .contains("check your connection"));
    }
}
