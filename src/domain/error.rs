//! Fetch failures and their user-facing messages

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

/// Why a page could not be fetched
///
/// The `Display` text is what the user sees, so it never leaks transport details.
/// The detail strings are kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchError {
    #[error("We were unable to build a valid request.")]
    InvalidRequest(String),

    #[error("We couldn't reach the catalog. Check your connection.")]
    Transport(String),

    #[error("The catalog responded with something unexpected. Please try again.")]
    BadResponse { status: Option<u16> },

    #[error("We couldn't read the results from the response.")]
    Decode(String),

    #[error("The catalog did not send back any results.")]
    EmptyData,

    /// Superseded by a newer fetch; never shown to the user
    #[error("The request was cancelled.")]
    Cancelled,
}

/// Coarse classification of a [`FetchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FetchErrorKind {
    Transport,
    BadResponse,
    DecodeFailure,
    Cancelled,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::InvalidRequest(_) | FetchError::BadResponse { .. } => {
                FetchErrorKind::BadResponse
            }
            FetchError::Decode(_) | FetchError::EmptyData => FetchErrorKind::DecodeFailure,
            FetchError::Cancelled => FetchErrorKind::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }

    /// Message shown on the error placeholder or in a notice
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(FetchError::Transport("timed out".into()), FetchErrorKind::Transport)]
    #[case(FetchError::BadResponse { status: Some(503) }, FetchErrorKind::BadResponse)]
    #[case(FetchError::InvalidRequest("bad url".into()), FetchErrorKind::BadResponse)]
    #[case(FetchError::Decode("missing field".into()), FetchErrorKind::DecodeFailure)]
    #[case(FetchError::EmptyData, FetchErrorKind::DecodeFailure)]
    #[case(FetchError::Cancelled, FetchErrorKind::Cancelled)]
    fn test_kind(#[case] error: FetchError, #[case] expected: FetchErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn test_user_message_hides_details() {
        let error = FetchError::Transport("dns error: no such host api.artic.edu".into());
        assert_eq!(
            error.user_message(),
            "We couldn't reach the catalog. Check your connection."
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FetchErrorKind::DecodeFailure.to_string(), "decode_failure");
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
