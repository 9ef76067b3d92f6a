//! Client-side error taxonomy

use crate::routes::Route;

/// Errors raised while talking to the backend or validating forms
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    Validation(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server reported an error: {0}")]
    Application(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Which user flow an error surfaced in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Login,
    Registration,
    Design,
}

impl ApiError {
    /// Destination view for this error, or `None` when it is shown inline.
    pub fn route_for(&self, flow: Flow) -> Option<Route> {
        match (flow, self) {
            (_, ApiError::Validation(_)) => None,
            (Flow::Login, _) => None,
            (Flow::Registration, _) => Some(Route::RegistrationError),
            (Flow::Design, _) => Some(Route::Error),
        }
    }

    /// Inline message for the login form.
    pub fn login_message(&self) -> &'static str {
        match self {
            ApiError::Status(_) | ApiError::Application(_) => "Invalid username or password",
            ApiError::Validation(_) => "Please fill in all required fields",
            _ => "An error occurred. Please try again later.",
        }
    }

    /// Transport-level failures can be retried by the user as-is.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::Status(500))]
    #[case(ApiError::Network("offline".into()))]
    #[case(ApiError::Application("bad prompt".into()))]
    #[case(ApiError::Decode("eof".into()))]
    fn design_failures_route_to_generic_error(#[case] err: ApiError) {
        assert_eq!(err.route_for(Flow::Design), Some(Route::Error));
    }

    #[rstest]
    #[case(ApiError::Status(401))]
    #[case(ApiError::Network("offline".into()))]
    fn login_failures_never_leave_the_login_view(#[case] err: ApiError) {
        assert_eq!(err.route_for(Flow::Login), None);
    }

    #[test]
    fn registration_failures_use_their_own_view() {
        assert_eq!(
            ApiError::Status(409).route_for(Flow::Registration),
            Some(Route::RegistrationError)
        );
    }

    #[test]
    fn validation_errors_stay_local() {
        let err = ApiError::Validation("user_name".into());
        assert_eq!(err.route_for(Flow::Registration), None);
        assert_eq!(err.route_for(Flow::Design), None);
    }

    #[test]
    fn login_messages_distinguish_credentials_from_transport() {
        assert_eq!(
            ApiError::Status(401).login_message(),
            "Invalid username or password"
        );
        assert_eq!(
            ApiError::Network("refused".into()).login_message(),
            "An error occurred. Please try again later."
        );
        assert!(ApiError::Network("refused".into()).is_transport());
        assert!(!ApiError::Status(401).is_transport());
    }
}
