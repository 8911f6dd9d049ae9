//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Transport failure raised by a non-reqwest [`Transport`](crate::http::Transport).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The backend answered with `{"status": "error", ...}`.
    #[error("API error ({error_type}): {message}")]
    Api { error_type: String, message: String },

    #[error("Response envelope has no data")]
    MissingData,

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("API key and secret are required")]
    MissingCredentials,

    #[error("Token exchange failed: {0}")]
    ExchangeFailed(#[source] HttpError),

    #[error("Token exchange returned an empty access token")]
    EmptyToken,
}

/// Order submission errors.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid order: {0}")]
    Invalid(#[from] OrderValidationError),

    #[error("Order submission failed: {0}")]
    SubmissionFailed(#[source] HttpError),

    #[error("Order accepted without an order id")]
    MissingOrderId,
}

/// Pre-flight validation failures for an outbound order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("trading symbol is empty")]
    EmptySymbol,

    #[error("exchange is empty")]
    EmptyExchange,

    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("price must not be negative (got {0})")]
    NegativePrice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_wraps_validation() {
        let err: SdkError = OrderError::from(OrderValidationError::ZeroQuantity).into();
        assert!(matches!(
            err,
            SdkError::Order(OrderError::Invalid(OrderValidationError::ZeroQuantity))
        ));
        assert_eq!(
            err.to_string(),
            "Order error: Invalid order: quantity must be greater than zero"
        );
    }

    #[test]
    fn test_auth_error_keeps_cause() {
        let err = AuthError::ExchangeFailed(HttpError::Unauthorized);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_api_error_display() {
        let err = HttpError::Api {
            error_type: "TokenException".into(),
            message: "Invalid session".into(),
        };
        assert_eq!(err.to_string(), "API error (TokenException): Invalid session");
    }
}
