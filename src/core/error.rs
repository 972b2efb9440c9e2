use rust_decimal::Decimal;

/// Library-wide Result type
pub type Result<T> = std::result::Result<T, RaveError>;

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum RaveError {
    /// A required request parameter is absent or empty
    #[error("\"{0}\" is a required parameter for this method")]
    MissingParameter(String),

    /// The gateway answered with a non-success `status`
    #[error("{message} Status Code: {status_code}")]
    Api { message: String, status_code: u16 },

    /// Five-step transaction verification failed
    #[error("Transaction not verified: {0}")]
    Verification(VerificationFailure),

    /// Key derivation or payload encryption errors
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Gateway returned a body we could not interpret
    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),

    /// Caller-supplied payload has the wrong shape
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a transaction failed verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationFailure {
    #[error("the transaction reference doesn't match: '{actual}' != '{expected}'")]
    ReferenceMismatch { expected: String, actual: String },

    #[error("success message is not equal to 'Tx Fetched', got '{0}'")]
    UnexpectedMessage(String),

    #[error("the charge response is not equal to '00' or '0', got '{0}'")]
    ChargeNotSuccessful(String),

    #[error("the currency code doesn't match: '{actual}' != '{expected}'")]
    CurrencyMismatch { expected: String, actual: String },

    #[error("charged amount {charged} is less than the amount to be paid {expected}")]
    AmountTooLow { expected: Decimal, charged: Decimal },
}

impl From<VerificationFailure> for RaveError {
    fn from(failure: VerificationFailure) -> Self {
        RaveError::Verification(failure)
    }
}

// Helper functions for common error scenarios
impl RaveError {
    pub fn missing(parameter: impl Into<String>) -> Self {
        RaveError::MissingParameter(parameter.into())
    }

    pub fn api(message: impl Into<String>, status_code: u16) -> Self {
        RaveError::Api {
            message: message.into(),
            status_code,
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        RaveError::InvalidResponse(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        RaveError::Configuration(msg.into())
    }

    /// HTTP status attached to the error, when the gateway produced one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RaveError::Api { status_code, .. } => Some(*status_code),
            RaveError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
