//! Error types for input validation

use thiserror::Error;

/// Result type alias for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Every way a sample triple can be rejected before a test statistic is computed
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Wrong dimensionality or mismatched sample counts
    #[error("Shape error: {0}")]
    Shape(String),

    /// Array-likes that cannot be compared as numeric arrays
    #[error("Incompatible inputs: {0}")]
    Compatibility(String),

    /// NaN present in a required array
    #[error("Invalid data: {0}")]
    DataQuality(String),

    /// Too few samples to run a test
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Zero variance in one of the inputs
    #[error("Degenerate data: {0}")]
    DegenerateData(String),

    /// Invalid test parameter such as the repetition count
    #[error("Invalid parameter: {0}")]
    Parameter(String),

    /// Invalid validator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed serialized sample data
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ValidationError {
    /// Create a new shape error
    pub fn shape<S: Into<String>>(msg: S) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a new compatibility error
    pub fn compatibility<S: Into<String>>(msg: S) -> Self {
        Self::Compatibility(msg.into())
    }

    /// Create a new data quality error
    pub fn data_quality<S: Into<String>>(msg: S) -> Self {
        Self::DataQuality(msg.into())
    }

    /// Create a new insufficient data error
    pub fn insufficient_data<S: Into<String>>(msg: S) -> Self {
        Self::InsufficientData(msg.into())
    }

    /// Create a new degenerate data error
    pub fn degenerate_data<S: Into<String>>(msg: S) -> Self {
        Self::DegenerateData(msg.into())
    }

    /// Create a new parameter error
    pub fn parameter<S: Into<String>>(msg: S) -> Self {
        Self::Parameter(msg.into())
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a parameter error that reports the accepted range
    pub fn parameter_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        valid_range: &str,
    ) -> Self {
        Self::Parameter(format!(
            "Invalid {}: {} (valid range: {})",
            parameter, value, valid_range
        ))
    }

    /// Create configuration error with valid ranges
    pub fn config_value_error<T: std::fmt::Display>(
        parameter: &str,
        value: T,
        valid_range: &str,
        recommended: Option<T>,
    ) -> Self {
        let recommendation = match recommended {
            Some(rec) => format!(" Recommended: {}", rec),
            None => String::new(),
        };

        Self::InvalidConfig(format!(
            "Invalid {}: {} (valid range: {}).{}",
            parameter, value, valid_range, recommendation
        ))
    }
}
