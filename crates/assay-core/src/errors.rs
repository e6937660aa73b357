use thiserror::Error;

/// Result type alias using AssayError
pub type Result<T> = std::result::Result<T, AssayError>;

// ========== Error Facility ==========

/// Canonical failure kind taxonomy
///
/// Splits every error into one of two tiers: the assertion did not hold
/// (`AssertionFailed`, `UnexpectedError`), or the assertion was called with
/// arguments it cannot evaluate (`InvalidArgument`, `MissingArgument`).
/// Each kind maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    // Assertion outcomes
    AssertionFailed,
    /// An operation expected to succeed returned an error or panicked
    UnexpectedError,

    // Argument errors
    InvalidArgument,
    MissingArgument,
}

impl FailureKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            FailureKind::AssertionFailed => "ERR_ASSERTION_FAILED",
            FailureKind::UnexpectedError => "ERR_UNEXPECTED_ERROR",
            FailureKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            FailureKind::MissingArgument => "ERR_MISSING_ARGUMENT",
        }
    }

    /// Whether this kind reports a condition that did not hold
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            FailureKind::AssertionFailed | FailureKind::UnexpectedError
        )
    }
}

/// Canonical structured failure record
///
/// Carries classification fields for programmatic handling and the
/// rendered context for debugging. Built from an [`AssayError`].
#[derive(Debug, Clone)]
pub struct Failure {
    kind: FailureKind,
    assertion: Option<String>,
    param: Option<String>,
    message: String,
    cause: Option<String>,
}

impl Failure {
    /// Create a new failure with the specified kind
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            assertion: None,
            param: None,
            message: String::new(),
            cause: None,
        }
    }

    /// Add assertion name context
    pub fn with_assertion(mut self, assertion: impl Into<String>) -> Self {
        self.assertion = Some(assertion.into());
        self
    }

    /// Add parameter name context
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the rendered cause
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Get the failure kind
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the assertion name, if any
    pub fn assertion(&self) -> Option<&str> {
        self.assertion.as_deref()
    }

    /// Get the offending parameter name, if any
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Get the failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rendered cause, if any
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(assertion) = &self.assertion {
            write!(f, " in assertion '{}'", assertion)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(param) = &self.param {
            write!(f, " (param: {})", param)?;
        }
        if let Some(cause) = &self.cause {
            write!(f, " (cause: {})", cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

// ========== End Error Facility ==========

/// Error taxonomy for assertion evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssayError {
    // ===== Assertion Outcomes =====
    /// The asserted condition did not hold
    #[error("Assertion '{assertion}' failed: {message}")]
    AssertionFailed {
        assertion: &'static str,
        message: String,
    },

    /// An operation expected to succeed produced an error or panicked
    #[error("Assertion '{assertion}' failed: {message}: {cause}")]
    UnexpectedError {
        assertion: &'static str,
        message: String,
        cause: String,
    },

    // ===== Argument Errors =====
    /// An argument cannot be evaluated by the assertion
    #[error("Invalid argument '{param}': {reason}")]
    InvalidArgument { param: &'static str, reason: String },

    /// A required argument was absent
    #[error("Missing required argument '{param}'")]
    MissingArgument { param: &'static str },
}

impl AssayError {
    /// Get the failure kind of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            AssayError::AssertionFailed { .. } => FailureKind::AssertionFailed,
            AssayError::UnexpectedError { .. } => FailureKind::UnexpectedError,
            AssayError::InvalidArgument { .. } => FailureKind::InvalidArgument,
            AssayError::MissingArgument { .. } => FailureKind::MissingArgument,
        }
    }

    /// Whether this error reports a condition that did not hold (as opposed
    /// to an argument the assertion could not evaluate)
    pub fn is_assertion_failure(&self) -> bool {
        self.kind().is_assertion()
    }

    /// Get the failure message, if this is an assertion failure
    pub fn message(&self) -> Option<&str> {
        match self {
            AssayError::AssertionFailed { message, .. }
            | AssayError::UnexpectedError { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Conversion from AssayError to the structured Failure record
impl From<&AssayError> for Failure {
    fn from(err: &AssayError) -> Self {
        match err {
            AssayError::AssertionFailed { assertion, message } => {
                Failure::new(FailureKind::AssertionFailed)
                    .with_assertion(*assertion)
                    .with_message(message.clone())
            }

            AssayError::UnexpectedError {
                assertion,
                message,
                cause,
            } => Failure::new(FailureKind::UnexpectedError)
                .with_assertion(*assertion)
                .with_message(message.clone())
                .with_cause(cause.clone()),

            AssayError::InvalidArgument { param, reason } => {
                Failure::new(FailureKind::InvalidArgument)
                    .with_param(*param)
                    .with_message(reason.clone())
            }

            AssayError::MissingArgument { param } => Failure::new(FailureKind::MissingArgument)
                .with_param(*param)
                .with_message(format!("Missing required argument '{}'", param)),
        }
    }
}

impl From<AssayError> for Failure {
    fn from(err: AssayError) -> Self {
        Failure::from(&err)
    }
}

/// Extension methods on assertion results
pub trait ResultExt {
    /// Replace the message of an assertion failure
    ///
    /// Argument errors are passed through unchanged: a custom message
    /// describes the asserted condition, not a misuse of the assertion.
    fn or_fail_with(self, message: impl Into<String>) -> Self;
}

impl<T> ResultExt for Result<T> {
    fn or_fail_with(self, message: impl Into<String>) -> Self {
        self.map_err(|err| match err {
            AssayError::AssertionFailed { assertion, .. } => AssayError::AssertionFailed {
                assertion,
                message: message.into(),
            },
            AssayError::UnexpectedError {
                assertion, cause, ..
            } => AssayError::UnexpectedError {
                assertion,
                message: message.into(),
                cause,
            },
            other => other,
        })
    }
}
