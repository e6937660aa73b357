//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log assertion
//! outcomes.

/// Log a satisfied assertion
///
/// # Example
///
/// ```
/// # use assay_core::log_assert_pass;
/// log_assert_pass!("logical.equal");
/// ```
#[macro_export]
macro_rules! log_assert_pass {
    ($assertion:expr) => {
        $crate::tracing::trace!(
            component = module_path!(),
            assertion = $assertion,
            event = $crate::assay_core_types::schema::EVENT_PASS,
        );
    };
}

/// Log a failed assertion or a rejected argument
///
/// Assertion failures are logged with the `fail` event, argument errors
/// with the `rejected` event. Both carry the stable error kind and code.
///
/// # Example
///
/// ```
/// # use assay_core::log_assert_fail;
/// use assay_core::errors::AssayError;
///
/// let err = AssayError::MissingArgument { param: "predicate" };
/// log_assert_fail!("collection.unique", &err);
/// ```
#[macro_export]
macro_rules! log_assert_fail {
    ($assertion:expr, $err:expr) => {{
        let failure = $crate::errors::Failure::from($err);
        let event = if failure.kind().is_assertion() {
            $crate::assay_core_types::schema::EVENT_FAIL
        } else {
            $crate::assay_core_types::schema::EVENT_REJECTED
        };
        $crate::tracing::debug!(
            component = module_path!(),
            assertion = $assertion,
            event = event,
            err_kind = ?failure.kind(),
            err_code = failure.code(),
            param = failure.param(),
            message = failure.message(),
        );
    }};
}
