//! Structured logging of assertion outcomes
//!
//! Every assertion reports its outcome once, under its dotted name:
//! - `log_assert_pass!(assertion)` at trace level with event `pass`
//! - `log_assert_fail!(assertion, err)` at debug level with event `fail` for
//!   assertion failures and `rejected` for argument errors, carrying the
//!   error kind, code, parameter and message
//!
//! Nothing is printed until a subscriber is installed, either with
//! [`init()`] or, inside tests, with [`init_test_capture()`].
//!
//! ```rust
//! use assay_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
