//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all assertion logging and
//! failure reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_ASSERTION: &str = "assertion";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_MESSAGE: &str = "message";

// Argument context
pub const FIELD_PARAM: &str = "param";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_PASS: &str = "pass";
pub const EVENT_FAIL: &str = "fail";
pub const EVENT_REJECTED: &str = "rejected";
