//! Subscriber installation for assertion outcome logging

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Where assertion outcomes go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Readable lines on stderr; every failure and rejection is shown
    Development,
    /// One JSON object per outcome for CI log collection; passes and
    /// failures are filtered out unless `RUST_LOG` asks for them
    Production,
    /// No output; tests read outcomes through `init_test_capture()`
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    ///
    /// Passes log at trace level and failures at debug level, so only
    /// `Development` shows failures by default.
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "assay_core=debug",
            Profile::Production => "assay_core=info",
            Profile::Test => "off",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call in a process has any effect. When the test harness
/// or the capture layer already owns the global subscriber the call leaves
/// it in place.
///
/// # Example
///
/// ```
/// use assay_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(profile.filter())
                .with_target(false)
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(profile.filter())
                .try_init()
                .is_ok(),
            Profile::Test => tracing_subscriber::registry().try_init().is_ok(),
        };
        if !installed {
            tracing::debug!(?profile, "global subscriber already installed");
        }
    });
}
