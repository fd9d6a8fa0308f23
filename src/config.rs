use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Concussion Recovery Tracker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the API server binds to unless overridden.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8710";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "TRACKER_ADDR";

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,concussion_tracker=debug,tower_http=info"
}

/// Get the application data directory
/// ~/ConcussionTracker/, falling back to the working directory when no
/// home directory can be determined.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ConcussionTracker")
}

/// Default destination for CLI report exports
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}
