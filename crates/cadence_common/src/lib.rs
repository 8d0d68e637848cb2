// --- File: crates/cadence_common/src/lib.rs ---

pub mod error;   // Error handling
pub mod http;    // HTTP error mapping
pub mod logging; // Logging utilities
pub mod time;    // Time-of-day parsing

// Re-export error types and utilities for easier access
pub use error::{
    CadenceError,
    HttpStatusCode,
    Context,
    config_error,
    unavailable,
};

pub use http::IntoHttpResponse;

pub use logging::{init, init_with_level, log_result};

pub use time::{minutes_since_midnight, parse_time_of_day, parse_time_or};
