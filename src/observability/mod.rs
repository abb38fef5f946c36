//! Observability for the address book
//!
//! Structured logging through `tracing`; HTTP requests are traced by the
//! server's `TraceLayer`.

mod logging;

pub use logging::{build_filter, init_logging, resolve_filter, LoggingError};
