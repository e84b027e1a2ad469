//! HTTP middleware.
//!
//! Execution order (outermost to innermost):
//! 1. Access log, so rejected requests are logged too
//! 2. CORS
//! 3. Security headers
//! 4. Body size limit

pub mod access_log;
pub mod cors;
pub mod security_headers;
