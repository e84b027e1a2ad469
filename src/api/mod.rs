//! HTTP surface of the triage service.
//!
//! The router is composable: `api_router()` returns a `Router` that can be
//! served directly (`server::run`) or driven in tests with `oneshot`.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{run, start_server_on, ServerError, ServerHandle};
pub use types::AppContext;
