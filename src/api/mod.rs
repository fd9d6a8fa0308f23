//! HTTP API for the tracker.
//!
//! Every route is stateless: the client posts the whole form and gets the
//! recomputed view or a report download back. Routes are nested under
//! `/api/` and pass through the access-log middleware.
//!
//! The router is composable — `tracker_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::tracker_api_router;
pub use server::{start_server, ServerError, ServerSession, TrackerServer};
pub use types::ApiContext;
