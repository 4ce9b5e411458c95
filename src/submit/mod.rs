//! Submission Microservice
//!
//! A looser companion to the joke service's POST /submit: known types live
//! only in memory and new ones may be invented at submission time.

pub mod handlers;
mod registry;
pub mod routes;

pub use handlers::{health_handler, submit_handler, types_handler, SubmitState};
pub use registry::TypeRegistry;
pub use routes::create_submit_router;
