//! HTTP API module for the Supervisor Salary Engine.
//!
//! This module provides the REST API endpoints for salary calculation
//! and performance aggregation. Authentication and session handling are
//! left to the deployment in front of it.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PerformanceRequest, SalaryRequest};
pub use response::ApiError;
pub use state::AppState;
