//! Application state for the Supervisor Salary Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::engine::SalaryEngine;
use crate::models::SalaryCalculation;

use super::request::SalaryRequest;

/// Shared application state.
///
/// Contains the engine and a best-effort TTL cache for salary
/// calculations. Performance aggregation is cheap enough to recompute
/// and is not cached.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<SalaryEngine>,
    salary_cache: Arc<TtlCache<SalaryRequest, SalaryCalculation>>,
}

impl AppState {
    /// Default time-to-live for cached salary calculations.
    pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

    /// Creates application state with the default cache TTL.
    pub fn new(engine: SalaryEngine) -> Self {
        Self::with_cache_ttl(engine, Self::DEFAULT_CACHE_TTL)
    }

    /// Creates application state with an explicit cache TTL.
    pub fn with_cache_ttl(engine: SalaryEngine, ttl: Duration) -> Self {
        Self {
            engine: Arc::new(engine),
            salary_cache: Arc::new(TtlCache::new(ttl)),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &SalaryEngine {
        &self.engine
    }

    /// Returns a reference to the salary calculation cache.
    pub fn salary_cache(&self) -> &TtlCache<SalaryRequest, SalaryCalculation> {
        &self.salary_cache
    }
}
