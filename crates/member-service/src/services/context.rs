//! Service context - dependency container for services
//!
//! Holds the connection pool and the factory that opens units of work.

use std::sync::Arc;

use member_core::traits::{UnitOfWork, UnitOfWorkFactory};
use member_db::{PgPool, PgUnitOfWorkFactory};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Unit of work factory
    uow_factory: Arc<dyn UnitOfWorkFactory>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(pool: PgPool, uow_factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        Self { pool, uow_factory }
    }

    /// Create a context backed by PostgreSQL transactions on `pool`
    pub fn from_pool(pool: PgPool) -> Self {
        let uow_factory = Arc::new(PgUnitOfWorkFactory::new(pool.clone()));
        Self::new(pool, uow_factory)
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the unit of work factory
    pub fn uow_factory(&self) -> &dyn UnitOfWorkFactory {
        self.uow_factory.as_ref()
    }

    /// Open a read-write unit of work
    pub async fn begin(&self) -> ServiceResult<Box<dyn UnitOfWork>> {
        Ok(self.uow_factory.begin().await?)
    }

    /// Open a unit of work for queries only
    pub async fn begin_read_only(&self) -> ServiceResult<Box<dyn UnitOfWork>> {
        Ok(self.uow_factory.begin_read_only().await?)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("uow_factory", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    uow_factory: Option<Arc<dyn UnitOfWorkFactory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            uow_factory: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn uow_factory(mut self, factory: Arc<dyn UnitOfWorkFactory>) -> Self {
        self.uow_factory = Some(factory);
        self
    }

    /// Build the ServiceContext
    ///
    /// Falls back to a PostgreSQL unit of work factory over the pool when no
    /// factory was supplied.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;

        Ok(match self.uow_factory {
            Some(factory) => ServiceContext::new(pool, factory),
            None => ServiceContext::from_pool(pool),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
