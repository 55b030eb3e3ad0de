//! Transaction-backed unit of work
//!
//! A [`PgUnitOfWork`] owns one PostgreSQL transaction. It implements both
//! store traits itself, so every query issued through it shares the same
//! connection and commits or rolls back together.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use member_core::traits::{
    MemberRepository, ProfileRepository, RepoResult, UnitOfWork, UnitOfWorkFactory,
};

use super::error::map_db_error;

/// Unit of work over a single PostgreSQL transaction
pub struct PgUnitOfWork {
    pub(super) tx: Transaction<'static, Postgres>,
}

impl PgUnitOfWork {
    /// Wrap an already started transaction
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn members(&mut self) -> &mut dyn MemberRepository {
        self
    }

    fn profiles(&mut self) -> &mut dyn ProfileRepository {
        self
    }

    #[instrument(skip(self))]
    async fn commit(self: Box<Self>) -> RepoResult<()> {
        self.tx.commit().await.map_err(map_db_error)?;
        debug!("Transaction committed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn rollback(self: Box<Self>) -> RepoResult<()> {
        self.tx.rollback().await.map_err(map_db_error)?;
        debug!("Transaction rolled back");
        Ok(())
    }
}

/// Opens [`PgUnitOfWork`]s from a connection pool
#[derive(Clone)]
pub struct PgUnitOfWorkFactory {
    pool: PgPool,
}

impl PgUnitOfWorkFactory {
    /// Create a new PgUnitOfWorkFactory
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWorkFactory for PgUnitOfWorkFactory {
    #[instrument(skip(self))]
    async fn begin(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let tx = self.pool.begin().await.map_err(map_db_error)?;
        Ok(Box::new(PgUnitOfWork::new(tx)))
    }

    #[instrument(skip(self))]
    async fn begin_read_only(&self) -> RepoResult<Box<dyn UnitOfWork>> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        Ok(Box::new(PgUnitOfWork::new(tx)))
    }
}
