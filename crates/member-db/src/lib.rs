//! # member-db
//!
//! Database layer implementing the store traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the store and
//! unit-of-work traits defined in `member-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - A transaction-backed unit of work implementing both stores
//!
//! ## Usage
//!
//! ```rust,ignore
//! use member_db::{create_pool, run_migrations, DatabaseConfig, PgUnitOfWorkFactory};
//! use member_core::traits::UnitOfWorkFactory;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!
//!     let factory = PgUnitOfWorkFactory::new(pool);
//!     let mut uow = factory.begin().await?;
//!     let member = uow.members().find_by_login_id("alice").await?;
//!     uow.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, ping, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgUnitOfWork, PgUnitOfWorkFactory};
