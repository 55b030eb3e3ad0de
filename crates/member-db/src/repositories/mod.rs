//! Store implementations
//!
//! PostgreSQL implementations of the store traits defined in member-core.
//! Both stores are implemented on [`PgUnitOfWork`], so they always run
//! inside its transaction.

mod error;
mod member;
mod profile;
mod unit_of_work;

pub use error::{map_db_error, map_unique_violation};
pub use unit_of_work::{PgUnitOfWork, PgUnitOfWorkFactory};
