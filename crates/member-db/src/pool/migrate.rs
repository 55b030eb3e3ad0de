//! Schema migrations compiled into this crate
//!
//! The SQL lives in `migrations/` and is embedded at build time, so the
//! binary does not depend on the source tree at runtime. Versions and
//! checksums match what `sqlx migrate` records for the same files.

use std::borrow::Cow;
use std::future::Future;
use std::pin::Pin;

use sqlx::error::BoxDynError;
use sqlx::migrate::{MigrateError, Migration, MigrationSource, MigrationType, Migrator};
use sqlx::PgPool;
use tracing::info;

/// `(version, description, sql)` in apply order
const MIGRATIONS: &[(i64, &str, &str)] = &[(
    20_240_101_000_000,
    "create members and profiles",
    include_str!("../../migrations/20240101000000_create_members_and_profiles.sql"),
)];

/// Migration source backed by [`MIGRATIONS`]
#[derive(Debug, Clone, Copy)]
struct EmbeddedMigrations;

impl<'s> MigrationSource<'s> for EmbeddedMigrations {
    fn resolve(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Migration>, BoxDynError>> + Send + 's>> {
        Box::pin(async move { Ok(embedded_migrations()) })
    }
}

fn embedded_migrations() -> Vec<Migration> {
    MIGRATIONS
        .iter()
        .map(|&(version, description, sql)| {
            Migration::new(
                version,
                Cow::Borrowed(description),
                MigrationType::Simple,
                Cow::Borrowed(sql),
                false,
            )
        })
        .collect()
}

/// Apply every pending embedded migration
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    let migrator = Migrator::new(EmbeddedMigrations).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "Database migrations applied");
    Ok(())
}
