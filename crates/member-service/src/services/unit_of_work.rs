//! Unit of work completion

use tracing::warn;

use member_core::traits::UnitOfWork;

use super::error::ServiceResult;

/// Commit `uow` if `result` is `Ok`, otherwise roll it back and return the
/// original error. A failed rollback is logged; the connection is discarded
/// by the pool either way.
pub async fn finish<T>(uow: Box<dyn UnitOfWork>, result: ServiceResult<T>) -> ServiceResult<T> {
    match result {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
