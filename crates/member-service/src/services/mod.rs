//! Business logic services
//!
//! This module contains the member and profile services, the facade that
//! coordinates them inside a unit of work, and their shared context.

pub mod context;
pub mod error;
pub mod facade;
pub mod member;
pub mod profile;
pub mod unit_of_work;

#[cfg(test)]
mod in_memory;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use facade::MemberProfileFacade;
pub use member::MemberService;
pub use profile::ProfileService;
pub use unit_of_work::finish;
