//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects. Fails
//!   only if a status column holds a value outside the enum.
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod member;
mod profile;

pub use member::MemberInsert;
pub use profile::{ProfileInsert, ProfileUpdateRow};
pub(crate) use profile::profiles_from_models;
