//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, typed path ids, and list queries.

mod path;
mod query;
mod validated;

pub use path::{MemberPath, ProfilePath};
pub use query::SearchQuery;
pub use validated::ValidatedJson;
