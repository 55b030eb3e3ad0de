//! Value objects - immutable types that represent domain concepts

mod ids;
mod page;
mod status;

pub use ids::{IdParseError, MemberNo, ProfileNo};
pub use page::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use status::{MemberStatus, ProfileStatus};
