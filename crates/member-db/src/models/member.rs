//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub member_no: i64,
    pub login_id: String,
    pub name: String,
    pub password: String,
    pub member_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
