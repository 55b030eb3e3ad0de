//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub profile_no: i64,
    pub member_no: i64,
    pub nickname: String,
    pub phone_number: String,
    pub address: Option<String>,
    pub profile_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
