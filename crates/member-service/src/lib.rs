//! # member-service
//!
//! Application layer containing the member/profile use cases, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    finish, MemberProfileFacade, MemberService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
