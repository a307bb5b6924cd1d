//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, UserId, UserProfileId},
    profile::UserProfile,
};

/// Repository for managing user profiles
///
/// One profile per user. Implementations report a missing record on
/// `update`/`delete` as `ErrorCode::ProfileNotFound` and a duplicate on
/// `create` as `ErrorCode::Conflict`.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Create a new profile
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Update an existing profile
    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Find profile by user ID
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Find profile by profile ID
    async fn find_by_id(&self, profile_id: UserProfileId)
        -> Result<Option<UserProfile>, DomainError>;

    /// Delete a profile
    async fn delete(&self, profile_id: UserProfileId) -> Result<(), DomainError>;

    /// Check if profile exists for user
    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError>;
}
