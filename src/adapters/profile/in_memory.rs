//! In-Memory Profile Repository
//!
//! Stores profiles in memory, keyed by profile id.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, UserProfileId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

/// In-memory storage for user profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserProfileId, UserProfile>>>,
}

impl InMemoryProfileRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        let taken = profiles.contains_key(&profile.id())
            || profiles.values().any(|p| p.user_id() == profile.user_id());
        if taken {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Profile already exists for user: {}", profile.user_id()),
            ));
        }
        profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.get_mut(&profile.id()) {
            Some(stored) => {
                *stored = profile.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile.id()),
            )),
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.user_id() == user_id).cloned())
    }

    async fn find_by_id(
        &self,
        profile_id: UserProfileId,
    ) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.profiles.read().await.get(&profile_id).cloned())
    }

    async fn delete(&self, profile_id: UserProfileId) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .remove(&profile_id)
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProfileNotFound,
                    format!("Profile not found: {}", profile_id),
                )
            })
    }

    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().any(|p| p.user_id() == user_id))
    }
}
