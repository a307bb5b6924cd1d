//! Filesystem repository adapter for profile JSON files

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, UserProfileId};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

const PROFILE_FILE: &str = "profile.json";

/// Filesystem-based profile repository
///
/// Stores one JSON document per user in a configurable base directory:
/// {base_dir}/profiles/{user_id}/profile.json
pub struct FsProfileRepository {
    base_dir: PathBuf,
}

impl FsProfileRepository {
    /// Create new filesystem repository with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join("profiles")
    }

    /// Get profile directory for a user
    fn user_dir(&self, user_id: &UserId) -> Result<PathBuf, DomainError> {
        let raw = user_id.as_str();
        if raw == "." || raw == ".." || raw.contains(['/', '\\']) {
            return Err(DomainError::validation(
                "user_id",
                format!("User id cannot be used as a directory name: {}", raw),
            ));
        }
        Ok(self.profiles_dir().join(raw))
    }

    /// Get full path to profile file
    fn file_path(&self, user_id: &UserId) -> Result<PathBuf, DomainError> {
        Ok(self.user_dir(user_id)?.join(PROFILE_FILE))
    }

    async fn read_profile(path: &Path) -> Result<Option<UserProfile>, DomainError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("Failed to read profile", e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| storage_error("Failed to parse profile", e))
    }

    async fn write_profile(&self, profile: &UserProfile) -> Result<PathBuf, DomainError> {
        let file_path = self.file_path(profile.user_id())?;

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("Failed to create directory", e))?;
        }

        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| storage_error("Failed to serialize profile", e))?;

        // Write to a temporary file, then rename into place
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| storage_error("Failed to write temporary file", e))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| storage_error("Failed to rename file", e))?;

        debug!(profile_id = %profile.id(), path = %file_path.display(), "Wrote profile");
        Ok(file_path)
    }

    /// Reads every stored profile. Unreadable entries fail the whole scan.
    async fn scan(&self) -> Result<Vec<UserProfile>, DomainError> {
        let mut entries = match fs::read_dir(self.profiles_dir()).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("Failed to list profiles", e)),
        };

        let mut profiles = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_error("Failed to list profiles", e))?
        {
            if let Some(profile) = Self::read_profile(&entry.path().join(PROFILE_FILE)).await? {
                profiles.push(profile);
            }
        }
        Ok(profiles)
    }
}

fn storage_error(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("{}: {}", context, err))
}

#[async_trait]
impl ProfileRepository for FsProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        if fs::try_exists(self.file_path(profile.user_id())?)
            .await
            .map_err(|e| storage_error("Failed to check profile", e))?
        {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Profile already exists for user: {}", profile.user_id()),
            ));
        }

        self.write_profile(profile).await?;
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let path = self.file_path(profile.user_id())?;
        match Self::read_profile(&path).await? {
            Some(stored) if stored.id() == profile.id() => {
                self.write_profile(profile).await?;
                Ok(())
            }
            _ => Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile.id()),
            )),
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Self::read_profile(&self.file_path(user_id)?).await
    }

    async fn find_by_id(
        &self,
        profile_id: UserProfileId,
    ) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.scan().await?.into_iter().find(|p| p.id() == profile_id))
    }

    async fn delete(&self, profile_id: UserProfileId) -> Result<(), DomainError> {
        let profile = self.find_by_id(profile_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile_id),
            )
        })?;

        fs::remove_file(self.file_path(profile.user_id())?)
            .await
            .map_err(|e| storage_error("Failed to delete profile", e))?;

        // Try to remove parent directory if empty
        let _ = fs::remove_dir(self.user_dir(profile.user_id())?).await;

        Ok(())
    }

    async fn exists_for_user(&self, user_id: &UserId) -> Result<bool, DomainError> {
        fs::try_exists(self.file_path(user_id)?)
            .await
            .map_err(|e| storage_error("Failed to check profile", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::profile::ProfileUpdater;
    use crate::domain::quiz::{builtin_catalog, Goal, GoalSet, QuestionSelector, ResponseLedger};
    use crate::domain::scoring::TerrainScorer;
    use tempfile::TempDir;

    fn test_user_id() -> UserId {
        UserId::new("test-user@example.com").unwrap()
    }

    fn test_profile() -> UserProfile {
        UserProfile::new(
            test_user_id(),
            [Goal::MoreEnergy].into_iter().collect(),
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_by_user() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let profile = test_profile();

        repo.create(&profile).await.unwrap();

        let path = temp_dir
            .path()
            .join("profiles")
            .join("test-user@example.com")
            .join("profile.json");
        assert!(path.exists());

        let stored = repo.find_by_user(&test_user_id()).await.unwrap();
        assert_eq!(stored, Some(profile));
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());

        repo.create(&test_profile()).await.unwrap();
        let err = repo.create(&test_profile()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn test_update_round_trips_classification() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let mut profile = test_profile();
        repo.create(&profile).await.unwrap();

        let mut ledger = ResponseLedger::new();
        ledger.record("q1_temperature", "hot");
        ledger.record("q14_alcohol", "weekly");
        let questions = QuestionSelector::select(builtin_catalog(), profile.goals());
        let result = TerrainScorer::classify(builtin_catalog(), &questions, &ledger).unwrap();
        ProfileUpdater::apply(&mut profile, &result, &ledger, builtin_catalog(), Timestamp::now());
        repo.update(&profile).await.unwrap();

        let stored = repo.find_by_user(&test_user_id()).await.unwrap().unwrap();
        assert_eq!(stored, profile);
        assert_eq!(stored.terrain_profile_id().unwrap().as_str(), "warm_core");
        assert_eq!(stored.alcohol_frequency(), Some("weekly"));
    }

    #[tokio::test]
    async fn test_update_missing_profile() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());

        let err = repo.update(&test_profile()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn test_find_by_id_scans_directory() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let first = test_profile();
        let second = UserProfile::new(
            UserId::new("someone-else").unwrap(),
            GoalSet::new(),
            Timestamp::now(),
        );
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let found = repo.find_by_id(second.id()).await.unwrap();
        assert_eq!(found, Some(second));
        assert!(repo.find_by_id(UserProfileId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_base_dir_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path().join("nowhere"));

        assert!(repo.find_by_user(&test_user_id()).await.unwrap().is_none());
        assert!(repo.find_by_id(UserProfileId::new()).await.unwrap().is_none());
        assert!(!repo.exists_for_user(&test_user_id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let profile = test_profile();
        repo.create(&profile).await.unwrap();

        repo.delete(profile.id()).await.unwrap();

        assert!(!repo.exists_for_user(&test_user_id()).await.unwrap());
        let err = repo.delete(profile.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn test_path_like_user_id_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());

        let err = repo
            .find_by_user(&UserId::new("../escape").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let dir = temp_dir.path().join("profiles").join("test-user@example.com");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("profile.json"), "{ not json").unwrap();

        let err = repo.find_by_user(&test_user_id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
