use chrono::Utc;
use uuid::Uuid;

use stockroom_auth::password::hash_password;
use stockroom_domain::group;

use crate::domain::repository::IdentityRepository;
use crate::domain::types::{IdentityRecord, RegistrationDraft};
use crate::error::InventoryError;

/// Result of a registration attempt on valid form input.
#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Identity, default group membership and empty employee all created.
    Created,
    /// Username collides with an existing identity; nothing was created.
    UsernameTaken,
}

pub struct RegisterUseCase<I: IdentityRepository> {
    pub repo: I,
}

impl<I: IdentityRepository> RegisterUseCase<I> {
    /// Create the identity, grant the default employee group and attach an
    /// empty employee profile — one transaction, so a partial failure leaves
    /// no group-less or employee-less identity behind. No session is
    /// established; the caller still has to log in.
    pub async fn execute(&self, draft: RegistrationDraft) -> Result<RegisterOutcome, InventoryError> {
        if self.repo.find_by_username(&draft.username).await?.is_some() {
            return Ok(RegisterOutcome::UsernameTaken);
        }

        let password_hash =
            hash_password(&draft.password).map_err(|e| InventoryError::Internal(e.into()))?;
        let user = IdentityRecord {
            id: Uuid::now_v7(),
            username: draft.username,
            email: draft.email,
            password_hash,
            created_at: Utc::now(),
        };
        self.repo.register(&user, group::EMPLOYEE).await?;
        Ok(RegisterOutcome::Created)
    }
}
