use stockroom_auth::password::verify_password;
use stockroom_auth::session::issue_session_token;

use crate::domain::repository::IdentityRepository;
use crate::error::InventoryError;

pub struct LoginUseCase<I: IdentityRepository> {
    pub repo: I,
    pub session_secret: String,
}

impl<I: IdentityRepository> LoginUseCase<I> {
    /// Verify credentials and mint a session token. `None` covers both an
    /// unknown username and a wrong password, so the login error stays
    /// uniform.
    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<String>, InventoryError> {
        let Some(user) = self.repo.find_by_username(username).await? else {
            return Ok(None);
        };
        if !verify_password(password, &user.password_hash) {
            return Ok(None);
        }
        let token = issue_session_token(user.id, &self.session_secret)
            .map_err(|e| InventoryError::Internal(e.into()))?;
        Ok(Some(token))
    }
}
