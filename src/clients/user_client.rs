use tracing::{debug, instrument};
use crate::domain::{User, UserCreate, UserId, UserPatch};
use crate::user_actor::UserError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the User store.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Stores `user` and returns the identifier the store issued for it.
    ///
    /// Any id already set on `user` is ignored.
    #[instrument(skip(self, user), fields(user_name = %user.name()))]
    pub async fn create_user(&self, user: User) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(UserCreate::from(user)).await
            .map_err(|e| UserError::from_framework(e, None))
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(|e| UserError::from_framework(e, Some(id)))
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(|e| UserError::from_framework(e, Some(id)))
    }

    #[instrument(skip(self))]
    #[allow(dead_code)]
    pub async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| UserError::from_framework(e, Some(id)))
    }
}
