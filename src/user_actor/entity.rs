use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserId, UserPatch};
use crate::validation::check_required;

impl Entity for User {
    type Id = UserId;
    type CreatePayload = UserCreate;
    type Patch = UserPatch;

    /// Creates a new User from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier issued by the store
    /// * `payload` - User creation parameters containing name and email
    fn from_create(id: UserId, payload: UserCreate) -> Result<Self, String> {
        let mut user = User::new(payload.name, payload.email);
        user.set_id(Some(id));
        Ok(user)
    }

    /// Rejects users whose required columns are empty.
    fn on_create(&mut self) -> Result<(), String> {
        check_required(self).map_err(|e| e.to_string())
    }

    /// Updates the user's profile information.
    ///
    /// # Arguments
    /// * `patch` - Contains optional updates for name and/or email
    ///
    /// # Errors
    /// Fails when the patch would leave a required field empty.
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.set_name(name);
        }
        if let Some(email) = patch.email {
            self.set_email(email);
        }
        check_required(self).map_err(|e| e.to_string())
    }
}
