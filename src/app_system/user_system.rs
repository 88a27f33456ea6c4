use tracing::{info, error};
use crate::app_system::SystemError;
use crate::clients::UserClient;
use crate::actor_framework::ResourceActor;
use crate::config::StoreConfig;
use crate::domain::{User, UserId};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// The application system that owns the user store.
///
/// Responsible for starting the store actor, handing out its client, and
/// handling shutdown.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

/// Issues `first_id`, `first_id + 1`, ... and `None` once the next id would overflow.
///
/// The last value is never issued: the counter always holds the next id, so
/// `i64::MAX` itself marks exhaustion.
pub fn id_sequence(first_id: UserId) -> impl Fn() -> Option<UserId> + Send + Sync + 'static {
    let counter = Arc::new(AtomicI64::new(first_id));
    move || {
        counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .ok()
    }
}

impl UserSystem {
    /// Spawns the store actor. Must be called from within a tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        // mpsc::channel panics on zero capacity
        let buffer_size = config.buffer_size.max(1);
        let (user_actor, user_resource_client) =
            ResourceActor::<User>::new(buffer_size, id_sequence(config.first_id));
        let user_client = UserClient::new(user_resource_client);
        let handle = tokio::spawn(user_actor.run());

        info!(buffer_size, first_id = config.first_id, "User system started");
        Self { user_client, handle }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // The store stops once its last client is gone. Clones held elsewhere
        // keep it alive, so callers drop theirs first.
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Store task failed");
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
