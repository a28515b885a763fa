//! # API Dispatcher
//!
//! Runs users API calls as tokio tasks so the event loop never waits on the
//! network. Results come back through a channel as `ApiEvent`s and are
//! applied in arrival order; overlapping calls are neither cancelled nor
//! reordered.

use crate::hub::events::ApiEvent;
use crate::hub::models::User;
use crate::hub::services::users_api::UsersApi;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

const EVENT_CHANNEL_CAPACITY: usize = 32;

pub struct ApiDispatcher {
    api: Arc<dyn UsersApi>,
    event_sender: mpsc::Sender<ApiEvent>,
    event_receiver: mpsc::Receiver<ApiEvent>,
    in_flight: usize,
}

impl ApiDispatcher {
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            api,
            event_sender,
            event_receiver,
            in_flight: 0,
        }
    }

    /// Number of dispatched calls whose results have not been collected
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn fetch_users(&mut self) {
        self.spawn(|api| async move { ApiEvent::UsersLoaded(api.list_users().await) });
    }

    pub fn fetch_logs(&mut self) {
        self.spawn(|api| async move { ApiEvent::LogsLoaded(api.list_logs().await) });
    }

    pub fn create_user(&mut self, user: User) {
        self.spawn(|api| async move {
            let result = api.create_user(&user).await;
            ApiEvent::UserCreated {
                user_id: user.user_id,
                result,
            }
        });
    }

    pub fn delete_user(&mut self, user_id: String) {
        self.spawn(|api| async move {
            let result = api.delete_user(&user_id).await;
            ApiEvent::UserDeleted { user_id, result }
        });
    }

    /// Take a finished result without waiting
    pub fn poll_event(&mut self) -> Option<ApiEvent> {
        let event = self.event_receiver.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    /// Wait for the next result; `None` when nothing is in flight
    pub async fn next_event(&mut self) -> Option<ApiEvent> {
        if self.in_flight == 0 {
            return None;
        }
        let event = self.event_receiver.recv().await?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    fn spawn<F, Fut>(&mut self, call: F)
    where
        F: FnOnce(Arc<dyn UsersApi>) -> Fut,
        Fut: Future<Output = ApiEvent> + Send + 'static,
    {
        let task = call(Arc::clone(&self.api));
        let event_sender = self.event_sender.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let event = task.await;
            tracing::debug!("API call finished: {}", event.label());
            // The receiver only goes away with the dispatcher itself
            let _ = event_sender.send(event).await;
        });
    }
}
