// Session registry - owns all live sessions for the process
use crate::application::dataset::DatasetProvider;
use crate::application::session::Session;
use crate::domain::error::DashboardError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Creates sessions with default state and serializes interaction events
/// against them. Sessions are process-memory-only; dropping one discards its
/// state.
pub struct SessionRegistry {
    dataset: Arc<dyn DatasetProvider>,
    next_id: AtomicU64,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionRegistry {
    pub fn new(dataset: Arc<dyn DatasetProvider>) -> Self {
        Self {
            dataset,
            next_id: AtomicU64::new(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn open(&self) -> String {
        let id = format!("s{:06}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = Session::new(self.dataset.enterprise_clients());
        self.lock().insert(id.clone(), session);
        id
    }

    pub fn close(&self, id: &str) -> Result<(), DashboardError> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DashboardError::SessionNotFound(id.to_string()))
    }

    /// Runs one interaction event against a session. The lock is held for the
    /// duration, so events on a session never overlap.
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> T,
    ) -> Result<T, DashboardError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| DashboardError::SessionNotFound(id.to_string()))?;
        Ok(f(session))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        // A poisoned lock only means a panic mid-event; session state is
        // still structurally valid
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
