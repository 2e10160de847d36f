use std::sync::Arc;

use {
    dashmap::DashMap,
    tokio::sync::{Mutex, OwnedMutexGuard},
    tracing::debug,
};

use crate::session::Session;

/// Exclusive access to one sender's session. Dropping the guard releases it.
pub type SessionGuard = OwnedMutexGuard<Session>;

/// In-memory store of one [`Session`] per sender.
///
/// Each sender has its own async mutex, so a read-modify-write done under
/// [`SessionStore::lock`] is serialized against every other delivery for the
/// same sender while different senders proceed in parallel. There is no
/// expiry and no size bound.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, Arc<Mutex<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, sender_id: &str) -> Arc<Mutex<Session>> {
        let entry = self
            .sessions
            .entry(sender_id.to_string())
            .or_insert_with(|| {
                debug!(sender_id, "creating session");
                Arc::new(Mutex::new(Session::new(sender_id)))
            });
        Arc::clone(entry.value())
    }

    /// Lock the sender's session, creating it at `Start` on first access.
    pub async fn lock(&self, sender_id: &str) -> SessionGuard {
        self.slot(sender_id).lock_owned().await
    }

    /// Snapshot of the sender's session, creating it on first access.
    pub async fn get_or_create(&self, sender_id: &str) -> Session {
        self.lock(sender_id).await.clone()
    }

    /// Replace the stored session of `sender_id`.
    pub async fn put(&self, sender_id: &str, session: Session) {
        *self.lock(sender_id).await = session;
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use std::time::Duration;

    use {
        super::*,
        crate::session::Step,
        bacbot_catalog::Filiere,
    };

    #[tokio::test]
    async fn get_or_create_starts_at_start() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let session = store.get_or_create("psid-1").await;
        assert_eq!(session, Session::new("psid-1"));
        assert_eq!(store.len(), 1);

        store.get_or_create("psid-1").await;
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn put_replaces_state() {
        let store = SessionStore::new();
        let mut session = store.get_or_create("psid-1").await;
        session.step = Step::SelectSubject;
        session.filiere = Some(Filiere::SciencesPhysiques);
        store.put("psid-1", session.clone()).await;

        assert_eq!(store.get_or_create("psid-1").await, session);
        assert_eq!(
            store.get_or_create("psid-2").await.step,
            Step::Start,
            "other senders are unaffected"
        );
    }

    #[tokio::test]
    async fn concurrent_read_modify_write_is_serialized() {
        let store = Arc::new(SessionStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let mut guard = store.lock("psid-1").await;
                let observed = guard.step;
                tokio::time::sleep(Duration::from_millis(5)).await;
                if observed == Step::Start {
                    guard.step = Step::SelectFiliere;
                    true
                } else {
                    false
                }
            }));
        }

        let mut advanced = 0;
        for handle in handles {
            if handle.await.unwrap() {
                advanced += 1;
            }
        }
        assert_eq!(advanced, 1);
        assert_eq!(store.get_or_create("psid-1").await.step, Step::SelectFiliere);
    }

    #[tokio::test]
    async fn different_senders_do_not_block_each_other() {
        let store = SessionStore::new();
        let _held = store.lock("psid-1").await;
        let other = tokio::time::timeout(Duration::from_millis(200), store.lock("psid-2")).await;
        assert!(other.is_ok());
    }
}
