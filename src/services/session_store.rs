//! Concurrent session store and expiry scheduling.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::models::{Session, UserProfile};

/// Concurrent mapping from session id to session record.
///
/// Entries wrap the session in `Arc<Mutex<_>>`: lookups clone the `Arc` and
/// release the shard guard before the caller awaits the per-session mutex, so
/// operations on distinct sessions never contend while operations on the same
/// session are serialized.
///
/// Expiry runs as one spawned sleep task per scheduled deletion. Every task
/// captures the session's expiry epoch at scheduling time and only deletes if
/// the epoch is still current, so a reschedule (idle window -> post-checkout
/// grace) supersedes the outstanding timer without a double-deletion race.
/// Deletion is idempotent, so a stale timer firing after the session is
/// already gone is a no-op.
pub struct SessionStore {
    sessions: DashMap<String, Arc<Mutex<Session>>>,
    idle_ttl: Duration,
    checkout_grace: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration, checkout_grace: Duration) -> Arc<Self> {
        Arc::new(Self {
            sessions: DashMap::new(),
            idle_ttl,
            checkout_grace,
        })
    }

    /// Store a new session for a validated profile and schedule its idle
    /// expiry. Returns the fresh session id.
    ///
    /// The idle window is fixed from creation; cart activity does not
    /// refresh it.
    pub fn create(self: &Arc<Self>, user: UserProfile) -> String {
        let session = Session::new(user);
        let id = session.id.clone();
        self.sessions
            .insert(id.clone(), Arc::new(Mutex::new(session)));
        self.spawn_expiry(id.clone(), 0, self.idle_ttl);

        tracing::info!(session_id = %id, "session created");
        id
    }

    /// Look up a session. Callers lock the returned entry to read or mutate;
    /// the map's shard guard is released before this returns.
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<Session>>> {
        let entry = self.sessions.get(id)?;
        let session = Arc::clone(entry.value());
        drop(entry);
        Some(session)
    }

    /// Remove a session. Idempotent: returns whether an entry was actually
    /// removed, never an error for an unknown id.
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Switch the session onto the short post-checkout deletion window.
    ///
    /// The caller holds the session's lock (checkout mutates the cart in the
    /// same critical section), so the epoch bump and the snapshot the new
    /// timer captures are consistent.
    pub fn schedule_post_checkout(self: &Arc<Self>, session: &mut Session) {
        session.expiry_epoch += 1;
        self.spawn_expiry(session.id.clone(), session.expiry_epoch, self.checkout_grace);
    }

    fn spawn_expiry(self: &Arc<Self>, id: String, epoch: u64, ttl: Duration) {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;

            let Some(session) = store.get(&id) else {
                return;
            };
            // Hold the session lock across the removal so an in-flight
            // reschedule cannot interleave between the epoch check and the
            // delete.
            let guard = session.lock().await;
            if guard.expiry_epoch == epoch && store.remove(&id) {
                tracing::debug!(session_id = %id, "session expired");
            }
        });
    }
}
