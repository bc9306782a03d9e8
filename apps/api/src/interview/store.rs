use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::interview::InterviewSession;

struct StoredSession {
    created_at: DateTime<Utc>,
    session: Arc<Mutex<InterviewSession>>,
}

impl StoredSession {
    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.created_at >= ttl
    }
}

/// In-memory interview sessions keyed by id.
///
/// Each session has its own mutex: one request appends turns at a time,
/// while requests for different sessions never contend beyond the map lookup.
/// Sessions expire `ttl` after creation; expired entries are swept on every insert
/// and are invisible to `get` before that.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn insert(&self, session: InterviewSession) -> Uuid {
        let id = session.id;
        let created_at = session.created_at;

        let mut sessions = self.sessions.write().await;
        sweep(&mut sessions, self.ttl, Utc::now());
        sessions.insert(
            id,
            StoredSession {
                created_at,
                session: Arc::new(Mutex::new(session)),
            },
        );
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<InterviewSession>>> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(&id)
            .filter(|stored| !stored.is_expired(self.ttl, now))
            .map(|stored| Arc::clone(&stored.session))
    }

    /// Ends a session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    /// Drops every session created at least `ttl` before `now`. Returns how many went.
    pub async fn evict_expired(&self, now: DateTime<Utc>) -> usize {
        sweep(&mut *self.sessions.write().await, self.ttl, now)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn sweep(sessions: &mut HashMap<Uuid, StoredSession>, ttl: Duration, now: DateTime<Utc>) -> usize {
    let before = sessions.len();
    sessions.retain(|_, stored| !stored.is_expired(ttl, now));
    let evicted = before - sessions.len();
    if evicted > 0 {
        info!("Evicted {evicted} expired interview sessions");
    }
    evicted
}
