use crate::dashboard::DashboardState;
use crate::session::SessionId;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Bounds on how many sessions are kept and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub ttl: Duration,
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_sessions: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoredSession {
    pub dashboard: DashboardState,
    pub last_seen: Instant,
}

#[derive(Clone)]
pub struct AppState {
    pub seed: Arc<DashboardState>,
    pub limits: SessionLimits,
    pub sessions: Arc<Mutex<HashMap<SessionId, StoredSession>>>,
}

impl AppState {
    pub fn new(seed: DashboardState) -> Self {
        Self::with_limits(seed, SessionLimits::default())
    }

    pub fn with_limits(seed: DashboardState, limits: SessionLimits) -> Self {
        Self {
            seed: Arc::new(seed),
            limits,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Current state of a session. Unknown sessions read as the seed and are
    /// not stored until they change something.
    pub async fn snapshot(&self, id: SessionId) -> DashboardState {
        let mut sessions = self.sessions.lock().await;
        match sessions.get_mut(&id) {
            Some(stored) => {
                stored.last_seen = Instant::now();
                stored.dashboard.clone()
            }
            None => (*self.seed).clone(),
        }
    }

    /// Applies `apply` to the session's state and returns the result.
    pub async fn update<F>(&self, id: SessionId, apply: F) -> DashboardState
    where
        F: FnOnce(&mut DashboardState),
    {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        self.prune(&mut sessions, id, now);

        let stored = sessions.entry(id).or_insert_with(|| {
            info!(session = %id, "new dashboard session");
            StoredSession {
                dashboard: (*self.seed).clone(),
                last_seen: now,
            }
        });
        stored.last_seen = now;
        apply(&mut stored.dashboard);
        stored.dashboard.clone()
    }

    /// Drops expired sessions, then the least recently seen ones until a
    /// new session fits under `max_sessions`. `keep` is never dropped.
    fn prune(&self, sessions: &mut HashMap<SessionId, StoredSession>, keep: SessionId, now: Instant) {
        let before = sessions.len();
        sessions.retain(|id, stored| {
            *id == keep || now.saturating_duration_since(stored.last_seen) < self.limits.ttl
        });

        let room = usize::from(!sessions.contains_key(&keep));
        while sessions.len() + room > self.limits.max_sessions {
            let oldest = sessions
                .iter()
                .filter(|(id, _)| **id != keep)
                .min_by_key(|(_, stored)| stored.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let dropped = before - sessions.len();
        if dropped > 0 {
            debug!(dropped, remaining = sessions.len(), "pruned dashboard sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let state = AppState::new(DashboardState::default());
        let first = SessionId::generate();
        let second = SessionId::generate();

        let toggled = state.update(first, DashboardState::toggle_task_1).await;
        assert_eq!(toggled.done_tasks(), 2);

        assert_eq!(state.snapshot(first).await.done_tasks(), 2);
        assert_eq!(state.snapshot(second).await.done_tasks(), 1);
        assert_eq!(state.sessions.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn new_sessions_start_from_seed() {
        let state = AppState::new(DashboardState::default().with_weekly_goal(1000));
        let snapshot = state.snapshot(SessionId::generate()).await;
        assert_eq!(snapshot.progress_percent(), 64);
    }

    #[tokio::test]
    async fn reads_without_changes_store_nothing() {
        let state = AppState::new(DashboardState::default());
        for _ in 0..1_000 {
            let snapshot = state.snapshot(SessionId::generate()).await;
            assert_eq!(snapshot, DashboardState::default());
        }
        assert!(state.sessions.lock().await.is_empty());
    }

    #[tokio::test]
    async fn expired_sessions_are_dropped_on_update() {
        let limits = SessionLimits {
            ttl: Duration::ZERO,
            max_sessions: 100,
        };
        let state = AppState::with_limits(DashboardState::default(), limits);
        let stale = SessionId::generate();
        let fresh = SessionId::generate();

        state.update(stale, DashboardState::toggle_task_1).await;
        state.update(fresh, DashboardState::toggle_task_3).await;

        let sessions = state.sessions.lock().await;
        assert_eq!(sessions.len(), 1);
        assert!(sessions.contains_key(&fresh));
    }

    #[tokio::test]
    async fn session_count_is_capped() {
        let limits = SessionLimits {
            ttl: Duration::from_secs(3600),
            max_sessions: 3,
        };
        let state = AppState::with_limits(DashboardState::default(), limits);
        let ids: Vec<SessionId> = (0..10).map(|_| SessionId::generate()).collect();
        for id in &ids {
            state.update(*id, DashboardState::toggle_task_2).await;
            assert!(state.sessions.lock().await.len() <= 3);
        }

        let sessions = state.sessions.lock().await;
        assert_eq!(sessions.len(), 3);
        assert!(sessions.contains_key(&ids[9]));
    }

    #[tokio::test]
    async fn existing_session_survives_cap() {
        let limits = SessionLimits {
            ttl: Duration::from_secs(3600),
            max_sessions: 1,
        };
        let state = AppState::with_limits(DashboardState::default(), limits);
        let id = SessionId::generate();

        state.update(id, DashboardState::toggle_task_1).await;
        let again = state.update(id, DashboardState::toggle_task_3).await;

        assert_eq!(again.done_tasks(), 3);
        assert_eq!(state.sessions.lock().await.len(), 1);
    }
}
