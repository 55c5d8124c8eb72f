use crate::state::SessionLimits;
use std::{env, net::SocketAddr, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub session_limits: SessionLimits,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let seed_path = lookup("DASHBOARD_SEED_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let defaults = SessionLimits::default();
        let ttl = lookup("SESSION_TTL_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map_or(defaults.ttl, Duration::from_secs);
        let max_sessions = lookup("MAX_SESSIONS")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|max| *max > 0)
            .unwrap_or(defaults.max_sessions);

        Self {
            port,
            seed_path,
            session_limits: SessionLimits { ttl, max_sessions },
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed_path, None);
        assert_eq!(config.session_limits, SessionLimits::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_port_and_seed_path() {
        let config = config_from(&[("PORT", "9000"), ("DASHBOARD_SEED_PATH", "seed.json")]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn reads_session_limits() {
        let config = config_from(&[("SESSION_TTL_SECS", "60"), ("MAX_SESSIONS", "5")]);
        assert_eq!(config.session_limits.ttl, Duration::from_secs(60));
        assert_eq!(config.session_limits.max_sessions, 5);

        let config = config_from(&[("SESSION_TTL_SECS", "soon"), ("MAX_SESSIONS", "0")]);
        assert_eq!(config.session_limits, SessionLimits::default());
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("DASHBOARD_SEED_PATH", " ")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed_path, None);
    }
}
