//! Worker configuration loaded from the environment

use std::time::Duration;

use crate::errors::{WorkerError, WorkerResult};
use crate::nats::NatsConfig;

/// Environment variable holding the NATS server list
pub const NATS_URI_VAR: &str = "NATS_URI";

/// Fallback environment variable for the NATS server list
pub const NATS_URL_VAR: &str = "NATS_URL";

/// Environment variable overriding the NATS client name
pub const NATS_CLIENT_NAME_VAR: &str = "NATS_CLIENT_NAME";

/// Environment variable overriding the NATS connect timeout, in seconds
pub const NATS_CONNECT_TIMEOUT_VAR: &str = "NATS_CONNECT_TIMEOUT_SECS";

/// Environment variable overriding the EC2 endpoint
pub const AWS_ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";

/// Configuration for the firewall worker process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerConfig {
    /// NATS connection settings
    pub nats: NatsConfig,
    /// Custom EC2 endpoint, for LocalStack and similar
    pub aws_endpoint_url: Option<String>,
}

impl WorkerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> WorkerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> WorkerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut nats = NatsConfig::default();

        if let Some(uri) = lookup(NATS_URI_VAR).or_else(|| lookup(NATS_URL_VAR)) {
            nats.servers = parse_servers(&uri)?;
        }

        if let Some(name) = lookup(NATS_CLIENT_NAME_VAR).filter(|n| !n.trim().is_empty()) {
            nats.name = name;
        }

        if let Some(secs) = lookup(NATS_CONNECT_TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                WorkerError::Configuration(format!(
                    "{NATS_CONNECT_TIMEOUT_VAR} must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            nats.connect_timeout = Duration::from_secs(secs);
        }

        let aws_endpoint_url = lookup(AWS_ENDPOINT_URL_VAR).filter(|u| !u.trim().is_empty());

        Ok(Self {
            nats,
            aws_endpoint_url,
        })
    }
}

fn parse_servers(uri: &str) -> WorkerResult<Vec<String>> {
    let servers: Vec<String> = uri
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if servers.is_empty() {
        return Err(WorkerError::Configuration(format!(
            "{NATS_URI_VAR} does not name any server"
        )));
    }
    Ok(servers)
}
