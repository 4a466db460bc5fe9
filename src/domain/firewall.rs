// Copyright (c) 2025 - Cowboy AI, Inc.
//! Firewall Event Model
//!
//! Wire representation of a `firewall.delete.aws` request. The same shape is
//! re-serialized onto the done and error subjects, with the `error` field
//! populated only for failures.
//!
//! Missing and `null` fields decode to their zero values, unknown fields are
//! ignored and a repeated key keeps its last value, so a partially populated
//! payload still decodes and is rejected later by
//! [`validate_event`](super::invariants::validate_event).

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lowest valid port number for a rule
pub const MIN_PORT: i64 = 1;

/// Highest valid port number for a rule
pub const MAX_PORT: i64 = 65535;

/// One firewall permission entry
///
/// Ports are kept as signed 64-bit integers so that out-of-range values
/// survive decoding and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    /// CIDR block, e.g. `10.0.10.100/32`
    #[serde(deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub from_port: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub to_port: i64,
    /// Protocol name, e.g. `tcp`
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
}

impl Rule {
    /// Create a rule
    pub fn new(
        ip: impl Into<String>,
        from_port: i64,
        to_port: i64,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            from_port,
            to_port,
            protocol: protocol.into(),
        }
    }
}

/// Ingress and egress rules of a security group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    #[serde(deserialize_with = "null_as_default")]
    pub ingress: Vec<Rule>,
    #[serde(deserialize_with = "null_as_default")]
    pub egress: Vec<Rule>,
}

impl RuleSet {
    /// Total number of rules across both directions
    pub fn len(&self) -> usize {
        self.ingress.len() + self.egress.len()
    }

    /// Whether neither direction holds a rule
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ingress rules followed by egress rules, in input order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.ingress.iter().chain(self.egress.iter())
    }
}

/// A delete-firewall request and its outcome
///
/// Field order matches the wire order; serializing an event that was decoded
/// from this encoder yields the same bytes.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallEvent {
    /// Caller-supplied correlation id
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datacenter_vpc_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datacenter_region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datacenter_access_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datacenter_access_token: String,
    /// Informational only
    #[serde(deserialize_with = "null_as_default")]
    pub network_aws_id: String,
    /// Identifier of the security group to delete
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub security_group_aws_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub security_group_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub security_group_rules: RuleSet,
    /// Failure message, empty until an error is recorded
    #[serde(
        rename = "error",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub error_message: String,
}

impl FirewallEvent {
    /// Decode an event from its wire encoding
    ///
    /// The payload is read into a JSON value first so that a key repeated in
    /// the same object resolves to its last occurrence instead of failing.
    pub fn from_slice(raw: &[u8]) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(raw)?;
        Self::deserialize(value)
    }

    /// The recorded error message, if any
    pub fn error_message(&self) -> Option<&str> {
        if self.error_message.is_empty() {
            None
        } else {
            Some(&self.error_message)
        }
    }

    /// Record a failure message on the event
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
    }
}

// Credentials are redacted so events can be logged with `{:?}`.
impl fmt::Debug for FirewallEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirewallEvent")
            .field("id", &self.id)
            .field("datacenter_vpc_id", &self.datacenter_vpc_id)
            .field("datacenter_region", &self.datacenter_region)
            .field("datacenter_access_key", &redact(&self.datacenter_access_key))
            .field("datacenter_access_token", &redact(&self.datacenter_access_token))
            .field("network_aws_id", &self.network_aws_id)
            .field("security_group_aws_id", &self.security_group_aws_id)
            .field("security_group_name", &self.security_group_name)
            .field("security_group_rules", &self.security_group_rules)
            .field("error_message", &self.error_message)
            .finish()
    }
}

/// Read an explicit `null` as the field's zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Mask a secret for display, keeping at most its first four characters
pub(crate) fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let prefix: String = secret.chars().take(4).collect();
    if prefix.len() == secret.len() {
        "****".to_string()
    } else {
        format!("{prefix}****")
    }
}
