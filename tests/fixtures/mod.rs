// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for firewall-delete-aws
//!
//! Deterministic request payloads and a scriptable provider adapter.
//!
//! # Design Principles
//! - Fixtures are the only place that constructs request events
//! - The provider adapter never touches the network

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use firewall_delete_aws::{
    DeleteSecurityGroupRequest, Dispatcher, FirewallEvent, InMemoryPublisher, ProviderError, Rule,
    RuleSet, SecurityGroupDeleter,
};

pub const DONE_SUBJECT: &str = "firewall.delete.aws.done";
pub const ERROR_SUBJECT: &str = "firewall.delete.aws.error";

/// The request used throughout the suite, without rules
pub fn bare_event() -> FirewallEvent {
    FirewallEvent {
        id: "test".to_string(),
        datacenter_vpc_id: "vpc-0000000".to_string(),
        datacenter_region: "eu-west-1".to_string(),
        datacenter_access_key: "key".to_string(),
        datacenter_access_token: "token".to_string(),
        security_group_aws_id: "sg-0000000".to_string(),
        security_group_name: "test".to_string(),
        ..Default::default()
    }
}

/// One ingress and one egress rule
pub fn test_rules() -> RuleSet {
    RuleSet {
        ingress: vec![Rule::new("10.0.10.100/32", 80, 8080, "tcp")],
        egress: vec![Rule::new("8.8.8.8/32", 80, 8080, "tcp")],
    }
}

/// A request that passes validation
pub fn valid_event() -> FirewallEvent {
    FirewallEvent {
        security_group_rules: test_rules(),
        ..bare_event()
    }
}

/// Encode an event the way the platform does
pub fn encode(event: &FirewallEvent) -> Vec<u8> {
    serde_json::to_vec(event).expect("fixture events always serialize")
}

/// Provider adapter that records requests and answers from a script
#[derive(Debug, Default)]
pub struct ScriptedDeleter {
    failure: Option<String>,
    calls: Mutex<Vec<DeleteSecurityGroupRequest>>,
}

impl ScriptedDeleter {
    /// Every delete succeeds
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Every delete fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn calls(&self) -> Vec<DeleteSecurityGroupRequest> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl SecurityGroupDeleter for ScriptedDeleter {
    async fn delete(&self, request: &DeleteSecurityGroupRequest) -> Result<(), ProviderError> {
        self.calls.lock().await.push(request.clone());
        match &self.failure {
            Some(message) => Err(ProviderError::Api(message.clone())),
            None => Ok(()),
        }
    }
}

/// A dispatcher wired to in-memory collaborators
pub struct Harness {
    pub publisher: Arc<InMemoryPublisher>,
    pub deleter: Arc<ScriptedDeleter>,
    pub dispatcher: Dispatcher,
}

impl Harness {
    pub fn new(deleter: ScriptedDeleter) -> Self {
        let publisher = Arc::new(InMemoryPublisher::new());
        let deleter = Arc::new(deleter);
        let dispatcher = Dispatcher::new(publisher.clone(), deleter.clone());
        Self {
            publisher,
            deleter,
            dispatcher,
        }
    }
}
