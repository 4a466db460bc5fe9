// Copyright (c) 2025 - Cowboy AI, Inc.

//! Cloud provider adapters
//!
//! The worker treats the provider call as one opaque remote operation. This
//! module defines that seam ([`SecurityGroupDeleter`]) and the concrete
//! implementations behind it.

use async_trait::async_trait;
use std::fmt;

use crate::domain::firewall::{redact, FirewallEvent};

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(feature = "aws")]
pub use aws::{Ec2SecurityGroupDeleter, Ec2Settings};

/// Errors returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider API rejected or failed the call
    #[error("{0}")]
    Api(String),
}

/// Everything the provider needs to delete one security group
#[derive(Clone, PartialEq, Eq)]
pub struct DeleteSecurityGroupRequest {
    pub region: String,
    pub access_key: String,
    pub access_token: String,
    pub security_group_aws_id: String,
}

impl From<&FirewallEvent> for DeleteSecurityGroupRequest {
    fn from(event: &FirewallEvent) -> Self {
        Self {
            region: event.datacenter_region.clone(),
            access_key: event.datacenter_access_key.clone(),
            access_token: event.datacenter_access_token.clone(),
            security_group_aws_id: event.security_group_aws_id.clone(),
        }
    }
}

impl fmt::Debug for DeleteSecurityGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteSecurityGroupRequest")
            .field("region", &self.region)
            .field("access_key", &redact(&self.access_key))
            .field("access_token", &redact(&self.access_token))
            .field("security_group_aws_id", &self.security_group_aws_id)
            .finish()
    }
}

/// Deletes a security group at a cloud provider
#[async_trait]
pub trait SecurityGroupDeleter: Send + Sync {
    /// Delete the security group named by the request
    async fn delete(&self, request: &DeleteSecurityGroupRequest) -> Result<(), ProviderError>;
}
