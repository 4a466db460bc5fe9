// Copyright (c) 2025 - Cowboy AI, Inc.

//! EC2 security group adapter
//!
//! Deletes security groups through the EC2 `DeleteSecurityGroup` API. Every
//! request carries its own datacenter credentials and region, so an SDK
//! config is built per call from static credentials rather than shared.
//!
//! # Example
//!
//! ```rust,no_run
//! use firewall_delete_aws::adapters::{
//!     DeleteSecurityGroupRequest, Ec2SecurityGroupDeleter, Ec2Settings, SecurityGroupDeleter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let deleter = Ec2SecurityGroupDeleter::new(Ec2Settings::default());
//!     let request = DeleteSecurityGroupRequest {
//!         region: "eu-west-1".to_string(),
//!         access_key: "key".to_string(),
//!         access_token: "token".to_string(),
//!         security_group_aws_id: "sg-0000000".to_string(),
//!     };
//!
//!     deleter.delete(&request).await?;
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_ec2::error::DisplayErrorContext;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{DeleteSecurityGroupRequest, ProviderError, SecurityGroupDeleter};

const CREDENTIALS_PROVIDER_NAME: &str = "firewall-event";

/// Settings shared by every EC2 call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ec2Settings {
    /// Custom endpoint URL (for LocalStack and similar)
    pub endpoint_url: Option<String>,
}

/// [`SecurityGroupDeleter`] backed by the AWS EC2 API
#[derive(Debug, Clone, Default)]
pub struct Ec2SecurityGroupDeleter {
    settings: Ec2Settings,
}

impl Ec2SecurityGroupDeleter {
    pub fn new(settings: Ec2Settings) -> Self {
        Self { settings }
    }

    async fn client_for(&self, request: &DeleteSecurityGroupRequest) -> aws_sdk_ec2::Client {
        let credentials = Credentials::new(
            &request.access_key,
            &request.access_token,
            None,
            None,
            CREDENTIALS_PROVIDER_NAME,
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(request.region.clone()))
            .credentials_provider(credentials);

        if let Some(endpoint) = &self.settings.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        aws_sdk_ec2::Client::new(&loader.load().await)
    }
}

#[async_trait]
impl SecurityGroupDeleter for Ec2SecurityGroupDeleter {
    async fn delete(&self, request: &DeleteSecurityGroupRequest) -> Result<(), ProviderError> {
        debug!(
            region = %request.region,
            security_group_aws_id = %request.security_group_aws_id,
            "Deleting security group"
        );

        let client = self.client_for(request).await;
        client
            .delete_security_group()
            .group_id(&request.security_group_aws_id)
            .send()
            .await
            .map_err(|e| ProviderError::Api(DisplayErrorContext(&e).to_string()))?;

        info!(
            region = %request.region,
            security_group_aws_id = %request.security_group_aws_id,
            "Security group deleted"
        );
        Ok(())
    }
}
