// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Firewall Event Invariants
//!
//! Business rules a delete request must satisfy before the provider is
//! called. All functions are pure and fail fast: the first violated rule is
//! reported and later rules are not evaluated.
//!
//! # Evaluation Order
//!
//! 1. Datacenter VPC id
//! 2. Datacenter region
//! 3. Datacenter credentials (key and token)
//! 4. Security group AWS id
//! 5. Security group name
//! 6. At least one rule across ingress and egress
//! 7. Each ingress rule, then each egress rule: ip, protocol, from port, to port
//!
//! The order is part of the contract; callers rely on the reported message.

use super::firewall::{FirewallEvent, Rule, RuleSet, MAX_PORT, MIN_PORT};

/// Validation result with the first violated rule
pub type ValidationResult = Result<(), ValidationError>;

/// A violated firewall event rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("Datacenter VPC ID invalid")]
    DatacenterIdInvalid,

    #[error("Datacenter Region invalid")]
    DatacenterRegionInvalid,

    #[error("Datacenter credentials invalid")]
    DatacenterCredentialsInvalid,

    #[error("Security Group aws id invalid")]
    SgAwsIdInvalid,

    #[error("Security Group name invalid")]
    SgNameInvalid,

    #[error("Security Group must contain rules")]
    SgRulesInvalid,

    #[error("Security Group rule ip invalid")]
    SgRuleIpInvalid,

    #[error("Security Group rule protocol invalid")]
    SgRuleProtocolInvalid,

    #[error("Security Group rule from port invalid")]
    SgRuleFromPortInvalid,

    #[error("Security Group rule to port invalid")]
    SgRuleToPortInvalid,
}

/// Validate the datacenter the request targets
pub fn validate_datacenter(event: &FirewallEvent) -> ValidationResult {
    if event.datacenter_vpc_id.is_empty() {
        return Err(ValidationError::DatacenterIdInvalid);
    }

    if event.datacenter_region.is_empty() {
        return Err(ValidationError::DatacenterRegionInvalid);
    }

    if event.datacenter_access_key.is_empty() || event.datacenter_access_token.is_empty() {
        return Err(ValidationError::DatacenterCredentialsInvalid);
    }

    Ok(())
}

/// Validate the security group identity
pub fn validate_security_group(event: &FirewallEvent) -> ValidationResult {
    if event.security_group_aws_id.is_empty() {
        return Err(ValidationError::SgAwsIdInvalid);
    }

    if event.security_group_name.is_empty() {
        return Err(ValidationError::SgNameInvalid);
    }

    Ok(())
}

/// Validate a single rule
///
/// # Rules
/// - ip must not be empty
/// - protocol must not be empty
/// - both ports must be within 1..=65535
pub fn validate_rule(rule: &Rule) -> ValidationResult {
    if rule.ip.is_empty() {
        return Err(ValidationError::SgRuleIpInvalid);
    }

    if rule.protocol.is_empty() {
        return Err(ValidationError::SgRuleProtocolInvalid);
    }

    if !(MIN_PORT..=MAX_PORT).contains(&rule.from_port) {
        return Err(ValidationError::SgRuleFromPortInvalid);
    }

    if !(MIN_PORT..=MAX_PORT).contains(&rule.to_port) {
        return Err(ValidationError::SgRuleToPortInvalid);
    }

    Ok(())
}

/// Validate the rule set: non-empty, then every rule in order
pub fn validate_rules(rules: &RuleSet) -> ValidationResult {
    if rules.is_empty() {
        return Err(ValidationError::SgRulesInvalid);
    }

    rules.iter().try_for_each(validate_rule)
}

/// Validate a whole event, reporting the first violated rule
pub fn validate_event(event: &FirewallEvent) -> ValidationResult {
    validate_datacenter(event)?;
    validate_security_group(event)?;
    validate_rules(&event.security_group_rules)
}
