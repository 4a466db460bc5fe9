// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Firewall Event Lifecycle
//!
//! Properties that must hold for every request, valid or not:
//! parsing reproduces the encoded event whether empty values are written
//! out or as `null`, validation reports the first violated rule, and every
//! request gets exactly one answer.

use firewall_delete_aws::{
    domain::validate_event, Disposition, EventLifecycle, FirewallEvent, InMemoryPublisher, Rule,
    RuleSet, Subjects, ValidationError,
};
use proptest::prelude::*;
use std::sync::Arc;

use crate::fixtures::{encode, Harness, ScriptedDeleter, DONE_SUBJECT, ERROR_SUBJECT};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Possibly empty identifier-like text
fn text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z0-9-]{1,12}"]
}

/// Non-empty identifier-like text
fn present() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,12}"
}

/// Ports both inside and outside the valid range
fn any_port() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..=65535, -10i64..=0, 65536i64..=1_000_000]
}

fn any_rule() -> impl Strategy<Value = Rule> {
    (text(), any_port(), any_port(), text())
        .prop_map(|(ip, from, to, protocol)| Rule::new(ip, from, to, protocol))
}

fn valid_rule() -> impl Strategy<Value = Rule> {
    ("[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}/[0-9]{1,2}", 1i64..=65535, 1i64..=65535, "tcp|udp|icmp")
        .prop_map(|(ip, from, to, protocol)| Rule::new(ip, from, to, protocol))
}

/// Any request, including ones that violate several rules at once
fn any_event() -> impl Strategy<Value = FirewallEvent> {
    (
        text(),
        text(),
        text(),
        text(),
        text(),
        text(),
        text(),
        text(),
        prop::collection::vec(any_rule(), 0..3),
        prop::collection::vec(any_rule(), 0..3),
    )
        .prop_map(
            |(id, vpc, region, key, token, network, sg_id, sg_name, ingress, egress)| {
                FirewallEvent {
                    id,
                    datacenter_vpc_id: vpc,
                    datacenter_region: region,
                    datacenter_access_key: key,
                    datacenter_access_token: token,
                    network_aws_id: network,
                    security_group_aws_id: sg_id,
                    security_group_name: sg_name,
                    security_group_rules: RuleSet { ingress, egress },
                    error_message: String::new(),
                }
            },
        )
}

/// Requests that pass validation
fn valid_event() -> impl Strategy<Value = FirewallEvent> {
    (
        text(),
        present(),
        present(),
        present(),
        present(),
        text(),
        present(),
        present(),
        prop::collection::vec(valid_rule(), 0..3),
        prop::collection::vec(valid_rule(), 1..3),
    )
        .prop_map(
            |(id, vpc, region, key, token, network, sg_id, sg_name, ingress, egress)| {
                FirewallEvent {
                    id,
                    datacenter_vpc_id: vpc,
                    datacenter_region: region,
                    datacenter_access_key: key,
                    datacenter_access_token: token,
                    network_aws_id: network,
                    security_group_aws_id: sg_id,
                    security_group_name: sg_name,
                    security_group_rules: RuleSet { ingress, egress },
                    error_message: String::new(),
                }
            },
        )
}

/// Reference reading of the rule order, written as a lookup table
fn first_violation(event: &FirewallEvent) -> Option<ValidationError> {
    let request_checks = [
        (event.datacenter_vpc_id.is_empty(), ValidationError::DatacenterIdInvalid),
        (event.datacenter_region.is_empty(), ValidationError::DatacenterRegionInvalid),
        (
            event.datacenter_access_key.is_empty() || event.datacenter_access_token.is_empty(),
            ValidationError::DatacenterCredentialsInvalid,
        ),
        (event.security_group_aws_id.is_empty(), ValidationError::SgAwsIdInvalid),
        (event.security_group_name.is_empty(), ValidationError::SgNameInvalid),
        (
            event.security_group_rules.ingress.is_empty()
                && event.security_group_rules.egress.is_empty(),
            ValidationError::SgRulesInvalid,
        ),
    ];

    let rules = event
        .security_group_rules
        .ingress
        .iter()
        .chain(event.security_group_rules.egress.iter());
    let rule_checks = rules.flat_map(|rule| {
        [
            (rule.ip.is_empty(), ValidationError::SgRuleIpInvalid),
            (rule.protocol.is_empty(), ValidationError::SgRuleProtocolInvalid),
            (
                rule.from_port < 1 || rule.from_port > 65535,
                ValidationError::SgRuleFromPortInvalid,
            ),
            (
                rule.to_port < 1 || rule.to_port > 65535,
                ValidationError::SgRuleToPortInvalid,
            ),
        ]
    });

    request_checks
        .into_iter()
        .chain(rule_checks)
        .find(|(violated, _)| *violated)
        .map(|(_, err)| err)
}

/// Re-encode the way a Go producer may: every empty string or list as `null`
fn nulls_for_empty(value: &mut serde_json::Value) {
    use serde_json::Value;

    let empty = match &*value {
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        *value = Value::Null;
        return;
    }

    match value {
        Value::Object(map) => map.values_mut().for_each(nulls_for_empty),
        Value::Array(items) => items.iter_mut().for_each(nulls_for_empty),
        _ => {}
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Parsing reproduces the encoded event
    #[test]
    fn prop_process_reproduces_event(event in any_event()) {
        let publisher = Arc::new(InMemoryPublisher::new());
        let mut lifecycle =
            EventLifecycle::new(publisher.clone(), Arc::new(Subjects::firewall_delete_aws()));

        tokio_test::block_on(lifecycle.process(&encode(&event))).unwrap();

        prop_assert_eq!(lifecycle.event(), &event);
    }

    /// Property: `null` decodes exactly like the empty value it stands for
    #[test]
    fn prop_null_is_the_zero_value(event in any_event()) {
        let mut value = serde_json::to_value(&event).unwrap();
        nulls_for_empty(&mut value);

        let publisher = Arc::new(InMemoryPublisher::new());
        let mut lifecycle =
            EventLifecycle::new(publisher.clone(), Arc::new(Subjects::firewall_delete_aws()));

        tokio_test::block_on(lifecycle.process(&serde_json::to_vec(&value).unwrap())).unwrap();

        prop_assert_eq!(lifecycle.event(), &event);
        prop_assert_eq!(validate_event(lifecycle.event()), validate_event(&event));
    }

    /// Property: Validation reports the first violated rule and no later one
    #[test]
    fn prop_validation_order(event in any_event()) {
        let expected = match first_violation(&event) {
            Some(err) => Err(err),
            None => Ok(()),
        };

        prop_assert_eq!(validate_event(&event), expected);
    }

    /// Property: Every payload gets exactly one answer, never both
    #[test]
    fn prop_exactly_one_terminal_message(event in any_event()) {
        let harness = Harness::new(ScriptedDeleter::succeeding());

        let disposition = tokio_test::block_on(harness.dispatcher.dispatch(&encode(&event))).unwrap();
        let (done, errors) = tokio_test::block_on(async {
            (
                harness.publisher.messages_on(DONE_SUBJECT).await.len(),
                harness.publisher.messages_on(ERROR_SUBJECT).await.len(),
            )
        });

        prop_assert_eq!(done + errors, 1);
        prop_assert_eq!(done == 1, disposition == Disposition::Completed);
        prop_assert_eq!(done == 1, validate_event(&event).is_ok());
    }

    /// Property: Arbitrary bytes still produce exactly one answer
    #[test]
    fn prop_arbitrary_bytes_get_one_answer(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        let harness = Harness::new(ScriptedDeleter::succeeding());

        tokio_test::block_on(harness.dispatcher.dispatch(&raw)).unwrap();
        let messages = tokio_test::block_on(harness.publisher.messages());

        prop_assert_eq!(messages.len(), 1);
    }

    /// Property: A completed request round-trips field for field
    #[test]
    fn prop_completed_event_round_trips(event in valid_event()) {
        let harness = Harness::new(ScriptedDeleter::succeeding());

        let disposition = tokio_test::block_on(harness.dispatcher.dispatch(&encode(&event))).unwrap();
        let done = tokio_test::block_on(harness.publisher.messages_on(DONE_SUBJECT));

        prop_assert_eq!(disposition, Disposition::Completed);
        let published: FirewallEvent = serde_json::from_slice(&done[0].payload).unwrap();
        prop_assert_eq!(published, event);
    }
}
