// crates/brick-config-core/tests/field_state.rs
// ============================================================================
// Module: Field State Tests
// Description: Coverage for field metadata, synthetic rewrites, and conditions.
// Purpose: Ensure field state is built without leaking widget options.
// Dependencies: brick-config-core, serde_json
// ============================================================================
//! ## Overview
//! Integration tests for the additional config resolver and condition parsing.

mod support;

use brick_config_core::BuildError;
use brick_config_core::CatalogTranslator;
use brick_config_core::ConfigurationError;
use brick_config_core::FieldSchema;
use brick_config_core::FieldType;
use brick_config_core::InMemoryValueStore;
use brick_config_core::TypeCapabilityPolicy;
use brick_config_core::WidgetDimensions;
use brick_config_core::WindowSize;
use brick_config_core::runtime::AdditionalConfigResolver;
use brick_config_core::runtime::ValueResolver;
use brick_config_core::runtime::field_state::parse_conditions;
use serde_json::Value;
use serde_json::json;
use support::RecordingAuditSink;
use support::TestResult;
use support::context;
use support::document;
use support::ensure;
use support::fail;

/// Parses a field schema from JSON.
fn schema(value: Value) -> TestResult<FieldSchema> {
    Ok(serde_json::from_value(value)?)
}

#[test]
fn additional_classes_become_a_named_input() -> TestResult {
    let translator = CatalogTranslator::new().with_message("admin", "Additional", "Extra classes");
    let store = InMemoryValueStore::new();
    let audit = RecordingAuditSink::default();
    let resolver = AdditionalConfigResolver::new(&translator, ValueResolver::new(&store, &audit));
    let policy = TypeCapabilityPolicy::default();
    let dimensions = WidgetDimensions::default();
    let doc = document();
    let ctx = context(&doc, WindowSize::Small, &policy, &dimensions);
    let declared = schema(json!({
        "type": "additionalClasses",
        "title": "ignored",
        "config": { "store": { "wide": "Wide" }, "default": "wide" }
    }))?;

    let Some(state) = resolver.resolve(&ctx, "classes", Some(&declared), true)? else {
        return fail("state expected");
    };
    ensure(state.name == "content_1AdditionalClasses", "synthetic name")?;
    ensure(state.field_type == FieldType::Input, "rewritten to input")?;
    ensure(state.title.as_deref() == Some("Extra classes"), "translated title")?;
    ensure(state.edit_reload, "reload flag carried over")?;
    ensure(state.selected_value == Some(json!("wide")), "default applied")?;
    ensure(
        store.value(&doc, "content_1AdditionalClasses") == Some(json!("wide")),
        "store keyed by the synthetic name",
    )?;
    Ok(())
}

#[test]
fn metadata_passes_through_without_widget_options() -> TestResult {
    let translator = CatalogTranslator::new();
    let store = InMemoryValueStore::new();
    let audit = RecordingAuditSink::default();
    let resolver = AdditionalConfigResolver::new(&translator, ValueResolver::new(&store, &audit));
    let policy = TypeCapabilityPolicy::default();
    let dimensions = WidgetDimensions::default();
    let doc = document();
    let ctx = context(&doc, WindowSize::Small, &policy, &dimensions);
    let declared = schema(json!({
        "type": "input",
        "title": "Headline",
        "description": "Shown above the teaser",
        "col_class": "t-col-half",
        "name": "spoofed",
        "config": { "placeholder": "Title" }
    }))?;

    let Some(state) = resolver.resolve(&ctx, "headline", Some(&declared), false)? else {
        return fail("state expected");
    };
    ensure(state.name == "headline", "declared key is the name")?;
    ensure(state.title.as_deref() == Some("Headline"), "title kept")?;
    ensure(state.description.is_some(), "description kept")?;
    ensure(state.extra.get("col_class") == Some(&json!("t-col-half")), "extra keys kept")?;
    ensure(!state.extra.contains_key("name"), "reserved keys dropped")?;
    ensure(!state.extra.contains_key("placeholder"), "widget options not copied")?;
    ensure(!state.editmode_hidden, "fields start visible")?;
    ensure(state.is_unconditional(), "no conditions declared")?;
    Ok(())
}

#[test]
fn null_declaration_has_no_state() -> TestResult {
    let translator = CatalogTranslator::new();
    let store = InMemoryValueStore::new();
    let audit = RecordingAuditSink::default();
    let resolver = AdditionalConfigResolver::new(&translator, ValueResolver::new(&store, &audit));
    let policy = TypeCapabilityPolicy::default();
    let dimensions = WidgetDimensions::default();
    let doc = document();
    let ctx = context(&doc, WindowSize::Small, &policy, &dimensions);

    let state = resolver.resolve(&ctx, "placeholder", None, false)?;
    ensure(state.is_none(), "null declaration yields no state")?;
    ensure(store.reads() == 0, "store untouched")?;
    Ok(())
}

#[test]
fn malformed_conditions_fail_before_the_store_is_touched() -> TestResult {
    let translator = CatalogTranslator::new();
    let store = InMemoryValueStore::new();
    let audit = RecordingAuditSink::default();
    let resolver = AdditionalConfigResolver::new(&translator, ValueResolver::new(&store, &audit));
    let policy = TypeCapabilityPolicy::default();
    let dimensions = WidgetDimensions::default();
    let doc = document();
    let ctx = context(&doc, WindowSize::Small, &policy, &dimensions);
    let declared = schema(json!({
        "type": "input",
        "config": { "default": "x" },
        "conditions": { "mode": "advanced" }
    }))?;

    match resolver.resolve(&ctx, "headline", Some(&declared), false) {
        Err(BuildError::Configuration(ConfigurationError::InvalidConditions { field, .. })) => {
            ensure(field == "headline", "error names the field")?;
        }
        _ => return fail("expected invalid conditions"),
    }
    ensure(store.reads() == 0 && store.writes() == 0, "store untouched")?;
    Ok(())
}

#[test]
fn conditions_parse_into_ordered_groups() -> TestResult {
    ensure(parse_conditions("a", None)?.is_empty(), "absent conditions")?;
    ensure(parse_conditions("a", Some(&Value::Null))?.is_empty(), "null conditions")?;
    ensure(parse_conditions("a", Some(&json!([])))?.is_empty(), "empty list")?;

    let groups = parse_conditions("a", Some(&json!([{ "mode": "x", "size": 2 }, { "flag": true }])))?;
    ensure(groups.len() == 2, "two groups")?;
    ensure(groups[0].get("size") == Some(&json!(2)), "entries kept")?;
    ensure(groups[1].get("flag") == Some(&json!(true)), "second group kept")?;

    let error = parse_conditions("a", Some(&json!([{ "mode": "x" }, "mode"])));
    match error {
        Err(ConfigurationError::InvalidConditions { reason, .. }) => {
            ensure(reason.contains("group 1"), "reason names the group")?;
        }
        _ => return fail("string group should be rejected"),
    }
    Ok(())
}

#[test]
fn listed_condition_groups_merge_their_mappings() -> TestResult {
    let groups =
        parse_conditions("a", Some(&json!([[{ "mode": "x" }, { "size": 2 }], [{ "flag": true }]])))?;
    ensure(groups.len() == 2, "two groups")?;
    ensure(groups[0].get("mode") == Some(&json!("x")), "first mapping kept")?;
    ensure(groups[0].get("size") == Some(&json!(2)), "second mapping merged into the same group")?;
    ensure(groups[1].get("flag") == Some(&json!(true)), "second group kept")?;

    let empty = parse_conditions("a", Some(&json!([[]])))?;
    ensure(empty.len() == 1 && empty[0].is_empty(), "empty listed group is one empty group")?;

    match parse_conditions("a", Some(&json!([[{ "mode": "x" }, "size"]]))) {
        Err(ConfigurationError::InvalidConditions { reason, .. }) => {
            ensure(reason.contains("group 0 item 1"), "reason names the item")?;
        }
        _ => return fail("scalar inside a listed group should be rejected"),
    }
    match parse_conditions("a", Some(&json!([[[{ "mode": "x" }]]]))) {
        Err(ConfigurationError::InvalidConditions { .. }) => {}
        _ => return fail("nested lists inside a group should be rejected"),
    }
    Ok(())
}
