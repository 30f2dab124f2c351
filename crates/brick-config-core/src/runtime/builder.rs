// crates/brick-config-core/src/runtime/builder.rs
// ============================================================================
// Module: Brick Config Builder
// Description: Entry point resolving a block's config elements for rendering.
// Purpose: Drive the resolvers in order and hand the payload to the renderer.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! One build processes one content block's declared fields to completion:
//! 1. Outside an editable context the build is not applicable and nothing is
//!    resolved.
//! 2. A block with no declared elements yields an empty outcome without
//!    touching the value store.
//! 3. Otherwise the window size is derived once, each field runs through the
//!    tag config resolver and then the additional config resolver (in
//!    declaration order), the condition evaluator runs once over the whole
//!    list, and the payload is rendered.
//!
//! Any error aborts the build; there is no partial result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

use crate::audit::BuildAuditEvent;
use crate::audit::BuildAuditSink;
use crate::audit::EVENT_BUILD_COMPLETED;
use crate::audit::EVENT_BUILD_EMPTY;
use crate::audit::EVENT_BUILD_NOT_APPLICABLE;
use crate::audit::NoopAuditSink;
use crate::core::BrickConfigNode;
use crate::core::ConfigurationError;
use crate::core::DocumentContext;
use crate::core::RenderPayload;
use crate::core::ResolvedField;
use crate::core::WindowSize;
use crate::interfaces::EditContext;
use crate::interfaces::RenderError;
use crate::interfaces::Renderer;
use crate::interfaces::StoreError;
use crate::interfaces::Translator;
use crate::interfaces::ValueStore;
use crate::runtime::condition::ConditionEvaluator;
use crate::runtime::context::ResolutionContext;
use crate::runtime::field_state::AdditionalConfigResolver;
use crate::runtime::policy::TypeCapabilityPolicy;
use crate::runtime::policy::WidgetDimensions;
use crate::runtime::value::ValueResolver;
use crate::runtime::widget::TagConfigResolver;
use crate::runtime::widget::TagResolution;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Template the host renders the field set with.
pub const DEFAULT_FIELD_SET_TEMPLATE: &str = "@Toolbox/Admin/AreaConfig/fieldSet.html.twig";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Builder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Capability tables.
    pub policy: TypeCapabilityPolicy,
    /// Default widget dimensions.
    pub dimensions: WidgetDimensions,
    /// Template identifier passed to the renderer.
    pub template: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            policy: TypeCapabilityPolicy::default(),
            dimensions: WidgetDimensions::default(),
            template: DEFAULT_FIELD_SET_TEMPLATE.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Requests and Outcomes
// ============================================================================

/// Inputs for one block build.
#[derive(Debug, Clone, Copy)]
pub struct BuildRequest<'a> {
    /// Block editable identifier.
    pub editable_id: &'a str,
    /// Block editable name.
    pub editable_name: &'a str,
    /// Declared config node.
    pub config: &'a BrickConfigNode,
}

/// Rendered block config.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBrick {
    /// Payload handed to the renderer.
    pub payload: RenderPayload,
    /// Renderer output.
    pub markup: String,
}

/// Build outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// The context is not an authoring context; nothing was resolved.
    NotApplicable,
    /// The block declares no config elements.
    Empty,
    /// Fields were resolved and rendered.
    Rendered(RenderedBrick),
}

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The block schema is broken.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The value store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The renderer failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Resolves and renders a block's config elements.
pub struct BrickConfigBuilder<T, S, R> {
    /// Translator implementation.
    translator: T,
    /// Value store implementation.
    store: S,
    /// Renderer implementation.
    renderer: R,
    /// Builder configuration.
    config: BuilderConfig,
    /// Audit sink for build events.
    audit: Arc<dyn BuildAuditSink>,
}

impl<T, S, R> BrickConfigBuilder<T, S, R>
where
    T: Translator,
    S: ValueStore,
    R: Renderer,
{
    /// Creates a builder with a no-op audit sink.
    #[must_use]
    pub fn new(translator: T, store: S, renderer: R, config: BuilderConfig) -> Self {
        Self {
            translator,
            store,
            renderer,
            config,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Replaces the audit sink.
    #[must_use]
    pub fn with_audit_sink(mut self, audit: Arc<dyn BuildAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the value store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the builder configuration.
    #[must_use]
    pub const fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds the block config for the given context.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the schema is broken or a collaborator fails.
    pub fn build<C: EditContext>(
        &self,
        context: &C,
        request: &BuildRequest<'_>,
    ) -> Result<BuildOutcome, BuildError> {
        if !context.is_editable() {
            self.audit.record(&BuildAuditEvent::new(EVENT_BUILD_NOT_APPLICABLE, request.editable_id));
            return Ok(BuildOutcome::NotApplicable);
        }

        let Some(payload) = self.resolve(context.document(), request)? else {
            return Ok(BuildOutcome::Empty);
        };

        let markup = self.renderer.render(&self.config.template, &payload)?;
        let hidden = payload.config_elements.iter().filter(|field| field.is_hidden()).count();
        self.audit.record(
            &BuildAuditEvent::new(EVENT_BUILD_COMPLETED, request.editable_id).with_detail(json!({
                "fields": payload.config_elements.len(),
                "hidden": hidden,
                "window_size": payload.window_size,
            })),
        );

        Ok(BuildOutcome::Rendered(RenderedBrick {
            payload,
            markup,
        }))
    }

    /// Resolves the render payload without rendering it.
    ///
    /// Returns `None` when the block declares no config elements.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the schema is broken or the value store fails.
    pub fn resolve(
        &self,
        document: &DocumentContext,
        request: &BuildRequest<'_>,
    ) -> Result<Option<RenderPayload>, BuildError> {
        let elements = &request.config.config_elements;
        if elements.is_empty() {
            self.audit.record(&BuildAuditEvent::new(EVENT_BUILD_EMPTY, request.editable_id));
            return Ok(None);
        }

        let ctx = ResolutionContext {
            document,
            editable_id: request.editable_id,
            window_size: WindowSize::from_parameter(
                request.config.config_parameter.window_size.as_deref(),
            ),
            policy: &self.config.policy,
            dimensions: &self.config.dimensions,
        };

        let audit = self.audit.as_ref();
        let tags = TagConfigResolver::new(&self.translator);
        let states = AdditionalConfigResolver::new(
            &self.translator,
            ValueResolver::new(&self.store, audit),
        );

        let mut resolved = Vec::with_capacity(elements.len());
        for (name, schema) in elements.iter() {
            let tag = match schema {
                Some(schema) => {
                    tags.resolve(&ctx, &schema.field_type, schema.widget_config.as_ref())?
                }
                None => TagResolution::default(),
            };
            let state = states.resolve(&ctx, name, schema, tag.edit_reload)?;
            resolved.push(ResolvedField {
                widget: tag.widget,
                state,
            });
        }

        let config_elements = ConditionEvaluator::new(&self.store, audit).evaluate(&ctx, resolved)?;

        Ok(Some(RenderPayload {
            config_elements,
            document_editable_name: request.editable_name.to_string(),
            window_size: ctx.window_size,
            document: document.clone(),
        }))
    }
}
