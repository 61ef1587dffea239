//! Engine facade: the public operations over registry, instance store,
//! merger, and renderer.
//!
//! All operations are synchronous and CPU-bound. A fresh engine owns two
//! empty maps and nothing else; there is no process-wide state.

use std::sync::Arc;

use scenecast_domain::validation::{self, require_non_blank};
use scenecast_domain::{DomainError, Instance, InstanceId, InstanceOverrides, Template};

use crate::render::render;
use crate::resolve::resolve;
use crate::stores::{InstanceStore, TemplateRegistry};

/// The script engine.
///
/// Composes the template registry, the instance store, the overlay merge,
/// and the renderer. Overrides are stored raw at creation time and merged
/// lazily on every script generation, so an instance never carries a
/// stale copy of its template.
#[derive(Default)]
pub struct ScriptEngine {
    registry: TemplateRegistry,
    instances: InstanceStore,
}

impl ScriptEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template definition.
    ///
    /// The registry is append-only: a given id can be registered once per
    /// process, and registered templates are never mutated.
    pub fn register_template(&self, template: Template) -> Result<(), DomainError> {
        self.registry.register(template)
    }

    /// Fetch a registered template by id.
    pub fn get_template(&self, template_id: &str) -> Result<Arc<Template>, DomainError> {
        require_non_blank(template_id, "template id")?;
        self.registry.get(template_id)
    }

    pub fn has_template(&self, template_id: &str) -> bool {
        self.registry.has(template_id)
    }

    /// Registered template ids, in registration order.
    pub fn available_templates(&self) -> Vec<String> {
        self.registry.list()
    }

    /// Create an instance of a registered template.
    ///
    /// The override payload is validated against the template, then stored
    /// raw; merging happens at render time.
    pub fn create_instance(
        &self,
        template_id: &str,
        overrides: InstanceOverrides,
    ) -> Result<Instance, DomainError> {
        require_non_blank(template_id, "template id")?;
        let template = self.registry.get(template_id)?;
        validation::validate_customizations(&template, &overrides)?;

        let instance = Instance::new(template_id, overrides);
        tracing::info!(
            template_id = %template_id,
            instance_id = %instance.id,
            "created instance"
        );
        self.instances.insert(instance.clone());
        Ok(instance)
    }

    /// Non-failing customization check.
    ///
    /// Returns `Ok(false)` when the payload violates the template's
    /// constraints and `Ok(true)` when it would be accepted. Unlike a
    /// blanket catch-all, unrelated failures (blank id, unknown template)
    /// still propagate as errors instead of masquerading as a validation
    /// verdict.
    pub fn validate_customizations(
        &self,
        template_id: &str,
        overrides: &InstanceOverrides,
    ) -> Result<bool, DomainError> {
        require_non_blank(template_id, "template id")?;
        let template = self.registry.get(template_id)?;
        match validation::validate_customizations(&template, overrides) {
            Ok(()) => Ok(true),
            Err(DomainError::CustomizationValidation { issues, .. }) => {
                tracing::debug!(
                    template_id = %template_id,
                    issue_count = issues.len(),
                    "customizations rejected"
                );
                Ok(false)
            }
            Err(other) => Err(other),
        }
    }

    /// Generate the script text for an instance.
    ///
    /// Resolves the instance's template and overrides into a merged view,
    /// then renders it. Two calls on an unmodified instance yield
    /// byte-identical output. If the instance's template is gone from the
    /// registry, the dangling reference surfaces as a script generation
    /// failure rather than a silent stale render.
    pub fn generate_script(&self, instance_id: &str) -> Result<String, DomainError> {
        require_non_blank(instance_id, "instance id")?;
        let instance = self.lookup_instance(instance_id)?;

        let template = self.registry.get(&instance.template_id).map_err(|_| {
            DomainError::script_generation(
                instance_id,
                format!(
                    "template `{}` is no longer registered",
                    instance.template_id
                ),
            )
        })?;

        let resolved = resolve(&template, &instance.overrides);
        Ok(render(&resolved))
    }

    /// Fetch a created instance by id.
    pub fn get_instance(&self, instance_id: &str) -> Result<Instance, DomainError> {
        require_non_blank(instance_id, "instance id")?;
        self.lookup_instance(instance_id)
    }

    /// Delete an instance; returns whether it existed.
    pub fn delete_instance(&self, instance_id: &str) -> Result<bool, DomainError> {
        require_non_blank(instance_id, "instance id")?;
        let Ok(id) = InstanceId::parse_str(instance_id) else {
            return Ok(false);
        };
        let deleted = self.instances.remove(id);
        if deleted {
            tracing::info!(instance_id = %instance_id, "deleted instance");
        }
        Ok(deleted)
    }

    /// Created instance ids, in creation order.
    pub fn available_instances(&self) -> Vec<String> {
        self.instances
            .list()
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    // Instance ids are opaque strings externally; anything that does not
    // parse back to an id was never issued by this store.
    fn lookup_instance(&self, instance_id: &str) -> Result<Instance, DomainError> {
        InstanceId::parse_str(instance_id)
            .ok()
            .and_then(|id| self.instances.get(id))
            .ok_or_else(|| DomainError::instance_not_found(instance_id))
    }
}
