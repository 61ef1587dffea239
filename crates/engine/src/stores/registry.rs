//! Template registry.
//!
//! The registry exclusively owns registered templates. It is append-only
//! for the lifetime of the process: no update, no unregister. Instances
//! hold template ids, never pointers, so the registry never hands out
//! mutable access.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scenecast_domain::validation::validate_template;
use scenecast_domain::{DomainError, Template};

#[derive(Default)]
struct RegistryInner {
    by_id: HashMap<String, Arc<Template>>,
    /// Insertion order, for stable listing.
    order: Vec<String>,
}

/// Owner of all registered templates.
///
/// Registration is the only writer; lookups may run concurrently. There is
/// no cross-map coordination with the instance store because instances
/// only ever read their template.
#[derive(Default)]
pub struct TemplateRegistry {
    inner: RwLock<RegistryInner>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// Fails with `DuplicateTemplate` if the id is already taken (payload
    /// equality is irrelevant), then with `TemplateValidation` if the
    /// definition is malformed. Nothing is stored on failure.
    pub fn register(&self, template: Template) -> Result<(), DomainError> {
        let mut inner = self.write();
        if inner.by_id.contains_key(&template.id) {
            return Err(DomainError::duplicate_template(&template.id));
        }
        validate_template(&template)?;

        tracing::info!(template_id = %template.id, "registered template");
        inner.order.push(template.id.clone());
        inner.by_id.insert(template.id.clone(), Arc::new(template));
        Ok(())
    }

    /// Look up a registered template.
    pub fn get(&self, id: &str) -> Result<Arc<Template>, DomainError> {
        self.read()
            .by_id
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::template_not_found(id))
    }

    pub fn has(&self, id: &str) -> bool {
        self.read().by_id.contains_key(id)
    }

    /// Registered template ids in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.read().order.clone()
    }

    // Lock poisoning only happens if a holder panicked mid-operation; the
    // maps stay structurally sound, so recover the guard instead of
    // propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::find_the_key;

    #[test]
    fn test_register_then_get() {
        let registry = TemplateRegistry::new();
        registry.register(find_the_key()).expect("registers");

        let template = registry.get("find-the-key").expect("found");
        assert_eq!(template.name, "Find the Key");
        assert!(registry.has("find-the-key"));
    }

    #[test]
    fn test_duplicate_id_rejected_even_with_identical_payload() {
        let registry = TemplateRegistry::new();
        registry.register(find_the_key()).expect("first registers");

        let err = registry
            .register(find_the_key())
            .expect_err("second rejected");
        assert_eq!(err.code(), "DUPLICATE_TEMPLATE");
    }

    #[test]
    fn test_invalid_template_not_stored() {
        let registry = TemplateRegistry::new();
        let mut template = find_the_key();
        template.metadata.min_participants = 0;

        let err = registry.register(template).expect_err("rejected");
        assert_eq!(err.code(), "TEMPLATE_VALIDATION_FAILED");
        assert!(!registry.has("find-the-key"));
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_unknown_id_fails_lookup() {
        let registry = TemplateRegistry::new();
        let err = registry.get("nope").expect_err("missing");
        assert_eq!(err.code(), "TEMPLATE_NOT_FOUND");
        assert!(!registry.has("nope"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = TemplateRegistry::new();
        let mut second = find_the_key();
        second.id = "find-the-key-hard".to_string();
        let mut third = find_the_key();
        third.id = "find-the-key-easy".to_string();

        registry.register(find_the_key()).expect("registers");
        registry.register(second).expect("registers");
        registry.register(third).expect("registers");

        assert_eq!(
            registry.list(),
            vec!["find-the-key", "find-the-key-hard", "find-the-key-easy"]
        );
    }
}
