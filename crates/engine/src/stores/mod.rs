//! Ownership layer: the template registry and the instance store.

mod instances;
mod registry;

pub use instances::InstanceStore;
pub use registry::TemplateRegistry;
