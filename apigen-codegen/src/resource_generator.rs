//! Resource class generation.
//!
//! One class per resource, named `<Resource><suffix>`, with one nested class
//! per sub-resource. Resources are a plain tree, so no identity tracking is
//! needed here.

use crate::config::GeneratorConfig;
use crate::decorator::{ResourceContext, ResourceDecorator};
use crate::dom::ClassDeclaration;
use crate::error::CodegenError;
use apigen_schema::Resource;
use apigen_schema::naming::class_name;

/// Generator for resource classes.
pub struct ResourceClassGenerator {
    service_name: String,
    decorators: Vec<Box<dyn ResourceDecorator>>,
    config: GeneratorConfig,
}

impl ResourceClassGenerator {
    /// Creates a generator with default configuration.
    #[must_use]
    pub fn new(service_name: impl Into<String>, decorators: Vec<Box<dyn ResourceDecorator>>) -> Self {
        Self::with_config(service_name, decorators, GeneratorConfig::default())
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(
        service_name: impl Into<String>,
        decorators: Vec<Box<dyn ResourceDecorator>>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            decorators,
            config,
        }
    }

    /// Returns the class name for a resource.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidArgument` if the name is unusable.
    pub fn class_name(&self, resource: &Resource) -> Result<String, CodegenError> {
        let base = class_name(&resource.name).ok_or_else(|| {
            CodegenError::invalid_argument(format!(
                "resource '{}' has no usable class name",
                resource.name
            ))
        })?;
        Ok(self.config.resource_class_name(&base))
    }

    /// Generates the class for a resource and all of its sub-resources.
    ///
    /// # Errors
    /// Returns `CodegenError` if a name is unusable or a decorator fails.
    pub fn create_class(&self, resource: &Resource) -> Result<ClassDeclaration, CodegenError> {
        self.create_class_at(resource, &resource.name)
    }

    fn create_class_at(&self, resource: &Resource, path: &str) -> Result<ClassDeclaration, CodegenError> {
        let mut class = ClassDeclaration::new(self.class_name(resource)?);
        let context = ResourceContext {
            service_name: &self.service_name,
            path,
        };

        for decorator in &self.decorators {
            decorator.decorate_class(&mut class, resource, context)?;
        }

        for sub in &resource.resources {
            let sub_path = format!("{}.{}", path, sub.name);
            class.add_nested(self.create_class_at(sub, &sub_path)?);
        }

        tracing::debug!(
            "Generated resource class {} with {} sub-resources",
            class.name,
            resource.resources.len()
        );
        Ok(class)
    }
}
