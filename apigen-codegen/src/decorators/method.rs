//! Resource decorators.

use crate::decorator::{ResourceContext, ResourceDecorator};
use crate::dom::{ClassDeclaration, FieldDecl, MethodDecl, TypeReference};
use crate::error::DecoratorError;
use apigen_schema::Resource;
use apigen_schema::naming::{class_name, member_name};

/// Adds the `service` handle field used by generated methods.
pub struct ServiceFieldDecorator;

impl ResourceDecorator for ServiceFieldDecorator {
    fn name(&self) -> &str {
        "ServiceFieldDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        _resource: &Resource,
        context: ResourceContext<'_>,
    ) -> Result<(), DecoratorError> {
        let service = class_name(context.service_name).ok_or_else(|| {
            DecoratorError::new(
                self.name(),
                &class.name,
                format!("service '{}' has no usable type name", context.service_name),
            )
        })?;
        let mut field = FieldDecl::new(
            "service",
            TypeReference::generic(
                "std::sync::Arc",
                vec![TypeReference::new(format!("{}Service", service))],
            ),
        );
        field.doc = Some(format!("Service handle for `{}`.", context.path));
        class.add_field(field);
        Ok(())
    }
}

/// Adds one method per resource method.
pub struct MethodDecorator;

impl ResourceDecorator for MethodDecorator {
    fn name(&self) -> &str {
        "MethodDecorator"
    }

    fn decorate_class(
        &self,
        class: &mut ClassDeclaration,
        resource: &Resource,
        context: ResourceContext<'_>,
    ) -> Result<(), DecoratorError> {
        for method in &resource.methods {
            let name = member_name(&method.name);
            if class.has_member(&name) {
                return Err(DecoratorError::new(
                    self.name(),
                    &class.name,
                    format!("method '{}' clashes with an existing member", method.name),
                ));
            }

            let response = match &method.response {
                Some(response) => Some(class_name(response).ok_or_else(|| {
                    DecoratorError::new(
                        self.name(),
                        &class.name,
                        format!("response '{}' has no usable class name", response),
                    )
                })?),
                None => None,
            };

            let mut decl = MethodDecl::new(name);
            decl.doc = Some(format!(
                "`{} {}` ({}.{}).",
                method.http_method, method.path, context.path, method.name
            ));
            decl.return_type = Some(TypeReference::generic(
                "Request",
                vec![TypeReference::new(response.as_deref().unwrap_or("()"))],
            ));
            decl.body.push(format!(
                "self.service.request({:?}, {:?})",
                method.http_method, method.path
            ));
            class.add_method(decl);
        }
        Ok(())
    }
}
