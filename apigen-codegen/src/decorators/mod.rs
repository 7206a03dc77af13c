//! Standard decorators.
//!
//! These give generated classes their members. Generators only decide the
//! shape and naming of the class tree and never add members themselves.

pub mod derive;
pub mod doc;
pub mod method;
pub mod property;
pub mod response;

pub use derive::DeriveDecorator;
pub use doc::DocDecorator;
pub use method::{MethodDecorator, ServiceFieldDecorator};
pub use property::PropertyDecorator;
pub use response::ResponseTraitDecorator;

use crate::config::GeneratorConfig;
use crate::decorator::{ResourceDecorator, SchemaDecorator};

/// Returns the standard schema decorators in invocation order.
#[must_use]
pub fn standard_schema_decorators(config: &GeneratorConfig) -> Vec<Box<dyn SchemaDecorator>> {
    vec![
        Box::new(DocDecorator),
        Box::new(DeriveDecorator::new(config.derive_list().to_vec())),
        Box::new(ResponseTraitDecorator::default()),
        Box::new(PropertyDecorator),
    ]
}

/// Returns the standard resource decorators in invocation order.
#[must_use]
pub fn standard_resource_decorators() -> Vec<Box<dyn ResourceDecorator>> {
    vec![Box::new(ServiceFieldDecorator), Box::new(MethodDecorator)]
}
