//! Resource tree definitions.
//!
//! A resource groups the methods of an API surface and may contain
//! sub-resources, mirroring the `resources` section of a document.

/// A method exposed by a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMethod {
    /// Method name.
    pub name: String,
    /// HTTP verb.
    pub http_method: String,
    /// Path relative to the service root.
    pub path: String,
    /// Name of the top-level response schema.
    pub response: Option<String>,
}

impl ResourceMethod {
    /// Creates a new method.
    #[must_use]
    pub fn new(name: impl Into<String>, http_method: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            http_method: http_method.into(),
            path: String::new(),
            response: None,
        }
    }

    /// Sets the path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the response schema name.
    #[must_use]
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }
}

/// A resource with its methods and sub-resources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resource {
    /// Resource name.
    pub name: String,
    /// Methods in document order.
    pub methods: Vec<ResourceMethod>,
    /// Sub-resources in document order.
    pub resources: Vec<Resource>,
}

impl Resource {
    /// Creates an empty resource.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Adds a method.
    pub fn add_method(&mut self, method: ResourceMethod) {
        self.methods.push(method);
    }

    /// Adds a sub-resource.
    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    /// Returns true if the resource has sub-resources.
    #[must_use]
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    /// Visits this resource and all descendants depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Resource)) {
        visit(self);
        for sub in &self.resources {
            sub.walk(visit);
        }
    }
}
