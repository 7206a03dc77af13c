//! Generator configuration.

/// Naming and output settings shared by every generator of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    nested_class_prefix: String,
    resource_suffix: String,
    derives: Vec<String>,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nested_class_prefix: "NestedClass".to_string(),
            resource_suffix: "Resource".to_string(),
            derives: ["Debug", "Clone", "Serialize", "Deserialize"]
                .iter()
                .map(|d| (*d).to_string())
                .collect(),
        }
    }

    /// Sets the prefix of generated nested class names.
    #[must_use]
    pub fn nested_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.nested_class_prefix = prefix.into();
        self
    }

    /// Sets the suffix appended to resource class names.
    #[must_use]
    pub fn resource_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.resource_suffix = suffix.into();
        self
    }

    /// Sets the derives emitted by the printer.
    #[must_use]
    pub fn derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the nested class name for a uniquefier and sequence number.
    #[must_use]
    pub fn nested_class_name(&self, uniquefier: &str, number: usize) -> String {
        format!("{}{}{}", self.nested_class_prefix, uniquefier, number)
    }

    /// Returns the resource class name for an already-cased base name.
    #[must_use]
    pub fn resource_class_name(&self, base: &str) -> String {
        format!("{}{}", base, self.resource_suffix)
    }

    /// Returns the derives emitted by the printer.
    #[must_use]
    pub fn derive_list(&self) -> &[String] {
        &self.derives
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
