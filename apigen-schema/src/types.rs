//! Schema type definitions.
//!
//! Schemas live in a [`SchemaArena`] and are addressed by [`SchemaId`]
//! handles. The handle is the schema's identity: two nodes allocated
//! separately are different schemas even when their contents are equal,
//! and every path that reaches the same node sees the same id. Cycles are
//! expressed by pointing a property back at an ancestor's id.

use std::fmt;

/// Identity handle of a schema node inside a [`SchemaArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(u32);

impl SchemaId {
    /// Returns the arena index of this id.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named property of an object schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Property name as it appears in the document.
    pub name: String,
    /// Schema of the property value.
    pub schema: SchemaId,
}

/// Shape of a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaKind {
    /// Any JSON value.
    #[default]
    Any,
    /// Boolean value.
    Boolean,
    /// Integer value.
    Integer,
    /// Floating point value.
    Number,
    /// String value.
    String,
    /// Array with an optional item schema.
    Array {
        /// Item schema.
        items: Option<SchemaId>,
    },
    /// Object with ordered properties.
    Object {
        /// Properties in declaration order.
        properties: Vec<Property>,
        /// Schema of values under undeclared keys.
        additional_properties: Option<SchemaId>,
    },
}

impl SchemaKind {
    /// Creates an empty object kind.
    #[must_use]
    pub const fn object() -> Self {
        Self::Object {
            properties: Vec::new(),
            additional_properties: None,
        }
    }

    /// Returns the JSON `type` keyword for this kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array { .. } => "array",
            Self::Object { .. } => "object",
        }
    }
}

/// A single schema node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaNode {
    /// Name for schemas declared at document top level (or carrying an id).
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Shape.
    pub kind: SchemaKind,
}

impl SchemaNode {
    /// Creates an anonymous node of the given kind.
    #[must_use]
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            name: None,
            description: None,
            kind,
        }
    }

    /// Creates a named node of the given kind.
    #[must_use]
    pub fn named(name: impl Into<String>, kind: SchemaKind) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            kind,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Owner of all schema nodes of one document.
#[derive(Debug, Clone, Default)]
pub struct SchemaArena {
    nodes: Vec<SchemaNode>,
}

impl SchemaArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a node and returns its identity.
    pub fn alloc(&mut self, node: SchemaNode) -> SchemaId {
        let id = SchemaId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Returns a borrowed view of a schema, or `None` if the id is foreign.
    #[must_use]
    pub fn get(&self, id: SchemaId) -> Option<SchemaRef<'_>> {
        if id.index() < self.nodes.len() {
            Some(SchemaRef { arena: self, id })
        } else {
            None
        }
    }

    /// Returns the node for an id.
    #[must_use]
    pub fn node(&self, id: SchemaId) -> Option<&SchemaNode> {
        self.nodes.get(id.index())
    }

    /// Returns the node for an id mutably.
    pub fn node_mut(&mut self, id: SchemaId) -> Option<&mut SchemaNode> {
        self.nodes.get_mut(id.index())
    }

    /// Appends a property to an object schema.
    ///
    /// Non-object owners are turned into objects first. Returns `false` if
    /// the owner id is foreign.
    pub fn add_property(&mut self, owner: SchemaId, name: impl Into<String>, child: SchemaId) -> bool {
        let Some(node) = self.nodes.get_mut(owner.index()) else {
            return false;
        };
        if !matches!(node.kind, SchemaKind::Object { .. }) {
            node.kind = SchemaKind::object();
        }
        if let SchemaKind::Object { properties, .. } = &mut node.kind {
            properties.push(Property {
                name: name.into(),
                schema: child,
            });
        }
        true
    }

    /// Sets the item schema of an array schema.
    ///
    /// Non-array owners are turned into arrays. Returns `false` if the owner
    /// id is foreign.
    pub fn set_items(&mut self, owner: SchemaId, child: SchemaId) -> bool {
        let Some(node) = self.nodes.get_mut(owner.index()) else {
            return false;
        };
        node.kind = SchemaKind::Array { items: Some(child) };
        true
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = SchemaId> + '_ {
        (0..self.nodes.len()).map(|i| SchemaId(i as u32))
    }
}

/// Borrowed view of one schema inside its arena.
///
/// Two views compare equal only when they address the same node of the
/// same arena.
#[derive(Clone, Copy)]
pub struct SchemaRef<'a> {
    arena: &'a SchemaArena,
    id: SchemaId,
}

impl<'a> SchemaRef<'a> {
    /// Returns the identity of this schema.
    #[must_use]
    pub const fn id(&self) -> SchemaId {
        self.id
    }

    /// Returns the owning arena.
    #[must_use]
    pub const fn arena(&self) -> &'a SchemaArena {
        self.arena
    }

    fn node(&self) -> &'a SchemaNode {
        // SchemaRef is only built by SchemaArena::get after a bounds check.
        &self.arena.nodes[self.id.index()]
    }

    /// Returns the schema name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.node().name.as_deref()
    }

    /// Returns the schema description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&'a str> {
        self.node().description.as_deref()
    }

    /// Returns the schema shape.
    #[must_use]
    pub fn kind(&self) -> &'a SchemaKind {
        &self.node().kind
    }

    /// Returns true for object schemas.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.kind(), SchemaKind::Object { .. })
    }

    /// Iterates over `(name, schema)` pairs of an object schema.
    pub fn properties(self) -> impl Iterator<Item = (&'a str, SchemaRef<'a>)> + 'a {
        let arena = self.arena;
        let properties: &'a [Property] = match self.kind() {
            SchemaKind::Object { properties, .. } => properties,
            _ => &[],
        };
        properties
            .iter()
            .filter_map(move |p| arena.get(p.schema).map(|s| (p.name.as_str(), s)))
    }

    /// Returns the item schema of an array schema.
    #[must_use]
    pub fn items(&self) -> Option<SchemaRef<'a>> {
        match self.kind() {
            SchemaKind::Array { items: Some(id) } => self.arena.get(*id),
            _ => None,
        }
    }

    /// Returns the schema of undeclared object values.
    #[must_use]
    pub fn additional_properties(&self) -> Option<SchemaRef<'a>> {
        match self.kind() {
            SchemaKind::Object {
                additional_properties: Some(id),
                ..
            } => self.arena.get(*id),
            _ => None,
        }
    }
}

impl PartialEq for SchemaRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for SchemaRef<'_> {}

impl fmt::Debug for SchemaRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("kind", &self.kind().type_name())
            .finish()
    }
}
