//! Class declaration model.
//!
//! Generators build a tree of [`ClassDeclaration`]s; decorators fill in their
//! members. The tree says nothing about concrete syntax, which is left to a
//! printer.

use std::fmt;

/// Reference to a type by name, with optional type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeReference {
    /// Base type name.
    pub base_type: String,
    /// Generic arguments.
    pub type_arguments: Vec<TypeReference>,
}

impl TypeReference {
    /// Creates a non-generic type reference.
    #[must_use]
    pub fn new(base_type: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Creates a generic type reference.
    #[must_use]
    pub fn generic(base_type: impl Into<String>, type_arguments: Vec<TypeReference>) -> Self {
        Self {
            base_type: base_type.into(),
            type_arguments,
        }
    }

    /// Returns the base type name.
    #[must_use]
    pub fn base_type(&self) -> &str {
        &self.base_type
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_type)?;
        if self.type_arguments.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (i, arg) in self.type_arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(">")
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Visible outside the declaring scope.
    #[default]
    Public,
    /// Visible only inside the declaring scope.
    Private,
}

/// Field member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Member name.
    pub name: String,
    /// Field type.
    pub ty: TypeReference,
    /// Name on the wire, when it differs from the member name.
    pub serialized_name: Option<String>,
    /// Doc comment.
    pub doc: Option<String>,
}

impl FieldDecl {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
            serialized_name: None,
            doc: None,
        }
    }
}

/// Method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeReference,
}

/// Method member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Member name.
    pub name: String,
    /// Parameters after the receiver.
    pub parameters: Vec<ParameterDecl>,
    /// Return type, `None` for unit.
    pub return_type: Option<TypeReference>,
    /// Body lines.
    pub body: Vec<String>,
    /// Doc comment.
    pub doc: Option<String>,
}

impl MethodDecl {
    /// Creates a method with no parameters and an empty body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
            body: Vec::new(),
            doc: None,
        }
    }
}

/// Member of a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// Field.
    Field(FieldDecl),
    /// Method.
    Method(MethodDecl),
    /// Nested type declaration.
    NestedType(ClassDeclaration),
}

impl Member {
    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => &f.name,
            Self::Method(m) => &m.name,
            Self::NestedType(c) => &c.name,
        }
    }
}

/// A named, mutable container of members.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDeclaration {
    /// Class name.
    pub name: String,
    /// Doc comment.
    pub doc: Option<String>,
    /// Visibility.
    pub visibility: Visibility,
    /// Outer attributes, without the `#[...]` wrapper.
    pub attributes: Vec<String>,
    /// Implemented interfaces / traits.
    pub base_types: Vec<TypeReference>,
    /// Members in insertion order.
    pub members: Vec<Member>,
}

impl ClassDeclaration {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends an outer attribute such as `derive(Debug)`.
    pub fn add_attribute(&mut self, attribute: impl Into<String>) {
        self.attributes.push(attribute.into());
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: FieldDecl) {
        self.members.push(Member::Field(field));
    }

    /// Appends a method.
    pub fn add_method(&mut self, method: MethodDecl) {
        self.members.push(Member::Method(method));
    }

    /// Appends a nested declaration.
    pub fn add_nested(&mut self, nested: ClassDeclaration) {
        self.members.push(Member::NestedType(nested));
    }

    /// Iterates over field members.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }

    /// Iterates over method members.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Iterates over nested declarations.
    pub fn nested_types(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::NestedType(c) => Some(c),
            _ => None,
        })
    }

    /// Finds a field by member name.
    #[must_use]
    pub fn find_field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields().find(|f| f.name == name)
    }

    /// Finds a direct nested declaration by name.
    #[must_use]
    pub fn find_nested(&self, name: &str) -> Option<&ClassDeclaration> {
        self.nested_types().find(|c| c.name == name)
    }

    /// Returns true if a member with the given name exists.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name() == name)
    }

    /// Counts this declaration and all nested declarations.
    #[must_use]
    pub fn count_declarations(&self) -> usize {
        1 + self
            .nested_types()
            .map(ClassDeclaration::count_declarations)
            .sum::<usize>()
    }
}
