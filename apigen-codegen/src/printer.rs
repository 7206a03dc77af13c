//! Rust source printer for class declaration trees.
//!
//! A class becomes a struct. Its nested classes go into a module named after
//! the class that directly follows the struct, so generated names only need
//! to be unique per nesting level.

use crate::dom::{ClassDeclaration, FieldDecl, MethodDecl, TypeReference, Visibility};
use apigen_schema::naming::module_name;
use std::collections::HashSet;

const INDENT: &str = "    ";

/// Printer producing Rust source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustPrinter;

impl RustPrinter {
    /// Creates a new printer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Prints a class and all of its nested classes.
    #[must_use]
    pub fn print(&self, class: &ClassDeclaration) -> String {
        let mut output = String::new();
        self.print_class(&mut output, class, 0);
        output
    }

    /// Prints several top-level classes.
    #[must_use]
    pub fn print_all(&self, classes: &[ClassDeclaration]) -> String {
        classes.iter().map(|c| self.print(c)).collect()
    }

    fn print_class(&self, output: &mut String, class: &ClassDeclaration, depth: usize) {
        let indent = INDENT.repeat(depth);
        let module = module_name(&class.name);
        let nested_names: HashSet<&str> = class.nested_types().map(|c| c.name.as_str()).collect();
        let qualify = |ty: &TypeReference| qualified(ty, &module, &nested_names);
        let vis = match class.visibility {
            Visibility::Public => "pub ",
            Visibility::Private => "",
        };

        print_doc(output, &indent, class.doc.as_deref());
        for attribute in &class.attributes {
            output.push_str(&format!("{}#[{}]\n", indent, attribute));
        }

        let fields: Vec<&FieldDecl> = class.fields().collect();
        if fields.is_empty() {
            output.push_str(&format!("{}{}struct {} {{}}\n\n", indent, vis, class.name));
        } else {
            output.push_str(&format!("{}{}struct {} {{\n", indent, vis, class.name));
            for field in fields {
                let field_indent = format!("{}{}", indent, INDENT);
                print_doc(output, &field_indent, field.doc.as_deref());
                if let Some(serialized) = &field.serialized_name {
                    output.push_str(&format!(
                        "{}#[serde(rename = {:?})]\n",
                        field_indent, serialized
                    ));
                }
                output.push_str(&format!(
                    "{}pub {}: {},\n",
                    field_indent,
                    field.name,
                    qualify(&field.ty)
                ));
            }
            output.push_str(&format!("{}}}\n\n", indent));
        }

        let methods: Vec<&MethodDecl> = class.methods().collect();
        if !methods.is_empty() {
            output.push_str(&format!("{}impl {} {{\n", indent, class.name));
            for (i, method) in methods.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                }
                self.print_method(output, method, &format!("{}{}", indent, INDENT), &qualify);
            }
            output.push_str(&format!("{}}}\n\n", indent));
        }

        for base in &class.base_types {
            output.push_str(&format!("{}impl {} for {} {{}}\n\n", indent, base, class.name));
        }

        if !nested_names.is_empty() {
            output.push_str(&format!(
                "{}/// Nested types of [`{}`].\n",
                indent, class.name
            ));
            output.push_str(&format!("{}pub mod {} {{\n", indent, module));
            output.push_str(&format!("{}{}use super::*;\n\n", indent, INDENT));
            for nested in class.nested_types() {
                self.print_class(output, nested, depth + 1);
            }
            output.push_str(&format!("{}}}\n\n", indent));
        }
    }

    fn print_method(
        &self,
        output: &mut String,
        method: &MethodDecl,
        indent: &str,
        qualify: &dyn Fn(&TypeReference) -> String,
    ) {
        print_doc(output, indent, method.doc.as_deref());

        let mut signature = String::from("&self");
        for parameter in &method.parameters {
            signature.push_str(&format!(", {}: {}", parameter.name, qualify(&parameter.ty)));
        }
        let ret = match &method.return_type {
            Some(ty) => format!(" -> {}", qualify(ty)),
            None => String::new(),
        };

        output.push_str(&format!(
            "{}pub fn {}({}){} {{\n",
            indent, method.name, signature, ret
        ));
        for line in &method.body {
            output.push_str(&format!("{}{}{}\n", indent, INDENT, line));
        }
        output.push_str(&format!("{}}}\n", indent));
    }
}

/// Renders a type, prefixing direct nested class names with their module.
fn qualified(ty: &TypeReference, module: &str, nested: &HashSet<&str>) -> String {
    let mut out = if nested.contains(ty.base_type()) {
        format!("{}::{}", module, ty.base_type())
    } else {
        ty.base_type().to_string()
    };
    if !ty.type_arguments.is_empty() {
        let args: Vec<String> = ty
            .type_arguments
            .iter()
            .map(|arg| qualified(arg, module, nested))
            .collect();
        out.push('<');
        out.push_str(&args.join(", "));
        out.push('>');
    }
    out
}

fn print_doc(output: &mut String, indent: &str, doc: Option<&str>) {
    let Some(doc) = doc else {
        return;
    };
    for line in doc.lines() {
        if line.trim().is_empty() {
            output.push_str(&format!("{}///\n", indent));
        } else {
            output.push_str(&format!("{}/// {}\n", indent, line.trim_end()));
        }
    }
}
