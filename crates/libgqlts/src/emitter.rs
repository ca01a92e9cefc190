use crate::ast;
use crate::emit_error::EmitError;
use crate::preamble;

type Result<T> = std::result::Result<T, EmitError>;

/// Emits TypeScript resolver type declarations for a parsed GraphQL schema
/// document.
///
/// Emission is a pure function of the document plus two caller-supplied
/// strings: the name of the TypeScript type threaded through every
/// resolver's `context` parameter, and a verbatim header (typically the
/// import statement that brings that context type into scope). Every
/// generated file starts with the header, then a fixed preamble of helper
/// types, then one declaration block per definition in document order.
#[derive(Clone, Debug)]
pub struct TypeEmitter {
    context_type: String,
    header: String,
}

impl TypeEmitter {
    pub fn new(
        context_type: impl Into<String>,
        header: impl Into<String>,
    ) -> Self {
        Self {
            context_type: context_type.into(),
            header: header.into(),
        }
    }

    /// Generate declarations for every definition in `document`.
    ///
    /// Fails on the first definition that is not an object, interface,
    /// input-object, or enum type; nothing is emitted for a document the
    /// emitter cannot fully encode.
    pub fn emit(&self, document: &ast::Document) -> Result<String> {
        let mut output = String::new();
        output.push_str(&self.header);
        output.push('\n');
        output.push_str(&preamble::render(&self.context_type));

        for def in &document.definitions {
            output.push_str(&emit_definition(def)?);
            output.push('\n');
        }

        Ok(output)
    }
}

fn emit_definition(def: &ast::Definition) -> Result<String> {
    match def {
        ast::Definition::TypeDefinition(type_def) =>
            emit_type_definition(type_def),

        ast::Definition::SchemaDefinition(_) =>
            Err(unsupported("schema definition", None)),

        ast::Definition::TypeExtension(_) =>
            Err(unsupported("type extension", None)),

        ast::Definition::DirectiveDefinition(directive_def) =>
            Err(unsupported(
                "directive definition",
                Some(directive_def.name.to_owned()),
            )),
    }
}

fn emit_type_definition(type_def: &ast::TypeDefinition) -> Result<String> {
    match type_def {
        ast::TypeDefinition::Object(obj_def) =>
            Ok(emit_record_type(
                &obj_def.name,
                obj_def.fields.iter().map(emit_field),
            )),

        ast::TypeDefinition::Interface(iface_def) =>
            Ok(emit_record_type(
                &iface_def.name,
                iface_def.fields.iter().map(emit_field),
            )),

        ast::TypeDefinition::InputObject(inputobj_def) =>
            Ok(emit_record_type(
                &inputobj_def.name,
                inputobj_def.fields.iter().map(emit_input_field),
            )),

        ast::TypeDefinition::Enum(enum_def) =>
            Ok(emit_enum_type(enum_def)),

        ast::TypeDefinition::Scalar(scalar_def) =>
            Err(unsupported(
                "scalar type definition",
                Some(scalar_def.name.to_owned()),
            )),

        ast::TypeDefinition::Union(union_def) =>
            Err(unsupported(
                "union type definition",
                Some(union_def.name.to_owned()),
            )),
    }
}

/// Object, interface, and input-object definitions all become the same
/// structural record declaration; interface-implementation semantics are
/// not modeled.
fn emit_record_type(
    name: &str,
    field_lines: impl Iterator<Item = String>,
) -> String {
    let mut decl = format!("export interface {name} {{\n");
    for line in field_lines {
        decl.push('\t');
        decl.push_str(&line);
        decl.push('\n');
    }
    decl.push_str("}\n");
    decl
}

/// An enum becomes a union of quoted value literals, in declared order.
pub(crate) fn emit_enum_type(enum_def: &ast::EnumType) -> String {
    let values = enum_def.values.iter()
        .map(|value| format!("'{}'", value.name))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("export type {} = {values};\n", enum_def.name)
}

/// Render one output field of an object or interface type.
///
/// An argument-less field accepts a literal value in addition to a resolver
/// function, so it gets the `Field<T>` encoding. A field with arguments
/// must be a function and gets `Resolve<T, TArgs>` with an inline arguments
/// record.
pub(crate) fn emit_field(field: &ast::Field) -> String {
    let field_type = resolve_type(&field.field_type);
    let field_optional = optional_marker(&field.field_type);

    if field.arguments.is_empty() {
        return format!("{}{field_optional}: Field<{field_type}>;", field.name);
    }

    let args = field.arguments.iter()
        .map(emit_argument)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}{field_optional}: Resolve<{field_type}, {{{args}}}>;",
        field.name,
    )
}

/// Input object fields must be supplied as literal data, so they are plain
/// data members rather than `Field<...>`/`Resolve<...>` wrappers.
pub(crate) fn emit_input_field(field: &ast::InputValue) -> String {
    format!(
        "{}{}: {};",
        field.name,
        optional_marker(&field.value_type),
        resolve_type(&field.value_type),
    )
}

fn emit_argument(argument: &ast::InputValue) -> String {
    format!(
        "{}{}: {}",
        argument.name,
        optional_marker(&argument.value_type),
        resolve_bare_type(&argument.value_type),
    )
}

fn optional_marker(annotated_type: &ast::Type) -> &'static str {
    if matches!(annotated_type, ast::Type::NonNullType(_)) {
        ""
    } else {
        "?"
    }
}

/// Encode a type reference with its nullability: a non-null wrapper strips
/// away, anything else is wrapped in `Maybe<T>`.
pub(crate) fn resolve_type(annotated_type: &ast::Type) -> String {
    match annotated_type {
        ast::Type::NonNullType(inner) => resolve_bare_type(inner),
        nullable => format!("Maybe<{}>", resolve_bare_type(nullable)),
    }
}

/// Encode a type reference assuming any non-null wrapper has already been
/// stripped.
pub(crate) fn resolve_bare_type(annotated_type: &ast::Type) -> String {
    match annotated_type {
        ast::Type::NamedType(name) =>
            resolve_named_type(name).to_owned(),

        ast::Type::ListType(inner) =>
            format!("ArrayOrValue<{}>", resolve_type(inner)),

        // The parser never produces non-null wrapped in non-null, but
        // unwrap anyway rather than mis-encode one.
        ast::Type::NonNullType(inner) =>
            resolve_bare_type(inner),
    }
}

fn resolve_named_type(name: &str) -> &str {
    match name {
        "ID" | "String" => "string",
        "Float" | "Int" => "number",
        "Boolean" => "boolean",
        other => other,
    }
}

fn unsupported(kind: &str, name: Option<String>) -> EmitError {
    EmitError::UnsupportedDefinition {
        kind: kind.to_owned(),
        name,
    }
}
