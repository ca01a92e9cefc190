//! Short names for the `graphql_parser` schema AST.
//!
//! The emitter only ever holds fully-owned documents, so every alias is
//! specialized to `<'static, String>`.

pub use graphql_parser::schema::ParseError;

pub type Definition = graphql_parser::schema::Definition<'static, String>;
pub type Document = graphql_parser::schema::Document<'static, String>;
pub type EnumType = graphql_parser::schema::EnumType<'static, String>;
pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
pub type Field = graphql_parser::schema::Field<'static, String>;
pub type InputObjectType = graphql_parser::schema::InputObjectType<'static, String>;
pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
pub type InterfaceType = graphql_parser::schema::InterfaceType<'static, String>;
pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
pub type Type = graphql_parser::schema::Type<'static, String>;
pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
