use thiserror::Error;

/// Errors surfaced while emitting resolver type declarations for a schema
/// document.
#[derive(Debug, Error, PartialEq)]
pub enum EmitError {
    #[error(
        "No TypeScript resolver-type encoding exists for the {kind}{} found \
        in this schema document.",
        name.as_ref().map(|name| format!(" `{name}`")).unwrap_or_default(),
    )]
    UnsupportedDefinition {
        kind: String,
        name: Option<String>,
    },
}
