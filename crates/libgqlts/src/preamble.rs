//! The fixed helper types that preface every generated file.

pub(crate) const ARRAY_OR_VALUE_DECL: &str =
    "export type ArrayOrValue<TValue> = Array<TValue> | TValue;";

pub(crate) const FIELD_DECL: &str =
    "export type Field<TResult> = TResult | Promise<TResult> | Resolve<TResult>;";

pub(crate) const MAYBE_DECL: &str =
    "export type Maybe<TValue> = TValue | undefined;";

/// Render the four helper declarations in their fixed order. The only
/// substitution point is the context type threaded through `Resolve`'s
/// second parameter.
pub(crate) fn render(context_type: &str) -> String {
    format!(
        "{ARRAY_OR_VALUE_DECL}\n\
        export type Resolve<TResult, TArgs = {{}}> = \
        (args?: TArgs, context?: {context_type}) => \
        TResult | Promise<TResult>;\n\
        {FIELD_DECL}\n\
        {MAYBE_DECL}\n"
    )
}
