use serde::Serialize;

use super::ast::ParseResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableBinding {
    pub variable_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_expression: Option<String>,
}

/// A named function together with the parse of its body.
///
/// `parsed` is only present when a body was read, and it is owned here
/// exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionBinding {
    pub function_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_body_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Box<ParseResult>>,
}
