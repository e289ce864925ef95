use serde::Serialize;

use crate::parser::lookups::Keyword;

/// `var`/`let`/`const` declaration of a single name.
///
/// A comma-separated declaration produces one of these per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarDeclStmt {
    pub variable_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_expression: Option<String>,
    pub declaration_kind: Keyword,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FnDeclStmt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_body_string: Option<String>,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStmt {
    pub return_expression: String,
}
