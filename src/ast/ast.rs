use indexmap::IndexMap;
use serde::Serialize;

use super::{
    bindings::{FunctionBinding, VariableBinding},
    statements::{FnDeclStmt, ReturnStmt, VarDeclStmt},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Stmt {
    #[serde(rename = "variable-declaration")]
    VarDecl(VarDeclStmt),
    #[serde(rename = "function-declaration")]
    FnDecl(FnDeclStmt),
    #[serde(rename = "return")]
    Return(ReturnStmt),
}

impl Stmt {
    /// Absolute `[start, end)` of the statement, if it records one.
    pub fn get_span(&self) -> Option<(usize, usize)> {
        match self {
            Stmt::VarDecl(stmt) => Some((stmt.start, stmt.end)),
            Stmt::FnDecl(stmt) => Some((stmt.start, stmt.end)),
            Stmt::Return(_) => None,
        }
    }

    /// Name the statement declares.
    pub fn get_name(&self) -> Option<&str> {
        match self {
            Stmt::VarDecl(stmt) => Some(&stmt.variable_name),
            Stmt::FnDecl(stmt) => stmt.function_name.as_deref(),
            Stmt::Return(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Binding {
    Variable(VariableBinding),
    Function(FunctionBinding),
}

/// Bindings of one fragment, keyed by identifier in first-declaration order.
/// Redeclaring a name overwrites its entry in place.
pub type Context = IndexMap<String, Binding>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub context: Context,
    pub statements: Vec<Stmt>,
}

impl ParseResult {
    pub fn get_binding(&self, name: &str) -> Option<&Binding> {
        self.context.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty() && self.statements.is_empty()
    }
}
