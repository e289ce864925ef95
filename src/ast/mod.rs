/// Syntax model module
/// Contains everything a parse produces
///
/// Submodules:
/// - ast: The parse result and the closed statement/binding variants
/// - statements: Records for each recognized statement kind
/// - bindings: Latest-declaration records keyed by identifier
pub mod ast;
pub mod bindings;
pub mod statements;
