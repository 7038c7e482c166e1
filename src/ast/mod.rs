/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core node type, operator and visibility enums
/// - declarations: Payloads for declaration-side nodes
/// - expressions: Payloads for expression-side nodes
/// - printer: Structural dump for debugging
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod printer;
