use super::ast::{Node, Visibility};

/// Root
/// The whole source unit: its top-level declarations in source order.
#[derive(Debug)]
pub struct Root {
    pub top_level_decls: Vec<Node>,
}

/// Root Export Declaration
/// `export <category> "<name>";` at file scope, e.g.
/// `export executable "hello";`.
#[derive(Debug)]
pub struct RootExportDecl {
    pub export_type: String,
    pub name: String,
    pub directives: Vec<Node>,
}

/// Use Declaration
/// `use "<path>";` pulling another source unit into scope.
#[derive(Debug)]
pub struct UseDecl {
    pub path: String,
    pub directives: Vec<Node>,
}

/// Extern Block
/// `extern { ... }` grouping foreign function prototypes.
#[derive(Debug)]
pub struct ExternBlock {
    pub directives: Vec<Node>,
    pub fn_decls: Vec<Node>,
}

/// Function Declaration
/// A bodiless prototype terminated by `;`, legal only inside extern
/// blocks.
#[derive(Debug)]
pub struct FnDecl {
    pub fn_proto: Box<Node>,
}

/// Function Definition
/// A prototype together with its block body.
#[derive(Debug)]
pub struct FnDef {
    pub fn_proto: Box<Node>,
    pub body: Box<Node>,
}

/// Function Prototype
/// The signature shared by declarations and definitions. A missing
/// `-> Type` is represented by a synthesized `void` primitive type.
#[derive(Debug)]
pub struct FnProto {
    pub visibility: Visibility,
    pub name: String,
    pub params: Vec<Node>,
    pub return_type: Box<Node>,
    pub directives: Vec<Node>,
}

/// Parameter Declaration
/// `name: Type` inside a prototype's parameter list.
#[derive(Debug)]
pub struct ParamDecl {
    pub name: String,
    pub param_type: Box<Node>,
}

/// A type expression: a named primitive or a `*const`/`*mut` pointer.
#[derive(Debug)]
pub enum TypeNode {
    Primitive { name: String },
    Pointer { is_const: bool, child_type: Box<Node> },
}

/// Block
/// `{ ... }`: a sequence of expression statements.
#[derive(Debug)]
pub struct Block {
    pub statements: Vec<Node>,
}

/// Directive
/// `#name("param")`, attached to the declaration that follows it.
#[derive(Debug)]
pub struct Directive {
    pub name: String,
    pub param: String,
}
