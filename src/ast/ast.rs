use std::fmt::Display;
use std::rc::Rc;

use crate::{lexer::tokens::Token, SourceUnit};

use super::declarations::{
    Block, Directive, ExternBlock, FnDecl, FnDef, FnProto, ParamDecl, Root, RootExportDecl,
    TypeNode, UseDecl,
};
use super::expressions::{BinOpExpr, CastExpr, FnCallExpr, PrefixOpExpr, ReturnExpr};

/// One node of the abstract syntax tree. A node exclusively owns its
/// children; the `Root` node owns the whole tree. The line/column come
/// from the first token of the node's production, and `owner` is the
/// source unit the node was parsed from.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub line: u32,
    pub column: u32,
    pub owner: Rc<SourceUnit>,
}

impl Node {
    pub fn new(kind: NodeKind, first_token: &Token, owner: Rc<SourceUnit>) -> Node {
        Node {
            kind,
            line: first_token.position.line,
            column: first_token.position.column,
            owner,
        }
    }

    /// For nodes whose syntactic anchor is a subtree rather than a
    /// token, e.g. a `FnDef` positioned at its `FnProto`.
    pub fn at(kind: NodeKind, line: u32, column: u32, owner: Rc<SourceUnit>) -> Node {
        Node {
            kind,
            line,
            column,
            owner,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Root(_) => "Root",
            NodeKind::RootExportDecl(_) => "RootExportDecl",
            NodeKind::Use(_) => "Use",
            NodeKind::ExternBlock(_) => "ExternBlock",
            NodeKind::FnDecl(_) => "FnDecl",
            NodeKind::FnDef(_) => "FnDef",
            NodeKind::FnProto(_) => "FnProto",
            NodeKind::ParamDecl(_) => "ParamDecl",
            NodeKind::Type(_) => "Type",
            NodeKind::Block(_) => "Block",
            NodeKind::BinOpExpr(_) => "BinOpExpr",
            NodeKind::PrefixOpExpr(_) => "PrefixOpExpr",
            NodeKind::CastExpr(_) => "CastExpr",
            NodeKind::FnCallExpr(_) => "FnCallExpr",
            NodeKind::ReturnExpr(_) => "ReturnExpr",
            NodeKind::NumberLiteral(_) => "NumberLiteral",
            NodeKind::StringLiteral(_) => "StringLiteral",
            NodeKind::Symbol(_) => "Symbol",
            NodeKind::Unreachable => "Unreachable",
            NodeKind::Directive(_) => "Directive",
        }
    }
}

#[derive(Debug)]
pub enum NodeKind {
    Root(Root),
    RootExportDecl(RootExportDecl),
    Use(UseDecl),
    ExternBlock(ExternBlock),
    FnDecl(FnDecl),
    FnDef(FnDef),
    FnProto(FnProto),
    ParamDecl(ParamDecl),
    Type(TypeNode),
    Block(Block),
    BinOpExpr(BinOpExpr),
    PrefixOpExpr(PrefixOpExpr),
    CastExpr(CastExpr),
    FnCallExpr(FnCallExpr),
    ReturnExpr(ReturnExpr),
    NumberLiteral(String),
    StringLiteral(String),
    Symbol(String),
    Unreachable,
    Directive(Directive),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    BoolOr,
    BoolAnd,
    CmpEq,
    CmpNotEq,
    CmpLessThan,
    CmpGreaterThan,
    CmpLessOrEq,
    CmpGreaterOrEq,
    BinOr,
    BinXor,
    BinAnd,
    ShiftLeft,
    ShiftRight,
    Add,
    Sub,
    Mult,
    Div,
    Mod,
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinOp::BoolOr => "||",
            BinOp::BoolAnd => "&&",
            BinOp::CmpEq => "==",
            BinOp::CmpNotEq => "!=",
            BinOp::CmpLessThan => "<",
            BinOp::CmpGreaterThan => ">",
            BinOp::CmpLessOrEq => "<=",
            BinOp::CmpGreaterOrEq => ">=",
            BinOp::BinOr => "|",
            BinOp::BinXor => "^",
            BinOp::BinAnd => "&",
            BinOp::ShiftLeft => "<<",
            BinOp::ShiftRight => ">>",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mult => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    BoolNot,
    Negation,
    BinNot,
}

impl Display for PrefixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            PrefixOp::BoolNot => "!",
            PrefixOp::Negation => "-",
            PrefixOp::BinNot => "~",
        };
        write!(f, "{}", symbol)
    }
}

/// Linkage-level visibility of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Pub,
    Export,
}

impl Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Visibility::Private => "private",
            Visibility::Pub => "pub",
            Visibility::Export => "export",
        };
        write!(f, "{}", keyword)
    }
}
