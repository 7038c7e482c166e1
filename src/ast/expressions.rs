use super::ast::{BinOp, Node, PrefixOp};

/// Binary Expression
/// Two operands joined by one of the language's binary operators. The
/// node is positioned at the operator token.
#[derive(Debug)]
pub struct BinOpExpr {
    pub op: BinOp,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

/// Prefix Expression
/// `!x`, `-x` or `~x`.
#[derive(Debug)]
pub struct PrefixOpExpr {
    pub op: PrefixOp,
    pub operand: Box<Node>,
}

/// Cast Expression
/// `expr as Type`. At most one cast suffix is parsed per operand.
#[derive(Debug)]
pub struct CastExpr {
    pub operand: Box<Node>,
    pub target_type: Box<Node>,
}

/// Call Expression
/// A callee followed by a parenthesized argument list, which may be
/// empty. At most one call suffix is parsed per primary.
#[derive(Debug)]
pub struct FnCallExpr {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

/// Return Expression
/// `return` with an optional value.
#[derive(Debug)]
pub struct ReturnExpr {
    pub value: Option<Box<Node>>,
}
