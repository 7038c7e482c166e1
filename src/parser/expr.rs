//! The expression grammar: a precedence-climbing ladder from `||` at
//! the bottom to primaries at the top. Every entry point threads a
//! `mandatory` flag: `true` means a missing production is an invalid
//! token error at the current position, `false` means `Ok(None)` and
//! the caller decides. Binary levels iterate over their operator set so
//! chains of same-precedence operators group left-to-right.

use crate::{
    ast::{
        ast::{BinOp, Node, NodeKind, PrefixOp},
        expressions::{BinOpExpr, CastExpr, FnCallExpr, PrefixOpExpr, ReturnExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    decl::parse_block,
    parser::{require, Parser},
    strings::decode_string_literal,
    types::parse_type,
};

type LevelParser = fn(&mut Parser, bool) -> Result<Option<Node>, Error>;

/// Expression : ReturnExpression | BoolOrExpression
pub fn parse_expression(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    if let Some(node) = parse_return_expr(parser)? {
        return Ok(Some(node));
    }

    if let Some(node) = parse_bool_or_expr(parser, false)? {
        return Ok(Some(node));
    }

    if mandatory {
        Err(parser.invalid_token_error())
    } else {
        Ok(None)
    }
}

/// ReturnExpression : `return` option(Expression)
fn parse_return_expr(parser: &mut Parser) -> Result<Option<Node>, Error> {
    if parser.current_token_kind() != TokenKind::Return {
        return Ok(None);
    }

    let return_token = parser.advance().clone();
    let value = parse_expression(parser, false)?.map(Box::new);

    Ok(Some(parser.node(
        NodeKind::ReturnExpr(ReturnExpr { value }),
        &return_token,
    )))
}

/// Parses one binary precedence level: an operand at the next level up,
/// then any number of (operator, operand) pairs of this level, folded
/// left. The produced node is positioned at its operator token.
fn parse_binary_level(
    parser: &mut Parser,
    mandatory: bool,
    level_op: fn(TokenKind) -> Option<BinOp>,
    next_level: LevelParser,
) -> Result<Option<Node>, Error> {
    let Some(mut lhs) = next_level(parser, mandatory)? else {
        return Ok(None);
    };

    while let Some(op) = level_op(parser.current_token_kind()) {
        let op_token = parser.advance().clone();
        let rhs = require(next_level(parser, true)?, parser)?;

        lhs = parser.node(
            NodeKind::BinOpExpr(BinOpExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }),
            &op_token,
        );
    }

    Ok(Some(lhs))
}

fn bool_or_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Or => Some(BinOp::BoolOr),
        _ => None,
    }
}

fn bool_and_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::And => Some(BinOp::BoolAnd),
        _ => None,
    }
}

fn comparison_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Equals => Some(BinOp::CmpEq),
        TokenKind::NotEquals => Some(BinOp::CmpNotEq),
        TokenKind::Less => Some(BinOp::CmpLessThan),
        TokenKind::Greater => Some(BinOp::CmpGreaterThan),
        TokenKind::LessEquals => Some(BinOp::CmpLessOrEq),
        TokenKind::GreaterEquals => Some(BinOp::CmpGreaterOrEq),
        _ => None,
    }
}

fn bin_or_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Pipe => Some(BinOp::BinOr),
        _ => None,
    }
}

fn bin_xor_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Caret => Some(BinOp::BinXor),
        _ => None,
    }
}

fn bin_and_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Ampersand => Some(BinOp::BinAnd),
        _ => None,
    }
}

fn bit_shift_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::ShiftLeft => Some(BinOp::ShiftLeft),
        TokenKind::ShiftRight => Some(BinOp::ShiftRight),
        _ => None,
    }
}

fn add_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Plus => Some(BinOp::Add),
        TokenKind::Dash => Some(BinOp::Sub),
        _ => None,
    }
}

fn mult_op(kind: TokenKind) -> Option<BinOp> {
    match kind {
        TokenKind::Star => Some(BinOp::Mult),
        TokenKind::Slash => Some(BinOp::Div),
        TokenKind::Percent => Some(BinOp::Mod),
        _ => None,
    }
}

/// BoolOrExpression : BoolAndExpression (`||` BoolAndExpression)*
fn parse_bool_or_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, bool_or_op, parse_bool_and_expr)
}

/// BoolAndExpression : ComparisonExpression (`&&` ComparisonExpression)*
fn parse_bool_and_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, bool_and_op, parse_comparison_expr)
}

/// ComparisonExpression : BinaryOrExpression (cmp-op BinaryOrExpression)*
fn parse_comparison_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, comparison_op, parse_bin_or_expr)
}

/// BinaryOrExpression : BinaryXorExpression (`|` BinaryXorExpression)*
fn parse_bin_or_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, bin_or_op, parse_bin_xor_expr)
}

/// BinaryXorExpression : BinaryAndExpression (`^` BinaryAndExpression)*
fn parse_bin_xor_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, bin_xor_op, parse_bin_and_expr)
}

/// BinaryAndExpression : BitShiftExpression (`&` BitShiftExpression)*
fn parse_bin_and_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, bin_and_op, parse_bit_shift_expr)
}

/// BitShiftExpression : AdditionExpression ((`<<`|`>>`) AdditionExpression)*
fn parse_bit_shift_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, bit_shift_op, parse_add_expr)
}

/// AdditionExpression : MultiplyExpression ((`+`|`-`) MultiplyExpression)*
fn parse_add_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, add_op, parse_mult_expr)
}

/// MultiplyExpression : CastExpression ((`*`|`/`|`%`) CastExpression)*
fn parse_mult_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    parse_binary_level(parser, mandatory, mult_op, parse_cast_expr)
}

/// CastExpression : PrefixOpExpression (`as` Type)?
///
/// At most one cast suffix: `x as T as U` is not expressible.
fn parse_cast_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    let Some(operand) = parse_prefix_op_expr(parser, mandatory)? else {
        return Ok(None);
    };

    if parser.current_token_kind() != TokenKind::As {
        return Ok(Some(operand));
    }
    let as_token = parser.advance().clone();

    let target_type = parse_type(parser)?;

    Ok(Some(parser.node(
        NodeKind::CastExpr(CastExpr {
            operand: Box::new(operand),
            target_type: Box::new(target_type),
        }),
        &as_token,
    )))
}

fn prefix_op(kind: TokenKind) -> Option<PrefixOp> {
    match kind {
        TokenKind::Not => Some(PrefixOp::BoolNot),
        TokenKind::Dash => Some(PrefixOp::Negation),
        TokenKind::Tilde => Some(PrefixOp::BinNot),
        _ => None,
    }
}

/// PrefixOpExpression : (`!`|`-`|`~`)? FnCallExpression
fn parse_prefix_op_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    let Some(op) = prefix_op(parser.current_token_kind()) else {
        return parse_fn_call_expr(parser, mandatory);
    };

    let op_token = parser.advance().clone();
    let operand = require(parse_fn_call_expr(parser, true)?, parser)?;

    Ok(Some(parser.node(
        NodeKind::PrefixOpExpr(PrefixOpExpr {
            op,
            operand: Box::new(operand),
        }),
        &op_token,
    )))
}

/// FnCallExpression : PrimaryExpression (`(` list(Expression, `,`) `)`)?
///
/// At most one call suffix: `f()()` is not expressible.
fn parse_fn_call_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    let Some(callee) = parse_primary_expr(parser, mandatory)? else {
        return Ok(None);
    };

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Some(callee));
    }

    let (line, column) = (callee.line, callee.column);
    let args = parse_fn_call_args(parser)?;

    Ok(Some(parser.node_at(
        NodeKind::FnCallExpr(FnCallExpr {
            callee: Box::new(callee),
            args,
        }),
        line,
        column,
    )))
}

fn parse_fn_call_args(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut args = Vec::new();

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(args);
    }

    loop {
        args.push(require(parse_expression(parser, true)?, parser)?);

        let token = parser.advance().clone();
        match token.kind {
            TokenKind::CloseParen => return Ok(args),
            TokenKind::Comma => {}
            _ => {
                return Err(Error::new(
                    ErrorImpl::InvalidToken { token: token.value },
                    token.position,
                ))
            }
        }
    }
}

/// PrimaryExpression : Number | String | `unreachable` | Symbol | Block
///                   | `(` Expression `)`
fn parse_primary_expr(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            return Ok(Some(
                parser.node(NodeKind::NumberLiteral(token.value.clone()), &token),
            ));
        }
        TokenKind::String => {
            let token = parser.advance().clone();
            let value = decode_string_literal(&token)?;
            return Ok(Some(parser.node(NodeKind::StringLiteral(value), &token)));
        }
        TokenKind::Unreachable => {
            let token = parser.advance().clone();
            return Ok(Some(parser.node(NodeKind::Unreachable, &token)));
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            return Ok(Some(
                parser.node(NodeKind::Symbol(token.value.clone()), &token),
            ));
        }
        _ => {}
    }

    if let Some(block) = parse_block(parser, false)? {
        return Ok(Some(block));
    }

    if let Some(grouped) = parse_grouped_expr(parser)? {
        return Ok(Some(grouped));
    }

    if mandatory {
        Err(parser.invalid_token_error())
    } else {
        Ok(None)
    }
}

/// GroupedExpression : `(` Expression `)`
fn parse_grouped_expr(parser: &mut Parser) -> Result<Option<Node>, Error> {
    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(None);
    }
    parser.advance();

    let inner = require(parse_expression(parser, true)?, parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Some(inner))
}
