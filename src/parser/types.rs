//! The type grammar:
//!
//! Type : Symbol | `unreachable` | `*` (`const`|`mut`) Type

use crate::{
    ast::{ast::{Node, NodeKind}, declarations::TypeNode},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Identifier | TokenKind::Unreachable => Ok(parser.node(
            NodeKind::Type(TypeNode::Primitive {
                name: token.value.clone(),
            }),
            &token,
        )),
        TokenKind::Star => {
            let qualifier = parser.advance().clone();
            let is_const = match qualifier.kind {
                TokenKind::Const => true,
                TokenKind::Mut => false,
                _ => {
                    return Err(Error::new(
                        ErrorImpl::InvalidToken {
                            token: qualifier.value,
                        },
                        qualifier.position,
                    ))
                }
            };

            let child_type = parse_type(parser)?;

            Ok(parser.node(
                NodeKind::Type(TypeNode::Pointer {
                    is_const,
                    child_type: Box::new(child_type),
                }),
                &token,
            ))
        }
        _ => Err(Error::new(
            ErrorImpl::InvalidToken { token: token.value },
            token.position,
        )),
    }
}

/// Synthesizes the `void` return type used when a prototype has no
/// `-> Type`, positioned at the token where the arrow would have been.
pub fn make_void_type(parser: &Parser, anchor: &Token) -> Node {
    parser.node(
        NodeKind::Type(TypeNode::Primitive {
            name: String::from("void"),
        }),
        anchor,
    )
}
