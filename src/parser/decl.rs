//! The declaration grammar: the top-level loop, function prototypes,
//! definitions and extern declarations, parameter lists, blocks, `use`
//! directives, root export declarations, and directive collection.
//!
//! Directives (`#name("param")`) are collected greedily in front of any
//! position that accepts them and parked in the session's pending slot;
//! the next successfully parsed declaration takes ownership of the
//! slot. Reaching a declaration position with a non-empty slot and no
//! matching declaration is a fatal "invalid directive" error.

use crate::{
    ast::{
        ast::{Node, NodeKind, Visibility},
        declarations::{
            Block, Directive, ExternBlock, FnDecl, FnDef, FnProto, ParamDecl, Root,
            RootExportDecl, UseDecl,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    expr::parse_expression,
    parser::{require, Parser},
    strings::decode_string_literal,
    types::{make_void_type, parse_type},
};

/// Root : many(TopLevelDecl) token(EOF)
pub fn parse_root(parser: &mut Parser) -> Result<Node, Error> {
    let first_token = parser.current_token().clone();

    let top_level_decls = parse_top_level_decls(parser)?;

    if !parser.at_last_token() {
        return Err(parser.invalid_token_error());
    }

    Ok(parser.node(NodeKind::Root(Root { top_level_decls }), &first_token))
}

/// TopLevelDecl : RootExportDecl | FnDef | ExternBlock | Use
fn parse_top_level_decls(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut decls = Vec::new();

    loop {
        let directives = parse_directives(parser)?;
        parser.stash_directives(directives);

        if let Some(node) = parse_root_export_decl(parser)? {
            decls.push(node);
            continue;
        }

        if let Some(node) = parse_fn_def(parser, false)? {
            decls.push(node);
            continue;
        }

        if let Some(node) = parse_extern_block(parser, false)? {
            decls.push(node);
            continue;
        }

        if let Some(node) = parse_use_decl(parser)? {
            decls.push(node);
            continue;
        }

        let leftover = parser.take_directives();
        if let Some(first) = leftover.first() {
            return Err(orphan_directive_error(first));
        }

        return Ok(decls);
    }
}

fn orphan_directive_error(first_directive: &Node) -> Error {
    Error::new(
        ErrorImpl::InvalidDirective,
        Position {
            line: first_directive.line,
            column: first_directive.column,
        },
    )
}

/// Directive : `#` Symbol `(` String `)`
fn parse_directive(parser: &mut Parser) -> Result<Node, Error> {
    let hash_token = parser.expect(TokenKind::Hash)?;

    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;
    let param_token = parser.expect(TokenKind::String)?;
    let param = decode_string_literal(&param_token)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(parser.node(NodeKind::Directive(Directive { name, param }), &hash_token))
}

fn parse_directives(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut directives = Vec::new();

    while parser.current_token_kind() == TokenKind::Hash {
        directives.push(parse_directive(parser)?);
    }

    Ok(directives)
}

/// RootExportDecl : `export` Symbol String `;`
///
/// Recognized by a two-token lookahead: `export` followed by a symbol
/// distinguishes this from an `export fn ...` definition.
fn parse_root_export_decl(parser: &mut Parser) -> Result<Option<Node>, Error> {
    if parser.current_token_kind() != TokenKind::Export
        || parser.peek_kind(1) != TokenKind::Identifier
    {
        return Ok(None);
    }

    let export_token = parser.advance().clone();
    let export_type = parser.advance().value.clone();
    let directives = parser.take_directives();

    let name_token = parser.expect(TokenKind::String)?;
    let name = decode_string_literal(&name_token)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Some(parser.node(
        NodeKind::RootExportDecl(RootExportDecl {
            export_type,
            name,
            directives,
        }),
        &export_token,
    )))
}

/// FnProto : option(`pub`|`export`) `fn` Symbol ParamDeclList
///           option(`->` Type)
fn parse_fn_proto(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    let first_token = parser.current_token().clone();

    let visibility = match first_token.kind {
        TokenKind::Pub => {
            parser.advance();
            parser.expect(TokenKind::Fn)?;
            Visibility::Pub
        }
        TokenKind::Export => {
            parser.advance();
            parser.expect(TokenKind::Fn)?;
            Visibility::Export
        }
        TokenKind::Fn => {
            parser.advance();
            Visibility::Private
        }
        _ if mandatory => return Err(parser.invalid_token_error()),
        _ => return Ok(None),
    };

    let directives = parser.take_directives();

    let name = parser.expect(TokenKind::Identifier)?.value;

    let params = parse_param_decl_list(parser)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        parse_type(parser)?
    } else {
        let anchor = parser.current_token().clone();
        make_void_type(parser, &anchor)
    };

    Ok(Some(parser.node(
        NodeKind::FnProto(FnProto {
            visibility,
            name,
            params,
            return_type: Box::new(return_type),
            directives,
        }),
        &first_token,
    )))
}

/// ParamDecl : Symbol `:` Type
fn parse_param_decl(parser: &mut Parser) -> Result<Node, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::Colon)?;
    let param_type = parse_type(parser)?;

    Ok(parser.node(
        NodeKind::ParamDecl(ParamDecl {
            name: name_token.value.clone(),
            param_type: Box::new(param_type),
        }),
        &name_token,
    ))
}

fn parse_param_decl_list(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut params = Vec::new();

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(params);
    }

    loop {
        params.push(parse_param_decl(parser)?);

        let token = parser.advance().clone();
        match token.kind {
            TokenKind::CloseParen => return Ok(params),
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

/// FnDef : FnProto Block
fn parse_fn_def(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    let Some(fn_proto) = parse_fn_proto(parser, mandatory)? else {
        return Ok(None);
    };

    let (line, column) = (fn_proto.line, fn_proto.column);
    let body = require(parse_block(parser, true)?, parser)?;

    Ok(Some(parser.node_at(
        NodeKind::FnDef(FnDef {
            fn_proto: Box::new(fn_proto),
            body: Box::new(body),
        }),
        line,
        column,
    )))
}

/// FnDecl : FnProto `;`
fn parse_fn_decl(parser: &mut Parser) -> Result<Node, Error> {
    let fn_proto = require(parse_fn_proto(parser, true)?, parser)?;

    parser.expect(TokenKind::Semicolon)?;

    let (line, column) = (fn_proto.line, fn_proto.column);
    Ok(parser.node_at(
        NodeKind::FnDecl(FnDecl {
            fn_proto: Box::new(fn_proto),
        }),
        line,
        column,
    ))
}

/// ExternBlock : `extern` `{` many(many(Directive) FnDecl) `}`
fn parse_extern_block(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    if parser.current_token_kind() != TokenKind::Extern {
        if mandatory {
            return Err(parser.invalid_token_error());
        }
        return Ok(None);
    }

    let extern_token = parser.advance().clone();
    let directives = parser.take_directives();

    parser.expect(TokenKind::OpenCurly)?;

    let mut fn_decls = Vec::new();

    loop {
        let pending = parse_directives(parser)?;
        parser.stash_directives(pending);

        if parser.current_token_kind() == TokenKind::CloseCurly {
            let leftover = parser.take_directives();
            if let Some(first) = leftover.first() {
                return Err(orphan_directive_error(first));
            }

            parser.advance();
            return Ok(Some(parser.node(
                NodeKind::ExternBlock(ExternBlock {
                    directives,
                    fn_decls,
                }),
                &extern_token,
            )));
        }

        fn_decls.push(parse_fn_decl(parser)?);
    }
}

/// Use : `use` String `;`
fn parse_use_decl(parser: &mut Parser) -> Result<Option<Node>, Error> {
    if parser.current_token_kind() != TokenKind::Use {
        return Ok(None);
    }

    let use_token = parser.advance().clone();

    let path_token = parser.expect(TokenKind::String)?;
    parser.expect(TokenKind::Semicolon)?;

    let path = decode_string_literal(&path_token)?;
    let directives = parser.take_directives();

    Ok(Some(parser.node(
        NodeKind::Use(UseDecl { path, directives }),
        &use_token,
    )))
}

/// Block : `{` many(Statement) `}` where Statement : Expression `;`
pub fn parse_block(parser: &mut Parser, mandatory: bool) -> Result<Option<Node>, Error> {
    if parser.current_token_kind() != TokenKind::OpenCurly {
        if mandatory {
            return Err(parser.invalid_token_error());
        }
        return Ok(None);
    }

    let open_token = parser.advance().clone();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        statements.push(parse_statement(parser)?);
    }
    parser.advance();

    Ok(Some(
        parser.node(NodeKind::Block(Block { statements }), &open_token),
    ))
}

fn parse_statement(parser: &mut Parser) -> Result<Node, Error> {
    let expression = require(parse_expression(parser, true)?, parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(expression)
}
