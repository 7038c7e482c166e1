use std::rc::Rc;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    SourceUnit,
};

use super::decl::parse_root;

/// One parse session over a token stream. Combines the token cursor,
/// the node factory, and the pending-directive slot. The token sequence
/// must end with an EOF sentinel; the cursor relies on it instead of
/// bounds-checking.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    owner: Rc<SourceUnit>,
    pending_directives: Option<Vec<Node>>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, owner: Rc<SourceUnit>) -> Self {
        Parser {
            tokens,
            pos: 0,
            owner,
            pending_directives: None,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.invalid_token_error());
        }
        Ok(self.advance().clone())
    }

    pub fn invalid_token_error(&self) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::InvalidToken {
                token: token.value.clone(),
            },
            token.position,
        )
    }

    /// True when the cursor sits exactly on the final (EOF) token.
    pub fn at_last_token(&self) -> bool {
        self.pos + 1 == self.tokens.len()
    }

    pub fn node(&self, kind: NodeKind, first_token: &Token) -> Node {
        Node::new(kind, first_token, Rc::clone(&self.owner))
    }

    pub fn node_at(&self, kind: NodeKind, line: u32, column: u32) -> Node {
        Node::at(kind, line, column, Rc::clone(&self.owner))
    }

    /// Parks a freshly collected directive list. Exactly one list may be
    /// pending at a time; the next successfully parsed declaration takes
    /// it via [`Parser::take_directives`].
    pub fn stash_directives(&mut self, directives: Vec<Node>) {
        assert!(
            self.pending_directives.is_none(),
            "a directive list is already pending"
        );
        self.pending_directives = Some(directives);
    }

    pub fn take_directives(&mut self) -> Vec<Node> {
        self.pending_directives.take().unwrap_or_default()
    }
}

/// Converts the "caller demanded a node" contract into a positioned
/// error. Parse functions called with `mandatory == true` never return
/// `Ok(None)`, so this only fires if that contract is broken.
pub fn require(node: Option<Node>, parser: &Parser) -> Result<Node, Error> {
    node.ok_or_else(|| parser.invalid_token_error())
}

/// Parses a token stream into its root AST node. Fail-fast: the first
/// syntactic fault aborts the session with a positioned error.
pub fn parse(tokens: Vec<Token>, owner: Rc<SourceUnit>) -> Result<Node, Error> {
    let mut parser = Parser::new(tokens, owner);
    parse_root(&mut parser)
}
