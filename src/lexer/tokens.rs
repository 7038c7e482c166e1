use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("pub", TokenKind::Pub);
        map.insert("export", TokenKind::Export);
        map.insert("extern", TokenKind::Extern);
        map.insert("use", TokenKind::Use);
        map.insert("return", TokenKind::Return);
        map.insert("as", TokenKind::As);
        map.insert("const", TokenKind::Const);
        map.insert("mut", TokenKind::Mut);
        map.insert("unreachable", TokenKind::Unreachable);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    Hash,
    Not,   // !
    Tilde, // ~

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Equals,    // ==
    NotEquals, // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,  // ||
    And, // &&

    Pipe,      // |
    Caret,     // ^
    Ampersand, // &

    ShiftLeft,
    ShiftRight,

    Comma,
    Colon,
    Semicolon,
    Arrow,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Fn,
    Pub,
    Export,
    Extern,
    Use,
    Return,
    As,
    Const,
    Mut,
    Unreachable,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:?})", self.kind, self.value)
    }
}
