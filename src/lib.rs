use std::rc::Rc;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location in a source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Byte-offset range into a source unit's text. String literal spans
/// include the surrounding quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// One parsed source file: its path, its full text, and the byte offset
/// of every line start. Shared by `Rc` between the token stream, the
/// parse session, every AST node, and the error reporter.
#[derive(Debug)]
pub struct SourceUnit {
    pub path: String,
    pub source: String,
    pub line_offsets: Vec<u32>,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, source: String) -> Rc<SourceUnit> {
        let mut line_offsets = vec![0u32];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_offsets.push(offset as u32 + 1);
            }
        }

        Rc::new(SourceUnit {
            path: path.into(),
            source,
            line_offsets,
        })
    }

    /// The text of a 1-based line, without its trailing newline.
    pub fn line_text(&self, line: u32) -> &str {
        let index = line.saturating_sub(1) as usize;
        let start = self.line_offsets.get(index).copied().unwrap_or(0) as usize;
        let end = self
            .line_offsets
            .get(index + 1)
            .map(|offset| *offset as usize)
            .unwrap_or(self.source.len());

        self.source[start..end].trim_end_matches('\n')
    }
}
