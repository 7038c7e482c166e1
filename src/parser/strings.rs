//! Escape expansion for string literal tokens. The lexer hands the
//! parser the raw lexeme, surrounding quotes included.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
};

/// Strips the quotes and expands the recognized escapes: `\\`, `\r`,
/// `\n`, `\t`, `\"`. Any other escape is rejected with a positioned
/// diagnostic.
pub fn decode_string_literal(token: &Token) -> Result<String, Error> {
    let raw = &token.value;
    let inner = &raw[1..raw.len() - 1];

    let mut decoded = String::with_capacity(inner.len());
    let mut escape = false;

    for c in inner.chars() {
        if escape {
            match c {
                '\\' => decoded.push('\\'),
                'r' => decoded.push('\r'),
                'n' => decoded.push('\n'),
                't' => decoded.push('\t'),
                '"' => decoded.push('"'),
                other => {
                    return Err(Error::new(
                        ErrorImpl::InvalidEscape { escape: other },
                        token.position,
                    ))
                }
            }
            escape = false;
        } else if c == '\\' {
            escape = true;
        } else {
            decoded.push(c);
        }
    }

    // The lexer only produces string tokens with balanced quotes, so a
    // trailing lone backslash cannot occur.
    debug_assert!(!escape);

    Ok(decoded)
}
