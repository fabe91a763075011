//! logos-based route path tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `///` beats `//` + `/`)
//! 2. For equal length matches, the higher priority pattern wins
//!
//! Our ordering ensures:
//! - `///` matches [`Token::TripleSlash`], not `DoubleSlash` + `Slash`
//! - `..` matches [`Token::Parent`], but `..x` and `...` are plain [`Token::Segment`]s

use logos::Logos;

/// Route path token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `///`: reset to an absolute target.
    #[token("///")]
    TripleSlash,

    /// `//`: absolute target.
    #[token("//")]
    DoubleSlash,

    /// `/`: segment separator.
    #[token("/")]
    Slash,

    /// `..`: pop one screen.
    #[token("..")]
    Parent,

    /// Route name: any run of characters other than `/` and whitespace.
    #[regex(r"[^/\s]+")]
    Segment,
}

/// A token with its text and byte offset in the source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Option<Token>,
    pub text: String,
    pub offset: usize,
}

/// Tokenize a route path.
///
/// Unlike the CSS tokenizer, lex errors are kept (as `token: None`) so the
/// parser can report the offending character.
pub fn tokenize(input: &str) -> Vec<Spanned> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| Spanned {
            token: result.ok(),
            text: input[span.clone()].to_string(),
            offset: span.start,
        })
        .collect()
}
