//! Route path parser.
//!
//! Parses a navigation string into a [`RoutePath`]. Uses the logos-based
//! tokenizer from [`crate::route::tokenizer`].
//!
//! ```text
//! path     := reset | absolute | relative
//! reset    := "///" segments?
//! absolute := "//" segments?
//! relative := (".." "/")* segments | ".." ("/" "..")*
//! segments := name ("/" name)* "/"?
//! ```

use std::fmt;

use crate::route::tokenizer::{tokenize, Token};

/// Errors from route path parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("route path is empty")]
    Empty,
    #[error("invalid character {text:?} at position {position}")]
    InvalidCharacter { position: usize, text: String },
    #[error("empty segment at position {position}")]
    EmptySegment { position: usize },
    #[error("`..` must come before any route name (position {position})")]
    MisplacedParent { position: usize },
    #[error("`..` is not allowed in an absolute path (position {position})")]
    ParentInAbsolute { position: usize },
}

/// How a path anchors against the current navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// `a/b`: applied on top of the current effective stack.
    Relative,
    /// `//a/b`: retargets the hierarchy and rebuilds the target section.
    Absolute,
    /// `///a/b`: like [`PathKind::Absolute`], and also discards the state of
    /// the section being left.
    Reset,
}

impl PathKind {
    /// Whether this path retargets the hierarchy.
    pub fn is_absolute(self) -> bool {
        !matches!(self, PathKind::Relative)
    }

    fn prefix(self) -> &'static str {
        match self {
            PathKind::Relative => "",
            PathKind::Absolute => "//",
            PathKind::Reset => "///",
        }
    }
}

/// One element of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A route name: a hierarchy node or a registered screen route.
    Route(String),
    /// `..`: pop one screen off the effective stack.
    Parent,
}

/// A parsed navigation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    pub kind: PathKind,
    pub segments: Vec<PathSegment>,
}

impl RoutePath {
    /// Parse a navigation string. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }
        let lead = input.len() - input.trim_start().len();

        let tokens = tokenize(trimmed);
        let mut cursor = 0;
        let kind = match tokens.first().and_then(|t| t.token) {
            Some(Token::TripleSlash) => {
                cursor = 1;
                PathKind::Reset
            }
            Some(Token::DoubleSlash) => {
                cursor = 1;
                PathKind::Absolute
            }
            _ => PathKind::Relative,
        };

        let mut segments = Vec::new();
        let mut expect_segment = true;
        let mut seen_route = false;

        for tok in &tokens[cursor..] {
            let position = lead + tok.offset;
            match tok.token {
                None => {
                    return Err(PathError::InvalidCharacter {
                        position,
                        text: tok.text.clone(),
                    })
                }
                Some(Token::Segment) => {
                    segments.push(PathSegment::Route(tok.text.clone()));
                    seen_route = true;
                    expect_segment = false;
                }
                Some(Token::Parent) => {
                    if kind.is_absolute() {
                        return Err(PathError::ParentInAbsolute { position });
                    }
                    if seen_route {
                        return Err(PathError::MisplacedParent { position });
                    }
                    segments.push(PathSegment::Parent);
                    expect_segment = false;
                }
                Some(Token::Slash) => {
                    if expect_segment {
                        return Err(PathError::EmptySegment { position });
                    }
                    expect_segment = true;
                }
                Some(Token::DoubleSlash | Token::TripleSlash) => {
                    return Err(PathError::EmptySegment { position });
                }
            }
        }

        if segments.is_empty() && kind == PathKind::Relative {
            return Err(PathError::Empty);
        }

        Ok(Self { kind, segments })
    }

    /// Route names in order, skipping `..` steps.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            PathSegment::Route(name) => Some(name.as_str()),
            PathSegment::Parent => None,
        })
    }

    /// Number of leading `..` steps.
    pub fn parent_count(&self) -> usize {
        self.segments
            .iter()
            .take_while(|s| matches!(s, PathSegment::Parent))
            .count()
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.prefix())?;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match segment {
                PathSegment::Route(name) => f.write_str(name)?,
                PathSegment::Parent => f.write_str("..")?,
            }
        }
        Ok(())
    }
}
