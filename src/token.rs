//! The token type handed up from the character lexer, and the lexical modes
//! the boolean parser (and, eventually, sibling parsers) can request.
//!
//! The character lexer itself is an external collaborator (see the crate
//! root docs); this module only defines the shape of what it produces.

use crate::id_kind::Id;
use crate::position::Span;
use smartstring::{LazyCompact, SmartString};
use std::fmt;

/// Inline-friendly string type for token text and literal values. Most shell
/// tokens are a handful of bytes, so this avoids a heap allocation for them.
pub type TokenText = SmartString<LazyCompact>;

/// A single lexeme: an [`Id`], its source text, and the [`Span`] it covers.
///
/// Immutable once built. Cheap to clone (`Copy`-sized `Id`, small-string
/// text, `Copy` span), so the word AST stores tokens by value rather than by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    id: Id,
    text: TokenText,
    span: Span,
}

impl Token {
    /// Build a new token. `text` is anything convertible into the inline
    /// string type, so both `&str` and owned `String` work without ceremony
    /// at call sites.
    #[must_use]
    pub fn new(id: Id, text: impl Into<TokenText>, span: Span) -> Self {
        Self {
            id,
            text: text.into(),
            span,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn id(&self) -> Id {
        self.id
    }

    #[inline(always)]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline(always)]
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.id, self.text)
    }
}

/// The lexical mode under which the character lexer should read the next
/// word. Most of the shell's grammar lives outside this crate's scope; only
/// the two modes the boolean parser itself drives are named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LexMode {
    /// Ordinary command-context lexing. Not used directly by the boolean
    /// parser, but named so collaborators can express "leave `[[`" without
    /// a crate-external enum.
    ShCommand,
    /// Between `[[` and `]]`: `<`, `>`, `&&`, `||` lex as operators rather
    /// than redirection/background/separator punctuation, and word
    /// splitting is disabled.
    DBracket,
    /// The right operand of `=~`: regex metacharacters pass through
    /// literally and the operand ends at the next unquoted whitespace.
    BashRegex,
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ShCommand => "ShCommand",
            Self::DBracket => "DBracket",
            Self::BashRegex => "BashRegex",
        };
        f.write_str(s)
    }
}
