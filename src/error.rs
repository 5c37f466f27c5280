//! Error types for the parser front-end.
//!
//! [`LexError`] is forwarded verbatim from the word-reader collaborator,
//! [`BoolParseErrorKind`] is this crate's own syntactic/semantic-at-parse
//! catalogue, and [`Error`] is the crate-level enum both convert into.

use crate::position::Span;
use crate::word::Word;
use std::error::Error as StdError;
use std::fmt;

/// Lexical errors, surfaced verbatim through the [`crate::bool_parser::WordReader`]
/// collaborator. This crate never constructs one of these; it only re-displays
/// what the lexer reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexError {
    /// An unrecognized byte was encountered.
    UnexpectedInput(String),
    /// A quoted string was not closed before EOF.
    UnterminatedQuote,
    /// An escape sequence did not match any known form.
    MalformedEscapeSequence(String),
    /// Some other lexical error, described by the collaborator.
    Other(String),
}

impl StdError for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedInput(s) => write!(f, "unexpected input: {s:?}"),
            Self::UnterminatedQuote => f.write_str("unterminated quote"),
            Self::MalformedEscapeSequence(s) => write!(f, "malformed escape sequence: {s:?}"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Syntactic and semantic-at-parse failures specific to the `[[ ... ]]`
/// boolean-expression parser. Programmer-internal failures (undefined Id
/// lookup, duplicate registration) are deliberately absent from this type:
/// those are fatal assertions, not recoverable parse errors, so they
/// surface as `panic!`/`debug_assert!` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoolParseErrorKind {
    /// `[[ ]]` or an empty parenthesized group.
    MissingOperand,
    /// A unary or binary operator was expected but something else appeared.
    StrayOperator,
    /// `(` was never matched by a `)`.
    UnbalancedParen,
    /// The boolean expression never reached `]]`.
    MissingClosingBracket,
    /// A word remained after the expression was fully parsed.
    UnexpectedExtraWord,
    /// The static right-hand side of `=~` is not a valid extended regular
    /// expression.
    InvalidRegex(String),
}

impl fmt::Display for BoolParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperand => f.write_str("missing operand"),
            Self::StrayOperator => f.write_str("stray operator"),
            Self::UnbalancedParen => f.write_str("unbalanced parenthesis"),
            Self::MissingClosingBracket => f.write_str("missing closing ']]'"),
            Self::UnexpectedExtraWord => f.write_str("unexpected extra word after expression"),
            Self::InvalidRegex(pattern) => write!(f, "invalid regex: {pattern:?}"),
        }
    }
}

/// One entry in a parser's error stack: a [`BoolParseErrorKind`] (or a
/// forwarded [`LexError`]), with an optional source [`Span`] and a rendered
/// snippet of the offending word, appended in causal order (innermost
/// first). Errors are never recovered mid-expression — the whole boolean
/// expression parse fails as a unit and the caller walks this stack.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    message: BoolParseMessage,
    span: Option<Span>,
    snippet: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum BoolParseMessage {
    Syntax(BoolParseErrorKind),
    Lex(LexError),
}

impl ErrorContext {
    #[must_use]
    pub fn syntax(kind: BoolParseErrorKind) -> Self {
        Self {
            message: BoolParseMessage::Syntax(kind),
            span: None,
            snippet: None,
        }
    }

    #[must_use]
    pub fn lex(err: LexError) -> Self {
        Self {
            message: BoolParseMessage::Lex(err),
            span: None,
            snippet: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_word(mut self, word: &Word) -> Self {
        if let Some((first, last)) = word.token_pair() {
            self.span = Some(first.span() + last.span());
            self.snippet = Some(format!("{word:?}"));
        }
        self
    }

    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        self.span
    }

    #[must_use]
    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            BoolParseMessage::Syntax(kind) => write!(f, "{kind}")?,
            BoolParseMessage::Lex(err) => write!(f, "{err}")?,
        }
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, " ({snippet})")?;
        }
        Ok(())
    }
}

impl StdError for ErrorContext {}

impl From<LexError> for ErrorContext {
    fn from(err: LexError) -> Self {
        Self::lex(err)
    }
}

impl From<BoolParseErrorKind> for ErrorContext {
    fn from(kind: BoolParseErrorKind) -> Self {
        Self::syntax(kind)
    }
}

/// Crate-level error: either a lexical error forwarded from the word reader,
/// or a parse error raised by this crate's own boolean parser.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    Lex(LexError),
    Parse(BoolParseErrorKind, Option<Span>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "lex error: {err}"),
            Self::Parse(kind, Some(span)) => write!(f, "parse error at {span}: {kind}"),
            Self::Parse(kind, None) => write!(f, "parse error: {kind}"),
        }
    }
}

impl StdError for Error {}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ErrorContext> for Error {
    fn from(ctx: ErrorContext) -> Self {
        match ctx.message {
            BoolParseMessage::Syntax(kind) => Self::Parse(kind, ctx.span),
            BoolParseMessage::Lex(err) => Self::Lex(err),
        }
    }
}
