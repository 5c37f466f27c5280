//! The recursive-descent parser for `[[ ... ]]` boolean expressions.
//!
//! Grammar, in order of increasing precedence:
//!
//! ```text
//! Expr    : Term ('||' Term)*
//! Term    : Negated ('&&' Negated)*
//! Negated : '!'? Factor
//! Factor  : WORD | UNARY_OP WORD | WORD BINARY_OP WORD | '(' Expr ')'
//! ```
//!
//! A two-slot lookahead ring distinguishes `UNARY_OP WORD` from `WORD
//! BINARY_OP WORD` without backtracking. Parsing stops at the first error,
//! but [`BoolParser::errors`] can hold more than one entry: a lexical
//! failure surfaces as whatever the word reader reported, potentially
//! several entries deep, followed by this parser's own syntax error.

use crate::config::ParserConfig;
use crate::error::{BoolParseErrorKind, ErrorContext};
use crate::id_kind::{kind_of, Id, Kind};
use crate::token::LexMode;
use crate::word::Word;
use regex::Regex;

/// The parsed shape of a `[[ ... ]]` expression.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolNode {
    /// `[[ word ]]`, the implicit `-n word` test.
    WordLeaf(Word),
    /// `UNARY_OP word`.
    Unary(Id, Word),
    /// `left BINARY_OP right`.
    Binary(Id, Word, Word),
    /// `! child`.
    LogicalNot(Box<BoolNode>),
    /// `left && right`.
    LogicalAnd(Box<BoolNode>, Box<BoolNode>),
    /// `left || right`.
    LogicalOr(Box<BoolNode>, Box<BoolNode>),
}

/// The collaborator the boolean parser consumes: something that can hand
/// back successive words under a requested lexical mode, and that
/// remembers its own lexical errors for the caller to retrieve after a
/// `None` return.
///
/// The same interface is meant to back both compile-time `[[` (a word
/// reader over source text) and run-time `[` (a reader over already
/// evaluated string arguments) — see the crate root docs.
pub trait WordReader {
    /// Advance and return the next word under `mode`, or `None` on lexical
    /// error (in which case the caller should consult [`Self::error`]).
    fn read_word(&mut self, mode: LexMode) -> Option<Word>;

    /// Non-destructive read of pending lexical errors.
    fn error(&self) -> Vec<ErrorContext>;
}

/// A two-slot lookahead ring. The boolean parser never needs more than one
/// word beyond the current one (to distinguish `UNARY_OP WORD` from `WORD
/// BINARY_OP WORD`), so a fixed two-element buffer is enough; pushing a
/// third word is a programmer error.
#[derive(Debug, Default)]
struct LookaheadRing {
    words: Vec<Word>,
}

impl LookaheadRing {
    const fn new() -> Self {
        Self { words: Vec::new() }
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn push(&mut self, word: Word) {
        assert!(
            self.words.len() < 2,
            "lookahead ring overflow: at most one extra word may be buffered"
        );
        self.words.push(word);
    }

    fn set_head(&mut self, word: Word) {
        if self.words.is_empty() {
            self.words.push(word);
        } else {
            self.words[0] = word;
        }
    }

    fn shift(&mut self) {
        assert_eq!(self.words.len(), 2, "shift requires two buffered words");
        self.words.remove(0);
    }

    fn head(&self) -> &Word {
        self.words.first().expect("lookahead ring is empty")
    }

    fn second(&self) -> &Word {
        self.words.get(1).expect("no second word buffered")
    }
}

/// Parses the content of `[[ ... ]]` as a word stream into a [`BoolNode`].
/// Operates after the `[[` token has already been consumed by the caller,
/// and returns with the lookahead positioned at `]]`.
///
/// A parser instance is single-threaded, mutable state owned by its caller;
/// the [`ParserConfig`] and the `R: WordReader` it borrows may be shared
/// read-only across several parser instances running on separate threads.
pub struct BoolParser<'r, R: WordReader> {
    reader: &'r mut R,
    config: ParserConfig,
    lookahead: LookaheadRing,
    cur_op_id: Id,
    cur_kind: Kind,
    paren_depth: u32,
    errors: Vec<ErrorContext>,
}

impl<'r, R: WordReader> BoolParser<'r, R> {
    #[must_use]
    pub fn new(reader: &'r mut R, config: ParserConfig) -> Self {
        Self {
            reader,
            config,
            lookahead: LookaheadRing::new(),
            cur_op_id: Id::UndefinedTok,
            cur_kind: Kind::Undefined,
            paren_depth: 0,
            errors: Vec::new(),
        }
    }

    /// The accumulated error stack, innermost first. Non-empty exactly when
    /// [`Self::parse`] returned `None`.
    #[must_use]
    pub fn errors(&self) -> &[ErrorContext] {
        &self.errors
    }

    fn push_error(&mut self, err: impl Into<ErrorContext>) {
        self.errors.push(err.into());
    }

    fn fail_on_word<T>(&mut self, kind: BoolParseErrorKind, word: &Word) -> Option<T> {
        self.push_error(ErrorContext::syntax(kind).with_word(word));
        None
    }

    /// Advances the lookahead ring by exactly one word, reusing the
    /// already-buffered second word if `peek_second` populated one.
    /// Classifies the new current word's `bool_id`/`Kind` immediately.
    fn advance_one(&mut self, mode: LexMode) -> Option<()> {
        match self.lookahead.len() {
            2 => {
                debug_assert!(
                    matches!(mode, LexMode::DBracket),
                    "shifting a buffered lookahead word only happens in DBRACKET mode"
                );
                self.lookahead.shift();
            }
            0 | 1 => {
                let had_head = self.lookahead.len() == 1;
                let word = self.reader.read_word(mode)?;
                if had_head {
                    self.lookahead.set_head(word);
                } else {
                    self.lookahead.push(word);
                }
            }
            _ => unreachable!("lookahead ring never holds more than two words"),
        }
        self.cur_op_id = self.lookahead.head().bool_id();
        self.cur_kind = kind_of(self.cur_op_id);
        Some(())
    }

    /// Advance to the next word, silently skipping `Op_Newline` tokens —
    /// they cannot appear between a unary operator and its operand, so the
    /// grammar never needs to see them.
    ///
    /// The word stream running dry without a lexical error always means the
    /// same thing in this grammar: `]]` was never reached, since that is the
    /// only token `parse` stops looking for more words at. So a dry read is
    /// reported as `MissingClosingBracket`, not a generic EOF.
    fn advance(&mut self, mode: LexMode) -> Option<()> {
        loop {
            if self.advance_one(mode).is_none() {
                let reader_errors = self.reader.error();
                if reader_errors.is_empty() {
                    self.push_error(ErrorContext::syntax(
                        BoolParseErrorKind::MissingClosingBracket,
                    ));
                } else {
                    for err in reader_errors {
                        self.errors.push(err);
                    }
                }
                return None;
            }
            if self.cur_op_id != Id::OpNewline {
                return Some(());
            }
        }
    }

    fn at_end(&self) -> bool {
        self.cur_op_id == Id::LitDRightBracket
    }

    /// Requests one additional word beyond the current one, always under
    /// `DBRACKET` mode. It is a programmer error to call this when two
    /// words are already buffered — the grammar never needs more than one
    /// word of lookahead.
    fn peek_second(&mut self) -> Option<&Word> {
        assert_eq!(
            self.lookahead.len(),
            1,
            "peek_second called with an unexpected lookahead depth"
        );
        let word = self.reader.read_word(LexMode::DBracket)?;
        self.lookahead.push(word);
        Some(self.lookahead.second())
    }

    /// Parse a complete `[[ ... ]]` body. Returns `None` on failure; call
    /// [`Self::errors`] to see why.
    pub fn parse(&mut self) -> Option<BoolNode> {
        self.advance(LexMode::DBracket)?;
        let node = self.parse_expr()?;
        if !self.at_end() {
            let word = self.lookahead.head().clone();
            return self.fail_on_word(BoolParseErrorKind::UnexpectedExtraWord, &word);
        }
        Some(node)
    }

    /// `Expr : Term ('||' Term)*`, expressed right-recursively.
    fn parse_expr(&mut self) -> Option<BoolNode> {
        let left = self.parse_term()?;
        if self.cur_op_id == Id::OpDPipe {
            self.advance(LexMode::DBracket)?;
            let right = self.parse_expr()?;
            return Some(BoolNode::LogicalOr(Box::new(left), Box::new(right)));
        }
        Some(left)
    }

    /// `Term : Negated ('&&' Negated)*`, right-recursively.
    fn parse_term(&mut self) -> Option<BoolNode> {
        let left = self.parse_negated_factor()?;
        if self.cur_op_id == Id::OpDAmp {
            self.advance(LexMode::DBracket)?;
            let right = self.parse_term()?;
            return Some(BoolNode::LogicalAnd(Box::new(left), Box::new(right)));
        }
        Some(left)
    }

    /// `Negated : '!'? Factor`.
    fn parse_negated_factor(&mut self) -> Option<BoolNode> {
        if self.cur_op_id == Id::KWBang {
            self.advance(LexMode::DBracket)?;
            let child = self.parse_factor()?;
            return Some(BoolNode::LogicalNot(Box::new(child)));
        }
        self.parse_factor()
    }

    /// `Factor : WORD | UNARY_OP WORD | WORD BINARY_OP WORD | '(' Expr ')'`.
    fn parse_factor(&mut self) -> Option<BoolNode> {
        tracing::trace!(op_id = ?self.cur_op_id, kind = ?self.cur_kind, depth = self.paren_depth, "parse_factor");
        if self.cur_kind == Kind::BoolUnary {
            let op = self.cur_op_id;
            self.advance(LexMode::DBracket)?;
            let word = self.lookahead.head().clone();
            self.advance(LexMode::DBracket)?;
            return Some(BoolNode::Unary(op, word));
        }

        if self.cur_kind == Kind::Word {
            let second_id = self.peek_second()?.bool_id();
            let second_kind = kind_of(second_id);

            // `<`/`>` pun as lexicographic string comparisons inside `[[`.
            if matches!(second_kind, Kind::BoolBinary | Kind::Redir) {
                let left = self.lookahead.head().clone();
                self.advance(LexMode::DBracket)?;
                let op = self.cur_op_id;

                let is_regex = second_id == Id::BoolBinaryEqualTilde;
                let mode = if is_regex {
                    LexMode::BashRegex
                } else {
                    LexMode::DBracket
                };
                self.advance(mode)?;
                let right = self.lookahead.head().clone();

                if is_regex {
                    if let Some(eval) = right.eval_static() {
                        if Regex::new(&eval.value).is_err() {
                            return self.fail_on_word(
                                BoolParseErrorKind::InvalidRegex(eval.value),
                                &right,
                            );
                        }
                    }
                }

                self.advance(LexMode::DBracket)?;
                return Some(BoolNode::Binary(op, left, right));
            }

            // `[[ foo ]]` is implicit `[[ -n foo ]]`.
            let word = self.lookahead.head().clone();
            self.advance(LexMode::DBracket)?;
            return Some(BoolNode::WordLeaf(word));
        }

        if self.cur_op_id == Id::OpLParen {
            self.paren_depth += 1;
            if self.paren_depth > self.config.max_paren_depth() {
                self.paren_depth -= 1;
                return self.fail_err(BoolParseErrorKind::UnbalancedParen);
            }
            self.advance(LexMode::DBracket)?;
            let node = self.parse_expr()?;
            self.paren_depth -= 1;
            if self.cur_op_id != Id::OpRParen {
                return self.fail_err(BoolParseErrorKind::UnbalancedParen);
            }
            self.advance(LexMode::DBracket)?;
            return Some(node);
        }

        if self.at_end() {
            return self.fail_err(BoolParseErrorKind::MissingOperand);
        }

        self.fail_err(BoolParseErrorKind::StrayOperator)
    }

    fn fail_err(&mut self, kind: BoolParseErrorKind) -> Option<BoolNode> {
        self.push_error(ErrorContext::syntax(kind));
        None
    }
}
