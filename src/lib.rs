//! # shwords — token-kind registry, word AST, and `[[ ]]` boolean parser
//!
//! This crate is the parser front-end for a POSIX/bash-compatible shell: it
//! turns already-lexed tokens into the word-level AST the rest of a shell
//! (command parser, arithmetic parser, evaluator) consumes, and it parses
//! the double-bracket boolean sub-language `[[ ... ]]` end to end.
//!
//! Three layers, from the ground up:
//!
//! - [`id_kind`] — the closed [`id_kind::Id`]/[`id_kind::Kind`] catalogue
//!   every lexeme is classified under, plus the per-operator attribute
//!   tables ([`id_kind::OperandType`], [`id_kind::RedirType`], default file
//!   descriptors) the evaluator consults.
//! - [`word`] — the [`word::WordPart`]/[`word::Word`] AST and its
//!   classification queries (`bool_id`, `command_id`, `eval_static`, ...),
//!   used by the command, arithmetic, and boolean parsers alike.
//! - [`bool_parser`] — [`bool_parser::BoolParser`], a recursive-descent
//!   parser over a word stream that produces a [`bool_parser::BoolNode`]
//!   tree for everything between `[[` and `]]`.
//!
//! What this crate is *not*: a lexer, a line reader, a command or
//! arithmetic parser, or an evaluator. Those are external collaborators,
//! named here only by the interface this crate actually calls against —
//! see [`bool_parser::WordReader`].
//!
//! No expansion (variable, arithmetic, brace, glob) happens anywhere in
//! this crate; [`word::CompoundWord::eval_static`] only concatenates parts
//! that are already known statically at parse time.

mod bool_parser;
mod config;
mod error;
mod id_kind;
mod position;
mod token;
mod word;

pub use bool_parser::{BoolNode, BoolParser, WordReader};
pub use config::{ParserConfig, DEFAULT_MAX_PAREN_DEPTH};
pub use error::{BoolParseErrorKind, Error, ErrorContext, LexError};
pub use id_kind::{
    arith_table, bool_binary_table, bool_unary_table, default_fd_of, kind_of, name_of,
    operand_type_of, redir_type_of, vop1_table, vop2_table, vtest_table, Id, Kind, OperandType,
    RedirType,
};
pub use position::Span;
pub use token::{LexMode, Token, TokenText};
pub use word::{
    ArithAst, ArithAstHandle, CommandAst, CommandAstHandle, CompoundWord, PartVec, SlashPosition,
    StaticEval, VarOpNode, VarOpSlot, VarSub, Word, WordPart,
};
