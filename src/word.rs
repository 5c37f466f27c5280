//! The word-level AST: [`WordPart`], [`Word`]/[`CompoundWord`], and the
//! classification queries the command, arithmetic, and boolean parsers use
//! to interpret a word without performing any expansion.
//!
//! `WordPart` and `Word` are closed tagged enums; every classification query
//! that has nothing to report returns an explicit `None` rather than a
//! sentinel value.

use crate::id_kind::{kind_of, Id, Kind};
use crate::token::Token;
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;

/// Typical compound words have only a few parts; inline storage avoids an
/// allocation for the common case of `foo`, `"$x"`, `--flag=$y`, etc.
pub type PartVec = SmallVec<[WordPart; 4]>;

/// An opaque command-AST handle. The command-level parser (out of scope for
/// this crate) is the only thing that constructs or inspects one; this crate
/// merely stores it as a child of a [`WordPart::CommandSub`].
pub trait CommandAst: fmt::Debug {}

/// An opaque arithmetic-AST handle, analogous to [`CommandAst`].
pub trait ArithAst: fmt::Debug {}

/// Reference-counted so that [`WordPart`]/[`Word`] can derive `Clone`
/// without requiring every concrete command/arith AST type to be `Clone`
/// itself; the tree is built once and never mutated afterward, so sharing
/// the handle behind a clone has no observable effect.
pub type CommandAstHandle = Rc<dyn CommandAst>;
pub type ArithAstHandle = Rc<dyn ArithAst>;

/// Where in the three independent `VarSub` slots an operator node lives.
/// Purely a documentation aid; the slots themselves are just `Option` fields
/// on [`VarSub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarOpSlot {
    /// e.g. `#` for string length, `!` for indirection.
    Prefix,
    /// e.g. `[@]`, `[expr]`.
    Bracket,
    /// e.g. `:-default`, `/pat/rep`, `:off:len`.
    Suffix,
}

/// One operator node occupying a `VarSub` slot. The operator `id` is in Kind
/// `VTest`, `VOp1`, or `VOp2`; `arg` is the operand word when the operator
/// takes one (e.g. the default value in `:-default`), absent otherwise
/// (e.g. bare `[@]`).
#[derive(Debug, Clone, PartialEq)]
pub struct VarOpNode {
    pub op: Id,
    pub arg: Option<Box<Word>>,
}

impl VarOpNode {
    #[must_use]
    pub fn new(op: Id, arg: Option<Word>) -> Self {
        Self {
            op,
            arg: arg.map(Box::new),
        }
    }
}

/// `$name`, `${name...}` and all its operator-slot variants. The three slots
/// are mutually independent: any subset may be populated, and populating one
/// never alters the others (invariant 4 of the data model).
#[derive(Debug, Clone, PartialEq)]
pub struct VarSub {
    pub name: String,
    pub token: Option<Token>,
    pub prefix: Option<VarOpNode>,
    pub bracket: Option<VarOpNode>,
    pub suffix: Option<VarOpNode>,
}

impl VarSub {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: None,
            prefix: None,
            bracket: None,
            suffix: None,
        }
    }
}

/// An atomic element within a compound word.
#[derive(Debug, Clone)]
pub enum WordPart {
    /// A bare run of literal characters, e.g. the `foo` in `foo.txt`.
    Literal(Token),
    /// A backslash-escaped character, e.g. `\*`. The token's text includes
    /// the leading backslash.
    EscapedLiteral(Token),
    /// The (possibly empty) token run between a pair of single quotes.
    SingleQuoted(SmallVec<[Token; 4]>),
    /// The parts between a pair of double quotes.
    DoubleQuoted(PartVec),
    /// `$(...)` or `` `...` ``. The command AST itself is opaque to this
    /// crate; only the opening token is kept for span reporting.
    CommandSub {
        token: Token,
        command: CommandAstHandle,
    },
    /// `$name`, `${name...}`.
    VarSub(VarSub),
    /// A leading `~` or `~user`. `prefix` is empty for a bare `~`.
    TildeSub { prefix: String },
    /// `$(( ... ))`. The arithmetic AST is opaque to this crate.
    ArithSub(ArithAstHandle),
    /// `(a b c)`, an array literal assignment RHS.
    ArrayLiteral(SmallVec<[CompoundWord; 4]>),
}

impl PartialEq for WordPart {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::EscapedLiteral(a), Self::EscapedLiteral(b)) => a == b,
            (Self::SingleQuoted(a), Self::SingleQuoted(b)) => a == b,
            (Self::DoubleQuoted(a), Self::DoubleQuoted(b)) => a == b,
            (Self::VarSub(a), Self::VarSub(b)) => a == b,
            (Self::TildeSub { prefix: a }, Self::TildeSub { prefix: b }) => a == b,
            (Self::ArrayLiteral(a), Self::ArrayLiteral(b)) => a == b,
            // Opaque command/arith handles have no crate-visible equality;
            // two substitutions are never considered structurally equal here.
            (Self::CommandSub { .. }, Self::CommandSub { .. }) => false,
            (Self::ArithSub(_), Self::ArithSub(_)) => false,
            _ => false,
        }
    }
}

/// Result of [`WordPart::test_literal_for_slash`]/[`Word::eval_static`]'s
/// sibling query: where (if anywhere) the first `/` sits in a literal part,
/// used to split a `~prefix/rest` tilde substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashPosition {
    /// The part is not a single literal token.
    NotLiteral,
    /// Literal, but contains no `/`.
    NoSlash,
    /// Literal; `/` first occurs at this byte index.
    At(usize),
}

impl WordPart {
    /// If this part is a single literal token, its `Id`; otherwise `None`.
    /// Used for `Id.KW_For`-style keyword classification and for recognizing
    /// `Lit_VarLike`/`Lit_ArithVarLike` assignment targets.
    #[must_use]
    pub fn literal_id(&self) -> Option<Id> {
        match self {
            Self::Literal(tok) | Self::EscapedLiteral(tok) => Some(tok.id()),
            _ => None,
        }
    }

    /// The prefix before `=` if this is a `Lit_VarLike` token (e.g. `foo=`
    /// from an assignment-looking word), otherwise `None`.
    #[must_use]
    pub fn var_like_name(&self) -> Option<&str> {
        match self {
            Self::Literal(tok) if tok.id() == Id::LitVarLike => {
                Some(tok.text().strip_suffix('=').unwrap_or(tok.text()))
            }
            _ => None,
        }
    }

    /// The name if this is a `Lit_ArithVarLike` token, otherwise `None`.
    /// Kept distinct from [`Self::var_like_name`] so the parser that reads
    /// compound words can tell `foo=(1 2)` (array assignment) apart from
    /// `foo(1, 2)` (a function call inside arithmetic context).
    #[must_use]
    pub fn arith_var_like_name(&self) -> Option<&str> {
        match self {
            Self::Literal(tok) if tok.id() == Id::LitArithVarLike => Some(tok.text()),
            _ => None,
        }
    }

    /// The raw text if this is a literal token; used only to sniff a leading
    /// `~` before committing to tilde-substitution parsing.
    #[must_use]
    pub fn unquoted_literal_value(&self) -> Option<&str> {
        match self {
            Self::Literal(tok) => Some(tok.text()),
            _ => None,
        }
    }

    /// See [`SlashPosition`].
    #[must_use]
    pub fn literal_slash_position(&self) -> SlashPosition {
        match self {
            Self::Literal(tok) => match tok.text().find('/') {
                Some(i) => SlashPosition::At(i),
                None => SlashPosition::NoSlash,
            },
            _ => SlashPosition::NotLiteral,
        }
    }

    /// Is this part a substitution (command, variable, or arithmetic)? Drives
    /// word-splitting, empty-string elision, and globbing decisions in the
    /// (out-of-scope) evaluator.
    #[must_use]
    pub const fn is_substitution(&self) -> bool {
        matches!(
            self,
            Self::CommandSub { .. } | Self::VarSub(_) | Self::ArithSub(_)
        )
    }

    /// Evaluate this part at parse time: literal, single-quoted, escaped,
    /// and double-quoted-of-static parts succeed; substitutions and tilde
    /// prefixes fail (a tilde is never expanded without an environment).
    fn eval_static(&self) -> Option<(String, bool)> {
        match self {
            Self::Literal(tok) => Some((tok.text().to_string(), false)),
            Self::EscapedLiteral(tok) => Some((tok.text()[1..].to_string(), true)),
            Self::SingleQuoted(toks) => {
                let s: String = toks.iter().map(Token::text).collect();
                Some((s, true))
            }
            Self::DoubleQuoted(parts) => {
                let mut out = String::new();
                for p in parts {
                    let (s, _) = p.eval_static()?;
                    out.push_str(&s);
                }
                Some((out, true))
            }
            Self::CommandSub { .. }
            | Self::VarSub(_)
            | Self::ArithSub(_)
            | Self::TildeSub { .. } => None,
            // An array literal has no single static string value.
            Self::ArrayLiteral(_) => None,
        }
    }
}

/// A word that is a sequence of [`WordPart`]s. Possibly empty (the `""`
/// case); the part list is read-only after parsing completes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundWord {
    parts: PartVec,
}

impl CompoundWord {
    #[must_use]
    pub fn new(parts: impl IntoIterator<Item = WordPart>) -> Self {
        Self {
            parts: parts.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn parts(&self) -> &[WordPart] {
        &self.parts
    }

    /// Convenience constructor for a word with exactly one literal part,
    /// the shape most boolean-parser test scenarios need.
    #[must_use]
    pub fn one_literal(tok: Token) -> Self {
        Self::new([WordPart::Literal(tok)])
    }

    fn single_literal_id(&self) -> Option<Id> {
        if self.parts.len() != 1 {
            return None;
        }
        self.parts[0].literal_id()
    }

    /// Leftmost/rightmost token, for diagnostic span reporting. `None` for a
    /// word with zero parts. Only literal/escaped/single-quoted parts carry
    /// direct token spans here; other part kinds have no token of their own
    /// to report at this layer (the command-AST/arith-AST handles they wrap
    /// carry their own spans).
    #[must_use]
    pub fn token_pair(&self) -> Option<(&Token, &Token)> {
        let first = self.parts.first()?.token_pair()?;
        let last = self.parts.last()?.token_pair()?;
        Some((first.0, last.1))
    }

    /// `Id` to use when this word appears inside `(( ... ))`.
    #[must_use]
    pub const fn arith_id(&self) -> Id {
        Id::WordCompound
    }

    /// `Id` to use when this word appears inside `[[ ... ]]`.
    #[must_use]
    pub fn bool_id(&self) -> Id {
        let Some(id) = self.single_literal_id() else {
            return Id::WordCompound;
        };
        if id == Id::KWBang || id == Id::LitDRightBracket {
            return id;
        }
        match kind_of(id) {
            Kind::BoolUnary | Kind::BoolBinary => id,
            _ => Id::WordCompound,
        }
    }

    /// `Id` to use when this word appears at command-start position.
    #[must_use]
    pub fn command_id(&self) -> Id {
        let Some(id) = self.single_literal_id() else {
            return Id::WordCompound;
        };
        if id == Id::LitLBrace || id == Id::LitRBrace {
            return id;
        }
        match kind_of(id) {
            Kind::KW => id,
            _ => Id::WordCompound,
        }
    }

    /// Always `Kind::Word`; the command parser distinguishes further by
    /// `command_id()`.
    #[must_use]
    pub const fn command_kind(&self) -> Kind {
        Kind::Word
    }

    /// The `Id` of `declare`/`export`/`local`/`readonly` if this word is
    /// exactly that single literal, otherwise `None`.
    #[must_use]
    pub fn assignment_builtin_id(&self) -> Option<Id> {
        let id = self.single_literal_id()?;
        match kind_of(id) {
            Kind::Assign => Some(id),
            _ => None,
        }
    }

    /// Does the word look like `name=...`? If so, returns the name (without
    /// the trailing `=`) and a new compound word for the right-hand side.
    /// An empty right-hand side still gets a single empty single-quoted
    /// part, so `EMPTY=` is not confused with the RHS being simply absent.
    #[must_use]
    pub fn looks_like_assignment(&self) -> Option<(String, CompoundWord)> {
        let name = self.parts.first()?.var_like_name()?.to_string();
        let rhs = if self.parts.len() == 1 {
            CompoundWord::new([WordPart::SingleQuoted(SmallVec::new())])
        } else {
            CompoundWord::new(self.parts[1..].iter().cloned())
        };
        Some((name, rhs))
    }

    /// The arithmetic-context variable name if this word is a single
    /// `Lit_ArithVarLike` part, else an empty string.
    #[must_use]
    pub fn as_arith_var_name(&self) -> String {
        if self.parts.len() != 1 {
            return String::new();
        }
        self.parts[0]
            .arith_var_like_name()
            .unwrap_or_default()
            .to_string()
    }

    /// Static-evaluates the word as a candidate function name. Rejects a
    /// quoted name spread across more than one part (e.g. `"foo"bar` is not
    /// a legal function name even though it is legal as a plain word).
    #[must_use]
    pub fn as_func_name(&self) -> Option<String> {
        let (value, any_quoted) = self.eval_static_raw()?;
        if any_quoted && self.parts.len() != 1 {
            return None;
        }
        Some(value)
    }

    /// Does any part of this word carry an array literal (`foo=(1 2 3)`)?
    #[must_use]
    pub fn has_array_part(&self) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, WordPart::ArrayLiteral(_)))
    }

    fn eval_static_raw(&self) -> Option<(String, bool)> {
        let mut out = String::new();
        let mut any_quoted = false;
        for part in &self.parts {
            let (s, quoted) = part.eval_static()?;
            if quoted {
                any_quoted = true;
            }
            out.push_str(&s);
        }
        Some((out, any_quoted))
    }

    /// Concatenate every part's static value. Fails (returns `None`) if any
    /// part is a substitution or tilde prefix. Used at parse time for
    /// here-doc delimiters, function names, and `for`-loop variable names.
    #[must_use]
    pub fn eval_static(&self) -> Option<StaticEval> {
        self.eval_static_raw()
            .map(|(value, any_quoted)| StaticEval { value, any_quoted })
    }

    /// A cheap structural pre-check for brace expansion: does the part list
    /// contain an unquoted `{`, a `,`, and a `}` in that order? This crate
    /// only detects the candidate shape; generating the cross product is
    /// the (out-of-scope) evaluator's job.
    #[must_use]
    pub fn brace_candidate(&self) -> bool {
        let mut seen_lbrace = false;
        let mut seen_comma = false;
        for part in &self.parts {
            match part.literal_id() {
                Some(Id::LitLBrace) if !seen_lbrace => seen_lbrace = true,
                Some(Id::LitComma) if seen_lbrace => seen_comma = true,
                Some(Id::LitRBrace) if seen_lbrace && seen_comma => return true,
                _ => {}
            }
        }
        false
    }
}

impl WordPart {
    fn token_pair(&self) -> Option<(&Token, &Token)> {
        match self {
            Self::Literal(tok) | Self::EscapedLiteral(tok) => Some((tok, tok)),
            Self::SingleQuoted(toks) => Some((toks.first()?, toks.last()?)),
            Self::DoubleQuoted(parts) => {
                let first = parts.first()?.token_pair()?;
                let last = parts.last()?.token_pair()?;
                Some((first.0, last.1))
            }
            Self::CommandSub { token, .. } => Some((token, token)),
            Self::VarSub(v) => v.token.as_ref().map(|t| (t, t)),
            Self::TildeSub { .. } | Self::ArithSub(_) | Self::ArrayLiteral(_) => None,
        }
    }
}

/// The result of [`CompoundWord::eval_static`]: the concatenated text, and
/// whether any contributing part was quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEval {
    pub value: String,
    pub any_quoted: bool,
}

/// A word: either a compound sequence of parts, or a standalone token the
/// upper parser needs to observe directly (an operator, keyword, or EOF).
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    Compound(CompoundWord),
    TokenWord(Token),
}

impl Word {
    #[must_use]
    pub fn token_pair(&self) -> Option<(&Token, &Token)> {
        match self {
            Self::Compound(c) => c.token_pair(),
            Self::TokenWord(tok) => Some((tok, tok)),
        }
    }

    #[must_use]
    pub fn arith_id(&self) -> Id {
        match self {
            Self::Compound(c) => c.arith_id(),
            Self::TokenWord(tok) => tok.id(),
        }
    }

    #[must_use]
    pub fn bool_id(&self) -> Id {
        match self {
            Self::Compound(c) => c.bool_id(),
            Self::TokenWord(tok) => tok.id(),
        }
    }

    #[must_use]
    pub fn command_id(&self) -> Id {
        match self {
            Self::Compound(c) => c.command_id(),
            Self::TokenWord(tok) => tok.id(),
        }
    }

    #[must_use]
    pub fn command_kind(&self) -> Kind {
        match self {
            Self::Compound(c) => c.command_kind(),
            Self::TokenWord(tok) => kind_of(tok.id()),
        }
    }

    #[must_use]
    pub fn eval_static(&self) -> Option<StaticEval> {
        match self {
            Self::Compound(c) => c.eval_static(),
            Self::TokenWord(_) => None,
        }
    }

    #[must_use]
    pub fn has_array_part(&self) -> bool {
        match self {
            Self::Compound(c) => c.has_array_part(),
            Self::TokenWord(_) => false,
        }
    }

    #[must_use]
    pub fn looks_like_assignment(&self) -> Option<(String, CompoundWord)> {
        match self {
            Self::Compound(c) => c.looks_like_assignment(),
            Self::TokenWord(_) => None,
        }
    }

    #[must_use]
    pub fn as_arith_var_name(&self) -> String {
        match self {
            Self::Compound(c) => c.as_arith_var_name(),
            Self::TokenWord(_) => String::new(),
        }
    }

    #[must_use]
    pub fn as_func_name(&self) -> Option<String> {
        match self {
            Self::Compound(c) => c.as_func_name(),
            Self::TokenWord(_) => None,
        }
    }

    /// `true` for a `Compound` word with zero parts (the `""` case).
    #[must_use]
    pub fn is_empty_compound(&self) -> bool {
        matches!(self, Self::Compound(c) if c.parts().is_empty())
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&CompoundWord> {
        match self {
            Self::Compound(c) => Some(c),
            Self::TokenWord(_) => None,
        }
    }
}

impl From<CompoundWord> for Word {
    fn from(c: CompoundWord) -> Self {
        Self::Compound(c)
    }
}

impl From<Token> for Word {
    fn from(tok: Token) -> Self {
        Self::TokenWord(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Span;

    fn lit(id: Id, s: &str) -> Token {
        Token::new(id, s, Span::DUMMY)
    }

    fn one_word(id: Id, s: &str) -> Word {
        Word::Compound(CompoundWord::one_literal(lit(id, s)))
    }

    #[test]
    fn bool_id_recognizes_unary_and_binary() {
        assert_eq!(one_word(Id::LitChars, "-z").bool_id(), Id::WordCompound);
        let w = Word::Compound(CompoundWord::one_literal(lit(Id::BoolUnaryZ, "-z")));
        assert_eq!(w.bool_id(), Id::BoolUnaryZ);
        let w = Word::Compound(CompoundWord::one_literal(lit(
            Id::BoolBinaryDEqual,
            "==",
        )));
        assert_eq!(w.bool_id(), Id::BoolBinaryDEqual);
    }

    #[test]
    fn bool_id_special_cases_bang_and_closing_bracket() {
        let bang = Word::Compound(CompoundWord::one_literal(lit(Id::KWBang, "!")));
        assert_eq!(bang.bool_id(), Id::KWBang);
        let close = Word::Compound(CompoundWord::one_literal(lit(
            Id::LitDRightBracket,
            "]]",
        )));
        assert_eq!(close.bool_id(), Id::LitDRightBracket);
    }

    #[test]
    fn command_id_recognizes_keywords_and_braces() {
        let w = Word::Compound(CompoundWord::one_literal(lit(Id::KWIf, "if")));
        assert_eq!(w.command_id(), Id::KWIf);
        let w = Word::Compound(CompoundWord::one_literal(lit(Id::LitLBrace, "{")));
        assert_eq!(w.command_id(), Id::LitLBrace);
        assert_eq!(w.command_kind(), Kind::Word);
    }

    #[test]
    fn looks_like_assignment_splits_name_and_rhs() {
        let w = CompoundWord::new([
            WordPart::Literal(lit(Id::LitVarLike, "foo=")),
            WordPart::Literal(lit(Id::LitChars, "bar")),
        ]);
        let (name, rhs) = w.looks_like_assignment().unwrap();
        assert_eq!(name, "foo");
        assert_eq!(rhs.eval_static().unwrap().value, "bar");
    }

    #[test]
    fn looks_like_assignment_with_no_rhs_gets_empty_single_quoted_part() {
        let w = CompoundWord::new([WordPart::Literal(lit(Id::LitVarLike, "EMPTY="))]);
        let (name, rhs) = w.looks_like_assignment().unwrap();
        assert_eq!(name, "EMPTY");
        assert_eq!(rhs.parts().len(), 1);
        assert_eq!(rhs.eval_static().unwrap().value, "");
    }

    #[test]
    fn arith_var_name_and_assignment_are_disjoint() {
        let w = CompoundWord::one_literal(lit(Id::LitArithVarLike, "i"));
        assert_eq!(w.as_arith_var_name(), "i");
        assert_eq!(w.looks_like_assignment(), None);
    }

    #[test]
    fn eval_static_rejects_substitutions() {
        struct Dummy;
        impl fmt::Debug for Dummy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("Dummy")
            }
        }
        impl CommandAst for Dummy {}
        let w = CompoundWord::new([WordPart::CommandSub {
            token: lit(Id::LeftCommandSub, "$("),
            command: Rc::new(Dummy),
        }]);
        assert_eq!(w.eval_static(), None);
    }

    #[test]
    fn eval_static_single_quoted_is_quoted() {
        let toks: SmallVec<[Token; 4]> = smallvec::smallvec![lit(Id::LitChars, "EOF")];
        let w = CompoundWord::new([WordPart::SingleQuoted(toks)]);
        let got = w.eval_static().unwrap();
        assert_eq!(got.value, "EOF");
        assert!(got.any_quoted);
    }

    #[test]
    fn eval_static_is_idempotent_over_literal_and_quoted_parts() {
        let w = CompoundWord::new([
            WordPart::Literal(lit(Id::LitChars, "a")),
            WordPart::EscapedLiteral(lit(Id::LitEscapedChar, "\\b")),
            WordPart::DoubleQuoted(PartVec::from_iter([WordPart::Literal(lit(
                Id::LitChars,
                "c",
            ))])),
        ]);
        let first = w.eval_static().unwrap();
        let second = w.eval_static().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.value, "abc");
    }

    #[test]
    fn brace_candidate_detects_unquoted_run() {
        let w = CompoundWord::new([
            WordPart::Literal(lit(Id::LitLBrace, "{")),
            WordPart::Literal(lit(Id::LitChars, "a")),
            WordPart::Literal(lit(Id::LitComma, ",")),
            WordPart::Literal(lit(Id::LitChars, "b")),
            WordPart::Literal(lit(Id::LitRBrace, "}")),
        ]);
        assert!(w.brace_candidate());
        let plain = CompoundWord::one_literal(lit(Id::LitChars, "foo"));
        assert!(!plain.brace_candidate());
    }

    #[test]
    fn is_empty_compound_detects_empty_word() {
        assert!(Word::Compound(CompoundWord::empty()).is_empty_compound());
        assert!(!one_word(Id::LitChars, "x").is_empty_compound());
    }

    /// Table-driven: every `Kind::KW` id round-trips through `command_id`,
    /// except `KW_Bang`, which the boolean parser also recognizes directly.
    #[test]
    fn every_keyword_id_classifies_as_its_own_command_id() {
        for &id in &[
            Id::KWDLeftBracket,
            Id::KWBang,
            Id::KWFor,
            Id::KWWhile,
            Id::KWUntil,
            Id::KWDo,
            Id::KWDone,
            Id::KWIn,
            Id::KWCase,
            Id::KWEsac,
            Id::KWIf,
            Id::KWFi,
            Id::KWThen,
            Id::KWElse,
            Id::KWElif,
            Id::KWFunction,
        ] {
            let w = one_word(id, "kw");
            assert_eq!(w.command_id(), id);
            if id == Id::KWBang {
                assert_eq!(w.bool_id(), Id::KWBang);
            } else {
                assert_eq!(w.bool_id(), Id::WordCompound);
            }
        }
    }

    /// Table-driven: every `Kind::BoolUnary` id round-trips through `bool_id`
    /// and is invisible to `command_id`.
    #[test]
    fn every_bool_unary_id_classifies_as_its_own_bool_id() {
        for &(_, id) in crate::id_kind::bool_unary_table() {
            let w = one_word(id, "op");
            assert_eq!(w.bool_id(), id);
            assert_eq!(w.command_id(), Id::WordCompound);
        }
    }

    /// Table-driven: every `Kind::BoolBinary` id round-trips through
    /// `bool_id` and is invisible to `command_id`.
    #[test]
    fn every_bool_binary_id_classifies_as_its_own_bool_id() {
        for &(_, id) in crate::id_kind::bool_binary_table() {
            let w = one_word(id, "op");
            assert_eq!(w.bool_id(), id);
            assert_eq!(w.command_id(), Id::WordCompound);
        }
    }

    /// Table-driven: every `Kind::Assign` id round-trips through
    /// `assignment_builtin_id` and is invisible to `bool_id`/`command_id`.
    #[test]
    fn every_assign_id_classifies_as_its_own_assignment_builtin_id() {
        for &id in &[
            Id::AssignDeclare,
            Id::AssignExport,
            Id::AssignLocal,
            Id::AssignReadonly,
        ] {
            let w = one_word(id, "builtin");
            assert_eq!(w.as_compound().unwrap().assignment_builtin_id(), Some(id));
            assert_eq!(w.bool_id(), Id::WordCompound);
            assert_eq!(w.command_id(), Id::WordCompound);
        }
    }

    /// `$foo"bar"` — a compound word whose first part is a bare `VarSub` and
    /// whose second part is a double-quoted literal, taken as a whole by the
    /// implicit `-n` test (scenario #4 of the end-to-end table).
    #[test]
    fn var_sub_followed_by_double_quoted_literal_is_one_compound_word() {
        let w = CompoundWord::new([
            WordPart::VarSub(VarSub::new("foo")),
            WordPart::DoubleQuoted(PartVec::from_iter([WordPart::Literal(lit(
                Id::LitChars,
                "bar",
            ))])),
        ]);
        assert_eq!(w.parts().len(), 2);
        assert!(matches!(w.parts()[0], WordPart::VarSub(_)));
        assert!(matches!(w.parts()[1], WordPart::DoubleQuoted(_)));
        // A substitution makes the word fail static evaluation as a whole.
        assert_eq!(w.eval_static(), None);
        let word = Word::Compound(w);
        assert_eq!(word.bool_id(), Id::WordCompound);
    }
}
