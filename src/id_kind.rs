//! The lexical token-kind registry: [`Id`], [`Kind`], and the frozen
//! attribute tables built from them.
//!
//! Every `Id` the lexer can emit is registered exactly once into a closed
//! Rust enum plus a handful of arrays indexed by its discriminant, built
//! once behind a [`OnceLock`](std::sync::OnceLock) and frozen thereafter.

use std::sync::OnceLock;

/// Coarse lexical category. Every [`Id`] belongs to exactly one `Kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Kind {
    Undefined,
    Unknown,
    Eof,
    Ignored,
    WS,
    Lit,
    Op,
    Redir,
    Left,
    Right,
    VSub,
    VTest,
    VOp1,
    VOp2,
    Arith,
    Node,
    Word,
    KW,
    Assign,
    BoolUnary,
    BoolBinary,
}

/// The operand domain a boolean unary/binary operator expects. Purely
/// classificatory: the evaluator (out of scope here) decides how to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandType {
    Undefined,
    Path,
    Int,
    Str,
    Other,
}

/// Which redirection form an `Id` in [`Kind::Redir`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirType {
    /// Filename redirect, e.g. `<`, `>`, `>>`.
    Path,
    /// File-descriptor redirect, e.g. `>&`, `<&`.
    Desc,
    /// Here-document / here-string, e.g. `<<`, `<<-`, `<<<`.
    Str,
}

/// Fine-grained lexical category. Every token the lexer can emit carries
/// exactly one `Id`; [`kind_of`] maps it back to its [`Kind`].
///
/// `Id` values are stable only in the sense that equality and kind lookup
/// are meaningful; the underlying discriminants are an implementation
/// detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Id {
    // -- Undefined / Unknown / Eof --
    /// Sentinel: "no operator applies here". Never emitted by the lexer.
    UndefinedTok,
    UnknownTok,
    EofReal,
    EofRParen,
    EofBacktick,

    // -- Ignored / WS --
    IgnoredLineCont,
    IgnoredSpace,
    IgnoredComment,
    WSSpace,

    // -- Lit --
    LitChars,
    LitVarLike,
    LitOther,
    LitEscapedChar,
    LitLBrace,
    LitRBrace,
    LitComma,
    LitDRightBracket,
    LitTilde,
    LitPound,
    LitSlash,
    LitPercent,
    LitDigits,
    LitAt,
    LitArithVarLike,

    // -- Op --
    OpNewline,
    OpAmp,
    OpPipe,
    OpPipeAmp,
    OpDAmp,
    OpDPipe,
    OpSemi,
    OpDSemi,
    OpLParen,
    OpRParen,
    OpDLeftParen,
    OpDRightParen,

    // -- Redir --
    RedirLess,
    RedirGreat,
    RedirDLess,
    RedirTLess,
    RedirDGreat,
    RedirGreatAnd,
    RedirLessAnd,
    RedirDLessDash,
    RedirLessGreat,
    RedirClobber,

    // -- Left --
    LeftDoubleQuote,
    LeftSingleQuote,
    LeftBacktick,
    LeftCommandSub,
    LeftVarSub,
    LeftArithSub,
    LeftArithSub2,
    LeftDollarDoubleQuote,
    LeftDollarSingleQuote,
    LeftProcSubIn,
    LeftProcSubOut,

    // -- Right --
    RightDoubleQuote,
    RightSingleQuote,
    RightBacktick,
    RightCommandSub,
    RightVarSub,
    RightArithSub,
    RightArithSub2,
    RightDollarDoubleQuote,
    RightDollarSingleQuote,
    RightProcSubIn,
    RightProcSubOut,
    RightSubshell,
    RightFuncDef,
    RightCasePat,
    RightArrayLiteral,

    // -- VSub --
    VSubName,
    VSubNumber,
    VSubBang,
    VSubAt,
    VSubPound,
    VSubDollar,
    VSubAmp,
    VSubStar,
    VSubHyphen,
    VSubQMark,

    // -- VTest --
    VTestColonHyphen,
    VTestHyphen,
    VTestColonEquals,
    VTestEquals,
    VTestColonQMark,
    VTestQMark,
    VTestColonPlus,
    VTestPlus,

    // -- VOp1 --
    VOp1Percent,
    VOp1DPercent,
    VOp1Pound,
    VOp1DPound,
    VOp1Caret,
    VOp1DCaret,
    VOp1Comma,
    VOp1DComma,

    // -- VOp2 --
    VOp2Slash,
    VOp2Colon,
    VOp2LBracket,
    VOp2RBracket,

    // -- Arith --
    ArithSemi,
    ArithComma,
    ArithPlus,
    ArithMinus,
    ArithStar,
    ArithSlash,
    ArithPercent,
    ArithDPlus,
    ArithDMinus,
    ArithDStar,
    ArithLParen,
    ArithRParen,
    ArithLBracket,
    ArithRBracket,
    ArithRBrace,
    ArithQMark,
    ArithColon,
    ArithLessEqual,
    ArithLess,
    ArithGreatEqual,
    ArithGreat,
    ArithDEqual,
    ArithNEqual,
    ArithDAmp,
    ArithDPipe,
    ArithBang,
    ArithDGreat,
    ArithDLess,
    ArithAmp,
    ArithPipe,
    ArithCaret,
    ArithTilde,
    ArithEqual,
    ArithPlusEqual,
    ArithMinusEqual,
    ArithStarEqual,
    ArithSlashEqual,
    ArithPercentEqual,
    ArithDGreatEqual,
    ArithDLessEqual,
    ArithAmpEqual,
    ArithPipeEqual,
    ArithCaretEqual,

    // -- Node --
    NodePostDPlus,
    NodePostDMinus,
    NodeUnaryPlus,
    NodeUnaryMinus,
    NodeArithVar,
    NodeCommand,
    NodeAssign,
    NodeAndOr,
    NodeBlock,
    NodeSubshell,
    NodeFork,
    NodeFuncDef,
    NodeForEach,
    NodeForExpr,
    NodeNoOp,
    NodeUnaryExpr,
    NodeBinaryExpr,
    NodeTernaryExpr,
    NodeFuncCall,
    NodeConstInt,

    // -- Word --
    WordCompound,

    // -- KW --
    KWDLeftBracket,
    KWBang,
    KWFor,
    KWWhile,
    KWUntil,
    KWDo,
    KWDone,
    KWIn,
    KWCase,
    KWEsac,
    KWIf,
    KWFi,
    KWThen,
    KWElse,
    KWElif,
    KWFunction,

    // -- Assign --
    AssignDeclare,
    AssignExport,
    AssignLocal,
    AssignReadonly,

    // -- BoolUnary (Str) --
    BoolUnaryZ,
    BoolUnaryN,
    // -- BoolUnary (Other) --
    BoolUnaryO,
    BoolUnaryV,
    BoolUnaryBigR,
    // -- BoolUnary (Path), one Id per UNARY_FILE_CHARS letter --
    BoolUnaryA,
    BoolUnaryB,
    BoolUnaryC,
    BoolUnaryD,
    BoolUnaryE,
    BoolUnaryF,
    BoolUnaryG,
    BoolUnaryH,
    BoolUnaryL,
    BoolUnaryP,
    BoolUnaryR,
    BoolUnaryS,
    BoolUnaryBigS,
    BoolUnaryT,
    BoolUnaryU,
    BoolUnaryW,
    BoolUnaryX,
    BoolUnaryBigO,
    BoolUnaryBigG,
    BoolUnaryBigN,

    // -- BoolBinary (Str) --
    BoolBinaryEqual,
    BoolBinaryDEqual,
    BoolBinaryNEqual,
    BoolBinaryEqualTilde,
    // -- BoolBinary (Path) --
    BoolBinaryEf,
    BoolBinaryNt,
    BoolBinaryOt,
    // -- BoolBinary (Int) --
    BoolBinaryEq,
    BoolBinaryNe,
    BoolBinaryGt,
    BoolBinaryGe,
    BoolBinaryLt,
    BoolBinaryLe,
}

impl Id {
    /// Human-readable name for diagnostics, e.g. `"Redir_DGreat"`.
    #[must_use]
    pub fn name(self) -> String {
        registry().name_of(self)
    }
}

/// Look up the [`Kind`] of an [`Id`]. Total over every `Id` the lexer can
/// legally emit.
#[must_use]
pub fn kind_of(id: Id) -> Kind {
    registry().kind_of(id)
}

/// Human-readable name for an `Id`, e.g. `Redir_DGreat`.
#[must_use]
pub fn name_of(id: Id) -> String {
    registry().name_of(id)
}

/// Operand domain for a boolean unary/binary operator, or a logical
/// connective (`&&`, `||`, `!`), which is classified [`OperandType::Undefined`].
#[must_use]
pub fn operand_type_of(id: Id) -> OperandType {
    registry().operand_type_of(id)
}

/// Redirection form for a [`Kind::Redir`] id.
#[must_use]
pub fn redir_type_of(id: Id) -> Option<RedirType> {
    registry().redir_type_of(id)
}

/// Default file descriptor a redirection applies to when none is given
/// explicitly (e.g. `>` defaults to fd 1).
#[must_use]
pub fn default_fd_of(id: Id) -> Option<u8> {
    registry().default_fd_of(id)
}

/// Ordered `(spelling, Id)` pairs for boolean unary operators, for the
/// character lexer to consult.
#[must_use]
pub fn bool_unary_table() -> &'static [(&'static str, Id)] {
    &BOOL_UNARY_TABLE
}

/// Ordered `(spelling, Id)` pairs for boolean binary operators.
#[must_use]
pub fn bool_binary_table() -> &'static [(&'static str, Id)] {
    &BOOL_BINARY_TABLE
}

/// Ordered `(spelling, Id)` pairs for `${var:-op}`-style var-test operators.
#[must_use]
pub fn vtest_table() -> &'static [(&'static str, Id)] {
    &VTEST_TABLE
}

/// Ordered `(spelling, Id)` pairs for the `VOp1` family of var-sub operators
/// (`%`, `%%`, `#`, `##`, `^`, `^^`, `,`, `,,`).
#[must_use]
pub fn vop1_table() -> &'static [(&'static str, Id)] {
    &VOP1_TABLE
}

/// Ordered `(spelling, Id)` pairs for the `VOp2` family of var-sub operators
/// (`/pat/rep`, `:off:len`, `[@]`/`[expr]`).
#[must_use]
pub fn vop2_table() -> &'static [(&'static str, Id)] {
    &VOP2_TABLE
}

/// Ordered `(spelling, Id)` pairs for arithmetic-mode operators.
#[must_use]
pub fn arith_table() -> &'static [(&'static str, Id)] {
    &ARITH_TABLE
}

const BOOL_UNARY_TABLE: [(&str, Id); 25] = [
    ("-z", Id::BoolUnaryZ),
    ("-n", Id::BoolUnaryN),
    ("-o", Id::BoolUnaryO),
    ("-v", Id::BoolUnaryV),
    ("-R", Id::BoolUnaryBigR),
    ("-a", Id::BoolUnaryA),
    ("-b", Id::BoolUnaryB),
    ("-c", Id::BoolUnaryC),
    ("-d", Id::BoolUnaryD),
    ("-e", Id::BoolUnaryE),
    ("-f", Id::BoolUnaryF),
    ("-g", Id::BoolUnaryG),
    ("-h", Id::BoolUnaryH),
    ("-L", Id::BoolUnaryL),
    ("-p", Id::BoolUnaryP),
    ("-r", Id::BoolUnaryR),
    ("-s", Id::BoolUnaryS),
    ("-S", Id::BoolUnaryBigS),
    ("-t", Id::BoolUnaryT),
    ("-u", Id::BoolUnaryU),
    ("-w", Id::BoolUnaryW),
    ("-x", Id::BoolUnaryX),
    ("-O", Id::BoolUnaryBigO),
    ("-G", Id::BoolUnaryBigG),
    ("-N", Id::BoolUnaryBigN),
];

const BOOL_BINARY_TABLE: [(&str, Id); 13] = [
    ("=", Id::BoolBinaryEqual),
    ("==", Id::BoolBinaryDEqual),
    ("!=", Id::BoolBinaryNEqual),
    ("=~", Id::BoolBinaryEqualTilde),
    ("-ef", Id::BoolBinaryEf),
    ("-nt", Id::BoolBinaryNt),
    ("-ot", Id::BoolBinaryOt),
    ("-eq", Id::BoolBinaryEq),
    ("-ne", Id::BoolBinaryNe),
    ("-gt", Id::BoolBinaryGt),
    ("-ge", Id::BoolBinaryGe),
    ("-lt", Id::BoolBinaryLt),
    ("-le", Id::BoolBinaryLe),
];

const VTEST_TABLE: [(&str, Id); 8] = [
    (":-", Id::VTestColonHyphen),
    ("-", Id::VTestHyphen),
    (":=", Id::VTestColonEquals),
    ("=", Id::VTestEquals),
    (":?", Id::VTestColonQMark),
    ("?", Id::VTestQMark),
    (":+", Id::VTestColonPlus),
    ("+", Id::VTestPlus),
];

const VOP1_TABLE: [(&str, Id); 8] = [
    ("%", Id::VOp1Percent),
    ("%%", Id::VOp1DPercent),
    ("#", Id::VOp1Pound),
    ("##", Id::VOp1DPound),
    ("^", Id::VOp1Caret),
    ("^^", Id::VOp1DCaret),
    (",", Id::VOp1Comma),
    (",,", Id::VOp1DComma),
];

const VOP2_TABLE: [(&str, Id); 4] = [
    ("/", Id::VOp2Slash),
    (":", Id::VOp2Colon),
    ("[", Id::VOp2LBracket),
    ("]", Id::VOp2RBracket),
];

const ARITH_TABLE: [(&str, Id); 43] = [
    (";", Id::ArithSemi),
    (",", Id::ArithComma),
    ("+", Id::ArithPlus),
    ("-", Id::ArithMinus),
    ("*", Id::ArithStar),
    ("/", Id::ArithSlash),
    ("%", Id::ArithPercent),
    ("++", Id::ArithDPlus),
    ("--", Id::ArithDMinus),
    ("**", Id::ArithDStar),
    ("(", Id::ArithLParen),
    (")", Id::ArithRParen),
    ("[", Id::ArithLBracket),
    ("]", Id::ArithRBracket),
    ("}", Id::ArithRBrace),
    ("?", Id::ArithQMark),
    (":", Id::ArithColon),
    ("<=", Id::ArithLessEqual),
    ("<", Id::ArithLess),
    (">=", Id::ArithGreatEqual),
    (">", Id::ArithGreat),
    ("==", Id::ArithDEqual),
    ("!=", Id::ArithNEqual),
    ("&&", Id::ArithDAmp),
    ("||", Id::ArithDPipe),
    ("!", Id::ArithBang),
    (">>", Id::ArithDGreat),
    ("<<", Id::ArithDLess),
    ("&", Id::ArithAmp),
    ("|", Id::ArithPipe),
    ("^", Id::ArithCaret),
    ("~", Id::ArithTilde),
    ("=", Id::ArithEqual),
    ("+=", Id::ArithPlusEqual),
    ("-=", Id::ArithMinusEqual),
    ("*=", Id::ArithStarEqual),
    ("/=", Id::ArithSlashEqual),
    ("%=", Id::ArithPercentEqual),
    (">>=", Id::ArithDGreatEqual),
    ("<<=", Id::ArithDLessEqual),
    ("&=", Id::ArithAmpEqual),
    ("|=", Id::ArithPipeEqual),
    ("^=", Id::ArithCaretEqual),
];

/// Frozen, process-wide registry. Built once on first use.
struct Registry;

fn registry() -> &'static Registry {
    static INSTANCE: OnceLock<Registry> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        tracing::debug!("building Id/Kind registry");
        Registry
    })
}

impl Registry {
    fn name_of(&self, id: Id) -> String {
        format!("{:?}", id)
    }

    fn kind_of(&self, id: Id) -> Kind {
        use Id::*;
        match id {
            UndefinedTok => Kind::Undefined,
            UnknownTok => Kind::Unknown,
            EofReal | EofRParen | EofBacktick => Kind::Eof,
            IgnoredLineCont | IgnoredSpace | IgnoredComment => Kind::Ignored,
            WSSpace => Kind::WS,
            LitChars | LitVarLike | LitOther | LitEscapedChar | LitLBrace | LitRBrace
            | LitComma | LitDRightBracket | LitTilde | LitPound | LitSlash | LitPercent
            | LitDigits | LitAt | LitArithVarLike => Kind::Lit,
            OpNewline | OpAmp | OpPipe | OpPipeAmp | OpDAmp | OpDPipe | OpSemi | OpDSemi
            | OpLParen | OpRParen | OpDLeftParen | OpDRightParen => Kind::Op,
            RedirLess | RedirGreat | RedirDLess | RedirTLess | RedirDGreat | RedirGreatAnd
            | RedirLessAnd | RedirDLessDash | RedirLessGreat | RedirClobber => Kind::Redir,
            LeftDoubleQuote | LeftSingleQuote | LeftBacktick | LeftCommandSub | LeftVarSub
            | LeftArithSub | LeftArithSub2 | LeftDollarDoubleQuote | LeftDollarSingleQuote
            | LeftProcSubIn | LeftProcSubOut => Kind::Left,
            RightDoubleQuote | RightSingleQuote | RightBacktick | RightCommandSub
            | RightVarSub | RightArithSub | RightArithSub2 | RightDollarDoubleQuote
            | RightDollarSingleQuote | RightProcSubIn | RightProcSubOut | RightSubshell
            | RightFuncDef | RightCasePat | RightArrayLiteral => Kind::Right,
            VSubName | VSubNumber | VSubBang | VSubAt | VSubPound | VSubDollar | VSubAmp
            | VSubStar | VSubHyphen | VSubQMark => Kind::VSub,
            VTestColonHyphen | VTestHyphen | VTestColonEquals | VTestEquals | VTestColonQMark
            | VTestQMark | VTestColonPlus | VTestPlus => Kind::VTest,
            VOp1Percent | VOp1DPercent | VOp1Pound | VOp1DPound | VOp1Caret | VOp1DCaret
            | VOp1Comma | VOp1DComma => Kind::VOp1,
            VOp2Slash | VOp2Colon | VOp2LBracket | VOp2RBracket => Kind::VOp2,
            ArithSemi | ArithComma | ArithPlus | ArithMinus | ArithStar | ArithSlash
            | ArithPercent | ArithDPlus | ArithDMinus | ArithDStar | ArithLParen
            | ArithRParen | ArithLBracket | ArithRBracket | ArithRBrace | ArithQMark
            | ArithColon | ArithLessEqual | ArithLess | ArithGreatEqual | ArithGreat
            | ArithDEqual | ArithNEqual | ArithDAmp | ArithDPipe | ArithBang | ArithDGreat
            | ArithDLess | ArithAmp | ArithPipe | ArithCaret | ArithTilde | ArithEqual
            | ArithPlusEqual | ArithMinusEqual | ArithStarEqual | ArithSlashEqual
            | ArithPercentEqual | ArithDGreatEqual | ArithDLessEqual | ArithAmpEqual
            | ArithPipeEqual | ArithCaretEqual => Kind::Arith,
            NodePostDPlus | NodePostDMinus | NodeUnaryPlus | NodeUnaryMinus | NodeArithVar
            | NodeCommand | NodeAssign | NodeAndOr | NodeBlock | NodeSubshell | NodeFork
            | NodeFuncDef | NodeForEach | NodeForExpr | NodeNoOp | NodeUnaryExpr
            | NodeBinaryExpr | NodeTernaryExpr | NodeFuncCall | NodeConstInt => Kind::Node,
            WordCompound => Kind::Word,
            KWDLeftBracket | KWBang | KWFor | KWWhile | KWUntil | KWDo | KWDone | KWIn
            | KWCase | KWEsac | KWIf | KWFi | KWThen | KWElse | KWElif | KWFunction => Kind::KW,
            AssignDeclare | AssignExport | AssignLocal | AssignReadonly => Kind::Assign,
            BoolUnaryZ | BoolUnaryN | BoolUnaryO | BoolUnaryV | BoolUnaryBigR | BoolUnaryA
            | BoolUnaryB | BoolUnaryC | BoolUnaryD | BoolUnaryE | BoolUnaryF | BoolUnaryG
            | BoolUnaryH | BoolUnaryL | BoolUnaryP | BoolUnaryR | BoolUnaryS | BoolUnaryBigS
            | BoolUnaryT | BoolUnaryU | BoolUnaryW | BoolUnaryX | BoolUnaryBigO | BoolUnaryBigG
            | BoolUnaryBigN => Kind::BoolUnary,
            BoolBinaryEqual | BoolBinaryDEqual | BoolBinaryNEqual | BoolBinaryEqualTilde
            | BoolBinaryEf | BoolBinaryNt | BoolBinaryOt | BoolBinaryEq | BoolBinaryNe
            | BoolBinaryGt | BoolBinaryGe | BoolBinaryLt | BoolBinaryLe => Kind::BoolBinary,
        }
    }

    fn operand_type_of(&self, id: Id) -> OperandType {
        use Id::*;
        match id {
            // logical connectives reused inside `[[`
            OpDAmp | OpDPipe | KWBang => OperandType::Undefined,
            RedirLess | RedirGreat => OperandType::Str,

            BoolUnaryZ | BoolUnaryN => OperandType::Str,
            BoolUnaryO | BoolUnaryV | BoolUnaryBigR => OperandType::Other,
            BoolUnaryA | BoolUnaryB | BoolUnaryC | BoolUnaryD | BoolUnaryE | BoolUnaryF
            | BoolUnaryG | BoolUnaryH | BoolUnaryL | BoolUnaryP | BoolUnaryR | BoolUnaryS
            | BoolUnaryBigS | BoolUnaryT | BoolUnaryU | BoolUnaryW | BoolUnaryX | BoolUnaryBigO
            | BoolUnaryBigG | BoolUnaryBigN => OperandType::Path,

            BoolBinaryEqual | BoolBinaryDEqual | BoolBinaryNEqual | BoolBinaryEqualTilde => {
                OperandType::Str
            }
            BoolBinaryEf | BoolBinaryNt | BoolBinaryOt => OperandType::Path,
            BoolBinaryEq | BoolBinaryNe | BoolBinaryGt | BoolBinaryGe | BoolBinaryLt
            | BoolBinaryLe => OperandType::Int,

            _ => OperandType::Undefined,
        }
    }

    fn redir_type_of(&self, id: Id) -> Option<RedirType> {
        use Id::*;
        match id {
            RedirLess | RedirGreat | RedirDGreat | RedirClobber | RedirLessGreat => {
                Some(RedirType::Path)
            }
            RedirGreatAnd | RedirLessAnd => Some(RedirType::Desc),
            RedirDLess | RedirDLessDash | RedirTLess => Some(RedirType::Str),
            _ => None,
        }
    }

    fn default_fd_of(&self, id: Id) -> Option<u8> {
        use Id::*;
        match id {
            RedirLess | RedirLessAnd | RedirDLess | RedirDLessDash | RedirTLess => Some(0),
            RedirGreat | RedirDGreat | RedirClobber | RedirLessGreat | RedirGreatAnd => Some(1),
            _ => None,
        }
    }
}
