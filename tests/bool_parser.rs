//! End-to-end `[[ ... ]]` scenarios, driven entirely through the public API
//! with a small `VecWordReader` test double standing in for a real lexer.

use shwords::{
    BoolNode, BoolParser, CompoundWord, Id, ParserConfig, PartVec, Span, Token, VarSub, Word,
    WordPart, WordReader,
};
use std::collections::VecDeque;

fn lit(id: Id, s: &str) -> Token {
    Token::new(id, s, Span::DUMMY)
}

fn word_one(id: Id, s: &str) -> Word {
    Word::from(shwords::CompoundWord::one_literal(lit(id, s)))
}

fn plain_word(s: &str) -> Word {
    word_one(Id::LitChars, s)
}

struct VecWordReader {
    words: VecDeque<Word>,
}

impl VecWordReader {
    fn new(words: Vec<Word>) -> Self {
        let mut words = VecDeque::from(words);
        words.push_back(word_one(Id::LitDRightBracket, "]]"));
        Self { words }
    }
}

impl WordReader for VecWordReader {
    fn read_word(&mut self, _mode: shwords::LexMode) -> Option<Word> {
        self.words.pop_front()
    }

    fn error(&self) -> Vec<shwords::ErrorContext> {
        Vec::new()
    }
}

fn parse(words: Vec<Word>) -> Option<BoolNode> {
    let mut reader = VecWordReader::new(words);
    let mut parser = BoolParser::new(&mut reader, ParserConfig::default());
    parser.parse()
}

/// `[[ foo ]]` — a lone word is the implicit `-n` test.
#[test]
fn single_word_is_implicit_string_nonempty_test() {
    let node = parse(vec![plain_word("foo")]).unwrap();
    assert_eq!(node, BoolNode::WordLeaf(plain_word("foo")));
}

/// `[[ -f foo ]]` — file-test unary operator.
#[test]
fn file_test_unary_operator() {
    let node = parse(vec![word_one(Id::BoolUnaryF, "-f"), plain_word("foo")]).unwrap();
    assert_eq!(node, BoolNode::Unary(Id::BoolUnaryF, plain_word("foo")));
}

/// `[[ $foo"bar" ]]` — a compound word mixing a bare `VarSub` with a
/// double-quoted literal tail is still a single implicit `-n` test.
#[test]
fn var_sub_and_double_quoted_tail_is_implicit_string_nonempty_test() {
    let word = Word::from(CompoundWord::new([
        WordPart::VarSub(VarSub::new("foo")),
        WordPart::DoubleQuoted(PartVec::from_iter([WordPart::Literal(lit(
            Id::LitChars,
            "bar",
        ))])),
    ]));
    let node = parse(vec![word.clone()]).unwrap();
    assert_eq!(node, BoolNode::WordLeaf(word));
}

/// `[[ -z foo ]]` — string-empty unary operator.
#[test]
fn string_empty_unary_operator() {
    let node = parse(vec![word_one(Id::BoolUnaryZ, "-z"), plain_word("foo")]).unwrap();
    assert_eq!(node, BoolNode::Unary(Id::BoolUnaryZ, plain_word("foo")));
}

/// `[[ foo == bar ]]` — string-equality binary operator.
#[test]
fn string_equality_binary_operator() {
    let node = parse(vec![
        plain_word("foo"),
        word_one(Id::BoolBinaryDEqual, "=="),
        plain_word("bar"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::Binary(Id::BoolBinaryDEqual, plain_word("foo"), plain_word("bar"))
    );
}

/// `[[ 3 -lt 5 ]]` — integer-comparison binary operator.
#[test]
fn integer_comparison_binary_operator() {
    let node = parse(vec![
        plain_word("3"),
        word_one(Id::BoolBinaryLt, "-lt"),
        plain_word("5"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::Binary(Id::BoolBinaryLt, plain_word("3"), plain_word("5"))
    );
}

/// `[[ foo < bar ]]` — the `<`/`>` redirection-operator pun, parsed as a
/// lexicographic string comparison inside `[[ ]]`.
#[test]
fn less_than_puns_as_lexicographic_comparison() {
    let node = parse(vec![
        plain_word("foo"),
        word_one(Id::RedirLess, "<"),
        plain_word("bar"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::Binary(Id::RedirLess, plain_word("foo"), plain_word("bar"))
    );
}

/// `[[ ! -d foo ]]` — logical negation of a unary test.
#[test]
fn negated_unary_test() {
    let node = parse(vec![
        word_one(Id::KWBang, "!"),
        word_one(Id::BoolUnaryD, "-d"),
        plain_word("foo"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::LogicalNot(Box::new(BoolNode::Unary(Id::BoolUnaryD, plain_word("foo"))))
    );
}

/// `[[ -f foo && -f bar ]]` — logical conjunction of two unary tests.
#[test]
fn conjunction_of_unary_tests() {
    let node = parse(vec![
        word_one(Id::BoolUnaryF, "-f"),
        plain_word("foo"),
        word_one(Id::OpDAmp, "&&"),
        word_one(Id::BoolUnaryF, "-f"),
        plain_word("bar"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::LogicalAnd(
            Box::new(BoolNode::Unary(Id::BoolUnaryF, plain_word("foo"))),
            Box::new(BoolNode::Unary(Id::BoolUnaryF, plain_word("bar")))
        )
    );
}

/// `[[ foo == bar || foo == baz ]]` — logical disjunction, right-recursive.
#[test]
fn disjunction_of_equality_tests() {
    let node = parse(vec![
        plain_word("foo"),
        word_one(Id::BoolBinaryDEqual, "=="),
        plain_word("bar"),
        word_one(Id::OpDPipe, "||"),
        plain_word("foo"),
        word_one(Id::BoolBinaryDEqual, "=="),
        plain_word("baz"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::LogicalOr(
            Box::new(BoolNode::Binary(
                Id::BoolBinaryDEqual,
                plain_word("foo"),
                plain_word("bar")
            )),
            Box::new(BoolNode::Binary(
                Id::BoolBinaryDEqual,
                plain_word("foo"),
                plain_word("baz")
            ))
        )
    );
}

/// `[[ ( -f foo || -f bar ) && -r foo ]]` — parenthesized sub-expression
/// combined with a conjunction.
#[test]
fn parenthesized_disjunction_inside_conjunction() {
    let node = parse(vec![
        word_one(Id::OpLParen, "("),
        word_one(Id::BoolUnaryF, "-f"),
        plain_word("foo"),
        word_one(Id::OpDPipe, "||"),
        word_one(Id::BoolUnaryF, "-f"),
        plain_word("bar"),
        word_one(Id::OpRParen, ")"),
        word_one(Id::OpDAmp, "&&"),
        word_one(Id::BoolUnaryR, "-r"),
        plain_word("foo"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::LogicalAnd(
            Box::new(BoolNode::LogicalOr(
                Box::new(BoolNode::Unary(Id::BoolUnaryF, plain_word("foo"))),
                Box::new(BoolNode::Unary(Id::BoolUnaryF, plain_word("bar")))
            )),
            Box::new(BoolNode::Unary(Id::BoolUnaryR, plain_word("foo")))
        )
    );
}

/// `[[ foo =~ ^a+$ ]]` — a statically-known regex right operand validates.
#[test]
fn regex_match_with_valid_static_pattern() {
    let node = parse(vec![
        plain_word("foo"),
        word_one(Id::BoolBinaryEqualTilde, "=~"),
        plain_word("^a+$"),
    ])
    .unwrap();
    assert_eq!(
        node,
        BoolNode::Binary(
            Id::BoolBinaryEqualTilde,
            plain_word("foo"),
            plain_word("^a+$")
        )
    );
}

/// `[[ ]]` — an empty expression is a syntax error, not an implicit `false`.
#[test]
fn empty_brackets_reports_missing_operand() {
    let mut reader = VecWordReader::new(vec![]);
    let mut parser = BoolParser::new(&mut reader, ParserConfig::default());
    assert!(parser.parse().is_none());
    assert!(parser
        .errors()
        .iter()
        .any(|e| e.to_string().contains("missing operand")));
}

/// `[[ foo =~ [ ]]` — an invalid static regex is rejected at parse time.
#[test]
fn regex_match_with_invalid_static_pattern_is_rejected() {
    let mut reader = VecWordReader::new(vec![
        plain_word("foo"),
        word_one(Id::BoolBinaryEqualTilde, "=~"),
        plain_word("["),
    ]);
    let mut parser = BoolParser::new(&mut reader, ParserConfig::default());
    assert!(parser.parse().is_none());
    assert!(parser
        .errors()
        .iter()
        .any(|e| e.to_string().contains("invalid regex")));
}

/// `[[ ( foo ]]` — an unbalanced opening parenthesis never finds its match.
#[test]
fn unbalanced_open_paren_is_rejected() {
    let mut reader = VecWordReader::new(vec![word_one(Id::OpLParen, "("), plain_word("foo")]);
    let mut parser = BoolParser::new(&mut reader, ParserConfig::default());
    assert!(parser.parse().is_none());
    assert!(parser
        .errors()
        .iter()
        .any(|e| e.to_string().contains("unbalanced parenthesis")));
}

/// A stray word left after a complete expression is a parse error, not
/// silently ignored trailing input.
#[test]
fn trailing_word_after_complete_expression_is_rejected() {
    let mut reader = VecWordReader::new(vec![plain_word("foo")]);
    reader.words.insert(1, plain_word("bar"));
    let mut parser = BoolParser::new(&mut reader, ParserConfig::default());
    assert!(parser.parse().is_none());
    assert!(parser
        .errors()
        .iter()
        .any(|e| e.to_string().contains("unexpected extra word")));
}
