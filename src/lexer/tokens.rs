use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("accessor");
        set.insert("and");
        set.insert("array");
        set.insert("begin");
        set.insert("bool");
        set.insert("case");
        set.insert("character");
        set.insert("constant");
        set.insert("else");
        set.insert("elsif");
        set.insert("end");
        set.insert("exit");
        set.insert("function");
        set.insert("if");
        set.insert("in");
        set.insert("integer");
        set.insert("interface");
        set.insert("is");
        set.insert("loop");
        set.insert("module");
        set.insert("mutator");
        set.insert("natural");
        set.insert("null");
        set.insert("of");
        set.insert("or");
        set.insert("other");
        set.insert("out");
        set.insert("positive");
        set.insert("procedure");
        set.insert("range");
        set.insert("return");
        set.insert("struct");
        set.insert("subtype");
        set.insert("then");
        set.insert("type");
        set.insert("when");
        set.insert("while");
        set
    };
}

/// Bytes that make up operator and punctuation runs.
pub const OPERATOR_CHARS: &[u8] = b".()<>=+-*/|&;,:[]";

/// Exact, case-sensitive reserved word check.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

pub fn is_operator_char(byte: u8) -> bool {
    OPERATOR_CHARS.contains(&byte)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    NumericLiteral,
    String,
    CharLiteral,
    Operator,
    Comment,
    MultilineComment,

    // Malformed input of any sort
    Unknown,
    EOF,
}

impl TokenKind {
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::MultilineComment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single scanned token.
///
/// `value` is an owned copy of the lexeme. `annotation` is only set for
/// comment kinds, where it holds the same text as `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub annotation: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {:?}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
