use std::io::{self, BufReader, Bytes, Read};

use tracing::{debug, trace, warn};

use crate::{config::ScannerConfig, errors::errors::ScanError, MK_TOKEN};

use super::tokens::{is_operator_char, is_reserved, Token, TokenKind};

/// Pull-based scanner over a byte source.
///
/// The scanner keeps one byte of lookahead in `current` (`None` once the
/// source is exhausted) and can peek one byte further for the `//`, `/*` and
/// `*/` decisions. Lexemes are accumulated in a buffer that is reused for
/// every token.
pub struct Scanner<R: Read> {
    bytes: Bytes<BufReader<R>>,
    current: Option<u8>,
    peeked: Option<Option<u8>>,
    buffer: String,
    buffered: usize,
    truncated: bool,
    config: ScannerConfig,
    error: Option<io::Error>,
}

impl<R: Read> Scanner<R> {
    pub fn new(source: R) -> Scanner<R> {
        Scanner::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(source: R, config: ScannerConfig) -> Scanner<R> {
        let mut scanner = Scanner {
            bytes: BufReader::new(source).bytes(),
            current: None,
            peeked: None,
            buffer: String::new(),
            buffered: 0,
            truncated: false,
            config,
            error: None,
        };

        scanner.current = scanner.read_byte();
        scanner
    }

    /// The read error that ended scanning early, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Produces exactly one token. Once the source is exhausted every call
    /// returns an `EOF` token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.current {
            None => MK_TOKEN!(TokenKind::EOF, String::new()),
            Some(b'/') => self.lex_slash(),
            Some(b'"') => self.lex_quoted(b'"', TokenKind::String),
            Some(b'\'') => self.lex_quoted(b'\'', TokenKind::CharLiteral),
            Some(byte) if byte.is_ascii_alphabetic() || byte == b'_' => self.lex_word(),
            Some(byte) if byte.is_ascii_digit() => self.lex_number(),
            Some(byte) if is_operator_char(byte) => self.lex_operator(),
            Some(byte) => {
                self.push(byte);
                self.bump();
                debug!(byte, "unrecognised byte");
                self.emit(TokenKind::Unknown)
            }
        };

        trace!(kind = %token.kind, value = ?token.value, "scanned token");
        token
    }

    /// Releases the source. Returns the read error that was folded into
    /// end-of-input while scanning, if there was one.
    pub fn finish(self) -> Result<(), ScanError> {
        match self.error {
            Some(error) => Err(ScanError::from(error)),
            None => Ok(()),
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }

        loop {
            match self.bytes.next() {
                Some(Ok(byte)) => return Some(byte),
                Some(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Some(Err(e)) => {
                    warn!(error = %e, "read failed, treating as end of input");
                    self.error = Some(e);
                    return None;
                }
                None => return None,
            }
        }
    }

    fn bump(&mut self) {
        self.current = match self.peeked.take() {
            Some(byte) => byte,
            None => self.read_byte(),
        };
    }

    fn peek(&mut self) -> Option<u8> {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_byte());
        }

        self.peeked.flatten()
    }

    fn push(&mut self, byte: u8) {
        if let Some(limit) = self.config.max_lexeme_len {
            if self.buffered >= limit.get() {
                if !self.truncated {
                    warn!(limit = limit.get(), "lexeme truncated");
                    self.truncated = true;
                }
                return;
            }
        }

        self.buffer.push(byte as char);
        self.buffered += 1;
    }

    fn emit(&mut self, kind: TokenKind) -> Token {
        let value = self.buffer.clone();
        self.reset_buffer();
        MK_TOKEN!(kind, value)
    }

    fn emit_comment(&mut self, kind: TokenKind) -> Token {
        let value = self.buffer.clone();
        self.reset_buffer();
        MK_TOKEN!(kind, value.clone(), Some(value))
    }

    fn reset_buffer(&mut self) {
        self.buffer.clear();
        self.buffered = 0;
        self.truncated = false;
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.current {
            self.bump();
        }
    }

    fn lex_slash(&mut self) -> Token {
        match self.peek() {
            Some(b'/') => {
                self.bump();
                self.bump();

                while let Some(byte) = self.current {
                    if byte == b'\n' {
                        break;
                    }
                    self.push(byte);
                    self.bump();
                }

                self.emit_comment(TokenKind::Comment)
            }
            Some(b'*') => {
                self.bump();
                self.bump();
                self.push(b'/');
                self.push(b'*');
                self.lex_block_comment()
            }
            _ => {
                // Only the slash is consumed; the next byte starts the next token.
                self.push(b'/');
                self.bump();
                self.emit(TokenKind::Operator)
            }
        }
    }

    fn lex_block_comment(&mut self) -> Token {
        loop {
            let current = self.current;
            match current {
                None => {
                    debug!(partial = ?self.buffer, "unterminated block comment");
                    return self.emit(TokenKind::Unknown);
                }
                Some(b'*') if self.peek() == Some(b'/') => {
                    self.push(b'*');
                    self.push(b'/');
                    self.bump();
                    self.bump();
                    return self.emit_comment(TokenKind::MultilineComment);
                }
                Some(byte) => {
                    self.push(byte);
                    self.bump();
                }
            }
        }
    }

    fn lex_quoted(&mut self, quote: u8, kind: TokenKind) -> Token {
        self.push(quote);
        self.bump();

        loop {
            match self.current {
                None => {
                    debug!(%kind, partial = ?self.buffer, "unterminated literal");
                    return self.emit(TokenKind::Unknown);
                }
                Some(byte) if byte == quote => {
                    self.push(byte);
                    self.bump();
                    return self.emit(kind);
                }
                Some(byte) => {
                    self.push(byte);
                    self.bump();
                }
            }
        }
    }

    fn lex_word(&mut self) -> Token {
        while let Some(byte) = self.current {
            if !(byte.is_ascii_alphanumeric() || byte == b'_') {
                break;
            }
            self.push(byte);
            self.bump();
        }

        // A truncated word is longer than the limit, so never a prefix match.
        if !self.truncated && is_reserved(&self.buffer) {
            self.emit(TokenKind::Keyword)
        } else {
            self.emit(TokenKind::Identifier)
        }
    }

    fn lex_number(&mut self) -> Token {
        // Inside `#...#` letters are extended digits (`16#FF#`).
        let mut in_based_digits = false;

        while let Some(byte) = self.current {
            let accepted = match byte {
                b'#' => {
                    in_based_digits = !in_based_digits;
                    true
                }
                b'0'..=b'9' | b'.' => true,
                _ => in_based_digits && (byte.is_ascii_alphabetic() || byte == b'_'),
            };

            if !accepted {
                break;
            }
            self.push(byte);
            self.bump();
        }

        self.emit(TokenKind::NumericLiteral)
    }

    fn lex_operator(&mut self) -> Token {
        while let Some(byte) = self.current {
            if !is_operator_char(byte) {
                break;
            }
            self.push(byte);
            self.bump();
        }

        self.emit(TokenKind::Operator)
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();

        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans an in-memory source. The last token is always `EOF`.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_config(source, ScannerConfig::default())
}

pub fn tokenize_with_config(source: &str, config: ScannerConfig) -> Vec<Token> {
    let mut scanner = Scanner::with_config(source.as_bytes(), config);
    collect_tokens(&mut scanner)
}

/// Drains `scanner` up to and including the `EOF` token.
pub fn collect_tokens<R: Read>(scanner: &mut Scanner<R>) -> Vec<Token> {
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
