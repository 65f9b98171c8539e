#![allow(clippy::module_inception)]

use std::{fs::File, path::Path};

use crate::{
    config::ScannerConfig,
    errors::errors::ScanError,
    lexer::{
        lexer::{collect_tokens, Scanner},
        tokens::Token,
    },
};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Opens `path` and scans it to the end. The returned tokens end with `EOF`.
pub fn scan_file(path: impl AsRef<Path>, config: ScannerConfig) -> Result<Vec<Token>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;

    let mut scanner = Scanner::with_config(file, config);
    let tokens = collect_tokens(&mut scanner);

    scanner.finish()?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use crate::{config::ScannerConfig, errors::errors::ScanError, lexer::tokens::TokenKind};

    #[test]
    fn test_scan_file() {
        let tokens = super::scan_file("tests/sample.ccx", ScannerConfig::default()).unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
    }

    #[test]
    fn test_scan_missing_file() {
        let result = super::scan_file("tests/does_not_exist.ccx", ScannerConfig::default());

        assert!(matches!(result, Err(ScanError::Open { .. })));
    }
}
