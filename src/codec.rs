//! Reading and rewriting the version declaration file.
//!
//! The accepted shape is one or more named scopes wrapping a single quoted
//! `VERSION` constant and nothing else:
//!
//! ```text
//! # frozen_string_literal: true
//!
//! module Foo
//!   VERSION = "1.2.3"
//! end
//! ```
//!
//! Parsing splits the text into three spans. `prefix` runs up to and including
//! the opening quote, `value` is the literal's contents and `postfix` starts
//! right after the closing quote. Rendering only ever replaces `value`, so a
//! rewrite leaves every other byte of the file untouched.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Version;
use crate::error::{BumpError, Result};

const QUOTE: char = '"';
const CONSTANT: &str = "VERSION";

/// Why a text could not be read as a version declaration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    InvalidVersion(String),
}

impl ParseError {
    /// Attach the file path, producing the crate error
    pub fn into_error(self, path: &Path) -> BumpError {
        match self {
            ParseError::Malformed(reason) => BumpError::malformed(path, reason),
            ParseError::InvalidVersion(reason) => BumpError::InvalidVersionFormat(format!(
                "{} (in '{}')",
                reason,
                path.display()
            )),
        }
    }
}

/// The version file split around its version literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDeclaration {
    prefix: String,
    value: String,
    postfix: String,
    scope: String,
    version: Version,
}

impl VersionDeclaration {
    /// Parse the full text of a version file
    pub fn parse(text: &str) -> std::result::Result<Self, ParseError> {
        let spans = Scanner::new(text).scan()?;

        let value = &text[spans.value_start..spans.value_end];
        let version = Version::parse(value).map_err(|e| match e {
            BumpError::InvalidVersionFormat(reason) => ParseError::InvalidVersion(reason),
            other => ParseError::InvalidVersion(other.to_string()),
        })?;

        Ok(VersionDeclaration {
            prefix: text[..spans.value_start].to_string(),
            value: value.to_string(),
            postfix: text[spans.value_end + QUOTE.len_utf8()..].to_string(),
            scope: spans.scope,
            version,
        })
    }

    /// Text with the literal replaced by `version`
    pub fn render(&self, version: &Version) -> String {
        let literal = version.to_string().replace(QUOTE, "\\\"");
        let mut out =
            String::with_capacity(self.prefix.len() + literal.len() + 1 + self.postfix.len());
        out.push_str(&self.prefix);
        out.push_str(&literal);
        out.push(QUOTE);
        out.push_str(&self.postfix);
        out
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Everything up to and including the opening quote
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The literal's contents as written
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Everything after the closing quote
    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Enclosing scope path, e.g. `Foo::Bar`
    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// A located version file and its parsed declaration
#[derive(Debug, Clone)]
pub struct VersionFile {
    pub path: PathBuf,
    pub declaration: VersionDeclaration,
}

impl VersionFile {
    /// Read and parse the file at `path`
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let declaration = VersionDeclaration::parse(&text).map_err(|e| e.into_error(&path))?;

        Ok(VersionFile { path, declaration })
    }

    pub fn version(&self) -> Version {
        self.declaration.version()
    }

    /// Rewrite the file in place with `version`
    pub fn write(&self, version: &Version) -> Result<()> {
        fs::write(&self.path, self.declaration.render(version))?;
        Ok(())
    }
}

struct Spans {
    value_start: usize,
    value_end: usize,
    scope: String,
}

/// Cursor over the file text.
///
/// Every token the scanner matches is ASCII, so `pos` always sits on a char
/// boundary.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner { text, pos: 0 }
    }

    fn scan(mut self) -> std::result::Result<Spans, ParseError> {
        let mut scopes = Vec::new();
        loop {
            self.skip_trivia();
            if self.eat_keyword("module") || self.eat_keyword("class") {
                scopes.push(self.scope_name()?);
            } else {
                break;
            }
        }
        if scopes.is_empty() {
            return Err(self.malformed("expected an enclosing 'module' or 'class'"));
        }

        if !self.eat_keyword(CONSTANT) {
            return Err(self.malformed("expected the VERSION constant as the only statement"));
        }
        self.skip_blanks();
        if !self.eat("=") || self.rest().starts_with('=') {
            return Err(self.malformed("expected '=' after VERSION"));
        }
        self.skip_blanks();
        if !self.eat("\"") {
            return Err(self.malformed("expected a double-quoted version string"));
        }

        let value_start = self.pos;
        let value_end = self.closing_quote()?;
        self.pos = value_end + QUOTE.len_utf8();
        self.eat(".freeze");

        for _ in &scopes {
            self.skip_trivia();
            if !self.eat_keyword("end") {
                return Err(self.malformed("unexpected content after the VERSION declaration"));
            }
        }
        self.skip_trivia();
        if !self.rest().is_empty() {
            return Err(self.malformed("unexpected content after the enclosing scope"));
        }

        Ok(Spans {
            value_start,
            value_end,
            scope: scopes.join("::"),
        })
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Match `word` only when it is not the start of a longer identifier
    fn eat_keyword(&mut self, word: &str) -> bool {
        let rest = self.rest();
        if !rest.starts_with(word) {
            return false;
        }
        match rest[word.len()..].chars().next() {
            Some(c) if is_ident_char(c) => false,
            _ => {
                self.pos += word.len();
                true
            }
        }
    }

    /// Whitespace, newlines, `;` separators and `#` comments
    fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            let Some(c) = rest.chars().next() else {
                return;
            };
            if c.is_whitespace() || c == ';' {
                self.pos += c.len_utf8();
            } else if c == '#' {
                self.pos += rest.find('\n').unwrap_or(rest.len());
            } else {
                return;
            }
        }
    }

    /// Spaces and tabs on the current line
    fn skip_blanks(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches([' ', '\t']);
        self.pos += rest.len() - trimmed.len();
    }

    /// Constant path after `module`/`class`, e.g. `Foo::Bar`
    fn scope_name(&mut self) -> std::result::Result<String, ParseError> {
        let before = self.pos;
        self.skip_blanks();
        if self.pos == before {
            return Err(self.malformed("expected a scope name"));
        }

        let start = self.pos;
        loop {
            let rest = self.rest();
            match rest.chars().next() {
                Some(c) if c.is_ascii_uppercase() => {}
                _ => return Err(self.malformed("expected a capitalized scope name")),
            }
            let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
            self.pos += len;
            if !self.eat("::") {
                break;
            }
        }
        Ok(self.text[start..self.pos].to_string())
    }

    /// Byte offset of the unescaped quote closing the literal
    fn closing_quote(&self) -> std::result::Result<usize, ParseError> {
        let mut escaped = false;
        for (offset, c) in self.rest().char_indices() {
            match c {
                '\n' => break,
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                QUOTE => return Ok(self.pos + offset),
                _ => {}
            }
        }
        Err(self.malformed("unterminated version string"))
    }

    fn malformed(&self, reason: &str) -> ParseError {
        let line = self.text[..self.pos].matches('\n').count() + 1;
        ParseError::Malformed(format!("{} (line {})", reason, line))
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
