//! CSS-like selector parsing for widget queries.
//!
//! Supports:
//! - `"Checkbox"` - by brick name
//! - `"#terms"` - by test ID
//! - `"[data-testid='terms']"` - by test ID
//! - `"[role='checkbox']"` - by accessible role
//! - `"[aria-label='Accept']"` - by accessible name
//! - `"[aria-checked='mixed']"` - by any exposed ARIA attribute

use thiserror::Error;
use tristate_core::Widget;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by brick name
    Type(String),
    /// Match by test ID (`#foo` or `[data-testid='foo']`)
    TestId(String),
    /// Match by ARIA role name
    Role(String),
    /// Match by accessible name
    Label(String),
    /// Match by an exposed ARIA attribute
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::Type(name) => widget.brick_name() == name,
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Role(role) => widget.accessible_role().as_str() == role,
            Self::Label(label) => widget.accessible_name() == Some(label.as_str()),
            Self::Attribute { name, value } => {
                widget.aria_attributes().get(name) == Some(value.as_str())
            }
        }
    }
}

/// Selector parser.
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();

        let first = self.peek_char().ok_or(SelectorError::Empty)?;
        let selector = match first {
            '#' => {
                self.advance(); // Skip '#'
                Selector::TestId(self.read_identifier()?)
            }
            '[' => self.parse_attribute()?,
            _ if first.is_alphabetic() => Selector::Type(self.read_identifier()?),
            _ => return Err(SelectorError::UnexpectedChar(first)),
        };

        self.skip_whitespace();
        match self.peek_char() {
            None => Ok(selector),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // Skip '['

        let name = self.read_until('=').trim().to_string();
        if name.is_empty() {
            return Err(SelectorError::InvalidAttribute);
        }
        if self.peek_char() != Some('=') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance(); // Skip '='

        let quote = self.peek_char().filter(|c| *c == '\'' || *c == '"');
        if quote.is_some() {
            self.advance();
        }

        let value = self.read_until_any(&['\'', '"', ']']);

        if quote.is_some() {
            if self.peek_char() != quote {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
        }

        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        Ok(match name.as_str() {
            "data-testid" => Selector::TestId(value),
            "role" => Selector::Role(value),
            "aria-label" => Selector::Label(value),
            _ => Selector::Attribute { name, value },
        })
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }

        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until(&mut self, stop: char) -> String {
        self.read_until_any(&[stop])
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

/// Selector parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Expected identifier
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Invalid attribute syntax
    #[error("invalid attribute syntax")]
    InvalidAttribute,
    /// Unclosed attribute bracket or quote
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
}
