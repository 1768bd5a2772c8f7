//! Decoder for the textual sequence literals in the recommendations table,
//! e.g. `['N101', 'N205']` or `(101, 205)`.

use std::iter::Peekable;
use std::str::CharIndices;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed list literal at offset {offset}: {reason}")]
pub struct LiteralError {
    pub offset: usize,
    pub reason: String,
}

impl From<LiteralError> for nl_core::Error {
    fn from(err: LiteralError) -> Self {
        nl_core::Error::Parse(err.to_string())
    }
}

type Result<T> = std::result::Result<T, LiteralError>;

/// Decodes a list, tuple or set literal into its elements rendered as text.
pub fn decode_list(text: &str) -> Result<Vec<String>> {
    let mut parser = Parser::new(text);
    let items = parser.sequence()?;
    parser.skip_whitespace();
    if let Some((offset, c)) = parser.chars.next() {
        return Err(fail(offset, format!("unexpected '{}' after the closing bracket", c)));
    }
    Ok(items)
}

fn fail(offset: usize, reason: impl Into<String>) -> LiteralError {
    LiteralError {
        offset,
        reason: reason.into(),
    }
}

struct Parser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map(|&(o, _)| o).unwrap_or(self.text.len())
    }

    fn sequence(&mut self) -> Result<Vec<String>> {
        self.skip_whitespace();
        let (open_at, close) = match self.chars.next() {
            Some((o, '[')) => (o, ']'),
            Some((o, '(')) => (o, ')'),
            Some((o, '{')) => (o, '}'),
            Some((o, c)) => return Err(fail(o, format!("expected a sequence, found '{}'", c))),
            None => return Err(fail(0, "empty value")),
        };

        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(c) if c == close => {
                    self.chars.next();
                    break;
                }
                None => return Err(fail(self.text.len(), "unterminated sequence")),
                _ => {}
            }

            items.push(self.element()?);

            self.skip_whitespace();
            match self.chars.next() {
                Some((_, ',')) => saw_comma = true,
                Some((_, c)) if c == close => break,
                Some((o, c)) => return Err(fail(o, format!("expected ',' or '{}', found '{}'", close, c))),
                None => return Err(fail(self.text.len(), "unterminated sequence")),
            }
        }

        // `('N1')` is a parenthesized scalar, not a one-element tuple.
        if close == ')' && items.len() == 1 && !saw_comma {
            return Err(fail(open_at, "parenthesized value is not a tuple"));
        }
        Ok(items)
    }

    fn element(&mut self) -> Result<String> {
        match self.peek() {
            Some('\'') | Some('"') => self.string(),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.number(),
            Some(c) if c.is_alphabetic() => self.word(),
            Some(c) => Err(fail(self.offset(), format!("unexpected '{}'", c))),
            None => Err(fail(self.text.len(), "unterminated sequence")),
        }
    }

    fn string(&mut self) -> Result<String> {
        let (start, quote) = self.chars.next().ok_or_else(|| fail(self.text.len(), "expected a string"))?;
        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some((_, c)) if c == quote => return Ok(value),
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, c)) if matches!(c, '\\' | '\'' | '"') => value.push(c),
                    Some((_, c)) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => break,
                },
                Some((_, c)) => value.push(c),
                None => break,
            }
        }
        Err(fail(start, "unterminated string"))
    }

    fn number(&mut self) -> Result<String> {
        let start = self.offset();
        let mut token = String::new();
        while let Some((_, c)) = self
            .chars
            .next_if(|&(_, c)| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-'))
        {
            if c != '_' {
                token.push(c);
            }
        }

        if let Ok(int) = token.parse::<i128>() {
            return Ok(int.to_string());
        }
        match token.parse::<f64>() {
            Ok(float) if float.is_finite() && float.fract() == 0.0 && float.abs() < 1e15 => {
                Ok((float as i64).to_string())
            }
            Ok(float) if float.is_finite() => Ok(float.to_string()),
            _ => Err(fail(start, format!("invalid number '{}'", token))),
        }
    }

    fn word(&mut self) -> Result<String> {
        let start = self.offset();
        let mut word = String::new();
        while let Some((_, c)) = self.chars.next_if(|&(_, c)| c.is_alphanumeric() || c == '_') {
            word.push(c);
        }
        match word.as_str() {
            "True" | "False" | "None" => Ok(word),
            _ => Err(fail(start, format!("bare name '{}' is not a literal", word))),
        }
    }
}
