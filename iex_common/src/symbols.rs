//! Symbol lists and parsing helpers shared by the client crates.
//!
//! Every endpoint that accepts several symbols sends them as one comma-joined
//! `symbols` query parameter. `Symbols` normalizes caller input into that form:
//! entries are trimmed and uppercased, blanks are dropped and duplicates are
//! collapsed while the first-seen order is kept. Entries holding characters
//! that never appear in a symbol, separators included, are rejected rather
//! than forwarded. An empty list means "all symbols" to the upstream API, so
//! no parameter is sent at all.
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::IexError;

/// Trait providing text parsing for symbol lists.
pub trait SymbolParser: Sized {
    /// Parses symbols from a buffered reader.
    ///
    /// Symbols may be separated by commas, spaces, or new lines. Returns an
    /// error if any token contains characters that never appear in a symbol.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Self, IexError>;
}

/// Normalized, ordered, duplicate-free list of ticker symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbols(Vec<String>);

impl Symbols {
    /// Builds a normalized list from any sequence of string-like values.
    ///
    /// Fails with `ParseSymbols` when an entry is not a single valid symbol,
    /// e.g. `"SPY,AAPL"`.
    pub fn new<I, S>(symbols: I) -> Result<Self, IexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for symbol in symbols {
            let normalized = symbol.as_ref().trim().to_ascii_uppercase();
            if normalized.is_empty() {
                continue;
            }
            check_symbol(&normalized)?;
            if seen.insert(normalized.clone()) {
                out.push(normalized);
            }
        }
        Ok(Symbols(out))
    }

    /// The "all symbols" selection.
    pub fn all() -> Self {
        Symbols(Vec::new())
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the list selects every symbol upstream.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the normalized symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Value of the `symbols` query parameter, or `None` for "all symbols".
    pub fn to_query(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.join(","))
        }
    }
}

impl fmt::Display for Symbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

impl FromStr for Symbols {
    type Err = IexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbols::parse_from_reader(s.as_bytes())
    }
}

impl SymbolParser for Symbols {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Self, IexError> {
        let mut tokens = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(IexError::Io)?;
            for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if !token.is_empty() {
                    tokens.push(token.to_string());
                }
            }
        }
        Symbols::new(tokens)
    }
}

fn check_symbol(symbol: &str) -> Result<(), IexError> {
    if symbol.chars().all(is_symbol_char) {
        Ok(())
    } else {
        Err(IexError::ParseSymbols(format!(
            "unexpected character in symbol {:?}",
            symbol
        )))
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '=' | '^')
}
