//! Query tokenizer.
//!
//! Walks the whitespace chunks of a raw query string and produces the
//! ordered token sequence. One chunk normally yields one term; quoted
//! phrases and the `OR` keyword consume additional chunks.
//!
//! # Grammar, per chunk
//!
//! ```text
//! chunk     → "OR" chunk            group with the previous token
//!           | ["-"] scoped          exclusion prefix
//! scoped    → [word ":" [":"]] body attribute scope, "::" forces exact
//! body      → quoted | bare        quotes span chunks until closed
//! bare      → ["*"] text ["*"]     leading/trailing sub-match wildcards
//! ```
//!
//! Parsing never fails: unterminated quotes absorb the rest of the input,
//! a dangling `OR` is dropped, and empty attribute values yield a term
//! with empty text.

use std::fmt;

use crate::{
    ast::{Term, TermDefaults, TermGroup, Token},
    lexer::Chunks,
};

/// A parsed search query.
///
/// Construction runs the tokenizer eagerly and to completion; the token
/// sequence is fixed for the lifetime of the instance. A new query string
/// requires a new `Query`.
///
/// ```
/// use scour_query::{Query, TermDefaults, Token};
///
/// let defaults = TermDefaults { sub_right: false, ..TermDefaults::default() };
/// let query = Query::with_defaults("compiler", defaults);
/// match &query.tokens()[0] {
///     Token::Term(term) => assert!(!term.sub_right),
///     Token::Group(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The raw input string, kept verbatim.
    raw: String,
    /// The resolved fallback flag values.
    defaults: TermDefaults,
    /// The parsed token sequence.
    tokens: Vec<Token>,
}

impl Query {
    /// Parses `raw` with the standard defaults (`sub_right` on, everything
    /// else off).
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_defaults(raw, TermDefaults::default())
    }

    /// Parses `raw`, filling flags the syntax leaves open from `defaults`.
    ///
    /// Never fails; malformed input degrades into a deterministic token
    /// sequence.
    pub fn with_defaults(raw: impl Into<String>, defaults: TermDefaults) -> Self {
        let raw = raw.into();
        let tokens = Tokenizer::new(&raw, defaults).run();
        Self {
            raw,
            defaults,
            tokens,
        }
    }

    /// The original query string, unmodified.
    pub fn query(&self) -> &str {
        &self.raw
    }

    /// The parsed token sequence.
    ///
    /// Adjacent tokens are implicitly AND-ed by the consumer; terms inside
    /// a group are OR-ed together.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The defaults the query was parsed with.
    pub fn defaults(&self) -> TermDefaults {
        self.defaults
    }

    /// Number of top-level tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if parsing produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Tokenizer state: the chunk cursor plus the configured defaults.
struct Tokenizer<'a> {
    /// Cursor over the whitespace-delimited chunks of the raw input.
    chunks: Chunks<'a>,
    /// Fallback values for flags the syntax leaves open.
    defaults: TermDefaults,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    fn new(input: &'a str, defaults: TermDefaults) -> Self {
        Self {
            chunks: Chunks::new(input),
            defaults,
        }
    }

    /// Runs the tokenizer to exhaustion.
    fn run(mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();

        while let Some(mut chunk) = self.chunks.next_chunk() {
            let mut grouped = false;

            // OR consumes the chunk after it. A dangling OR at the end of
            // input is dropped, and an OR with no previous token starts no
            // group; runs of ORs collapse, so an all-OR query is empty.
            while chunk == "OR" {
                let Some(next) = self.chunks.next_chunk() else {
                    return tokens;
                };
                if !tokens.is_empty() {
                    promote_last(&mut tokens);
                    grouped = true;
                }
                chunk = next;
            }

            let term = self.term(chunk);
            match tokens.last_mut() {
                Some(Token::Group(group)) if grouped => group.push(term),
                _ => tokens.push(Token::Term(term)),
            }
        }

        tokens
    }

    /// Parses one term starting at `chunk`, consuming further chunks when
    /// the chunk opens a quote that does not close within it.
    fn term(&mut self, chunk: &'a str) -> Term {
        let mut exclude = None;
        let mut exact = None;
        let mut sub_left = None;
        let mut sub_right = None;
        let mut attribute = None;

        let mut rest = chunk;
        if let Some(stripped) = rest.strip_prefix('-') {
            exclude = Some(true);
            rest = stripped;
        }

        if let Some((name, exact_sep, value)) = split_attribute(rest) {
            attribute = Some(name.to_string());
            if exact_sep {
                // An exact match is never a sub-string match.
                exact = Some(true);
                sub_left = Some(false);
                sub_right = Some(false);
            }
            rest = value;
        }

        let (mut text, phrase) = self.quoted(rest);

        if text.starts_with('*') {
            text.remove(0);
            set_wildcard(&mut sub_left, &mut sub_right);
        }
        if text.ends_with('*') {
            text.pop();
            set_wildcard(&mut sub_right, &mut sub_left);
        } else if text.is_empty() {
            // attribute:* means "match anything for this attribute"; the
            // empty term must not pick up a trailing-wildcard default.
            sub_right = Some(false);
        }

        Term {
            exclude: exclude.unwrap_or(self.defaults.exclude),
            exact: exact.unwrap_or(self.defaults.exact),
            sub_left: sub_left.unwrap_or(self.defaults.sub_left),
            sub_right: sub_right.unwrap_or(self.defaults.sub_right),
            attribute,
            term: text,
            phrase,
        }
    }

    /// Strips quoting from `chunk`, consuming further chunks for a phrase
    /// that spans whitespace. Returns the working text and the phrase
    /// marker.
    fn quoted(&mut self, chunk: &str) -> (String, Option<bool>) {
        let quote = match chunk.chars().next() {
            Some(c @ ('"' | '\'')) => c,
            _ => return (chunk.to_string(), None),
        };
        let opened = &chunk[1..];

        // Quote closed within the same chunk.
        if let Some(inner) = opened.strip_suffix(quote) {
            return (inner.to_string(), Some(true));
        }

        // Consume chunks until one ends with the matching quote, re-joining
        // with single spaces. Exhaustion without a closing quote absorbs
        // the rest of the input.
        let mut parts = vec![opened];
        while let Some(next) = self.chunks.next_chunk() {
            match next.strip_suffix(quote) {
                Some(inner) => {
                    parts.push(inner);
                    return (parts.join(" "), Some(true));
                }
                None => parts.push(next),
            }
        }
        (parts.join(" "), Some(true))
    }
}

/// Wraps the last token into a one-element group unless it already is one.
fn promote_last(tokens: &mut Vec<Token>) {
    if matches!(tokens.last(), Some(Token::Term(_))) {
        if let Some(Token::Term(term)) = tokens.pop() {
            tokens.push(Token::Group(TermGroup::new(term)));
        }
    }
}

/// Sets a wildcard flag from syntax and pins its sibling.
///
/// A flag the syntax already resolved is never overwritten, and pinning the
/// sibling keeps a wildcard on one side from inheriting a wildcard default
/// on the other.
fn set_wildcard(flag: &mut Option<bool>, sibling: &mut Option<bool>) {
    if flag.is_none() {
        *flag = Some(true);
    }
    if sibling.is_none() {
        *sibling = Some(false);
    }
}

/// Splits an `attribute:rest` or `attribute::rest` chunk.
///
/// The attribute name is one or more ASCII alphanumeric or underscore
/// characters before the first colon; anything else leaves the chunk
/// unscoped. Returns the name, whether the double-colon (exact) separator
/// was used, and the remainder.
fn split_attribute(chunk: &str) -> Option<(&str, bool, &str)> {
    let colon = chunk.find(':')?;
    let name = &chunk[..colon];
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return None;
    }
    match chunk[colon + 1..].strip_prefix(':') {
        Some(rest) => Some((name, true, rest)),
        None => Some((name, false, &chunk[colon + 1..])),
    }
}
