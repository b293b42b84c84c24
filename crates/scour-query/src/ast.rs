//! Query token value types.
//!
//! The tokenizer's output is an ordered sequence of [`Token`]s, each either a
//! single [`Term`] or a flat, OR-combined [`TermGroup`]. These are pure data
//! holders: the downstream executor reads the fields to pick match operators
//! (equality, negation, prefix/suffix/substring) and to scope terms to
//! indexed attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback values for the four boolean term flags.
///
/// Applied only to flags the query syntax leaves open. Callers override
/// individual fields with struct-update syntax:
///
/// ```
/// use scour_query::TermDefaults;
///
/// let defaults = TermDefaults { exact: true, ..TermDefaults::default() };
/// assert!(defaults.sub_right);
/// assert!(defaults.exact);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDefaults {
    /// Allow matches where the term is a suffix of a larger indexed word.
    pub sub_left: bool,
    /// Allow matches where the term is a prefix of a larger indexed word.
    pub sub_right: bool,
    /// Require the term NOT to match.
    pub exclude: bool,
    /// Require the attribute value to equal the term exactly.
    pub exact: bool,
}

impl Default for TermDefaults {
    fn default() -> Self {
        Self {
            sub_left: false,
            sub_right: true,
            exclude: false,
            exact: false,
        }
    }
}

/// One atomic search condition.
///
/// All four boolean flags are resolved at construction, either from the
/// literal syntax or from the caller's [`TermDefaults`]; none is ever left
/// open. `phrase` stays tri-state: quoted phrases carry `Some(true)`,
/// everything else `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// True if the term must NOT match (leading `-`).
    pub exclude: bool,
    /// True if the attribute value must equal the term exactly, never as a
    /// sub-string (double-colon attribute separator).
    pub exact: bool,
    /// True if matches may be a suffix of a larger word (leading `*`).
    pub sub_left: bool,
    /// True if matches may be a prefix of a larger word (trailing `*`).
    pub sub_right: bool,
    /// Attribute the term is scoped to; `None` searches all indexed
    /// attributes.
    pub attribute: Option<String>,
    /// The literal text to match, quoting already stripped.
    pub term: String,
    /// `Some(true)` if the term came from a quoted phrase and may itself
    /// contain whitespace.
    pub phrase: Option<bool>,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exclude {
            write!(f, "-")?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "{attribute}:")?;
            if self.exact {
                write!(f, ":")?;
            }
        }
        let quote = if self.phrase == Some(true) { "\"" } else { "" };
        write!(f, "{quote}")?;
        if self.sub_left {
            write!(f, "*")?;
        }
        write!(f, "{}", self.term)?;
        if self.sub_right && !self.term.is_empty() {
            write!(f, "*")?;
        }
        write!(f, "{quote}")
    }
}

/// A flat sequence of terms combined with OR.
///
/// Groups are one level deep: a group holds terms, never another group, and
/// is never empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermGroup {
    /// The OR-combined terms, in query order.
    terms: Vec<Term>,
}

impl TermGroup {
    /// Creates a group containing a single term.
    pub fn new(first: Term) -> Self {
        Self { terms: vec![first] }
    }

    /// Appends a term to the group.
    ///
    /// The tokenizer calls this while collecting `OR` alternatives; the
    /// sequence handed to the executor is not meant to be mutated further.
    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// The terms in this group, in query order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms in the group.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the group holds no terms. Parsing never produces one.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for TermGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " OR ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// One entry in the tokenizer's output sequence.
///
/// Adjacent tokens are implicitly AND-ed by the consumer; terms inside one
/// group are OR-ed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A single term.
    Term(Term),
    /// A flat group of OR-combined terms.
    Group(TermGroup),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => write!(f, "{term}"),
            Self::Group(group) => write!(f, "{group}"),
        }
    }
}
