//! Search-query tokenizer and grammar for scour.
//!
//! Converts a free-form, human-typed search string into an ordered sequence
//! of query terms a search backend can translate into a lookup against its
//! keyword index:
//!
//! - **Terms**: `compiler` — words to match
//! - **Exclusion**: `-deprecated` — the term must NOT match
//! - **Phrases**: `"error handling"` — quoted text matched as one unit
//! - **OR**: `rust OR golang` — alternatives, grouped one level deep
//! - **Attributes**: `title:guide` — scope a term to one indexed field
//! - **Exact**: `title::guide` — the field must equal the term exactly
//! - **Wildcards**: `*fix`, `pre*` — allow suffix/prefix sub-matches
//!
//! Adjacent tokens are implicitly AND-ed by the consumer. Parsing never
//! fails: malformed input (unterminated quotes, dangling `OR`, empty
//! attribute values) degrades into a deterministic token sequence.
//!
//! # Example
//!
//! ```
//! use scour_query::{Query, Token};
//!
//! let query = Query::new("title:guide rust OR golang -deprecated");
//! assert_eq!(query.tokens().len(), 3);
//! assert!(matches!(query.tokens()[1], Token::Group(_)));
//! ```

#![warn(missing_docs)]

mod ast;
mod lexer;
mod parser;

pub use ast::{Term, TermDefaults, TermGroup, Token};
pub use parser::Query;
