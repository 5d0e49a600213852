//! Validation and canonical normalization of wildcard expressions.
//!
//! This crate turns a user-supplied wildcard expression into its canonical shortest form, so that
//! a downstream matcher (for example a trie lookup) never has to re-derive equivalences between
//! spellings of the same expression. It does not match anything by itself.
//!
//! # Expression Syntax
//!
//! - `*` - Matches any run of characters, including an empty one
//! - `?` - Matches exactly one character
//! - Letters, numbers, `_` and whitespace match themselves
//! - Any other character is rejected
//!
//! # Rules
//!
//! An expression is rejected when:
//!
//! - a `?` is immediately followed by a `*` ([`Reason::QuestionMarkBeforeAsterisk`]);
//! - it contains a character other than a word character, whitespace, `*` or `?`
//!   ([`Reason::IllegalCharacters`]).
//!
//! The checks run in that order and the first violation wins.
//! An accepted expression is rewritten so that runs of `*` become a single `*`,
//! runs of `?` become a single `?`, and `*?` groups become a single `*`.
//!
//! # Examples
//!
//! ```
//! use wildcard::{Reason, normalize};
//!
//! assert_eq!(normalize("a*?").unwrap(), "a*");
//! assert_eq!(normalize("a??b").unwrap(), "a?b");
//! assert_eq!(normalize("a**b").unwrap(), "a*b");
//! assert_eq!(normalize("").unwrap(), "");
//!
//! let err = normalize("a?*b").unwrap_err();
//! assert_eq!(err.reason(), Reason::QuestionMarkBeforeAsterisk);
//! assert_eq!(err.text(), "a?*b");
//!
//! let err = normalize("a#b").unwrap_err();
//! assert_eq!(err.reason(), Reason::IllegalCharacters);
//! ```
//!
//! # Typed Expressions
//!
//! [`Expression`] holds text that is known to be canonical:
//!
//! ```
//! use wildcard::Expression;
//!
//! let expr: Expression = "fire***fox".parse().unwrap();
//! assert_eq!(expr.as_str(), "fire*fox");
//! assert_eq!(expr.to_string(), "fire*fox");
//! assert!(!expr.is_literal());
//! ```

mod error;
mod expression;

pub use error::{Reason, ValidationError};
pub use expression::*;
