use std::fmt;
use std::str::FromStr;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{Reason, ValidationError};

const ANY: char = '*';
const ONE: char = '?';

/// Validates a wildcard expression and rewrites it into its canonical form.
///
/// The canonical form never contains `**`, `??` or `*?`.
/// Whitespace and word characters pass through unchanged.
///
/// # Errors
///
/// Returns a [`ValidationError`] with [`Reason::QuestionMarkBeforeAsterisk`] if a `?` is
/// immediately followed by a `*`, otherwise with [`Reason::IllegalCharacters`] if the expression
/// contains anything other than word characters, whitespace, `*` and `?`.
///
/// # Examples
///
/// ```
/// use wildcard::normalize;
///
/// assert_eq!(normalize("fire*?").unwrap(), "fire*");
/// assert_eq!(normalize("**a??b").unwrap(), "*a?b");
/// assert!(normalize("fire?*").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    validate(raw)?;
    Ok(Normalizer::new(raw.len()).run(raw))
}

/// Checks a wildcard expression without rewriting it.
///
/// The ordering check takes precedence: an expression that has both a `?*` sequence
/// and an illegal character is reported as [`Reason::QuestionMarkBeforeAsterisk`].
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    let mut illegal = false;
    let mut prev = None;

    for ch in raw.chars() {
        if prev == Some(ONE) && ch == ANY {
            return Err(ValidationError::new(raw, Reason::QuestionMarkBeforeAsterisk));
        }
        illegal = illegal || !is_legal(ch);
        prev = Some(ch);
    }

    if illegal {
        return Err(ValidationError::new(raw, Reason::IllegalCharacters));
    }

    Ok(())
}

#[inline]
fn is_legal(ch: char) -> bool {
    ch == ANY || ch == ONE || is_word(ch) || is_space(ch)
}

/// Letters, numbers and `_`. Combining marks and connector punctuation other than `_` are not
/// word characters.
#[inline]
fn is_word(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '_';
    }

    use GeneralCategory::*;
    matches!(
        get_general_category(ch),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// Unicode whitespace plus the ASCII information separators `U+001C..=U+001F`.
#[inline]
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\x1c'..='\x1f')
}

// ---

/// A validated wildcard expression in canonical form.
///
/// The only way to obtain an `Expression` is through normalization,
/// so its text never contains `**`, `??` or `*?`.
///
/// # Examples
///
/// ```
/// use wildcard::{Expression, Reason};
///
/// let expr = Expression::new("a**b").unwrap();
/// assert_eq!(expr, "a*b");
///
/// let err = Expression::new("a?*b").unwrap_err();
/// assert_eq!(err.reason(), Reason::QuestionMarkBeforeAsterisk);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Expression(String);

impl Expression {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        normalize(raw.as_ref()).map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the expression has no wildcards and therefore matches only itself.
    pub fn is_literal(&self) -> bool {
        !self.0.contains([ANY, ONE])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Expression {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Expression {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Expression {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Expression {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        if is_canonical(&value) {
            return Ok(Self(value));
        }
        Ok(Self(Normalizer::new(value.len()).run(&value)))
    }
}

impl From<Expression> for String {
    fn from(value: Expression) -> Self {
        value.0
    }
}

impl PartialEq<str> for Expression {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Expression {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ---

fn is_canonical(s: &str) -> bool {
    !s.contains("**") && !s.contains("??") && !s.contains("*?")
}

/// Single pass rewriter for validated input.
///
/// Since validated input has no `?*`, any `?` that follows a wildcard in the output
/// is redundant: `??` collapses to `?`, and `*?` (or `*??`, etc.) collapses to `*`.
struct Normalizer {
    output: String,
}

impl Normalizer {
    fn new(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
        }
    }

    fn run(mut self, raw: &str) -> String {
        for ch in raw.chars() {
            self.push(ch);
        }
        self.output
    }

    #[inline]
    fn push(&mut self, ch: char) {
        let last = self.output.chars().next_back();
        let redundant = match ch {
            ANY => last == Some(ANY),
            ONE => last == Some(ANY) || last == Some(ONE),
            _ => false,
        };
        if !redundant {
            self.output.push(ch);
        }
    }
}
