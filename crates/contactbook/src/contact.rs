//! Core contact record for contactbook.
//!
//! This module defines the immutable value stored in the address book and
//! the match rule used to look contacts up by a single key.

use serde::{Deserialize, Serialize};

/// A single address-book entry.
///
/// Fields are set once at construction and only exposed through read-only
/// accessors. No format validation is applied to any field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    phone: String,
    email: String,
}

impl Contact {
    /// Create a new contact from the given fields.
    ///
    /// Any string is accepted, including the empty string.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// The contact's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's phone number, exactly as entered.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The contact's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check whether this contact is selected by `key`.
    ///
    /// A contact matches when its name equals `key` ignoring case, or when
    /// its phone number equals `key` exactly.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        eq_ignore_case(&self.name, key) || self.phone == key
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}\nPhone: {}\nEmail: {}",
            self.name, self.phone, self.email
        )
    }
}

/// Compare two strings for equality ignoring case, char by char.
///
/// Both strings must have the same number of chars, and each pair must be
/// equal, equal after uppercasing, or equal after uppercasing then
/// lowercasing. Only single-char case mappings are applied, so a char never
/// expands into several.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }

    let mut a_chars = a.chars();
    let mut b_chars = b.chars();
    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) if chars_eq_ignore_case(x, y) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

/// Uppercase mapping of `c`, or `c` itself when the mapping is not one char.
fn simple_upper(c: char) -> char {
    single(c.to_uppercase()).unwrap_or(c)
}

/// Lowercase mapping of `c`, or `c` itself when the mapping is not one char.
fn simple_lower(c: char) -> char {
    // U+0130 is the only char whose full lowercase expands; its simple
    // lowercase is a plain `i`.
    if c == '\u{130}' {
        return 'i';
    }
    single(c.to_lowercase()).unwrap_or(c)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
