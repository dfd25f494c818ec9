//! Field-level validation rules shared by the auth and profile forms.
//!
//! Each form collects failures into a `FieldErrors` map keyed by field name;
//! an empty map means the form may be submitted.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::string::is_blank;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Field name -> message for every field that failed.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{6,}$").expect("phone pattern compiles"));
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,10}$").expect("zip pattern compiles"));

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn password_is_valid(s: &str) -> bool {
    s.chars().count() >= MIN_PASSWORD_LEN
}

/// True when `s` has at least `n` characters once trimmed.
pub fn min_length(s: &str, n: usize) -> bool {
    s.trim().chars().count() >= n
}

pub fn is_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

pub fn is_zip(s: &str) -> bool {
    ZIP_RE.is_match(s)
}

/// Optional fields pass when empty and must match `rule` otherwise.
pub fn optional(s: &str, rule: fn(&str) -> bool) -> bool {
    is_blank(s) || rule(s)
}
