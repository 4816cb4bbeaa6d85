//! Business rules for new books.
//!
//! Each validator checks its rules in a fixed order and stops at the first
//! failure. Validators return the cleaned value (trimmed text, parsed year)
//! so callers never re-derive it.
//!
//! The publication year arrives either as raw text (console input, CLI
//! arguments) or as an already parsed number (REST bodies). Both go through
//! [`validate_year`]; the text path adds its own format checks before the
//! shared range checks.

use crate::error::{BiblioError, Result};
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub const TITLE_MIN_CHARS: usize = 2;
pub const TITLE_MAX_CHARS: usize = 200;
pub const AUTHOR_MIN_CHARS: usize = 2;
pub const AUTHOR_MAX_CHARS: usize = 100;
pub const EARLIEST_YEAR: i32 = 1000;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid regex"));
static AUTHOR_ALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ \t\n\v\f\r.\-']+$").expect("valid regex")
});
static ASCII_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]").expect("valid regex"));

/// How a publication year was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearInput<'a> {
    Text(Option<&'a str>),
    Number(Option<i32>),
}

impl<'a> From<&'a str> for YearInput<'a> {
    fn from(text: &'a str) -> Self {
        YearInput::Text(Some(text))
    }
}

impl<'a> From<Option<&'a str>> for YearInput<'a> {
    fn from(text: Option<&'a str>) -> Self {
        YearInput::Text(text)
    }
}

impl From<i32> for YearInput<'_> {
    fn from(year: i32) -> Self {
        YearInput::Number(Some(year))
    }
}

impl From<Option<i32>> for YearInput<'_> {
    fn from(year: Option<i32>) -> Self {
        YearInput::Number(year)
    }
}

/// The local calendar year, the upper bound for publication years.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Strips leading and trailing spaces and control characters only. Other
/// Unicode whitespace such as NBSP stays part of the value.
fn trim_blank(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

fn reject(rule: &'static str, reason: &str) -> BiblioError {
    debug!(rule, reason, "validation failed");
    BiblioError::invalid(reason)
}

/// Returns the trimmed title.
pub fn validate_title(title: Option<&str>) -> Result<&str> {
    let title = title.map(trim_blank).unwrap_or_default();
    if title.is_empty() {
        return Err(reject("title.empty", "title cannot be empty"));
    }

    let len = title.chars().count();
    if len < TITLE_MIN_CHARS {
        return Err(reject(
            "title.min",
            &format!("title must be at least {} characters", TITLE_MIN_CHARS),
        ));
    }
    if len > TITLE_MAX_CHARS {
        return Err(reject(
            "title.max",
            &format!("title cannot exceed {} characters", TITLE_MAX_CHARS),
        ));
    }
    Ok(title)
}

/// Returns the trimmed author.
pub fn validate_author(author: Option<&str>) -> Result<&str> {
    let author = author.map(trim_blank).unwrap_or_default();
    if author.is_empty() {
        return Err(reject("author.empty", "author cannot be empty"));
    }

    let len = author.chars().count();
    if len < AUTHOR_MIN_CHARS {
        return Err(reject(
            "author.min",
            &format!("author must be at least {} characters", AUTHOR_MIN_CHARS),
        ));
    }
    if len > AUTHOR_MAX_CHARS {
        return Err(reject(
            "author.max",
            &format!("author cannot exceed {} characters", AUTHOR_MAX_CHARS),
        ));
    }
    if DIGIT.is_match(author) {
        return Err(reject("author.digits", "author cannot contain digits"));
    }
    if !AUTHOR_ALLOWED.is_match(author) {
        return Err(reject(
            "author.charset",
            "author may only contain letters, spaces, periods, hyphens and apostrophes",
        ));
    }
    Ok(author)
}

/// Returns the publication year once it passes every rule for its input form.
pub fn validate_year(input: YearInput<'_>, current_year: i32) -> Result<i32> {
    let year = match input {
        YearInput::Text(text) => parse_year_text(text)?,
        YearInput::Number(Some(year)) => year,
        YearInput::Number(None) => {
            return Err(reject("year.missing", "publication year is required"));
        }
    };
    check_year_range(year, current_year)
}

fn parse_year_text(text: Option<&str>) -> Result<i32> {
    let text = text.map(trim_blank).unwrap_or_default();
    if text.is_empty() {
        return Err(reject("year.empty", "publication year cannot be empty"));
    }
    if ASCII_LETTER.is_match(text) {
        return Err(reject(
            "year.letters",
            "publication year cannot contain letters",
        ));
    }
    text.parse::<i32>()
        .map_err(|_| reject("year.format", "publication year must be a valid number"))
}

fn check_year_range(year: i32, current_year: i32) -> Result<i32> {
    if year <= 0 {
        return Err(reject("year.positive", "publication year must be positive"));
    }
    if year > current_year {
        return Err(reject(
            "year.future",
            "publication year cannot be in the future",
        ));
    }
    if year < EARLIEST_YEAR {
        return Err(reject(
            "year.earliest",
            &format!("publication year must be {} or later", EARLIEST_YEAR),
        ));
    }
    Ok(year)
}
