//! Caller-side input validation for new work items.
//!
//! # Responsibility
//! - Provide the generic `Validatable` rule set (required/length/range).
//! - Provide the canonical creation bounds applied before `BoardStore::create`.
//!
//! # Invariants
//! - Validation runs before any store call; the store never validates.
//! - Length rules count Unicode scalar values of the trimmed text.
//! - Length rules only apply to text values, range rules only to numbers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum title length (inclusive).
pub const TITLE_MIN_LEN: usize = 2;
/// Minimum description length (inclusive).
pub const DESCRIPTION_MIN_LEN: usize = 5;
/// Maximum description length (inclusive).
pub const DESCRIPTION_MAX_LEN: usize = 20;
/// Minimum assigned people (inclusive).
pub const PEOPLE_MIN: i64 = 1;
/// Maximum assigned people (inclusive).
pub const PEOPLE_MAX: i64 = 5;

/// Value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// Declarative rule set for one field.
///
/// Unset rules are skipped, so `Validatable::new(..)` alone always passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validatable<'a> {
    pub field: &'static str,
    pub value: FieldValue<'a>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl<'a> Validatable<'a> {
    pub fn new(field: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            field,
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Checks every configured rule, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.value {
            FieldValue::Text(text) => {
                let len = text.chars().count();
                if self.required && len == 0 {
                    return Err(ValidationError::Required { field: self.field });
                }
                if let Some(min) = self.min_length {
                    if len < min {
                        return Err(ValidationError::TooShort {
                            field: self.field,
                            min,
                            actual: len,
                        });
                    }
                }
                if let Some(max) = self.max_length {
                    if len > max {
                        return Err(ValidationError::TooLong {
                            field: self.field,
                            max,
                            actual: len,
                        });
                    }
                }
            }
            FieldValue::Number(number) => {
                if let Some(min) = self.min {
                    if number < min {
                        return Err(ValidationError::OutOfRange {
                            field: self.field,
                            min: self.min,
                            max: self.max,
                            actual: number,
                        });
                    }
                }
                if let Some(max) = self.max {
                    if number > max {
                        return Err(ValidationError::OutOfRange {
                            field: self.field,
                            min: self.min,
                            max: self.max,
                            actual: number,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Validation rule violation for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required {
        field: &'static str,
    },
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    OutOfRange {
        field: &'static str,
        min: Option<i64>,
        max: Option<i64>,
        actual: i64,
    },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::TooShort { field, min, actual } => {
                write!(f, "{field} must be at least {min} characters, got {actual}")
            }
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} must be at most {max} characters, got {actual}")
            }
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                let min = min.map_or_else(|| "-inf".to_string(), |v| v.to_string());
                let max = max.map_or_else(|| "+inf".to_string(), |v| v.to_string());
                write!(f, "{field} must be within [{min}, {max}], got {actual}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Creation bounds for new items.
///
/// `Default` yields the canonical board bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationBounds {
    pub title_min_len: usize,
    pub description_min_len: usize,
    pub description_max_len: usize,
    pub people_min: i64,
    pub people_max: i64,
}

impl Default for ValidationBounds {
    fn default() -> Self {
        Self {
            title_min_len: TITLE_MIN_LEN,
            description_min_len: DESCRIPTION_MIN_LEN,
            description_max_len: DESCRIPTION_MAX_LEN,
            people_min: PEOPLE_MIN,
            people_max: PEOPLE_MAX,
        }
    }
}

/// Input that passed validation and may be handed to `BoardStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

/// Validates one create request against `bounds`.
///
/// Text fields are trimmed first; the returned input holds the trimmed values.
///
/// # Errors
/// - Returns the first violated rule, checking title, description, then people.
pub fn validate_item_input(
    title: &str,
    description: &str,
    people_count: i64,
    bounds: &ValidationBounds,
) -> Result<ValidatedInput, ValidationError> {
    let title = title.trim();
    let description = description.trim();

    Validatable::new("title", FieldValue::Text(title))
        .required()
        .length(Some(bounds.title_min_len), None)
        .validate()?;
    Validatable::new("description", FieldValue::Text(description))
        .required()
        .length(
            Some(bounds.description_min_len),
            Some(bounds.description_max_len),
        )
        .validate()?;
    Validatable::new("people", FieldValue::Number(people_count))
        .required()
        .range(Some(bounds.people_min), Some(bounds.people_max))
        .validate()?;

    // Range check above keeps this within u32 for any sane bounds.
    let people_count = u32::try_from(people_count).map_err(|_| ValidationError::OutOfRange {
        field: "people",
        min: Some(bounds.people_min),
        max: Some(bounds.people_max),
        actual: people_count,
    })?;

    Ok(ValidatedInput {
        title: title.to_string(),
        description: description.to_string(),
        people_count,
    })
}
