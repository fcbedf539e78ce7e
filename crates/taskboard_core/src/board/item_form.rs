//! New-item form model: raw field text in, validated `create` call out.

use crate::model::item::ItemId;
use crate::store::board_store::BoardStore;
use crate::validation::{validate_item_input, ValidatedInput, ValidationBounds, ValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prompt shown to the user whenever submission is rejected.
pub const INVALID_INPUT_PROMPT: &str = "Enter valid values!";

/// Why a submission was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// People field does not start with an integer.
    PeopleNotANumber(String),
    Invalid(ValidationError),
}

impl InputError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PeopleNotANumber(_) => "people",
            Self::Invalid(err) => err.field(),
        }
    }

    /// Blocking prompt text for the end user.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_PROMPT
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PeopleNotANumber(raw) => write!(f, "people must start with a number, got `{raw}`"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::PeopleNotANumber(_) => None,
        }
    }
}

impl From<ValidationError> for InputError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Raw text of the three form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub title: String,
    pub description: String,
    pub people: String,
    bounds: ValidationBounds,
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: ValidationBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Fills all fields at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Trims, parses and validates the current field text.
    pub fn gather(&self) -> Result<ValidatedInput, InputError> {
        let people_raw = self.people.trim();
        if people_raw.is_empty() {
            return Err(ValidationError::Required { field: "people" }.into());
        }
        let people = leading_integer(people_raw)
            .ok_or_else(|| InputError::PeopleNotANumber(people_raw.to_string()))?;
        Ok(validate_item_input(
            &self.title,
            &self.description,
            people,
            &self.bounds,
        )?)
    }

    /// Creates the item on success and clears the form.
    ///
    /// On failure the fields are kept so the user can correct them, and the
    /// store is not called.
    pub fn submit(&mut self, store: &mut BoardStore) -> Result<ItemId, InputError> {
        let input = match self.gather() {
            Ok(input) => input,
            Err(err) => {
                debug!(
                    "event=form_submit module=board status=rejected field={}",
                    err.field()
                );
                return Err(err);
            }
        };
        let id = store.create_validated(input);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Reads the signed integer prefix of `raw`, ignoring whatever follows it.
///
/// `"2.5"` reads as 2 and `"3 people"` as 3; text without leading digits, or
/// digits that overflow `i64`, yields `None`.
fn leading_integer(raw: &str) -> Option<i64> {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let sign_len = raw.len() - unsigned.len();
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }
    raw.get(..sign_len + digits_len)?.parse().ok()
}
