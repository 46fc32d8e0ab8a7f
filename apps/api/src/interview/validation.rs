//! Per-field syntactic validation, keyed by the step's declared input kind.
//! At most one error per call; unlisted kinds accept any non-empty input.

use thiserror::Error;

use crate::interview::catalog::{InputKind, StepDefinition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot contain numbers.")]
    NameContainsDigits,

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid phone.")]
    InvalidPhone,
}

pub fn validate(step: &StepDefinition, input: &str) -> Result<(), ValidationError> {
    match step.input {
        InputKind::Name if input.chars().any(|c| c.is_ascii_digit()) => {
            Err(ValidationError::NameContainsDigits)
        }
        InputKind::Email if !matches_email_shape(input) => Err(ValidationError::InvalidEmail),
        InputKind::Phone if !has_ten_digit_run(input) => Err(ValidationError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Email shape check: one-or-more non-@ chars, '@', one-or-more non-@ chars,
/// '.', one-or-more chars. The match is a prefix match, so trailing content
/// after a valid shape is accepted.
fn matches_email_shape(input: &str) -> bool {
    let Some((local, rest)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // The domain run ends at the next '@' (or the end of the input).
    let domain = rest.split('@').next().unwrap_or("");
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// True if the input contains 10 consecutive digits anywhere.
fn has_ten_digit_run(input: &str) -> bool {
    let mut run = 0usize;
    for c in input.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run == 10 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
