use crate::error::ValidationError;
use crate::models::book::{BookInput, BookStatus};

fn parse_status(input: &BookInput) -> Result<BookStatus, ValidationError> {
    input
        .status
        .parse()
        .map_err(|_| ValidationError::InvalidStatus)
}

/// Checks a create payload. Checks run in a fixed order and only the first
/// failure is reported.
pub fn validate_for_create(input: &BookInput) -> Result<BookStatus, ValidationError> {
    let status = parse_status(input)?;

    if input.author.is_empty() {
        return Err(ValidationError::MissingAuthor);
    }
    if input.title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if !input.id.is_empty() {
        return Err(ValidationError::IdentifierSupplied);
    }

    Ok(status)
}

/// Checks an update payload, which may carry nothing but a status.
pub fn validate_for_update(input: &BookInput) -> Result<BookStatus, ValidationError> {
    let status = parse_status(input)?;

    if !input.author.is_empty() || !input.title.is_empty() || !input.id.is_empty() {
        return Err(ValidationError::OnlyStatusAllowed);
    }

    Ok(status)
}
