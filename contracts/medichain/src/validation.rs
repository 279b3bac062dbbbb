use soroban_sdk::String;

use crate::ContractError;

pub const MAX_DISPLAY_NAME_LEN: u32 = 64;
pub const MAX_PROFILE_FIELD_LEN: u32 = 128;
pub const MAX_NOTES_LEN: u32 = 1024;
pub const MAX_CONTENT_REF_LEN: u32 = 256;
pub const MAX_LABEL_LEN: u32 = 256;

/// Ages above this are treated as sentinel values rather than real ages.
pub const MAX_AGE: u32 = 200;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Validate a doctor's display name.
/// Names must be non-empty and at most MAX_DISPLAY_NAME_LEN bytes.
pub fn validate_display_name(name: &String) -> Result<(), ContractError> {
    let len = name.len();
    if len == 0 || len > MAX_DISPLAY_NAME_LEN {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

/// Validate the fields of a patient profile.
/// Empty text fields are allowed; only sizes and the age range are bounded.
pub fn validate_profile(
    name: &String,
    age: u32,
    gender: &String,
    notes: &String,
) -> Result<(), ContractError> {
    if age > MAX_AGE {
        return Err(ContractError::InvalidArgument);
    }
    if name.len() > MAX_PROFILE_FIELD_LEN
        || gender.len() > MAX_PROFILE_FIELD_LEN
        || notes.len() > MAX_NOTES_LEN
    {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

/// Validate a record's content reference and label.
/// The reference is opaque to the ledger, so only its size is checked.
pub fn validate_record(content_ref: &String, label: &String) -> Result<(), ContractError> {
    let len = content_ref.len();
    if len == 0 || len > MAX_CONTENT_REF_LEN {
        return Err(ContractError::InvalidArgument);
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

/// Validate a page size for paginated record listing.
pub fn validate_page_size(limit: u32) -> Result<(), ContractError> {
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}
