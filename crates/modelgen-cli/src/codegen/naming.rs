//! Naming convention utilities for generated parameters.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `FirstName` | [`to_flat_lower_case`] | `firstname` |
//! | `FirstName` | [`uncapitalize`] | `firstName` |
//!
//! Constructor parameters use [`to_flat_lower_case`] while factory parameters
//! use [`uncapitalize`]. Generated code depends on both, so neither may be
//! changed to match the other.

/// Lower-case every character of an identifier.
///
/// # Examples
///
/// ```
/// use modelgen_cli::codegen::naming::to_flat_lower_case;
///
/// assert_eq!(to_flat_lower_case("FirstName"), "firstname");
/// assert_eq!(to_flat_lower_case("ID"), "id");
/// ```
pub fn to_flat_lower_case(s: &str) -> String {
    s.to_lowercase()
}

/// Lower-case the first character of an identifier, keeping the rest.
///
/// # Examples
///
/// ```
/// use modelgen_cli::codegen::naming::uncapitalize;
///
/// assert_eq!(uncapitalize("FirstName"), "firstName");
/// assert_eq!(uncapitalize("ID"), "iD");
/// assert_eq!(uncapitalize(""), "");
/// ```
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
