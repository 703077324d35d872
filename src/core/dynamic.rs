//! Identifiers that only exist at runtime.
//!
//! Some identifiers are assembled by string concatenation (password policy
//! errors, user validation errors) or looked up from data (month names), so the
//! scanner never sees them as literals. They are listed here by hand.
//!
//! Keep this table in sync whenever the code that builds these identifiers
//! changes: a missing entry makes `extract` drop a live translation.

use super::DiscoveredSet;

pub const DYNAMIC_IDENTIFIERS: &[&str] = &[
    // Password policy errors, built from the enabled requirement flags.
    "model.user.is_valid.pwd.app_error",
    "model.user.is_valid.pwd_lowercase.app_error",
    "model.user.is_valid.pwd_lowercase_number.app_error",
    "model.user.is_valid.pwd_lowercase_number_symbol.app_error",
    "model.user.is_valid.pwd_lowercase_symbol.app_error",
    "model.user.is_valid.pwd_lowercase_uppercase.app_error",
    "model.user.is_valid.pwd_lowercase_uppercase_number.app_error",
    "model.user.is_valid.pwd_lowercase_uppercase_number_symbol.app_error",
    "model.user.is_valid.pwd_lowercase_uppercase_symbol.app_error",
    "model.user.is_valid.pwd_number.app_error",
    "model.user.is_valid.pwd_number_symbol.app_error",
    "model.user.is_valid.pwd_symbol.app_error",
    "model.user.is_valid.pwd_uppercase.app_error",
    "model.user.is_valid.pwd_uppercase_number.app_error",
    "model.user.is_valid.pwd_uppercase_number_symbol.app_error",
    "model.user.is_valid.pwd_uppercase_symbol.app_error",
    // User validation errors, built from the invalid field name.
    "model.user.is_valid.id.app_error",
    "model.user.is_valid.create_at.app_error",
    "model.user.is_valid.update_at.app_error",
    "model.user.is_valid.username.app_error",
    "model.user.is_valid.email.app_error",
    "model.user.is_valid.nickname.app_error",
    "model.user.is_valid.position.app_error",
    "model.user.is_valid.first_name.app_error",
    "model.user.is_valid.last_name.app_error",
    "model.user.is_valid.auth_data.app_error",
    "model.user.is_valid.auth_data_type.app_error",
    "model.user.is_valid.auth_data_pwd.app_error",
    "model.user.is_valid.password_limit.app_error",
    "model.user.is_valid.locale.app_error",
    // Month names, translated from time.Month values.
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Add every runtime-only identifier to `discovered`.
pub fn inject_dynamic_identifiers(discovered: &mut DiscoveredSet) {
    discovered.extend(DYNAMIC_IDENTIFIERS.iter().map(|id| id.to_string()));
}
