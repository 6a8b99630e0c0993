//! Resource group name rules
//!
//! Accepted names match `^[a-z0-9_\-.]*[a-z0-9_-]+$`: lowercase letters,
//! digits, `_`, `-` and `.`, not empty, not ending in `.`.

pub const INVALID_RESOURCE_GROUP_NAME: &str = "Resource group names only allow lowercase alphanumeric characters, periods, underscores and hyphens, and cannot end in a period.";

pub const RESOURCE_GROUP_NAME_TAKEN: &str = "This name is unavailable";

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

pub fn is_valid_resource_group_name(name: &str) -> bool {
    match name.chars().last() {
        None | Some('.') => false,
        Some(_) => name.chars().all(is_name_char),
    }
}
