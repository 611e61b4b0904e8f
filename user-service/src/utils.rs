// Utility Functions
// Small formatting helpers around users and names

use crate::models::User;

/// Build the `Processing user: <name>` line for a user.
pub fn processing_message(user: &User) -> String {
    format!("Processing user: {}", user.name)
}

/// Print the processing line for `user` to stdout.
pub fn process_user(user: &User) {
    println!("{}", processing_message(user));
}

/// Join first and last name with a single space.
///
/// Inputs are used as-is; no trimming is done.
///
/// # Arguments
/// * `first_name` - Given name
/// * `last_name` - Family name
pub fn format_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}
