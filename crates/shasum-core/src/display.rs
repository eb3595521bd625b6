//! Display-path reconstruction for digest output.
//!
//! Reproduces how the path the user typed should be echoed next to a digest:
//! absolute inputs print resolved absolute paths, bare names stay bare, and
//! relative inputs with a directory component keep their prefix and original
//! separator flavor. Cosmetic only; digest computation always uses the real
//! file location.

use std::path::{MAIN_SEPARATOR, Path};

/// Rebuild the path to print for `discovered`, honoring how the user wrote
/// `user_input`.
pub fn present_path(user_input: &str, discovered: &str) -> String {
    let input = Path::new(user_input);

    if input.is_absolute() {
        let dir = input.parent().unwrap_or(input);
        let full = dir.join(discovered);
        return dunce::canonicalize(&full)
            .unwrap_or(full)
            .display()
            .to_string();
    }

    match user_input.rfind(['/', '\\']) {
        None => discovered.to_string(),
        Some(idx) => {
            let sep = first_separator(user_input).unwrap_or(MAIN_SEPARATOR);
            format!("{}{}{}", &user_input[..idx], sep, discovered)
        }
    }
}

/// First separator character appearing in `input`, if any.
fn first_separator(input: &str) -> Option<char> {
    input.chars().find(|c| *c == '/' || *c == '\\')
}
