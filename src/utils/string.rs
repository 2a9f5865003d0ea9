//! String utility functions for cleaning up user supplied paths

use std::env;

/// Direction marks and BOMs that sneak in when a path is copied from a
/// browser or file manager
const INVISIBLE_CHARS: [char; 7] = [
    '\u{feff}', // BOM
    '\u{202a}', // LRE
    '\u{202b}', // RLE
    '\u{202d}', // LRO
    '\u{202e}', // RLO
    '\u{200e}', // LRM
    '\u{200f}', // RLM
];

/// Remove invisible formatting characters from a string
pub fn strip_invisible(s: &str) -> String {
    s.chars().filter(|c| !INVISIBLE_CHARS.contains(c)).collect()
}

/// Expand `$VAR`, `${VAR}` and `%VAR%` environment references.
///
/// References to unset variables are left untouched.
pub fn expand_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find(['$', '%']) {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match expand_reference(tail) {
            Some((value, consumed)) => {
                result.push_str(&value);
                rest = &tail[consumed..];
            }
            None => {
                let ch = tail.chars().next().unwrap_or_default();
                result.push(ch);
                rest = &tail[ch.len_utf8()..];
            }
        }
    }
    result.push_str(rest);
    result
}

/// Try to expand the reference at the start of `s`, returning the value and
/// how many bytes of `s` it replaces
fn expand_reference(s: &str) -> Option<(String, usize)> {
    let (name, consumed) = if let Some(braced) = s.strip_prefix("${") {
        let end = braced.find('}')?;
        (&braced[..end], end + 3)
    } else if let Some(bare) = s.strip_prefix('$') {
        let end = bare
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(bare.len());
        (&bare[..end], end + 1)
    } else if let Some(percent) = s.strip_prefix('%') {
        let end = percent.find('%')?;
        (&percent[..end], end + 2)
    } else {
        return None;
    };

    if name.is_empty() {
        return None;
    }
    env::var(name).ok().map(|value| (value, consumed))
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(s: &str) -> String {
    let rest = match s.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return s.to_string(),
    };
    match dirs::home_dir() {
        Some(home) => format!("{}{}", home.display(), rest),
        None => s.to_string(),
    }
}

/// Clean up a source path typed or pasted by the user
///
/// Trims whitespace and surrounding quotes, drops invisible characters, then
/// expands environment references and a leading `~`.
pub fn sanitize_path(value: &str) -> String {
    let cleaned = value.trim().trim_matches('"').trim_matches('\'');
    let cleaned = strip_invisible(cleaned);
    expand_home(&expand_env_vars(&cleaned))
}
