//! Metric identifiers.

/// Derive a stable metric id from a canonical metric name.
///
/// Lower-cases the name, drops parentheses, collapses every run of
/// characters outside `[a-z0-9]` into a single underscore, and trims
/// leading and trailing underscores.
///
/// # Examples
///
/// ```
/// use bloodwork_standards::slugify;
///
/// assert_eq!(slugify("Free T4 (Direct)"), "free_t4_direct");
/// assert_eq!(slugify("A/G Ratio"), "a_g_ratio");
/// assert_eq!(slugify("Lymphocytes %"), "lymphocytes");
/// assert_eq!(slugify("--"), "");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    // Start as if an underscore was just written so leading runs are skipped.
    let mut last_was_underscore = true;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch == '(' || ch == ')' {
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            last_was_underscore = false;
        } else if !last_was_underscore {
            slug.push('_');
            last_was_underscore = true;
        }
    }
    if slug.ends_with('_') {
        slug.pop();
    }
    slug
}
