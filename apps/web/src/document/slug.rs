use chrono::NaiveDate;

/// Slug used when a name has no ASCII letters or digits left.
pub const DEFAULT_SLUG: &str = "curriculo";

/// Lowercases `value` and collapses every run outside `[a-z0-9]` into one hyphen.
///
/// Leading and trailing hyphens are stripped. Falls back to [`DEFAULT_SLUG`].
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        slug
    }
}

/// `"{slug}-{YYYYMMDD}.pdf"` for the download attachment.
pub fn download_filename(full_name: &str, date: NaiveDate) -> String {
    format!("{}-{}.pdf", slugify(full_name), date.format("%Y%m%d"))
}
