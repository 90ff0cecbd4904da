//! Derived article fields: URL slug and reading-time estimate.

/// Derive a URL-safe slug from an article title.
///
/// Lowercases, strips everything except letters, digits, whitespace and
/// hyphens, collapses whitespace runs and repeated hyphens to a single
/// hyphen, and trims leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut last_hyphen = false;

    for c in lowered.chars() {
        if c.is_alphanumeric() {
            out.push(c);
            last_hyphen = false;
        } else if c.is_whitespace() || c == '-' {
            if !last_hyphen {
                out.push('-');
                last_hyphen = true;
            }
        }
        // everything else is dropped
    }

    out.trim_matches('-').to_string()
}

/// Estimated reading time in whole minutes, assuming 200 words per minute.
/// Rounded up, so any non-empty body reads as at least one minute.
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(200)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_punctuation() {
        assert_eq!(slugify("Hello World!!"), "hello-world");
    }

    #[test]
    fn slug_collapses_separators() {
        assert_eq!(slugify("  Rust --  async   IO  "), "rust-async-io");
        assert_eq!(slugify("a---b"), "a-b");
    }

    #[test]
    fn slug_of_only_punctuation_is_empty() {
        assert_eq!(slugify("!!!???"), "");
    }

    #[test]
    fn reading_time_rounds_up() {
        let body = vec!["word"; 400].join(" ");
        assert_eq!(reading_time(&body), 2);

        let short = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&short), 2);

        assert_eq!(reading_time("one two three"), 1);
        assert_eq!(reading_time(""), 0);
    }
}
