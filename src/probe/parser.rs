use regex::Regex;
use std::sync::OnceLock;

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"v([0-9]+)\.([0-9]+)\.([0-9]+)").expect("version pattern is valid")
    })
}

/// Extracts the first `v<major>.<minor>.<patch>` token from free-form text
/// and returns it as `major.minor.patch`.
///
/// The token may sit anywhere in the text, on any line. Anything after the
/// patch digits (e.g. `-rc1`) is dropped.
pub fn parse_version(text: &str) -> Option<String> {
    let caps = version_pattern().captures(text)?;
    Some(format!("{}.{}.{}", &caps[1], &caps[2], &caps[3]))
}
