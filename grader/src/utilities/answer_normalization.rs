/// Trim surrounding whitespace and lower-case. No other folding (accents, punctuation) is done.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}

/// True if `submitted` matches any of `acceptable`.
pub fn matches_any(submitted: &str, acceptable: &[&str]) -> bool {
    let submitted = normalize(submitted);
    acceptable.iter().any(|a| normalize(a) == submitted)
}
