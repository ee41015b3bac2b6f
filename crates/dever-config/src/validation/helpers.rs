//! Single-value checks. Each returns the problem, if any.

/// `value` must lie in `[min, max]`.
pub(crate) fn check_range(name: &str, value: u32, min: u32, max: u32) -> Option<String> {
    (value < min || value > max).then(|| format!("{name} = {value} is out of range [{min}, {max}]"))
}

/// `value` must parse as an `http`/`https` URL.
pub(crate) fn check_web_url(name: &str, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{name} is empty"));
    }
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => None,
        Ok(parsed) => Some(format!(
            "{name} uses unsupported scheme '{}'",
            parsed.scheme()
        )),
        Err(e) => Some(format!("{name} is not a valid URL: {e}")),
    }
}
