//! User agent and default headers

/// Application name registered with the API console
pub const APPLICATION_NAME: &str = "youtube-cmdline-search-sample";

/// Fixed user agent, with an optional configured suffix
pub fn user_agent(suffix: Option<&str>) -> String {
    let base = format!("tubesearch/{} ({})", crate::VERSION, APPLICATION_NAME);
    match suffix.map(str::trim) {
        Some(s) if !s.is_empty() => format!("{} {}", base, s),
        _ => base,
    }
}

/// Standard accept header for JSON requests
pub fn accept_json() -> &'static str {
    "application/json"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent() {
        let ua = user_agent(None);
        assert!(ua.starts_with("tubesearch/"));
        assert!(ua.contains(APPLICATION_NAME));

        assert!(user_agent(Some("ops@example.com")).ends_with(" ops@example.com"));
        assert_eq!(user_agent(Some("  ")), ua);
    }
}
