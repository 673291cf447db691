//! Request URL construction

/// Joins a base URL, endpoint path and query parameters into a request URL.
///
/// The base URL and endpoint are concatenated verbatim, with no slash
/// normalization. Query pairs with an empty value are dropped; keys and
/// values are percent-encoded independently. The `?` separator appears only
/// when at least one pair survives filtering.
pub fn build_url(base_url: &str, endpoint: &str, query: &[(String, String)]) -> String {
    let mut url = format!("{base_url}{endpoint}");

    let mut pairs = query.iter().filter(|(_, value)| !value.is_empty());
    if let Some((key, value)) = pairs.next() {
        url.push('?');
        push_pair(&mut url, key, value);
        for (key, value) in pairs {
            url.push('&');
            push_pair(&mut url, key, value);
        }
    }

    url
}

fn push_pair(url: &mut String, key: &str, value: &str) {
    url.push_str(&urlencoding::encode(key));
    url.push('=');
    url.push_str(&urlencoding::encode(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_query_params() {
        let url = build_url("https://api-dev.rehabkit.io", "/users", &[]);
        assert_eq!(url, "https://api-dev.rehabkit.io/users");
    }

    #[test]
    fn test_query_params_in_insertion_order() {
        let url = build_url(
            "https://api-dev.rehabkit.io",
            "/users",
            &params(&[("page", "1"), ("limit", "20")]),
        );
        assert_eq!(url, "https://api-dev.rehabkit.io/users?page=1&limit=20");
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let url = build_url(
            "https://api-dev.rehabkit.io",
            "/users",
            &params(&[("page", "1"), ("search", ""), ("limit", "20")]),
        );
        assert_eq!(url, "https://api-dev.rehabkit.io/users?page=1&limit=20");
    }

    #[test]
    fn test_no_question_mark_when_all_values_empty() {
        let url = build_url(
            "https://api-dev.rehabkit.io",
            "/users",
            &params(&[("search", ""), ("category", "")]),
        );
        assert_eq!(url, "https://api-dev.rehabkit.io/users");
    }

    #[test]
    fn test_keys_and_values_are_percent_encoded() {
        let url = build_url(
            "https://api-dev.rehabkit.io",
            "/programs",
            &params(&[("category", "low back"), ("q&a", "knee/hip")]),
        );
        assert_eq!(
            url,
            "https://api-dev.rehabkit.io/programs?category=low%20back&q%26a=knee%2Fhip"
        );
    }

    #[test]
    fn test_base_and_endpoint_join_verbatim() {
        // Duplicate slashes are preserved, not normalized
        let url = build_url("https://api-dev.rehabkit.io/", "/users", &[]);
        assert_eq!(url, "https://api-dev.rehabkit.io//users");
    }
}
