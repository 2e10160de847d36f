use {
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
};

/// Query string of the subscription handshake (`GET /webhook`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyQuery {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Returns the challenge to echo back when the handshake is valid.
///
/// Valid means a mode is present and the token equals the configured one.
/// An empty configured token never verifies.
pub fn verify_subscription(query: &VerifyQuery, expected: &Secret<String>) -> Option<String> {
    let expected = expected.expose_secret();
    if expected.is_empty() {
        return None;
    }
    query.mode.as_deref().filter(|m| !m.is_empty())?;
    if query.verify_token.as_deref() != Some(expected.as_str()) {
        return None;
    }
    Some(query.challenge.clone().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn query(mode: Option<&str>, token: Option<&str>, challenge: Option<&str>) -> VerifyQuery {
        VerifyQuery {
            mode: mode.map(str::to_string),
            verify_token: token.map(str::to_string),
            challenge: challenge.map(str::to_string),
        }
    }

    #[rstest]
    #[case(query(Some("subscribe"), Some("s3cret"), Some("1158201444")), Some("1158201444"))]
    #[case(query(Some("subscribe"), Some("wrong"), Some("1158201444")), None)]
    #[case(query(None, Some("s3cret"), Some("1158201444")), None)]
    #[case(query(Some(""), Some("s3cret"), Some("1158201444")), None)]
    #[case(query(Some("subscribe"), None, Some("1158201444")), None)]
    #[case(query(Some("subscribe"), Some("s3cret"), None), Some(""))]
    fn handshake(#[case] query: VerifyQuery, #[case] expected: Option<&str>) {
        let secret = Secret::new("s3cret".to_string());
        assert_eq!(
            verify_subscription(&query, &secret).as_deref(),
            expected
        );
    }

    #[test]
    fn empty_configured_token_never_verifies() {
        let secret = Secret::new(String::new());
        let q = query(Some("subscribe"), Some(""), Some("42"));
        assert_eq!(verify_subscription(&q, &secret), None);
    }
}
