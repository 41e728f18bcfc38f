use chrono::{DateTime, Utc};

use crate::helpers::time::now_millis;
use crate::token::codec::decode_token;
use crate::utils::constants::TOKEN_REFRESH_BUFFER_MS;

// Every public check samples the clock exactly once, so the expired and
// should-refresh views of one token can never disagree within a call.

/// Whether the token is past its expiry.
///
/// A token that cannot be decoded, or that carries no expiry claim, counts
/// as already expired: an open-ended credential is not trusted.
pub fn is_token_expired(token: &str) -> bool {
    is_expired_at(token, now_millis())
}

/// Whether the token should be refreshed now, i.e. it expires within
/// [`TOKEN_REFRESH_BUFFER_MS`] (or is already expired/undecodable).
pub fn should_refresh_token(token: &str) -> bool {
    should_refresh_at(token, now_millis())
}

/// Milliseconds until expiry, clamped at zero. Mostly for logging.
pub fn token_remaining_time(token: &str) -> i64 {
    remaining_at(token, now_millis())
}

fn expire_millis(token: &str) -> Option<i64> {
    decode_token(token)
        .and_then(|claims| claims.expire_date)
        .map(|date: DateTime<Utc>| date.timestamp_millis())
}

fn is_expired_at(token: &str, now_ms: i64) -> bool {
    match expire_millis(token) {
        Some(expires) => now_ms >= expires,
        None => true,
    }
}

fn should_refresh_at(token: &str, now_ms: i64) -> bool {
    match expire_millis(token) {
        Some(expires) => now_ms >= expires - TOKEN_REFRESH_BUFFER_MS,
        None => true,
    }
}

fn remaining_at(token: &str, now_ms: i64) -> i64 {
    match expire_millis(token) {
        Some(expires) => (expires - now_ms).max(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use chrono::Duration;
    use serde_json::json;

    fn token_with_payload(payload: &serde_json::Value) -> String {
        let header = STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = STANDARD.encode(payload.to_string());
        format!("{}.{}.fake_signature", header, body)
    }

    fn token_expiring_at(at: DateTime<Utc>) -> String {
        token_with_payload(&json!({ "sub": "test", "expireDate": at.to_rfc3339() }))
    }

    #[test]
    fn expired_for_past_date() {
        let token = token_expiring_at("2020-01-01T00:00:00Z".parse().unwrap());
        assert!(is_token_expired(&token));
        assert!(should_refresh_token(&token));
        assert_eq!(token_remaining_time(&token), 0);
    }

    #[test]
    fn valid_for_future_date() {
        let token = token_expiring_at(Utc::now() + Duration::days(365));
        assert!(!is_token_expired(&token));
        assert!(!should_refresh_token(&token));
    }

    #[test]
    fn expired_without_expire_date_claim() {
        let token = token_with_payload(&json!({ "sub": "test" }));
        assert!(is_token_expired(&token));
        assert!(should_refresh_token(&token));
        assert_eq!(token_remaining_time(&token), 0);
    }

    #[test]
    fn expired_for_undecodable_token() {
        assert!(is_token_expired("invalid"));
        assert!(should_refresh_token("invalid"));
        assert_eq!(token_remaining_time("invalid"), 0);
    }

    #[test]
    fn refreshes_inside_the_buffer() {
        // 10s of life left is inside the 30s buffer
        let token = token_expiring_at(Utc::now() + Duration::seconds(10));
        assert!(!is_token_expired(&token));
        assert!(should_refresh_token(&token));
    }

    #[test]
    fn no_refresh_with_plenty_of_time() {
        let token = token_expiring_at(Utc::now() + Duration::hours(1));
        assert!(!should_refresh_token(&token));
    }

    #[test]
    fn refresh_boundary_is_exact() {
        let now = now_millis();
        let expires = now + TOKEN_REFRESH_BUFFER_MS;
        let token = token_expiring_at(DateTime::from_timestamp_millis(expires).unwrap());

        // exactly on the threshold refreshes; one millisecond earlier does not
        assert!(should_refresh_at(&token, now));
        assert!(!should_refresh_at(&token, now - 1));
        assert!(!is_expired_at(&token, now));
        assert!(is_expired_at(&token, expires));
    }

    #[test]
    fn remaining_time_for_five_minutes() {
        let token = token_expiring_at(Utc::now() + Duration::minutes(5));
        let remaining = token_remaining_time(&token);
        assert!(remaining > 290_000, "remaining = {}", remaining);
        assert!(remaining <= 310_000, "remaining = {}", remaining);
    }
}
