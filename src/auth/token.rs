//! Advisory bearer-token expiry check
//!
//! Decodes the payload segment of a JWT and compares its `exp` claim with
//! the current time. The signature is NOT verified. This only decides
//! whether to show the user as signed in; it is not an authorization check.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// The `exp` claim in seconds. Issuers send it as a JSON number, but a
/// numeric string is accepted too.
pub fn token_exp(token: &str) -> Option<f64> {
    let payload = token.split('.').nth(1)?;
    // Some issuers pad the segment; the URL-safe alphabet never does
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;

    let exp = match claims.get("exp")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    exp.is_finite().then_some(exp)
}

/// Expiry as a date, for display. `None` when the token has no readable
/// `exp` or it lies outside the representable range.
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let millis = token_exp(token)? * 1000.0;
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// True while `now` is strictly before the token's expiry.
/// Unreadable tokens are treated as expired.
pub fn is_token_valid(token: &str, now: DateTime<Utc>) -> bool {
    if token.is_empty() {
        return false;
    }
    match token_exp(token) {
        Some(exp) => (now.timestamp_millis() as f64) < exp * 1000.0,
        None => false,
    }
}

#[cfg(test)]
pub(crate) fn make_token(payload: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}
