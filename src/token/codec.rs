use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Claims carried in a token payload.
///
/// Both fields are optional on the wire; anything else in the payload is
/// ignored rather than carried around untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub expire_date: Option<DateTime<Utc>>,
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// The middle segment is standard (padded) base64 over a JSON object. The
/// signature is not verified; this is a policy decoder, not a verifier.
///
/// Returns `None` on anything malformed: wrong segment count, invalid
/// base64, non-JSON or mistyped payload. Never panics.
pub fn decode_token(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let decoded = STANDARD.decode(parts[1]).ok()?;

    match serde_json::from_slice::<Claims>(&decoded) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!("token payload is not valid claims JSON: {}", e);
            None
        }
    }
}
