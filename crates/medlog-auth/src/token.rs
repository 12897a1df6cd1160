use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Seconds before `exp` at which a token counts as expiring.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

/// Base64url without padding on encode; some issuers pad the segments anyway.
const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Decode the JWT `exp` claim without verifying the signature.
///
/// Only used for display and for skipping a doomed request; the backend
/// remains the authority on token validity.
///
/// # Errors
///
/// Returns `AuthError::TokenDecode` if the JWT format is invalid or the `exp`
/// claim is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let mut segments = jwt.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(AuthError::TokenDecode("invalid JWT format".into()));
    };
    let bytes = SEGMENT
        .decode(payload)
        .map_err(|e| AuthError::TokenDecode(format!("base64 decode failed: {e}")))?;
    let claims: Claims = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::TokenDecode(format!("JSON parse failed: {e}")))?;
    let exp = claims
        .exp
        .ok_or_else(|| AuthError::TokenDecode("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::TokenDecode("invalid exp timestamp".into()))
}

/// Whether `jwt` expires within `buffer_secs` from now.
///
/// Tokens whose expiry cannot be decoded are treated as not expiring;
/// opaque tokens are valid until the backend says otherwise.
#[must_use]
pub fn is_near_expiry(jwt: &str, buffer_secs: i64) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp.timestamp() - Utc::now().timestamp() <= buffer_secs)
}

#[cfg(test)]
pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
    let header = SEGMENT.encode(r#"{"alg":"HS256"}"#);
    let payload = SEGMENT.encode(format!(r#"{{"sub":"user-1","exp":{exp}}}"#));
    let signature = SEGMENT.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = Utc::now().timestamp() + 3600;
        let dt = decode_expiry(&make_jwt_with_exp(future_exp)).unwrap();
        assert_eq!(dt.timestamp(), future_exp);
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let err = decode_expiry("not-a-jwt").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let header = SEGMENT.encode(r#"{"alg":"HS256"}"#);
        let payload = SEGMENT.encode(r#"{"sub":"user-1"}"#);
        let err = decode_expiry(&format!("{header}.{payload}.sig")).unwrap_err();
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn decode_expiry_extra_segment() {
        let jwt = format!("{}.extra", make_jwt_with_exp(1_700_000_000));
        let err = decode_expiry(&jwt).unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn decode_expiry_accepts_padded_payload() {
        // 19 bytes of claims, so the padded form ends in "==".
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp": 1700000000}"#);
        assert!(payload.ends_with('='));
        let dt = decode_expiry(&format!("h.{payload}.s")).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn decode_expiry_bad_base64() {
        let err = decode_expiry("header.!!!invalid!!!.signature").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }

    #[test]
    fn near_expiry_detection() {
        let now = Utc::now().timestamp();
        assert!(is_near_expiry(&make_jwt_with_exp(now + 10), EXPIRY_BUFFER_SECS));
        assert!(is_near_expiry(&make_jwt_with_exp(now - 10), EXPIRY_BUFFER_SECS));
        assert!(!is_near_expiry(&make_jwt_with_exp(now + 3600), EXPIRY_BUFFER_SECS));
        assert!(!is_near_expiry("opaque-session-token", EXPIRY_BUFFER_SECS));
    }
}
