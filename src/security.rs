// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password hashing and the bearer-token codec.
//!
//! This is a development-grade construction: a single static secret signs
//! tokens and salts password hashes, with no rotation and no asymmetric
//! keys. That is a known limitation of the MVP, not a design goal.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried in an access token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issuer (application name)
    pub iss: String,
}

/// Hash a password with the application secret as a salt.
///
/// Plain salted SHA-256 is a placeholder, not a production KDF.
pub fn hash_password(secret: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a plaintext password against a stored hash in constant time.
pub fn verify_password(secret: &str, password: &str, hashed: &str) -> bool {
    let calc = hash_password(secret, password);
    calc.as_bytes().ct_eq(hashed.as_bytes()).into()
}

/// Issues and verifies compact signed tokens.
///
/// The format is three base64url segments joined by dots: a JSON header, a
/// JSON payload ([`Claims`]), and an HMAC-SHA256 signature over the first
/// two segments.
#[derive(Clone)]
pub struct TokenCodec {
    secret: Vec<u8>,
    issuer: String,
    default_ttl_minutes: i64,
}

impl TokenCodec {
    pub fn new(secret: &[u8], issuer: &str, default_ttl_minutes: i64) -> Self {
        Self {
            secret: secret.to_vec(),
            issuer: issuer.to_string(),
            default_ttl_minutes,
        }
    }

    /// Create a signed access token for `subject`.
    ///
    /// `ttl_minutes` overrides the configured default expiry.
    pub fn issue(&self, subject: &str, ttl_minutes: Option<i64>) -> anyhow::Result<String> {
        let now = chrono::Utc::now().timestamp();
        let ttl = ttl_minutes.unwrap_or(self.default_ttl_minutes);

        let header = serde_json::json!({ "alg": "HS256", "typ": "JWT" });
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl * 60,
            iss: self.issuer.clone(),
        };

        let header_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?);
        let payload_b64 = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signature = self.sign(&header_b64, &payload_b64)?;

        Ok(format!(
            "{}.{}.{}",
            header_b64,
            payload_b64,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Decode and verify a token.
    ///
    /// Returns the claims if the signature matches and the token has not
    /// expired, otherwise `None`. Malformed input is treated the same as a
    /// bad signature; no error escapes to callers.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut segments = token.split('.');
        let (header_b64, payload_b64, signature_b64) =
            (segments.next()?, segments.next()?, segments.next()?);
        if segments.next().is_some() {
            return None;
        }

        let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;

        // verify_slice is a constant-time comparison
        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature).ok()?;

        let payload = URL_SAFE_NO_PAD.decode(payload_b64).ok()?;
        let claims: Claims = serde_json::from_slice(&payload).ok()?;

        if claims.exp < chrono::Utc::now().timestamp() {
            return None;
        }

        Some(claims)
    }

    fn sign(&self, header_b64: &str, payload_b64: &str) -> anyhow::Result<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| anyhow::anyhow!("HMAC init failed: {}", e))?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test-secret-key", "Carpool Backend API", 60)
    }

    #[test]
    fn test_token_round_trip() {
        let codec = codec();
        let token = codec.issue("user-123", None).unwrap();

        let claims = codec.verify(&token).expect("token should verify");
        assert_eq!(claims.sub, "user-123");
        assert_eq!(claims.iss, "Carpool Backend API");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = codec();
        let token = codec.issue("user-123", Some(-5)).unwrap();

        assert!(codec.verify(&token).is_none());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let codec = codec();
        let token = codec.issue("user-123", None).unwrap();

        // Flip one character in the signature segment
        let mut chars: Vec<char> = token.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();

        assert!(codec.verify(&tampered).is_none());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = codec().issue("user-123", None).unwrap();
        let other = TokenCodec::new(b"other-secret", "Carpool Backend API", 60);

        assert!(other.verify(&token).is_none());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let codec = codec();
        assert!(codec.verify("not-a-token").is_none());
        assert!(codec.verify("a.b").is_none());
        assert!(codec.verify("a.b.c.d").is_none());
        assert!(codec.verify("").is_none());
    }

    #[test]
    fn test_password_hash_verify() {
        let hash = hash_password("secret", "hunter22");

        assert!(verify_password("secret", "hunter22", &hash));
        assert!(!verify_password("secret", "hunter23", &hash));
        assert!(!verify_password("other-secret", "hunter22", &hash));
    }
}
