//! Access token verification.
//!
//! Tokens are issued by the external identity provider and signed with RS256.
//! This service only verifies them; `JwtSigner` exists so local tooling and
//! integration tests can mint tokens with a known key pair.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error type for JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingError(String),

    #[error("Failed to decode token: {0}")]
    DecodingError(String),

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// JWT token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// JWT ID
    pub jti: String,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

/// Type of JWT token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Default leeway in seconds for clock skew tolerance.
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Verifies access tokens with the identity provider's public key.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    leeway_secs: u64,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtVerifier")
            .field("algorithm", &self.algorithm)
            .field("leeway_secs", &self.leeway_secs)
            .field("decoding_key", &"[REDACTED]")
            .finish()
    }
}

impl JwtVerifier {
    /// Creates a verifier from an RSA public key in PEM format.
    pub fn from_rsa_pem(public_key_pem: &str, leeway_secs: u64) -> Result<Self, JwtError> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
            .map_err(|e| JwtError::InvalidKey(format!("Invalid public key: {}", e)))?;

        Ok(Self {
            decoding_key,
            algorithm: Algorithm::RS256,
            leeway_secs,
        })
    }

    /// Creates an HS256 verifier. Only for unit tests.
    #[cfg(test)]
    pub fn hs256_for_testing(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            leeway_secs: 0,
        }
    }

    /// Validates a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::InvalidSignature => JwtError::InvalidToken,
                _ => JwtError::DecodingError(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validates an access token and returns the caller's user ID.
    ///
    /// Refresh tokens are rejected.
    pub fn verify_access_token(&self, token: &str) -> Result<(Uuid, Claims), JwtError> {
        let claims = self.verify(token)?;
        if claims.token_type != TokenType::Access {
            return Err(JwtError::InvalidToken);
        }
        let user_id = extract_user_id(&claims)?;
        Ok((user_id, claims))
    }
}

/// Signs access tokens with an RSA private key.
#[derive(Clone)]
pub struct JwtSigner {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    /// Access token expiration in seconds
    pub access_token_expiry_secs: i64,
}

impl std::fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSigner")
            .field("algorithm", &self.algorithm)
            .field("access_token_expiry_secs", &self.access_token_expiry_secs)
            .field("encoding_key", &"[REDACTED]")
            .finish()
    }
}

impl JwtSigner {
    /// Creates a signer from an RSA private key in PEM format.
    pub fn from_rsa_pem(
        private_key_pem: &str,
        access_token_expiry_secs: i64,
    ) -> Result<Self, JwtError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| JwtError::InvalidKey(format!("Invalid private key: {}", e)))?;

        Ok(Self {
            encoding_key,
            algorithm: Algorithm::RS256,
            access_token_expiry_secs,
        })
    }

    /// Creates an HS256 signer. Only for unit tests.
    #[cfg(test)]
    pub fn hs256_for_testing(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            access_token_expiry_secs: 900,
        }
    }

    /// Generates an access token for the given user ID.
    ///
    /// Returns the encoded token and its JWT ID.
    pub fn sign_access_token(&self, user_id: Uuid) -> Result<(String, String), JwtError> {
        self.sign(user_id, TokenType::Access, self.access_token_expiry_secs)
    }

    fn sign(
        &self,
        user_id: Uuid,
        token_type: TokenType,
        expiry_secs: i64,
    ) -> Result<(String, String), JwtError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(expiry_secs)).timestamp(),
            iat: now.timestamp(),
            jti: jti.clone(),
            token_type,
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))?;

        Ok((token, jti))
    }
}

/// Extracts user ID from validated claims.
pub fn extract_user_id(claims: &Claims) -> Result<Uuid, JwtError> {
    Uuid::parse_str(&claims.sub).map_err(|_| JwtError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_for_jwt_testing_12345";

    fn pair() -> (JwtSigner, JwtVerifier) {
        (
            JwtSigner::hs256_for_testing(SECRET),
            JwtVerifier::hs256_for_testing(SECRET),
        )
    }

    #[test]
    fn test_sign_and_verify_access_token() {
        let (signer, verifier) = pair();
        let user_id = Uuid::new_v4();

        let (token, jti) = signer.sign_access_token(user_id).unwrap();
        let (verified_user, claims) = verifier.verify_access_token(&token).unwrap();

        assert_eq!(verified_user, user_id);
        assert_eq!(claims.jti, jti);
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_refresh_token_rejected() {
        let (signer, verifier) = pair();
        let (token, _) = signer
            .sign(Uuid::new_v4(), TokenType::Refresh, 900)
            .unwrap();

        let result = verifier.verify_access_token(&token);
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let (signer, verifier) = pair();
        let (token, _) = signer.sign(Uuid::new_v4(), TokenType::Access, -120).unwrap();

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = JwtSigner::hs256_for_testing(SECRET);
        let verifier = JwtVerifier::hs256_for_testing("a_completely_different_secret_value");
        let (token, _) = signer.sign_access_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(JwtError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let (_, verifier) = pair();
        assert!(verifier.verify("not.a.jwt").is_err());
        assert!(verifier.verify("").is_err());
    }

    #[test]
    fn test_extract_user_id_invalid_subject() {
        let claims = Claims {
            sub: "organizer".to_string(),
            exp: 0,
            iat: 0,
            jti: "jti".to_string(),
            token_type: TokenType::Access,
        };
        assert!(matches!(
            extract_user_id(&claims),
            Err(JwtError::InvalidToken)
        ));
    }

    #[test]
    fn test_invalid_pem_rejected() {
        assert!(matches!(
            JwtVerifier::from_rsa_pem("not a pem", DEFAULT_LEEWAY_SECS),
            Err(JwtError::InvalidKey(_))
        ));
        assert!(matches!(
            JwtSigner::from_rsa_pem("not a pem", 900),
            Err(JwtError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let (signer, verifier) = pair();
        assert!(format!("{:?}", signer).contains("[REDACTED]"));
        assert!(format!("{:?}", verifier).contains("[REDACTED]"));
    }
}
