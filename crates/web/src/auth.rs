//! Signed session credentials. The handicap index rides inside the claims,
//! so a credential is reissued whenever recomputation changes the stored
//! value and the client stays consistent without a second lookup.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use storage::models::User;
use uuid::Uuid;

pub const TOKEN_TTL_DAYS: i64 = 30;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub handicap: i32,
    pub exp: i64,
}

impl Claims {
    fn for_user(user: &User) -> Self {
        Self {
            sub: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            handicap: user.handicap,
            exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        }
    }
}

pub fn issue_token(secret: &str, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        &Claims::for_user(user),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    fn decode_claims(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }

    fn member() -> User {
        User {
            user_id: Uuid::new_v4(),
            first_name: "Sandy".to_string(),
            last_name: "Lyle".to_string(),
            email: "sandy@example.com".to_string(),
            password_hash: String::new(),
            role: "member".to_string(),
            status: "active".to_string(),
            handicap: 12,
            approved_by: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let user = member();
        let token = issue_token("test-secret", &user).unwrap();
        let claims = decode_claims("test-secret", &token).unwrap();

        assert_eq!(claims.sub, user.user_id);
        assert_eq!(claims.handicap, 12);
        assert_eq!(claims.role, "member");
    }

    #[test]
    fn token_fails_with_wrong_secret() {
        let token = issue_token("test-secret", &member()).unwrap();
        assert!(decode_claims("other-secret", &token).is_err());
    }
}
