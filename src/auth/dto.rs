use serde::{Deserialize, Serialize};

/// Request body for user registration. Fields stay optional so missing
/// values surface as field errors instead of a body-level reject.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Request body for login. Absent fields fall back to empty strings,
/// which can never match a stored credential.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration payload after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response returned after login or refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            expires_in,
        }
    }
}

/// Plain confirmation message, used by register and logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_shape() {
        let response = TokenResponse::bearer("abc.def.ghi".into(), 3600);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["expires_in"], 3600);
    }

    #[test]
    fn login_request_defaults_missing_fields_to_empty() {
        let parsed: LoginRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.email, "");
        assert_eq!(parsed.password, "");
    }

    #[test]
    fn register_request_tolerates_missing_fields() {
        let parsed: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.name.is_none());
        assert!(parsed.email.is_none());
        assert!(parsed.password.is_none());
        assert!(parsed.password_confirmation.is_none());
    }
}
