use serde::{Deserialize, Serialize};

/// Request body of the auth endpoint, tagged by `action`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuthRequest {
    Register {
        email: String,
        password: String,
        nickname: Option<String>,
    },
    Verify {
        user_id: i64,
        code: String,
    },
    VerifyWithPassword {
        user_id: i64,
        password: String,
    },
    Login {
        email: String,
        password: String,
    },
    ForgotPassword {
        email: String,
    },
    ResetPassword {
        user_id: i64,
        code: String,
        new_password: String,
    },
    UpdateNickname {
        user_id: i64,
        nickname: String,
    },
}

impl AuthRequest {
    /// Wire name of the action, used for logging.
    pub fn action(&self) -> &'static str {
        match self {
            AuthRequest::Register { .. } => "register",
            AuthRequest::Verify { .. } => "verify",
            AuthRequest::VerifyWithPassword { .. } => "verify_with_password",
            AuthRequest::Login { .. } => "login",
            AuthRequest::ForgotPassword { .. } => "forgot_password",
            AuthRequest::ResetPassword { .. } => "reset_password",
            AuthRequest::UpdateNickname { .. } => "update_nickname",
        }
    }
}

/// User information as returned by `login` and `verify_with_password`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Balance in eneftix
    #[serde(default)]
    pub balance: u64,
}

/// `register` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub verification_code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body carrying a full user (`login`, `verify_with_password`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user: User,
}

/// `forgot_password` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordResponse {
    pub user_id: i64,
    pub reset_code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `update_nickname` success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NicknameResponse {
    pub nickname: String,
}

/// Success body with nothing the client consumes (`verify`, `reset_password`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `login` 403 body for an account whose email is not verified yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnverifiedResponse {
    #[serde(default)]
    pub error: String,
    pub user_id: i64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_sends_null_nickname() {
        let request = AuthRequest::Register {
            email: "alice@example.com".to_string(),
            password: "Secret123".to_string(),
            nickname: None,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "action": "register",
                "email": "alice@example.com",
                "password": "Secret123",
                "nickname": null
            })
        );
    }

    #[test]
    fn test_action_tags_match_wire_names() {
        let requests = [
            AuthRequest::Verify { user_id: 1, code: "123456".to_string() },
            AuthRequest::VerifyWithPassword { user_id: 1, password: "p".to_string() },
            AuthRequest::ForgotPassword { email: "a@b.co".to_string() },
            AuthRequest::ResetPassword {
                user_id: 1,
                code: "123456".to_string(),
                new_password: "p".to_string(),
            },
            AuthRequest::UpdateNickname { user_id: 1, nickname: "neo".to_string() },
        ];

        for request in requests {
            let value = serde_json::to_value(&request).unwrap();
            assert_eq!(value["action"], request.action());
        }
    }

    #[test]
    fn test_reset_password_field_names() {
        let request = AuthRequest::ResetPassword {
            user_id: 9,
            code: "654321".to_string(),
            new_password: "NewSecret1".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "action": "reset_password",
                "user_id": 9,
                "code": "654321",
                "new_password": "NewSecret1"
            })
        );
    }

    #[test]
    fn test_user_without_nickname_parses() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "email": "bob@example.com",
            "nickname": null,
            "balance": 0
        }))
        .unwrap();

        assert_eq!(user.id, 3);
        assert_eq!(user.nickname, None);
        assert_eq!(user.balance, 0);
    }

    #[test]
    fn test_unverified_body_parses() {
        let body: UnverifiedResponse =
            serde_json::from_value(json!({ "error": "Email not verified", "user_id": 12 })).unwrap();

        assert_eq!(body.user_id, 12);
        assert_eq!(body.error, "Email not verified");
    }

    #[test]
    fn test_register_response_ignores_extra_fields() {
        let body: RegisterResponse = serde_json::from_value(json!({
            "success": true,
            "user_id": 7,
            "verification_code": "482913",
            "message": "Registration successful. Verification code sent to email."
        }))
        .unwrap();

        assert_eq!(body.user_id, 7);
        assert_eq!(body.verification_code, "482913");
    }
}
