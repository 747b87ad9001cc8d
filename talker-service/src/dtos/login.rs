use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::validation::{check_email, check_password, ValidatePayload};

/// Raw `POST /login` body. Fields stay untyped so each rule can report its own message.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl ValidatePayload for Credentials {
    type Raw = LoginRequest;

    fn validate(raw: LoginRequest) -> Result<Self, &'static str> {
        let email = check_email(raw.email.as_ref())?;
        let password = check_password(raw.password.as_ref())?;
        Ok(Credentials { email, password })
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
