//! Request validation.
//!
//! Rules run in a fixed order and stop at the first failure, which is
//! reported as a 400 with one of the static messages below.

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts},
    Json,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use service_core::error::AppError;
use validator::ValidateLength;

use crate::services::token::TOKEN_LENGTH;

pub mod messages {
    pub const INVALID_BODY: &str = "Corpo da requisição inválido";

    pub const EMAIL_REQUIRED: &str = "O campo \"email\" é obrigatório";
    pub const EMAIL_FORMAT: &str = "O \"email\" deve ter o formato \"email@email.com\"";
    pub const PASSWORD_REQUIRED: &str = "O campo \"password\" é obrigatório";
    pub const PASSWORD_LENGTH: &str = "O \"password\" deve ter pelo menos 6 caracteres";

    pub const TOKEN_MISSING: &str = "Token não encontrado";
    pub const TOKEN_INVALID: &str = "Token inválido";

    pub const NAME_REQUIRED: &str = "O campo \"name\" é obrigatório";
    pub const NAME_LENGTH: &str = "O \"name\" deve ter pelo menos 3 caracteres";
    pub const AGE_REQUIRED: &str = "O campo \"age\" é obrigatório";
    pub const AGE_RANGE: &str = "O campo \"age\" deve ser um número inteiro igual ou maior que 18";
    pub const TALK_REQUIRED: &str = "O campo \"talk\" é obrigatório";
    pub const WATCHED_AT_REQUIRED: &str = "O campo \"watchedAt\" é obrigatório";
    pub const WATCHED_AT_FORMAT: &str = "O campo \"watchedAt\" deve ter o formato \"dd/mm/aaaa\"";
    pub const RATE_REQUIRED: &str = "O campo \"rate\" é obrigatório";
    pub const RATE_RANGE: &str = "O campo \"rate\" deve ser um número inteiro entre 1 e 5";
}

pub const MIN_PASSWORD_LENGTH: u64 = 6;
pub const MIN_NAME_LENGTH: u64 = 3;
pub const MIN_AGE: u64 = 18;
pub const RATE_BOUNDS: std::ops::RangeInclusive<u64> = 1..=5;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("date regex is valid"));

/// A value built from a loosely typed request body by running ordered rules.
pub trait ValidatePayload: Sized {
    type Raw: DeserializeOwned;

    /// Runs the rules in order; `Err` carries the message of the first failure.
    fn validate(raw: Self::Raw) -> Result<Self, &'static str>;
}

/// JSON body extractor that only yields bodies passing `T`'s rules.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: ValidatePayload + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<T::Raw>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::BadRequest(messages::INVALID_BODY.to_string())
        })?;

        let valid = T::validate(raw).map_err(|message| {
            tracing::debug!(reason = message, "Validation failed");
            AppError::BadRequest(message.to_string())
        })?;

        Ok(ValidatedJson(valid))
    }
}

/// Guard for routes that need a login token in the `authorization` header.
///
/// Only the shape is checked: any 16-character value is accepted.
#[derive(Debug, Clone)]
pub struct RequireToken(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for RequireToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::BadRequest(messages::TOKEN_MISSING.to_string()))?;

        let token = check_token(value.to_str().ok())
            .map_err(|message| AppError::BadRequest(message.to_string()))?;

        Ok(RequireToken(token.to_string()))
    }
}

pub fn check_token(token: Option<&str>) -> Result<&str, &'static str> {
    match token {
        Some("") => Err(messages::TOKEN_MISSING),
        Some(t) if t.validate_length(None, None, Some(TOKEN_LENGTH as u64)) => Ok(t),
        _ => Err(messages::TOKEN_INVALID),
    }
}

/// `None`, JSON `null` and `""` all count as absent.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(v) => Some(v),
    }
}

pub fn check_email(value: Option<&Value>) -> Result<String, &'static str> {
    let value = present(value).ok_or(messages::EMAIL_REQUIRED)?;
    match value.as_str() {
        Some(email) if EMAIL_REGEX.is_match(email) => Ok(email.to_string()),
        _ => Err(messages::EMAIL_FORMAT),
    }
}

pub fn check_password(value: Option<&Value>) -> Result<String, &'static str> {
    let value = present(value).ok_or(messages::PASSWORD_REQUIRED)?;
    match value.as_str() {
        Some(password) if password.validate_length(Some(MIN_PASSWORD_LENGTH), None, None) => {
            Ok(password.to_string())
        }
        _ => Err(messages::PASSWORD_LENGTH),
    }
}

pub fn check_name(value: Option<&Value>) -> Result<String, &'static str> {
    let value = present(value).ok_or(messages::NAME_REQUIRED)?;
    match value.as_str() {
        Some(name) if name.validate_length(Some(MIN_NAME_LENGTH), None, None) => {
            Ok(name.to_string())
        }
        _ => Err(messages::NAME_LENGTH),
    }
}

/// Non-negative integers, including integral floats such as `18.0`.
fn as_whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    })
}

pub fn check_age(value: Option<&Value>) -> Result<u64, &'static str> {
    let value = present(value).ok_or(messages::AGE_REQUIRED)?;
    match as_whole_number(value) {
        Some(age) if age >= MIN_AGE => Ok(age),
        _ => Err(messages::AGE_RANGE),
    }
}

pub fn check_talk(value: Option<&Value>) -> Result<&Value, &'static str> {
    present(value).ok_or(messages::TALK_REQUIRED)
}

pub fn check_watched_at(value: Option<&Value>) -> Result<String, &'static str> {
    let value = present(value).ok_or(messages::WATCHED_AT_REQUIRED)?;
    match value.as_str() {
        Some(date) if DATE_REGEX.is_match(date) => Ok(date.to_string()),
        _ => Err(messages::WATCHED_AT_FORMAT),
    }
}

/// Unlike the other fields, an empty string is a bad rate rather than a missing one.
pub fn check_rate(value: Option<&Value>) -> Result<u8, &'static str> {
    let value = match value {
        None | Some(Value::Null) => return Err(messages::RATE_REQUIRED),
        Some(v) => v,
    };
    match as_whole_number(value) {
        Some(rate) if RATE_BOUNDS.contains(&rate) => Ok(rate as u8),
        _ => Err(messages::RATE_RANGE),
    }
}
