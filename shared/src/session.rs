//! Cookie lookup and the session countdown shown in the page header.
//!
//! The backend rotates the access-token cookie on every request. The token
//! is only read here to show how long the session has left; it is never
//! validated on the client.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

pub const TOKEN_COOKIE: &str = "x-access-token";
pub const CONSENT_COOKIE: &str = "x-consent";
pub const CONSENT_GIVEN: &str = "1";
/// `sessionStorage` key holding the expiry in Unix milliseconds.
pub const EXPIRY_STORAGE_KEY: &str = "loginExp";
pub const TICK_MS: u32 = 1000;

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload has no usable exp claim: {0}")]
    Claims(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct Claims {
    exp: f64,
}

/// Value of cookie `name` in a `document.cookie` string.
///
/// A name that occurs more than once is treated as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    let haystack = format!("; {cookies}");
    let needle = format!("; {name}=");
    let mut parts = haystack.split(needle.as_str());
    parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    value.split(';').next().map(str::to_string)
}

/// Expiry of a JWT in Unix milliseconds, taken from its `exp` claim.
pub fn token_expiry_ms(token: &str) -> Result<f64, TokenError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let claims: Claims = serde_json::from_slice(&bytes)?;
    Ok(claims.exp * MS_PER_SECOND)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Countdown {
    Running(String),
    Expired,
}

impl Countdown {
    pub fn at(expiry_ms: f64, now_ms: f64) -> Self {
        let remaining = expiry_ms - now_ms;
        if remaining.is_nan() || remaining <= 0.0 {
            return Self::Expired;
        }
        let minutes = ((remaining % MS_PER_HOUR) / MS_PER_MINUTE).floor() as u32;
        let seconds = ((remaining % MS_PER_MINUTE) / MS_PER_SECOND).floor() as u32;
        Self::Running(format!("{minutes:02}:{seconds:02}"))
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Running(text) => text,
            Self::Expired => "00:00",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }
}
