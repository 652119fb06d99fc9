use std::fmt::{self, Debug, Formatter};

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderMap,
};
use chrono::{Duration, Utc};
use cookie::Cookie;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{info, warn};

use crate::{
    error::{Error, Result},
    types::session::{Claims, Session},
    users::UserDirectory,
};

pub const BEARER_PREFIX: &str = "Bearer";

/// Name of the cookie a login sets.
pub const SESSION_COOKIE: &str = "session";

/// Signs access tokens at login and checks them on every authenticated request.
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation:   Validation,
    ttl:          Duration,
}

impl Debug for SessionService {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionService {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            validation:   Validation::new(Algorithm::HS256),
            ttl:          Duration::seconds(ttl_seconds),
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn login(&self, users: &UserDirectory, username: &str, password: &str) -> Result<Session> {
        if username.is_empty() {
            return Err(Error::MissingField("username"));
        }
        if password.is_empty() {
            return Err(Error::MissingField("password"));
        }
        if !users.verify_credentials(username, password) {
            warn!("Rejected login for {username}.");
            return Err(Error::InvalidCredentials(username.to_string()));
        }
        let access_token = self.issue(username)?;
        info!("{username} logged in.");
        Ok(Session {
            access_token,
            username: username.to_string(),
        })
    }

    pub fn issue(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Check signature and expiry of `token`.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                warn!("Rejected token: {e}.");
                Error::Unauthenticated
            })?;
        Ok(data.claims)
    }

    pub fn current_username(&self, token: Option<&str>) -> Result<String> {
        let token = token.ok_or(Error::Unauthenticated)?;
        Ok(self.verify(token)?.sub)
    }
}

/// Pull the token out of an `Authorization: Bearer` header, falling back to the
/// session cookie when there is no bearer token.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .or_else(|| session_cookie_value(headers))
}

fn bearer_token(authorization: &str) -> Option<String> {
    let (scheme, token) = authorization.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case(BEARER_PREFIX) || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

fn session_cookie_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(|cookie| cookie.ok())
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// `Set-Cookie` value handing `session` to the client.
pub fn session_cookie(session: &Session, max_age_seconds: i64) -> String {
    Cookie::build((SESSION_COOKIE, session.access_token.clone()))
        .http_only(true)
        .path("/")
        .max_age(cookie::time::Duration::seconds(max_age_seconds))
        .build()
        .to_string()
}
