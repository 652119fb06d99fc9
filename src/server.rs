use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, State},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::{
    auth::{self, SessionService},
    catalog::Catalog,
    error::{message, Error, Result},
    users::UserDirectory,
};

/// Everything the handlers share. Each store sits behind its own lock.
#[derive(Clone)]
pub struct AppState {
    pub catalog:              Arc<RwLock<Catalog>>,
    pub users:                Arc<RwLock<UserDirectory>>,
    pub sessions:             Arc<SessionService>,
    pub invalid_login_status: StatusCode,
}

impl AppState {
    pub fn new(catalog: Catalog, users: UserDirectory, sessions: SessionService) -> Self {
        Self {
            catalog:              Arc::new(RwLock::new(catalog)),
            users:                Arc::new(RwLock::new(users)),
            sessions:             Arc::new(sessions),
            invalid_login_status: StatusCode::ALREADY_REPORTED,
        }
    }

    pub fn with_invalid_login_status(mut self, status: StatusCode) -> Self {
        self.invalid_login_status = status;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_all))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/isbn/:isbn", get(by_isbn))
        .route("/author/:author", get(by_author))
        .route("/title/:title", get(by_title))
        .route("/review/:isbn", get(reviews))
        .route("/auth/review/:isbn", put(upsert_review).delete(delete_review))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Username of a request whose access token checked out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let token = auth::token_from_headers(&parts.headers);
        let username = state.sessions.current_username(token.as_deref())?;
        Ok(AuthUser(username))
    }
}

#[derive(Default, Debug, Deserialize)]
struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
struct ReviewBody {
    review: Option<String>,
}

/// Body as sent, or all fields missing if it wasn't JSON of the right shape.
fn or_empty<T: Default>(body: Option<Json<T>>) -> T {
    body.map(|Json(body)| body).unwrap_or_default()
}

/// JSON indented by four spaces.
fn pretty<T: Serialize>(value: &T) -> Result<Response> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], buf).into_response())
}

async fn register(State(state): State<AppState>, body: Option<Json<Credentials>>) -> Response {
    let Credentials { username, password } = or_empty(body);
    let mut users = state.users.write().await;
    match users.register(
        username.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    ) {
        Ok(()) => message(
            StatusCode::OK,
            "User successfully registered. Now you can login",
        ),
        Err(e) => e.into_response(),
    }
}

async fn login(State(state): State<AppState>, body: Option<Json<Credentials>>) -> Response {
    let Credentials { username, password } = or_empty(body);
    info!("Login attempt by {}.", username.as_deref().unwrap_or("<missing>"));
    let users = state.users.read().await;
    let session = state.sessions.login(
        &users,
        username.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    );
    match session {
        Ok(session) => (
            StatusCode::OK,
            [(
                header::SET_COOKIE,
                auth::session_cookie(&session, state.sessions.ttl_seconds()),
            )],
            "User successfully logged in",
        )
            .into_response(),
        Err(Error::MissingField(_)) => message(StatusCode::NOT_FOUND, "Error logging in"),
        Err(Error::InvalidCredentials(_)) => message(
            state.invalid_login_status,
            "Invalid Login. Check username and password",
        ),
        Err(e) => e.into_response(),
    }
}

async fn list_all(State(state): State<AppState>) -> Result<Response> {
    let catalog = state.catalog.read().await;
    pretty(catalog.list_all())
}

async fn by_isbn(State(state): State<AppState>, Path(isbn): Path<String>) -> Result<Response> {
    debug!("Looking up {isbn}.");
    let catalog = state.catalog.read().await;
    pretty(catalog.get_by_isbn(&isbn)?)
}

async fn by_author(State(state): State<AppState>, Path(author): Path<String>) -> Response {
    let catalog = state.catalog.read().await;
    match catalog.get_by_author(&author) {
        Ok(books) => pretty(&books).into_response(),
        Err(Error::NotFound(_)) => message(StatusCode::NOT_FOUND, "No books found by this author"),
        Err(e) => e.into_response(),
    }
}

async fn by_title(State(state): State<AppState>, Path(title): Path<String>) -> Response {
    let catalog = state.catalog.read().await;
    match catalog.get_by_title_substring(&title) {
        Ok(books) => pretty(&books).into_response(),
        Err(Error::NotFound(_)) => {
            message(StatusCode::NOT_FOUND, "No books found with this title")
        }
        Err(e) => e.into_response(),
    }
}

async fn reviews(State(state): State<AppState>, Path(isbn): Path<String>) -> Result<Response> {
    let catalog = state.catalog.read().await;
    pretty(catalog.get_reviews(&isbn)?)
}

async fn upsert_review(
    AuthUser(username): AuthUser,
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Option<Json<ReviewBody>>,
) -> Result<Response> {
    let ReviewBody { review } = or_empty(body);
    let mut catalog = state.catalog.write().await;
    // Without review text the book is answered as it stands.
    let book = match review.as_deref() {
        Some(text) => catalog.upsert_review(&isbn, &username, text)?,
        None => catalog.get_by_isbn(&isbn)?,
    };
    Ok(Json(json!({
        "message": "Review successfully added/updated",
        "book": book,
    }))
    .into_response())
}

async fn delete_review(
    AuthUser(username): AuthUser,
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Response> {
    let mut catalog = state.catalog.write().await;
    let book = catalog.delete_review(&isbn, &username)?;
    Ok(Json(json!({
        "message": "Review successfully deleted",
        "book": book,
    }))
    .into_response())
}
