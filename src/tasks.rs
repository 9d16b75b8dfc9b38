//! The simulated client's transactions.
//!
//! `login` runs once per user at startup and stores a [`Session`]; the six
//! weighted tasks then reuse that session's authorization header. Each task
//! classifies its response by status code through [`classify`] and reports
//! the verdict with `set_success`/`set_failure` exactly once per invocation.
//! Transport-level errors (connection refused, timeout) are left to Goose's
//! own accounting and are not classified here.

use goose::goose::GooseResponse;
use goose::prelude::*;
use once_cell::sync::Lazy;

use crate::config::Credentials;
use crate::payload;
use crate::session::{LoginResponse, Session};

pub const LOGIN_PATH: &str = "/application/token/login/";
pub const NEWS_PATH: &str = "/dreamapp/news";
pub const FRIEND_LIST_PATH: &str = "/dreamapp/friendlist/";
pub const SERVER_LIST_PATH: &str = "/dreamapp/server";
pub const NEWS_POST_PATH: &str = "/dreamapp/news/post";
pub const SERVER_POST_PATH: &str = "/dreamapp/server/post";
/// Metrics name for updates: the path template without the record id, so all
/// three id variants aggregate under one reporting bucket.
pub const SERVER_UPDATE_NAME: &str = "/dreamapp/server/update/";

static CREDENTIALS: Lazy<Credentials> = Lazy::new(Credentials::from_env);

/// Status-code classification rule shared by every task.
///
/// The reason string embeds the observed code literally; it is the single
/// source of the failure text reported to Goose.
pub fn classify(status: u16, expected: u16) -> Result<(), String> {
    if status == expected {
        Ok(())
    } else {
        Err(format!("Status code is {status}"))
    }
}

/// Report the classification verdict for a completed request.
fn report_outcome(user: &GooseUser, mut goose: GooseResponse, expected: u16) -> TransactionResult {
    match goose.response {
        Ok(response) => match classify(response.status().as_u16(), expected) {
            Ok(()) => user.set_success(&mut goose.request),
            Err(reason) => user.set_failure(&reason, &mut goose.request, None, None),
        },
        // No status to classify; Goose already recorded the transport error.
        Err(_) => Ok(()),
    }
}

/// Authorization header value from the session stored by `login`.
///
/// Login is an on-start transaction, so the session is always present once
/// weighted tasks run; a missing session is a programming error and panics.
fn session_auth(user: &GooseUser) -> String {
    user.get_session_data_unchecked::<Session>()
        .auth_header()
        .to_owned()
}

async fn fetch(user: &mut GooseUser, path: &'static str, expected: u16) -> TransactionResult {
    let auth = session_auth(user);
    let request_builder = user
        .get_request_builder(&GooseMethod::Get, path)?
        .header("Authorization", auth);
    let request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .name(path)
        .build();
    let goose = user.request(request).await?;
    report_outcome(user, goose, expected)
}

/// Write requests derive their headers per invocation: the session header is
/// immutable input and the JSON content type is added on the request builder
/// only, never written back to the shared session state.
async fn send_json(
    user: &mut GooseUser,
    method: GooseMethod,
    path: &str,
    name: &str,
    body: String,
    expected: u16,
) -> TransactionResult {
    let auth = session_auth(user);
    let request_builder = user
        .get_request_builder(&method, path)?
        .header("Authorization", auth)
        .header("content-type", "application/json")
        .body(body);
    let request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .name(name)
        .build();
    let goose = user.request(request).await?;
    report_outcome(user, goose, expected)
}

/// On-start transaction: obtain a token and store the session.
///
/// The response status is deliberately not checked before parsing; an error
/// body without `auth_token` surfaces as a deserialization error that fails
/// this user's startup outright. No retry.
pub async fn login(user: &mut GooseUser) -> TransactionResult {
    let request_builder = user
        .get_request_builder(&GooseMethod::Post, LOGIN_PATH)?
        .form(&[
            ("username", CREDENTIALS.username.as_str()),
            ("password", CREDENTIALS.password.as_str()),
        ]);
    let request = GooseRequest::builder()
        .set_request_builder(request_builder)
        .name(LOGIN_PATH)
        .build();
    let login: LoginResponse = user.request(request).await?.response?.json().await?;
    user.set_session_data(Session::new(login.auth_token));
    Ok(())
}

/// Fetch the news feed (weight 3, tag `get_last_news`).
pub async fn get_last_news(user: &mut GooseUser) -> TransactionResult {
    fetch(user, NEWS_PATH, 200).await
}

/// Fetch the friend list (weight 2, tag `get_friend_list`).
pub async fn get_friend_list(user: &mut GooseUser) -> TransactionResult {
    fetch(user, FRIEND_LIST_PATH, 200).await
}

/// Fetch the server list (weight 3, tag `get_server`).
pub async fn get_server_list(user: &mut GooseUser) -> TransactionResult {
    fetch(user, SERVER_LIST_PATH, 200).await
}

/// Create a news post with two independently drawn suffixes (weight 1).
pub async fn post_news(user: &mut GooseUser) -> TransactionResult {
    let body = payload::news_post(&mut rand::thread_rng()).to_string();
    send_json(user, GooseMethod::Post, NEWS_POST_PATH, NEWS_POST_PATH, body, 201).await
}

/// Create a server record (weight 1).
pub async fn post_server(user: &mut GooseUser) -> TransactionResult {
    let body = payload::server_record(&mut rand::thread_rng()).to_string();
    send_json(user, GooseMethod::Post, SERVER_POST_PATH, SERVER_POST_PATH, body, 201).await
}

/// Update one of the three pre-seeded server records (weight 1).
pub async fn put_server(user: &mut GooseUser) -> TransactionResult {
    let (id, body) = {
        let mut rng = rand::thread_rng();
        (payload::update_target(&mut rng), payload::server_update(&mut rng).to_string())
    };
    let path = format!("{SERVER_UPDATE_NAME}{id}");
    send_json(user, GooseMethod::Put, &path, SERVER_UPDATE_NAME, body, 200).await
}

/// On-stop hook; nothing to clean up today, kept as the extension point.
pub async fn shutdown(_user: &mut GooseUser) -> TransactionResult {
    Ok(())
}
