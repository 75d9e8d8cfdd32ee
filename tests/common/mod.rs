//! Common helpers for user-reports integration tests

use serde_json::{Value, json};
use std::time::Duration;
use user_reports::Config;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock users endpoint is mounted on
pub const USERS_PATH: &str = "/public/v2/users";

/// Config pointing at `server`, with a short timeout
pub fn config_for(server: &MockServer, per_page: u32) -> Config {
    let mut config = Config::default();
    config.api.base_url = format!("{}{}", server.uri(), USERS_PATH);
    config.api.per_page = per_page;
    config.api.timeout = Duration::from_secs(5);
    config
}

/// GoRest-shaped user object, including fields the client ignores
pub fn user_json(id: i64, email: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "email": email,
        "gender": if id % 2 == 0 { "female" } else { "male" },
        "status": status,
    })
}

/// `count` users with sequential ids starting at `first_id`
pub fn users_page(first_id: i64, count: usize) -> Value {
    let users: Vec<Value> = (0..count)
        .map(|offset| {
            let id = first_id + offset as i64;
            user_json(id, &format!("user{id}@example.test"), "active")
        })
        .collect();
    Value::Array(users)
}

/// Answer exactly one request for `page` with `body` and status 200
pub async fn mount_page(server: &MockServer, page: u64, per_page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .and(query_param("page", page.to_string()))
        .and(query_param("per_page", per_page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Answer exactly one request for `page` with `status` and no body
pub async fn mount_status(server: &MockServer, page: u64, status: u16) {
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}
