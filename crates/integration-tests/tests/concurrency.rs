//! Concurrent access to the shared session and cart stores over HTTP.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use reqwest::{StatusCode, header};
use schoolkit_gateway::config::GatewayConfig;
use schoolkit_integration_tests::{TestServer, session_token_from};
use serde_json::{Value, json};
use tokio::task::JoinSet;

const USERS: [(&str, &str, &str); 3] = [
    ("1", "avner", "2004"),
    ("2", "admin", "1234"),
    ("3", "noam", "1919"),
];

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_each_get_a_session() {
    const LOGINS_PER_USER: usize = 20;

    let server = TestServer::spawn(GatewayConfig::default()).await.unwrap();
    let client = TestServer::bare_client().unwrap();

    let mut tasks = JoinSet::new();
    for _ in 0..LOGINS_PER_USER {
        for (userid, username, password) in USERS {
            let client = client.clone();
            let url = server.url("/api/login");
            tasks.spawn(async move {
                let resp = client
                    .post(url)
                    .json(&json!({"username": username, "password": password}))
                    .send()
                    .await
                    .unwrap();
                assert_eq!(resp.status(), StatusCode::OK);
                (userid, username, session_token_from(&resp).unwrap())
            });
        }
    }
    let logins = tasks.join_all().await;

    let tokens: HashSet<&str> = logins.iter().map(|(_, _, token)| token.as_str()).collect();
    assert_eq!(tokens.len(), LOGINS_PER_USER * USERS.len());
    assert_eq!(
        server.state().sessions().len().await,
        (LOGINS_PER_USER * USERS.len()) as u64
    );

    for (userid, username, token) in &logins {
        let status: Value = client
            .get(server.url("/api/auth/status"))
            .header(header::COOKIE, format!("sessionid={token}"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(status, json!({"userid": userid, "username": username}));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_cart_writes_for_distinct_users() {
    const CART_USERS: usize = 32;

    let server = TestServer::spawn(GatewayConfig::default()).await.unwrap();
    let client = TestServer::bare_client().unwrap();

    let mut tasks = JoinSet::new();
    for n in 0..CART_USERS {
        let client = client.clone();
        let url = server.url(&format!("/api/cart?userid=shopper-{n}"));
        tasks.spawn(async move {
            let cart = json!([{
                "id": format!("cart-{n}"),
                "timestamp": n,
                "school": {"id": "1", "name": "Ben Gurion"},
                "grade": {"id": "9", "name": "9th Grade"},
                "items": []
            }]);
            let resp = client.post(url).json(&cart).send().await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        });
    }
    tasks.join_all().await;

    for n in 0..CART_USERS {
        let body: Value = client
            .get(server.url(&format!("/api/cart?userid=shopper-{n}")))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body[0]["id"], format!("cart-{n}"));
    }
}
