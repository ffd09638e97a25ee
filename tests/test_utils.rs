#![allow(dead_code)]

use std::{net::TcpListener, time::Duration};

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    limiter::rate_limiter::FixedWindowLimiter,
    routes::configure_routes,
    use_cases::contact::{ContactHandler, RATE_LIMIT, RATE_WINDOW},
    AppState,
};
use reqwest::Client;
use serde_json::{json, Value};

pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    /// Spawns the API with the production limits and no SMTP credentials,
    /// matching a deployment where the mail secrets are unset.
    pub async fn spawn() -> Self {
        Self::spawn_with_limiter(FixedWindowLimiter::new(RATE_LIMIT, RATE_WINDOW)).await
    }

    pub async fn spawn_with_limiter(limiter: FixedWindowLimiter) -> Self {
        let state = web::Data::new(AppState {
            contact_handler: ContactHandler::new(limiter, None),
        });

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client
            .get(format!("{}/api/v1/health", address))
            .send()
            .await
            .is_err()
        {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self { address, client }
    }

    pub async fn post_contact(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/v1/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to post contact form")
    }

    pub async fn post_contact_as(&self, forwarded_for: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/v1/contact", self.address))
            .header("x-forwarded-for", forwarded_for)
            .json(body)
            .send()
            .await
            .expect("Failed to post contact form")
    }
}

pub fn valid_form() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+1 555 0100",
        "subject": "Commission inquiry",
        "message": "I would like to discuss a project."
    })
}

pub fn form_missing_name() -> Value {
    json!({
        "name": "",
        "email": "a@b.com",
        "subject": "s",
        "message": "m"
    })
}
