use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use axum_server::{bind, Handle};
use std::time::Duration;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::catch_panic::CatchPanicLayer;

use app_state::AppState;
use routes::{gate, login, welcome};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    // Routes registered before `route_layer` sit behind the gate; `/login`
    // stays open. The panic catcher is a last-resort guard only; failures
    // are signaled as error responses, never panics.
    Router::new()
        .route("/welcome", get(welcome::welcome))
        .route_layer(from_fn_with_state(app_state.clone(), gate::require_token))
        .route("/login", post(login::login))
        .layer(CatchPanicLayer::new())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    handle: Handle,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);
        let handle = Handle::new();

        let http_future = bind(address.parse()?)
            .handle(handle.clone())
            .serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            handle,
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        println!("listening on {}", &self.address);

        let handle = self.handle.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("shutdown signal received, draining connections");
                handle.graceful_shutdown(Some(Duration::from_secs(5)));
            }
        });

        self.http_future.await
    }
}
