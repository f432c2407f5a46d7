use std::sync::Arc;

use auth_gate_service::app_state::AppState;
use auth_gate_service::domain::{User, UserStore};
use auth_gate_service::services::{AccessGate, HashmapUserStore, TokenCodec};
use auth_gate_service::utils::Config;
use auth_gate_service::Application;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(Config::from_env().expect("Failed to load config"));
    let codec = TokenCodec::new(config.clone());
    let gate = Arc::new(AccessGate::new(codec.clone()));

    let mut user_store = HashmapUserStore::new();
    seed_demo_users(&mut user_store).await;

    let app_state = AppState::new(Arc::new(RwLock::new(user_store)), codec, gate, config);
    let app = Application::build(app_state, "0.0.0.0:8888")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

// Fixed demo principals; a real deployment swaps in its own UserStore.
async fn seed_demo_users(store: &mut HashmapUserStore) {
    for name in ["one", "two"] {
        let user = User::new(name.to_string(), 18, "123456".to_string());
        if store.add_user(user).await.is_err() {
            log::warn!("demo user {} already present", name);
        }
    }
}
