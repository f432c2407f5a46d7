use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::{AccessGate, TokenCodec};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type GateType = Arc<AccessGate>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub codec: TokenCodec,
    pub gate: GateType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        codec: TokenCodec,
        gate: GateType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            codec,
            gate,
            config,
        }
    }
}
