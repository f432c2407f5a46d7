use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct WelcomeResponse {
    pub name: String,
    pub age: u8,
}
