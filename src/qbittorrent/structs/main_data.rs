use serde::{Deserialize, Serialize};
use crate::qbittorrent::structs::server_state::ServerState;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MainData {
    pub rid: u64,
    pub full_update: bool,
    pub server_state: ServerState,
}
