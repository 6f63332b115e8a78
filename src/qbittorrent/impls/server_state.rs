use crate::qbittorrent::structs::server_state::ServerState;

impl ServerState {
    /// Parses `global_ratio`, yielding `0` when it is not a number.
    pub fn global_ratio_value(&self) -> f64 {
        self.global_ratio.trim().parse::<f64>().unwrap_or(0.0)
    }
}
