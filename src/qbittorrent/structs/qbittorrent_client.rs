use std::sync::atomic::AtomicBool;
use reqwest::Client;
use url::Url;

/// Web API client keeping one cookie session for the process lifetime.
#[derive(Debug)]
pub struct QbittorrentClient {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) authenticated: AtomicBool,
    pub(crate) login_lock: tokio::sync::Mutex<()>,
}
