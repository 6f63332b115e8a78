use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;
use crate::config::structs::qbittorrent_config::QbittorrentConfig;
use crate::qbittorrent::errors::UpstreamError;
use crate::qbittorrent::structs::main_data::MainData;
use crate::qbittorrent::structs::preferences::Preferences;
use crate::qbittorrent::structs::qbittorrent_client::QbittorrentClient;
use crate::qbittorrent::structs::torrent::Torrent;
use crate::qbittorrent::traits::qbittorrent_api::QbittorrentApi;

pub const LOGIN_PATH: &str = "api/v2/auth/login";
pub const TORRENTS_PATH: &str = "api/v2/torrents/info";
pub const PREFERENCES_PATH: &str = "api/v2/app/preferences";
pub const MAIN_DATA_PATH: &str = "api/v2/sync/maindata";
pub const VERSION_PATH: &str = "api/v2/app/version";

impl QbittorrentClient {
    pub fn new(config: &QbittorrentConfig) -> Result<QbittorrentClient, UpstreamError> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(QbittorrentClient {
            client,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
            authenticated: AtomicBool::new(false),
            login_lock: tokio::sync::Mutex::new(()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, UpstreamError> {
        self.base_url.join(path).map_err(|e| UpstreamError::InvalidUrl(format!("{path}: {e}")))
    }

    pub async fn login(&self) -> Result<(), UpstreamError> {
        let response = self.client
            .post(self.endpoint(LOGIN_PATH)?)
            .header(reqwest::header::REFERER, self.base_url.as_str())
            .form(&[("username", self.username.as_str()), ("password", self.password.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(UpstreamError::Authentication("client IP is banned after too many failed logins".to_string()));
        }
        if !status.is_success() {
            return Err(UpstreamError::Status { endpoint: LOGIN_PATH.to_string(), status: status.as_u16() });
        }

        let body = response.text().await?;
        if body.trim() != "Ok." {
            return Err(UpstreamError::Authentication("invalid username or password".to_string()));
        }

        info!("[QBITTORRENT] Logged in to {}", self.base_url);
        Ok(())
    }

    async fn ensure_authenticated(&self) -> Result<(), UpstreamError> {
        if self.authenticated.load(Ordering::SeqCst) {
            return Ok(());
        }
        let _guard = self.login_lock.lock().await;
        if self.authenticated.load(Ordering::SeqCst) {
            return Ok(());
        }
        self.login().await?;
        self.authenticated.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn send_get(&self, path: &str) -> Result<Response, UpstreamError> {
        Ok(self.client.get(self.endpoint(path)?).send().await?)
    }

    async fn get_text(&self, path: &str) -> Result<String, UpstreamError> {
        self.ensure_authenticated().await?;

        let mut response = self.send_get(path).await?;
        if response.status() == StatusCode::FORBIDDEN {
            debug!("[QBITTORRENT] Session rejected on {path}, logging in again");
            self.authenticated.store(false, Ordering::SeqCst);
            self.ensure_authenticated().await?;
            response = self.send_get(path).await?;
        }

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { endpoint: path.to_string(), status: status.as_u16() });
        }
        Ok(response.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let body = self.get_text(path).await?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode { endpoint: path.to_string(), message: e.to_string() })
    }
}

#[async_trait]
impl QbittorrentApi for QbittorrentClient {
    async fn get_torrents(&self) -> Result<Vec<Torrent>, UpstreamError> {
        self.get_json(TORRENTS_PATH).await
    }

    async fn get_preferences(&self) -> Result<Preferences, UpstreamError> {
        self.get_json(PREFERENCES_PATH).await
    }

    async fn get_main_data(&self) -> Result<MainData, UpstreamError> {
        self.get_json(MAIN_DATA_PATH).await
    }

    async fn get_version(&self) -> Result<String, UpstreamError> {
        Ok(self.get_text(VERSION_PATH).await?.trim().to_string())
    }
}
