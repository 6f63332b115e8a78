#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use actix_web::cookie::Cookie;
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::TempDir;
use qbittorrent_exporter::cache::structs::metrics_cache::MetricsCache;
use qbittorrent_exporter::collector::structs::collector::Collector;
use qbittorrent_exporter::config::structs::configuration::Configuration;
use qbittorrent_exporter::qbittorrent::errors::UpstreamError;
use qbittorrent_exporter::qbittorrent::structs::main_data::MainData;
use qbittorrent_exporter::qbittorrent::structs::preferences::Preferences;
use qbittorrent_exporter::qbittorrent::structs::server_state::ServerState;
use qbittorrent_exporter::qbittorrent::structs::torrent::Torrent;
use qbittorrent_exporter::qbittorrent::traits::qbittorrent_api::QbittorrentApi;
use qbittorrent_exporter::tracker_mapper::structs::tracker_mapper::TrackerMapper;

pub type TestConfig = Arc<Configuration>;

/// In-memory qBittorrent that counts how often each read is issued.
#[derive(Default)]
pub struct FakeApi {
    pub torrents: Mutex<Vec<Torrent>>,
    pub torrent_calls: AtomicUsize,
    pub preference_calls: AtomicUsize,
    pub main_data_calls: AtomicUsize,
    pub version_calls: AtomicUsize,
    pub fail_torrents: AtomicBool,
}

impl FakeApi {
    pub fn with_torrents(torrents: Vec<Torrent>) -> Arc<FakeApi> {
        Arc::new(FakeApi { torrents: Mutex::new(torrents), ..Default::default() })
    }

    pub fn polls(&self) -> usize {
        self.torrent_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QbittorrentApi for FakeApi {
    async fn get_torrents(&self) -> Result<Vec<Torrent>, UpstreamError> {
        self.torrent_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_torrents.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status { endpoint: "api/v2/torrents/info".to_string(), status: 503 });
        }
        Ok(self.torrents.lock().clone())
    }

    async fn get_preferences(&self) -> Result<Preferences, UpstreamError> {
        self.preference_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Preferences { alt_dl_limit: 1024, alt_up_limit: 512, max_active_downloads: 3, max_active_uploads: 5, max_active_torrents: 8 })
    }

    async fn get_main_data(&self) -> Result<MainData, UpstreamError> {
        self.main_data_calls.fetch_add(1, Ordering::SeqCst);
        Ok(MainData {
            rid: 1,
            full_update: true,
            server_state: ServerState {
                alltime_dl: 10_000,
                alltime_ul: 25_000,
                dl_info_data: 100,
                up_info_data: 250,
                dl_info_speed: 10,
                up_info_speed: 20,
                dl_rate_limit: 0,
                up_rate_limit: 0,
                global_ratio: "2.50".to_string(),
                use_alt_speed_limits: false,
            },
        })
    }

    async fn get_version(&self) -> Result<String, UpstreamError> {
        self.version_calls.fetch_add(1, Ordering::SeqCst);
        Ok("v5.0.1".to_string())
    }
}

pub fn torrent(name: &str, state: &str, tracker: &str) -> Torrent {
    Torrent {
        name: name.to_string(),
        hash: format!("{name}-hash"),
        state: state.to_string(),
        tracker: tracker.to_string(),
        size: 1_000,
        progress: 1.0,
        ratio: 2.0,
        ..Default::default()
    }
}

pub fn sample_torrents() -> Vec<Torrent> {
    vec![
        torrent("ubuntu.iso", "uploading", "https://tracker.beyond-hd.me/announce"),
        torrent("debian.iso", "stalledUP", "udp://tracker.opentrackr.org:1337/announce"),
        torrent("fedora.iso", "downloading", ""),
    ]
}

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.trackers.insert("beyond-hd".to_string(), toml::Value::String("BHD".to_string()));
    config.trackers.insert("other".to_string(), toml::Value::String("Other".to_string()));
    Arc::new(config)
}

pub fn create_test_cache(api: Arc<FakeApi>, config: &Configuration) -> Arc<MetricsCache> {
    let tracker_mapper = Arc::new(TrackerMapper::new(config.tracker_mappings()));
    let collector = Arc::new(Collector::from_config(api, tracker_mapper, config));
    Arc::new(MetricsCache::from_config(collector, &config.cache))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// State of the stand-in qBittorrent Web API server.
#[derive(Default)]
pub struct WebUiState {
    pub logins: AtomicUsize,
    pub session: Mutex<Option<String>>,
    pub broken_preferences: AtomicBool,
}

async fn webui_login(form: web::Form<Vec<(String, String)>>, state: web::Data<Arc<WebUiState>>) -> HttpResponse {
    let valid = form.iter().any(|(k, v)| k == "username" && v == "admin")
        && form.iter().any(|(k, v)| k == "password" && v == "adminadmin");
    if !valid {
        return HttpResponse::Ok().body("Fails.");
    }
    let count = state.logins.fetch_add(1, Ordering::SeqCst) + 1;
    let token = format!("session-{count}");
    *state.session.lock() = Some(token.clone());
    HttpResponse::Ok()
        .cookie(Cookie::build("SID", token).path("/").finish())
        .body("Ok.")
}

fn webui_authorized(request: &HttpRequest, state: &WebUiState) -> bool {
    match (request.cookie("SID"), state.session.lock().as_ref()) {
        (Some(cookie), Some(session)) => cookie.value() == session,
        _ => false,
    }
}

async fn webui_torrents(request: HttpRequest, state: web::Data<Arc<WebUiState>>) -> HttpResponse {
    if !webui_authorized(&request, &state) {
        return HttpResponse::Forbidden().body("Forbidden");
    }
    HttpResponse::Ok().content_type("application/json").body(
        r#"[{"name":"ubuntu.iso","state":"uploading","tracker":"https://tracker.beyond-hd.me/announce","dlspeed":0,"upspeed":2048,"num_seeds":4,"num_leechs":1,"ratio":1.5,"size":4096}]"#
    )
}

async fn webui_preferences(request: HttpRequest, state: web::Data<Arc<WebUiState>>) -> HttpResponse {
    if !webui_authorized(&request, &state) {
        return HttpResponse::Forbidden().body("Forbidden");
    }
    if state.broken_preferences.load(Ordering::SeqCst) {
        return HttpResponse::Ok().body("<html>not json</html>");
    }
    HttpResponse::Ok().content_type("application/json").body(r#"{"alt_dl_limit":1024,"alt_up_limit":512,"max_active_downloads":3,"max_active_uploads":5,"max_active_torrents":8}"#)
}

async fn webui_main_data(request: HttpRequest, state: web::Data<Arc<WebUiState>>) -> HttpResponse {
    if !webui_authorized(&request, &state) {
        return HttpResponse::Forbidden().body("Forbidden");
    }
    HttpResponse::Ok().content_type("application/json").body(r#"{"rid":1,"full_update":true,"server_state":{"alltime_dl":10,"alltime_ul":20,"global_ratio":"2.00","use_alt_speed_limits":false}}"#)
}

async fn webui_version(request: HttpRequest, state: web::Data<Arc<WebUiState>>) -> HttpResponse {
    if !webui_authorized(&request, &state) {
        return HttpResponse::Forbidden().body("Forbidden");
    }
    HttpResponse::Ok().body("v4.6.7\n")
}

/// Starts a local server speaking the subset of the qBittorrent Web API the
/// exporter uses. Returns its address, handle and shared state.
pub async fn start_webui() -> (SocketAddr, ServerHandle, Arc<WebUiState>) {
    let state = Arc::new(WebUiState::default());
    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .route("/api/v2/auth/login", web::post().to(webui_login))
            .route("/api/v2/torrents/info", web::get().to(webui_torrents))
            .route("/api/v2/app/preferences", web::get().to(webui_preferences))
            .route("/api/v2/sync/maindata", web::get().to(webui_main_data))
            .route("/api/v2/app/version", web::get().to(webui_version))
    })
        .workers(1)
        .shutdown_timeout(1)
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind stand-in Web API")
        .disable_signals();
    let address = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    tokio::time::sleep(Duration::from_millis(50)).await;
    (address, handle, state)
}
