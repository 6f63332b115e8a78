use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use qbittorrent_exporter::cache::structs::metrics_cache::MetricsCache;
use qbittorrent_exporter::collector::structs::collector::Collector;
use qbittorrent_exporter::common::common::setup_logging;
use qbittorrent_exporter::config::structs::configuration::Configuration;
use qbittorrent_exporter::http::http::http_service;
use qbittorrent_exporter::http::structs::http_service_data::HttpServiceData;
use qbittorrent_exporter::qbittorrent::structs::qbittorrent_client::QbittorrentClient;
use qbittorrent_exporter::structs::Cli;
use qbittorrent_exporter::tracker_mapper::structs::tracker_mapper::TrackerMapper;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.config.clone(), args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let client = match QbittorrentClient::new(&config.qbittorrent) {
                Ok(client) => Arc::new(client),
                Err(error) => {
                    error!("[QBITTORRENT] Unable to create client: {error}");
                    exit(1);
                }
            };
            info!("[QBITTORRENT] Polling {} as '{}'", client.base_url(), config.qbittorrent.username);

            let tracker_mapper = Arc::new(TrackerMapper::new(config.tracker_mappings()));
            let collector = Arc::new(Collector::from_config(client, tracker_mapper, &config));
            let metrics_cache = Arc::new(MetricsCache::from_config(collector, &config.cache));
            info!("[CACHE] Snapshot window {:?}, single flight {}", metrics_cache.window(), config.cache.single_flight);

            let address: SocketAddr = match config.server.bind_address.parse() {
                Ok(address) => address,
                Err(error) => {
                    error!("[HTTP] Invalid bind address {}: {error}", config.server.bind_address);
                    exit(1);
                }
            };
            let data = Arc::new(HttpServiceData::new(metrics_cache, Arc::new(config.server.clone())));
            let (handle, server) = match http_service(address, data, &config.server) {
                Ok(service) => service,
                Err(error) => {
                    error!("[HTTP] Unable to bind to {address}: {error}");
                    exit(1);
                }
            };
            let server_task = tokio::spawn(server);

            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    interval.tick().await;
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                            }
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    handle.stop(true).await;
                    info!("Server shutting down completed");
                }
                result = server_task => {
                    match result {
                        Ok(Ok(())) => info!("[HTTP] Server stopped"),
                        Ok(Err(error)) => error!("[HTTP] Server failed: {error}"),
                        Err(error) => error!("[HTTP] Server task failed: {error}"),
                    }
                }
            }
            Ok(())
        })
}
