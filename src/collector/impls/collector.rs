use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use log::debug;
use crate::collector::structs::collector::Collector;
use crate::config::structs::configuration::Configuration;
use crate::metrics::impls::metric_family::format_value;
use crate::metrics::structs::metric_family::MetricFamily;
use crate::metrics::structs::metric_snapshot::MetricSnapshot;
use crate::qbittorrent::errors::UpstreamError;
use crate::qbittorrent::structs::main_data::MainData;
use crate::qbittorrent::structs::preferences::Preferences;
use crate::qbittorrent::structs::server_state::ServerState;
use crate::qbittorrent::structs::torrent::Torrent;
use crate::qbittorrent::traits::qbittorrent_api::QbittorrentApi;
use crate::tracker_mapper::structs::tracker_mapper::TrackerMapper;

type TorrentValue = fn(&Torrent) -> f64;

fn torrent_gauges() -> [(&'static str, &'static str, TorrentValue); 14] {
    [
        ("qbittorrent_torrent_download_speed_bytes", "The current download speed of torrents (in bytes)", |t| t.download_speed as f64),
        ("qbittorrent_torrent_upload_speed_bytes", "The current upload speed of torrents (in bytes)", |t| t.upload_speed as f64),
        ("qbittorrent_torrent_total_downloaded_bytes", "The current total download amount of torrents (in bytes)", |t| t.downloaded as f64),
        ("qbittorrent_torrent_session_downloaded_bytes", "The current session download amount of torrents (in bytes)", |t| t.downloaded_session as f64),
        ("qbittorrent_torrent_total_uploaded_bytes", "The current total upload amount of torrents (in bytes)", |t| t.uploaded as f64),
        ("qbittorrent_torrent_session_uploaded_bytes", "The current session upload amount of torrents (in bytes)", |t| t.uploaded_session as f64),
        ("qbittorrent_torrent_eta", "The current ETA for each torrent (in seconds)", |t| t.eta as f64),
        ("qbittorrent_torrent_progress", "The current progress of torrents", |t| t.progress),
        ("qbittorrent_torrent_time_active", "The total active time (in seconds)", |t| t.time_active as f64),
        ("qbittorrent_torrent_seeders", "The current number of seeders for each torrent", |t| t.seeders as f64),
        ("qbittorrent_torrent_leechers", "The current number of leechers for each torrent", |t| t.leechers as f64),
        ("qbittorrent_torrent_ratio", "The current ratio each torrent", |t| t.ratio),
        ("qbittorrent_torrent_amount_left_bytes", "The amount remaining for each torrent (in bytes)", |t| t.amount_left as f64),
        ("qbittorrent_torrent_size_bytes", "The size for each torrent (in bytes)", |t| t.size as f64),
    ]
}

fn global_gauge(name: &'static str, help: &'static str, value: f64) -> MetricFamily {
    let mut family = MetricFamily::gauge(name, help);
    family.push(Vec::new(), value);
    family
}

fn global_counter(name: &'static str, help: &'static str, value: f64) -> MetricFamily {
    let mut family = MetricFamily::counter(name, help);
    family.push(Vec::new(), value);
    family
}

fn torrent_info_labels(torrent: &Torrent, tracker: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", torrent.name.clone()),
        ("hash", torrent.hash.clone()),
        ("state", torrent.state.clone()),
        ("tracker", tracker.to_string()),
        ("category", torrent.category.clone()),
        ("tags", torrent.tags.clone()),
        ("save_path", torrent.save_path.clone()),
        ("added_on", torrent.added_on.to_string()),
        ("size", torrent.size.to_string()),
        ("progress", format_value(torrent.progress)),
        ("seeders", torrent.seeders.to_string()),
        ("leechers", torrent.leechers.to_string()),
        ("dl_speed", torrent.download_speed.to_string()),
        ("up_speed", torrent.upload_speed.to_string()),
        ("amount_left", torrent.amount_left.to_string()),
        ("time_active", torrent.time_active.to_string()),
        ("eta", torrent.eta.to_string()),
        ("uploaded", torrent.uploaded.to_string()),
        ("uploaded_session", torrent.uploaded_session.to_string()),
        ("downloaded", torrent.downloaded.to_string()),
        ("downloaded_session", torrent.downloaded_session.to_string()),
        ("max_ratio", format_value(torrent.max_ratio)),
        ("ratio", format_value(torrent.ratio)),
    ]
}

impl Collector {
    pub fn new(api: Arc<dyn QbittorrentApi>, tracker_mapper: Arc<TrackerMapper>, collect_torrent_info: bool, parallel_api_calls: bool) -> Collector {
        Collector {
            api,
            tracker_mapper,
            collect_torrent_info,
            parallel_api_calls,
        }
    }

    pub fn from_config(api: Arc<dyn QbittorrentApi>, tracker_mapper: Arc<TrackerMapper>, config: &Configuration) -> Collector {
        Self::new(api, tracker_mapper, config.metrics.collect_torrent_info, config.performance.parallel_api_calls)
    }

    pub fn tracker_mapper(&self) -> &TrackerMapper {
        &self.tracker_mapper
    }

    /// Runs one poll and builds its snapshot.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn collect(&self) -> Result<MetricSnapshot, UpstreamError> {
        let start = Instant::now();
        let (torrents, preferences, main_data, version) = self.fetch().await?;
        debug!("[COLLECTOR] Fetched {} torrents in {:?}", torrents.len(), start.elapsed());
        Ok(self.build_snapshot(&torrents, &preferences, &main_data.server_state, &version))
    }

    async fn fetch(&self) -> Result<(Vec<Torrent>, Preferences, MainData, String), UpstreamError> {
        if self.parallel_api_calls {
            return tokio::try_join!(
                self.api.get_torrents(),
                self.api.get_preferences(),
                self.api.get_main_data(),
                self.api.get_version()
            );
        }
        let torrents = self.api.get_torrents().await?;
        let preferences = self.api.get_preferences().await?;
        let main_data = self.api.get_main_data().await?;
        let version = self.api.get_version().await?;
        Ok((torrents, preferences, main_data, version))
    }

    pub fn build_snapshot(&self, torrents: &[Torrent], preferences: &Preferences, server_state: &ServerState, version: &str) -> MetricSnapshot {
        let mut families = Vec::with_capacity(40);

        let mut app_version = MetricFamily::gauge("qbittorrent_app_version", "The current qBittorrent version");
        app_version.push(vec![("version", version.to_string())], 1.0);
        families.push(app_version);
        families.push(global_gauge("qbittorrent_torrents_count", "The total number of torrents", torrents.len() as f64));
        families.push(global_gauge("qbittorrent_app_download_rate_limit_bytes", "The current download rate limit (in bytes)", server_state.dl_rate_limit as f64));
        families.push(global_gauge("qbittorrent_app_upload_rate_limit_bytes", "The current upload rate limit (in bytes)", server_state.up_rate_limit as f64));
        families.push(global_gauge("qbittorrent_app_alt_download_rate_limit_bytes", "The alternate download rate limit (in bytes)", preferences.alt_dl_limit as f64));
        families.push(global_gauge("qbittorrent_app_alt_upload_rate_limit_bytes", "The alternate upload rate limit (in bytes)", preferences.alt_up_limit as f64));
        families.push(global_gauge("qbittorrent_app_alt_rate_limits_enabled", "If alternate rate limits are enabled", if server_state.use_alt_speed_limits { 1.0 } else { 0.0 }));
        families.push(global_gauge("qbittorrent_app_max_active_downloads", "The max number of downloads allowed", preferences.max_active_downloads as f64));
        families.push(global_gauge("qbittorrent_app_max_active_uploads", "The max number of active uploads allowed", preferences.max_active_uploads as f64));
        families.push(global_gauge("qbittorrent_app_max_active_torrents", "The max number of active torrents allowed", preferences.max_active_torrents as f64));
        families.push(global_gauge("qbittorrent_global_download_speed_bytes", "The current download speed of all torrents (in bytes)", server_state.dl_info_speed as f64));
        families.push(global_gauge("qbittorrent_global_upload_speed_bytes", "The current upload speed of all torrents (in bytes)", server_state.up_info_speed as f64));
        families.push(global_counter("qbittorrent_global_alltime_downloaded_bytes", "The all-time total download amount of torrents (in bytes)", server_state.alltime_dl as f64));
        families.push(global_counter("qbittorrent_global_alltime_uploaded_bytes", "The all-time total upload amount of torrents (in bytes)", server_state.alltime_ul as f64));
        families.push(global_gauge("qbittorrent_global_session_downloaded_bytes", "The total download amount of torrents for this session (in bytes)", server_state.dl_info_data as f64));
        families.push(global_gauge("qbittorrent_global_session_uploaded_bytes", "The total upload amount of torrents for this session (in bytes)", server_state.up_info_data as f64));
        families.push(global_gauge("qbittorrent_global_ratio", "The current global ratio of all torrents", server_state.global_ratio_value()));

        let gauges = torrent_gauges();
        let mut torrent_families: Vec<MetricFamily> = gauges.iter()
            .map(|(name, help, _)| MetricFamily::gauge(name, help))
            .collect();
        let mut download_by_tracker = MetricFamily::gauge("qbittorrent_torrent_download_speed_bytes_by_tracker", "The current download speed of torrents by tracker (in bytes)");
        let mut upload_by_tracker = MetricFamily::gauge("qbittorrent_torrent_upload_speed_bytes_by_tracker", "The current upload speed of torrents by tracker (in bytes)");
        let mut torrent_info = MetricFamily::gauge("qbittorrent_torrent_info", "All info for torrents");
        let mut state_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut tracker_counts: BTreeMap<String, u64> = BTreeMap::new();

        for torrent in torrents {
            let tracker = self.tracker_mapper.classify(&torrent.tracker);

            for ((_, _, value), family) in gauges.iter().zip(torrent_families.iter_mut()) {
                family.push(vec![("name", torrent.name.clone())], value(torrent));
            }
            download_by_tracker.push(vec![("name", torrent.name.clone()), ("tracker", tracker.clone())], torrent.download_speed as f64);
            upload_by_tracker.push(vec![("name", torrent.name.clone()), ("tracker", tracker.clone())], torrent.upload_speed as f64);

            if self.collect_torrent_info {
                torrent_info.push(torrent_info_labels(torrent, &tracker), 1.0);
            }

            *state_counts.entry(torrent.state.clone()).or_insert(0) += 1;
            *tracker_counts.entry(tracker).or_insert(0) += 1;
        }

        families.extend(torrent_families);
        families.push(download_by_tracker);
        families.push(upload_by_tracker);
        families.push(torrent_info);

        let mut states = MetricFamily::gauge("qbittorrent_torrent_states", "The current number of torrents in each state");
        for (state, count) in &state_counts {
            states.push(vec![("state", state.clone())], *count as f64);
        }
        families.push(states);

        let mut trackers = MetricFamily::gauge("qbittorrent_torrent_trackers", "The current number of torrents for each tracker");
        for (tracker, count) in &tracker_counts {
            trackers.push(vec![("tracker", tracker.clone())], *count as f64);
        }
        families.push(trackers);

        MetricSnapshot {
            families,
            state_counts,
            tracker_counts,
            torrents: torrents.len(),
        }
    }
}
