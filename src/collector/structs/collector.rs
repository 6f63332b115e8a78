use std::sync::Arc;
use crate::qbittorrent::traits::qbittorrent_api::QbittorrentApi;
use crate::tracker_mapper::structs::tracker_mapper::TrackerMapper;

pub struct Collector {
    pub(crate) api: Arc<dyn QbittorrentApi>,
    pub(crate) tracker_mapper: Arc<TrackerMapper>,
    /// Emits `qbittorrent_torrent_info`, the highest cardinality metric.
    pub(crate) collect_torrent_info: bool,
    pub(crate) parallel_api_calls: bool,
}
