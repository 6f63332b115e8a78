use std::collections::HashMap;
use log::{debug, info};
use url::Url;
use crate::tracker_mapper::errors::HostParseError;
use crate::tracker_mapper::structs::mapping_entry::MappingEntry;
use crate::tracker_mapper::structs::tracker_mapper::TrackerMapper;

pub const FALLBACK_PATTERN: &str = "other";
pub const UNKNOWN_TRACKER: &str = "unknown";

impl TrackerMapper {
    pub fn new(mappings: Vec<(String, String)>) -> TrackerMapper {
        let mut entries = Vec::with_capacity(mappings.len());
        let mut exact = HashMap::with_capacity(mappings.len());
        let mut fallback = None;

        for (pattern, label) in mappings {
            if exact.contains_key(&pattern) {
                continue;
            }
            let index = entries.len();
            if pattern == FALLBACK_PATTERN {
                fallback = Some(index);
            }
            exact.insert(pattern.clone(), index);
            entries.push(MappingEntry::new(&pattern, &label));
        }

        info!("[TRACKERS] Loaded {} tracker mappings", entries.len());
        if !entries.is_empty() {
            debug!("[TRACKERS] Tracker mappings: {:?}", entries.iter().map(|e| (&e.pattern, &e.label)).collect::<Vec<_>>());
        }

        TrackerMapper { entries, exact, fallback }
    }

    /// Returns the loaded `(pattern, label)` pairs in table order.
    pub fn mappings(&self) -> Vec<(String, String)> {
        self.entries.iter().map(|entry| (entry.pattern.clone(), entry.label.clone())).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn classify(&self, endpoint: &str) -> String {
        self.map_tracker(Some(endpoint))
    }

    /// Maps a tracker endpoint to its category label. Never fails.
    pub fn map_tracker(&self, endpoint: Option<&str>) -> String {
        let endpoint = match endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => endpoint,
            _ => return UNKNOWN_TRACKER.to_string(),
        };

        match Self::extract_host(endpoint) {
            Ok(host) => self.resolve(&host),
            Err(error) => {
                debug!("[TRACKERS] {error}");
                endpoint.to_string()
            }
        }
    }

    pub fn extract_host(endpoint: &str) -> Result<String, HostParseError> {
        let host = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            match Url::parse(endpoint) {
                Ok(url) if url.host_str().is_some() => Self::authority_host(endpoint).to_string(),
                Ok(_) => endpoint.to_string(),
                Err(error) => {
                    debug!("[TRACKERS] Failed to parse URL {endpoint}: {error}");
                    endpoint.to_string()
                }
            }
        } else if let Some(without_scheme) = endpoint.strip_prefix("udp://") {
            Self::strip_port(without_scheme).to_string()
        } else {
            let first_segment = endpoint.split('/').next().unwrap_or_default();
            Self::strip_port(first_segment).to_string()
        };

        if host.is_empty() {
            return Err(HostParseError::EmptyHost(endpoint.to_string()));
        }
        Ok(host)
    }

    /// Host as written in the endpoint: no case folding, punycode or IPv4 rewriting.
    fn authority_host(endpoint: &str) -> &str {
        let rest = match endpoint.find("://") {
            Some(index) => &endpoint[index + 3..],
            None => endpoint,
        };
        let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
        let authority = match authority.rfind('@') {
            Some(index) => &authority[index + 1..],
            None => authority,
        };
        if authority.starts_with('[') {
            return match authority.find(']') {
                Some(index) => &authority[..=index],
                None => authority,
            };
        }
        Self::strip_port(authority)
    }

    fn strip_port(value: &str) -> &str {
        match value.find(':') {
            Some(index) => &value[..index],
            None => value,
        }
    }

    fn resolve(&self, host: &str) -> String {
        if let Some(index) = self.exact.get(host) {
            return self.entries[*index].label.clone();
        }

        let matched = self.entries.iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != self.fallback)
            .find(|(_, entry)| entry.matches(host));
        if let Some((_, entry)) = matched {
            return entry.label.clone();
        }

        match self.fallback {
            Some(index) => self.entries[index].label.clone(),
            None => host.to_string(),
        }
    }
}
