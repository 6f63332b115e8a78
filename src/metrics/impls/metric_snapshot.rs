use crate::metrics::structs::metric_family::MetricFamily;
use crate::metrics::structs::metric_snapshot::MetricSnapshot;

impl MetricSnapshot {
    /// Renders the snapshot in the Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(4096 + self.torrents * 1024);
        for family in &self.families {
            family.render(&mut output);
        }
        output
    }

    pub fn family(&self, name: &str) -> Option<&MetricFamily> {
        self.families.iter().find(|family| family.name == name)
    }

    /// Value of the first point of `name` whose labels contain all of `labels`.
    pub fn value(&self, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
        self.family(name)?
            .points
            .iter()
            .find(|point| labels.iter().all(|(key, value)| {
                point.labels.iter().any(|(k, v)| k == key && v == value)
            }))
            .map(|point| point.value)
    }
}
