#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub labels: Vec<(&'static str, String)>,
    pub value: f64,
}
