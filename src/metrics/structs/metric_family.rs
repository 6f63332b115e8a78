use crate::metrics::enums::metric_type::MetricType;
use crate::metrics::structs::metric_point::MetricPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: &'static str,
    pub help: &'static str,
    pub metric_type: MetricType,
    pub points: Vec<MetricPoint>,
}
