use std::fmt;
use crate::metrics::enums::metric_type::MetricType;

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricType::gauge => write!(f, "gauge"),
            MetricType::counter => write!(f, "counter"),
        }
    }
}
