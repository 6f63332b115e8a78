use std::fmt::Write;
use crate::metrics::enums::metric_type::MetricType;
use crate::metrics::structs::metric_family::MetricFamily;
use crate::metrics::structs::metric_point::MetricPoint;

impl MetricFamily {
    pub fn gauge(name: &'static str, help: &'static str) -> MetricFamily {
        MetricFamily {
            name,
            help,
            metric_type: MetricType::gauge,
            points: Vec::new(),
        }
    }

    pub fn counter(name: &'static str, help: &'static str) -> MetricFamily {
        MetricFamily {
            metric_type: MetricType::counter,
            ..Self::gauge(name, help)
        }
    }

    pub fn push(&mut self, labels: Vec<(&'static str, String)>, value: f64) {
        self.points.push(MetricPoint { labels, value });
    }

    pub fn render(&self, output: &mut String) {
        if self.points.is_empty() {
            return;
        }
        let _ = writeln!(output, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(output, "# TYPE {} {}", self.name, self.metric_type);
        for point in &self.points {
            output.push_str(self.name);
            if !point.labels.is_empty() {
                output.push('{');
                for (index, (key, value)) in point.labels.iter().enumerate() {
                    if index > 0 {
                        output.push(',');
                    }
                    let _ = write!(output, "{}=\"{}\"", key, escape_label_value(value));
                }
                output.push('}');
            }
            let _ = writeln!(output, " {}", format_value(point.value));
        }
    }
}

pub fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(character),
        }
    }
    escaped
}

pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf".to_string() } else { "-Inf".to_string() };
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}
