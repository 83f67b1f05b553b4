//! Plotly-compatible figure model.
//!
//! A [`Figure`] is plain data: trace arrays plus layout, serialized with
//! serde into the JSON shape `Plotly.newPlot` consumes. It carries no
//! behavior of its own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Serialize for embedding into the page. Infallible for the figure
    /// shapes this crate produces (no non-string map keys, no NaN).
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// One renderable trace. The tag becomes Plotly's `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: Vec<String>,
        y: Vec<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Histogram {
        x: Vec<u32>,
        nbinsx: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
        #[serde(skip_serializing_if = "Option::is_none")]
        xaxis: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        yaxis: Option<String>,
    },
    /// Horizontal box plot used as the histogram's marginal annotation.
    Box {
        x: Vec<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
        #[serde(skip_serializing_if = "Option::is_none")]
        xaxis: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        yaxis: Option<String>,
    },
}

impl Trace {
    /// Number of underlying data points in this trace.
    pub fn point_count(&self) -> usize {
        match self {
            Trace::Bar { x, .. } => x.len(),
            Trace::Pie { labels, .. } => labels.len(),
            Trace::Histogram { x, .. } => x.len(),
            Trace::Box { x, .. } => x.len(),
        }
    }
}

/// Marker styling. `color` accepts either one color for the whole trace or
/// one per point (Plotly allows both under the same key); `colors` is the
/// pie-specific per-slice list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Marker {
    pub fn single(color: &str) -> Self {
        Self {
            color: Some(MarkerColor::Single(color.to_string())),
            colors: None,
        }
    }

    pub fn per_point(colors: Vec<String>) -> Self {
        Self {
            color: Some(MarkerColor::PerPoint(colors)),
            colors: None,
        }
    }

    pub fn pie_slices(colors: Vec<String>) -> Self {
        Self {
            color: None,
            colors: Some(colors),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Fraction of the plot area this axis occupies, `[start, end]` in 0..=1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Some(Title::new(text)),
            domain: None,
        }
    }

    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.domain = Some([start, end]);
        self
    }
}
