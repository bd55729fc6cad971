use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Scatter,
}

/// One pie wedge: a label and its count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One scatter sample: payload on x, outcome class on y, booster category
/// drives the color grouping, launch site rides along as hover metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_category: String,
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartSeries {
    Pie(Vec<PieSlice>),
    Scatter(Vec<ScatterPoint>),
}

/// Renderable chart description handed to the charting collaborator.
///
/// Produced fresh on every resolver call and not retained; resolvers are
/// deterministic, so identical inputs yield identical specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    #[serde(flatten)]
    pub series: ChartSeries,
}

impl ChartSpec {
    #[must_use]
    pub fn pie(title: impl Into<String>, slices: Vec<PieSlice>) -> Self {
        Self {
            title: title.into(),
            series: ChartSeries::Pie(slices),
        }
    }

    #[must_use]
    pub fn scatter(title: impl Into<String>, points: Vec<ScatterPoint>) -> Self {
        Self {
            title: title.into(),
            series: ChartSeries::Scatter(points),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self.series {
            ChartSeries::Pie(_) => ChartKind::Pie,
            ChartSeries::Scatter(_) => ChartKind::Scatter,
        }
    }
}
