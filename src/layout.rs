//! Static page structure, declared once from the loaded dataset.
//!
//! The layout carries no chart data; chart slots are filled by the runtime's
//! resolvers after the page loads.

use serde::{Deserialize, Serialize};

use crate::charts::ChartKind;
use crate::core::record::ALL_SITES_VALUE;
use crate::core::{Dataset, PayloadRange};
use crate::runtime::{INPUT_PAYLOAD_SLIDER, INPUT_SITE_DROPDOWN, OutputId};

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const PAYLOAD_SLIDER_MIN_KG: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX_KG: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP_KG: f64 = 1_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub id: String,
    pub placeholder: String,
    pub searchable: bool,
    pub options: Vec<DropdownOption>,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub initial: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlot {
    pub id: String,
    pub kind: ChartKind,
}

/// The whole page: title, the two controls, the two chart placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub title: String,
    pub dropdown: DropdownConfig,
    pub slider: SliderConfig,
    pub charts: Vec<ChartSlot>,
}

/// Builds the page description from the dataset-derived site list and
/// payload bounds.
#[must_use]
pub fn build_page_layout(dataset: &Dataset) -> PageLayout {
    let mut options = Vec::with_capacity(dataset.sites().len() + 1);
    options.push(DropdownOption {
        label: "All Sites".to_owned(),
        value: ALL_SITES_VALUE.to_owned(),
    });
    for site in dataset.sites() {
        options.push(DropdownOption {
            label: site.clone(),
            value: site.clone(),
        });
    }

    PageLayout {
        title: PAGE_TITLE.to_owned(),
        dropdown: DropdownConfig {
            id: INPUT_SITE_DROPDOWN.to_owned(),
            placeholder: "Select a Launch Site here".to_owned(),
            searchable: true,
            options,
            default_value: ALL_SITES_VALUE.to_owned(),
        },
        slider: SliderConfig {
            id: INPUT_PAYLOAD_SLIDER.to_owned(),
            min: PAYLOAD_SLIDER_MIN_KG,
            max: PAYLOAD_SLIDER_MAX_KG,
            step: PAYLOAD_SLIDER_STEP_KG,
            marks: vec![0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0],
            initial: dataset.payload_bounds(),
        },
        charts: vec![
            ChartSlot {
                id: OutputId::SuccessPie.element_id().to_owned(),
                kind: ChartKind::Pie,
            },
            ChartSlot {
                id: OutputId::PayloadScatter.element_id().to_owned(),
                kind: ChartKind::Scatter,
            },
        ],
    }
}
