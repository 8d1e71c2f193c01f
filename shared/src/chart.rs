//! Chart data types
//!
//! The chart renderer is an opaque collaborator; these types are the
//! data it accepts. Rendering internals live behind the application's
//! renderer port.

use serde::Serialize;

/// Legend placement hint for the doughnut chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Bottom,
    Top,
}

/// Data handed to the chart renderer: three labeled, colored shares
/// plus doughnut presentation hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub labels: [&'static str; 3],
    pub values: [u32; 3],
    pub colors: [&'static str; 3],
    /// Doughnut hole size as a percentage of the radius
    pub cutout_percent: u8,
    pub legend: LegendPosition,
}
