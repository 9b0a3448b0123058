use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Free-form rendering hints attached to a chart or a dataset.
///
/// Insertion order is preserved through serialization, so hints appear on
/// the wire in the order the caller supplied them.
pub type ExtraData = IndexMap<String, Value>;

/// Chart-level information shared across all datasets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    /// Categorical axis labels, in rendering order.
    pub labels: Vec<String>,

    /// Extra rendering hints for the whole chart. Omitted from the wire
    /// document when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraData>,
}

/// One series on the chart: an identifier, a display name, the numeric
/// values, and optional rendering hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetData {
    /// Wire identifier consumed by the frontend. Auto-assigned as the
    /// smallest unused non-negative integer unless the caller supplies one.
    pub id: u64,

    /// Display name. Unique within a document; it is the merge key that
    /// decides whether a dataset call creates or updates.
    pub name: String,

    /// Data points, in label order.
    pub values: Vec<f64>,

    /// Extra rendering hints for this dataset. Omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ExtraData>,
}

/// The complete document sent to the chartisan frontend.
///
/// Field names and nesting are a wire compatibility contract. Dataset order
/// is insertion order and determines rendering order downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServerData {
    pub chart: ChartData,
    pub datasets: Vec<DatasetData>,
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
