use crate::data::{DatasetData, ExtraData, ServerData};
use crate::error::Result;

/// Fluent builder for a chartisan chart document.
///
/// Each configuration call consumes the builder and returns it, so a whole
/// chart can be described in one expression:
///
/// ```
/// use chartisan::Chartisan;
///
/// let json = Chartisan::build()
///     .labels(["a", "b", "c"])
///     .dataset("Sample 1", vec![1.0, 2.0, 3.0])
///     .dataset("Sample 2", vec![3.0, 2.0, 1.0])
///     .to_json()
///     .unwrap();
/// ```
///
/// Datasets are keyed by name: re-adding a name updates the existing entry
/// in place instead of appending a duplicate, and keeps its position in the
/// rendering order.
#[derive(Debug, Clone, Default)]
pub struct Chartisan {
    server_data: ServerData,
}

impl Chartisan {
    /// Creates a new empty chart: no labels, no extra hints, no datasets.
    #[must_use]
    pub fn build() -> Self {
        Self::default()
    }

    /// Sets the chart labels, replacing any previously set sequence.
    ///
    /// Label count is not checked against dataset value counts; the
    /// frontend is responsible for tolerating mismatches.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.server_data.chart.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the chart-level extra rendering hints, replacing any previous
    /// bag wholesale.
    #[must_use]
    pub fn extra(mut self, value: ExtraData) -> Self {
        self.server_data.chart.extra = Some(value);
        self
    }

    /// Adds a simple dataset to the chart, or replaces the values of the
    /// dataset already carrying this name.
    ///
    /// New datasets are appended and receive the smallest unused id. If
    /// more control is needed, use [`advanced_dataset`](Self::advanced_dataset).
    #[must_use]
    pub fn dataset(self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.advanced_dataset(name, values, None, None)
    }

    /// Adds a dataset with full control over its id and extra hints, or
    /// updates the dataset already carrying this name.
    ///
    /// On update the dataset keeps its position in the sequence; its
    /// values and extra bag are replaced, and its id is reassigned when an
    /// explicit `id` is given. When `id` is `None`, new datasets receive
    /// the smallest unused id and updated datasets keep theirs. A
    /// caller-supplied id that collides with another dataset's id is not
    /// detected.
    #[must_use]
    pub fn advanced_dataset(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
        id: Option<u64>,
        extra: Option<ExtraData>,
    ) -> Self {
        let name = name.into();
        if let Some(index) = self.find_dataset(&name) {
            let dataset = &mut self.server_data.datasets[index];
            if let Some(id) = id {
                dataset.id = id;
            }
            dataset.values = values;
            dataset.extra = extra;
        } else {
            let id = id.unwrap_or_else(|| self.next_free_id());
            self.server_data.datasets.push(DatasetData {
                id,
                name,
                values,
                extra,
            });
        }
        self
    }

    /// Returns the accumulated document as a structured value, field names
    /// and nesting exactly as they appear on the wire.
    #[must_use]
    pub fn server_data(&self) -> &ServerData {
        &self.server_data
    }

    /// Consumes the builder and returns the accumulated document.
    #[must_use]
    pub fn into_server_data(self) -> ServerData {
        self.server_data
    }

    /// Returns the accumulated document encoded as a compact JSON string.
    ///
    /// # Errors
    /// Returns an error if a value placed into an extra bag cannot be
    /// represented by the encoder. Extra bags are not pre-validated.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.server_data)?)
    }

    /// Position of the dataset carrying `name`, if any. Linear scan; the
    /// expected dataset count is in the tens.
    fn find_dataset(&self, name: &str) -> Option<usize> {
        self.server_data
            .datasets
            .iter()
            .position(|dataset| dataset.name == name)
    }

    /// Smallest non-negative integer not used as a dataset id, recomputed
    /// at each insertion. The probe starts at 0, so ids freed by a
    /// reassignment are handed out again.
    fn next_free_id(&self) -> u64 {
        let mut id = 0;
        while self.is_id_used(id) {
            // Cannot reach u64::MAX: the smallest free id is at most the
            // dataset count.
            id += 1;
        }
        id
    }

    fn is_id_used(&self, id: u64) -> bool {
        self.server_data
            .datasets
            .iter()
            .any(|dataset| dataset.id == id)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
