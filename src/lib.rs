//! Builder for chartisan chart documents.
//!
//! A chart document holds the chart labels, optional free-form rendering
//! hints, and an ordered sequence of named numeric datasets. The builder
//! accumulates this state through fluent calls and serializes it to the
//! JSON wire format the chartisan frontend consumes:
//!
//! ```json
//! {
//!   "chart": { "labels": ["a", "b"], "extra": { "..." : "..." } },
//!   "datasets": [
//!     { "id": 0, "name": "Sample", "values": [1.0, 2.0], "extra": { } }
//!   ]
//! }
//! ```
//!
//! Transport is out of scope: callers (an HTTP handler, typically) set
//! their own content type and write the string returned by
//! [`Chartisan::to_json`] as the response body.
//!
//! ```
//! use chartisan::Chartisan;
//!
//! let json = Chartisan::build()
//!     .labels(["a", "b", "c"])
//!     .dataset("Sample 1", vec![1.0, 2.0, 3.0])
//!     .dataset("Sample 2", vec![3.0, 2.0, 1.0])
//!     .to_json()
//!     .unwrap();
//! assert!(json.contains("\"Sample 1\""));
//! ```

pub mod builder;
pub mod data;
pub mod error;

pub use builder::Chartisan;
pub use data::{ChartData, DatasetData, ExtraData, ServerData};
pub use error::{ChartisanError, Result};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
