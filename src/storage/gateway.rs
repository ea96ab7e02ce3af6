//! Remote record gateway seam
//!
//! A `Gateway` is the transport to a hosted table service. It speaks in
//! untyped JSON rows; [`RemoteStore`](super::RemoteStore) turns those rows into
//! typed records and translates failure responses into errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EventDeskResult;

/// Sort direction for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One ordering clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Parameters for a multi-row fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchParams {
    #[serde(default)]
    pub order_by: Vec<OrderBy>,
}

/// A field-level rejection reported for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_label: String,
    pub message: String,
}

/// Outcome for one record of a batch create, update, or delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RecordResult {
    /// Human-readable reason for a failed record
    ///
    /// The first field error wins over the record-level message.
    pub fn failure_reason(&self) -> Option<String> {
        if let Some(err) = self.errors.first() {
            return Some(format!("{}: {}", err.field_label, err.message));
        }
        self.message.clone()
    }
}

/// Response returned by every gateway call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub results: Vec<RecordResult>,
}

impl GatewayResponse {
    /// A successful response carrying `data`
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            results: Vec::new(),
        }
    }

    /// A successful batch response
    pub fn batch(results: Vec<RecordResult>) -> Self {
        Self {
            success: true,
            message: None,
            data: None,
            results,
        }
    }

    /// An unsuccessful response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            results: Vec::new(),
        }
    }
}

/// Transport to a remote table service
///
/// `Err` means the call itself failed (network, decoding); an `Ok` response
/// may still report `success: false`.
pub trait Gateway: Send + Sync {
    fn fetch_records(&self, table: &str, params: &FetchParams) -> EventDeskResult<GatewayResponse>;

    fn get_record_by_id(&self, table: &str, id: i64) -> EventDeskResult<GatewayResponse>;

    fn create_records(&self, table: &str, records: Vec<Value>) -> EventDeskResult<GatewayResponse>;

    fn update_records(&self, table: &str, records: Vec<Value>) -> EventDeskResult<GatewayResponse>;

    fn delete_records(&self, table: &str, ids: Vec<i64>) -> EventDeskResult<GatewayResponse>;
}
