//! Record store over a remote [`Gateway`]

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{EventDeskError, EventDeskResult};

use super::gateway::{FetchParams, Gateway, GatewayResponse, OrderBy};
use super::record::{Record, RecordStore};

/// Record store whose rows live behind a remote table service
pub struct RemoteStore<R: Record> {
    gateway: Arc<dyn Gateway>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Record> RemoteStore<R> {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            _marker: PhantomData,
        }
    }

    fn encode(record: &R) -> EventDeskResult<Value> {
        serde_json::to_value(record).map_err(|e| {
            EventDeskError::Backend(format!("Failed to encode {} record: {}", R::TABLE, e))
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(value: Value) -> EventDeskResult<T> {
        serde_json::from_value(value).map_err(|e| {
            EventDeskError::Backend(format!("Unexpected {} record shape: {}", R::TABLE, e))
        })
    }

    /// Reject an unsuccessful response
    fn check(response: &GatewayResponse, action: &str) -> EventDeskResult<()> {
        if response.success {
            return Ok(());
        }

        let message = response
            .message
            .clone()
            .unwrap_or_else(|| format!("Failed to {} {} records", action, R::TABLE));
        Err(EventDeskError::Backend(message))
    }

    /// Pull the first successful record out of a batch, failing on any
    /// rejected record
    fn first_written(response: GatewayResponse, action: &str) -> EventDeskResult<Option<R>> {
        Self::check(&response, action)?;

        let failed: Vec<_> = response.results.iter().filter(|r| !r.success).collect();
        if !failed.is_empty() {
            warn!(
                table = R::TABLE,
                failed = failed.len(),
                "remote {} rejected records",
                action
            );
            let reason = failed
                .iter()
                .find_map(|r| r.failure_reason())
                .unwrap_or_else(|| format!("Failed to {} {} record", action, R::TABLE));
            return Err(EventDeskError::Backend(reason));
        }

        response
            .results
            .into_iter()
            .find(|r| r.success)
            .and_then(|r| r.data)
            .map(Self::decode)
            .transpose()
    }
}

impl<R: Record> RecordStore<R> for RemoteStore<R> {
    fn list(&self) -> EventDeskResult<Vec<R>> {
        let params = FetchParams {
            order_by: vec![OrderBy::desc("id")],
        };
        let response = self.gateway.fetch_records(R::TABLE, &params)?;
        Self::check(&response, "fetch")?;

        match response.data {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(rows) => Self::decode(rows),
        }
    }

    fn get(&self, id: R::Id) -> EventDeskResult<Option<R>> {
        let response = self.gateway.get_record_by_id(R::TABLE, id.into())?;
        Self::check(&response, "fetch")?;

        match response.data {
            None | Some(Value::Null) => Ok(None),
            Some(row) => Self::decode(row).map(Some),
        }
    }

    fn insert(&self, record: R) -> EventDeskResult<R> {
        let mut row = Self::encode(&record)?;
        if let Value::Object(fields) = &mut row {
            fields.remove("id");
        }

        let response = self.gateway.create_records(R::TABLE, vec![row])?;
        let created = Self::first_written(response, "create")?.ok_or_else(|| {
            EventDeskError::Backend(format!("Remote create returned no {} record", R::TABLE))
        })?;

        debug!(table = R::TABLE, id = %created.id(), "remote record created");
        Ok(created)
    }

    fn replace(&self, record: R) -> EventDeskResult<Option<R>> {
        let row = Self::encode(&record)?;
        let response = self.gateway.update_records(R::TABLE, vec![row])?;
        Self::first_written(response, "update")
    }

    fn remove(&self, id: R::Id) -> EventDeskResult<bool> {
        let response = self.gateway.delete_records(R::TABLE, vec![id.into()])?;

        if !response.success {
            warn!(
                table = R::TABLE,
                message = response.message.as_deref().unwrap_or(""),
                "remote delete failed"
            );
            return Ok(false);
        }

        let failed = response.results.iter().filter(|r| !r.success).count();
        if failed > 0 {
            warn!(table = R::TABLE, failed, "remote delete rejected records");
            return Ok(false);
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::gateway::{FieldError, RecordResult};
    use crate::models::{Event, EventId, Money, NewEvent};
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use std::sync::Mutex;

    /// Gateway that replays canned responses and records calls
    #[derive(Default)]
    struct FakeGateway {
        responses: Mutex<Vec<EventDeskResult<GatewayResponse>>>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl FakeGateway {
        fn replying(responses: Vec<EventDeskResult<GatewayResponse>>) -> Arc<Self> {
            let mut responses = responses;
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn next(&self, call: &str, payload: Value) -> EventDeskResult<GatewayResponse> {
            self.calls.lock().unwrap().push((call.to_string(), payload));
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(GatewayResponse::failure("no canned response")))
        }
    }

    impl Gateway for FakeGateway {
        fn fetch_records(&self, table: &str, params: &FetchParams) -> EventDeskResult<GatewayResponse> {
            self.next("fetch", json!({"table": table, "params": params}))
        }

        fn get_record_by_id(&self, table: &str, id: i64) -> EventDeskResult<GatewayResponse> {
            self.next("get", json!({"table": table, "id": id}))
        }

        fn create_records(&self, table: &str, records: Vec<Value>) -> EventDeskResult<GatewayResponse> {
            self.next("create", json!({"table": table, "records": records}))
        }

        fn update_records(&self, table: &str, records: Vec<Value>) -> EventDeskResult<GatewayResponse> {
            self.next("update", json!({"table": table, "records": records}))
        }

        fn delete_records(&self, table: &str, ids: Vec<i64>) -> EventDeskResult<GatewayResponse> {
            self.next("delete", json!({"table": table, "ids": ids}))
        }
    }

    fn event(id: i64, title: &str) -> Event {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let mut e = Event::from_new(
            NewEvent {
                title: title.into(),
                date: now,
                description: String::new(),
                budget: Money::from_dollars(500),
                status: None,
            },
            now,
        );
        e.id = EventId::new(id);
        e
    }

    fn ok_row(event: &Event) -> RecordResult {
        RecordResult {
            success: true,
            message: None,
            errors: Vec::new(),
            data: Some(serde_json::to_value(event).unwrap()),
        }
    }

    #[test]
    fn test_list_decodes_rows_and_orders_by_id_desc() {
        let rows = json!([event(2, "B"), event(1, "A")]);
        let gateway = FakeGateway::replying(vec![Ok(GatewayResponse::ok(rows))]);
        let store = RemoteStore::<Event>::new(gateway.clone());

        let events = store.list().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "B");

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls[0].1["table"], "event");
        assert_eq!(calls[0].1["params"]["order_by"][0]["direction"], "DESC");
    }

    #[test]
    fn test_unsuccessful_response_becomes_backend_error() {
        let gateway =
            FakeGateway::replying(vec![Ok(GatewayResponse::failure("Table is offline"))]);
        let store = RemoteStore::<Event>::new(gateway);

        let err = store.list().unwrap_err();
        assert!(matches!(err, EventDeskError::Backend(ref m) if m == "Table is offline"));
    }

    #[test]
    fn test_get_missing_record_is_none() {
        let gateway = FakeGateway::replying(vec![Ok(GatewayResponse::ok(Value::Null))]);
        let store = RemoteStore::<Event>::new(gateway);

        assert!(store.get(EventId::new(9)).unwrap().is_none());
    }

    #[test]
    fn test_insert_strips_id_and_returns_created_row() {
        let created = event(41, "Launch");
        let gateway =
            FakeGateway::replying(vec![Ok(GatewayResponse::batch(vec![ok_row(&created)]))]);
        let store = RemoteStore::<Event>::new(gateway.clone());

        let saved = store.insert(event(0, "Launch")).unwrap();
        assert_eq!(saved.id, EventId::new(41));

        let calls = gateway.calls.lock().unwrap();
        assert!(calls[0].1["records"][0].get("id").is_none());
        assert_eq!(calls[0].1["records"][0]["title"], "Launch");
    }

    #[test]
    fn test_rejected_record_reports_field_error() {
        let rejected = RecordResult {
            success: false,
            message: Some("Invalid record".into()),
            errors: vec![FieldError {
                field_label: "Date".into(),
                message: "is not a valid date".into(),
            }],
            data: None,
        };
        let gateway = FakeGateway::replying(vec![Ok(GatewayResponse::batch(vec![rejected]))]);
        let store = RemoteStore::<Event>::new(gateway);

        let err = store.insert(event(0, "Launch")).unwrap_err();
        assert_eq!(err.to_string(), "Backend error: Date: is not a valid date");
    }

    #[test]
    fn test_transport_failure_propagates() {
        let gateway = FakeGateway::replying(vec![Err(EventDeskError::Backend(
            "connection reset".into(),
        ))]);
        let store = RemoteStore::<Event>::new(gateway);

        assert!(store.get(EventId::new(1)).unwrap_err().is_backend());
    }

    #[test]
    fn test_delete_failures_are_false() {
        let rejected = RecordResult {
            success: false,
            message: Some("locked".into()),
            errors: Vec::new(),
            data: None,
        };
        let gateway = FakeGateway::replying(vec![
            Ok(GatewayResponse::failure("nope")),
            Ok(GatewayResponse::batch(vec![rejected])),
            Ok(GatewayResponse::batch(Vec::new())),
        ]);
        let store = RemoteStore::<Event>::new(gateway);

        assert!(!store.remove(EventId::new(1)).unwrap());
        assert!(!store.remove(EventId::new(1)).unwrap());
        assert!(store.remove(EventId::new(1)).unwrap());
    }

    #[test]
    fn test_replace_without_returned_row_is_none() {
        let gateway = FakeGateway::replying(vec![Ok(GatewayResponse::batch(Vec::new()))]);
        let store = RemoteStore::<Event>::new(gateway);

        assert!(store.replace(event(3, "Gone")).unwrap().is_none());
    }
}
