//! Backend integration seam.
//!
//! `BackendClient` fixes the call surface the hosted backend exposes —
//! user/session retrieval, remote function invocation, and a generic
//! record query — so the real integration and any substitute satisfy the
//! same contract and cannot silently drift apart. The real client lives
//! with the backend deployment and is out of scope here; `StubBackend`
//! is the recording no-op substitute that lets everything downstream be
//! exercised without a network dependency.
//!
//! Real implementation: hosted backend client. Test double: `StubBackend`.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;
use uuid::Uuid;

/// An authenticated backend user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// An authenticated backend session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Capability surface of the hosted backend.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// The currently authenticated user, if any.
    async fn get_user(&self) -> Result<Option<AuthUser>>;

    /// The current session, if any.
    async fn get_session(&self) -> Result<Option<AuthSession>>;

    /// Invoke a remote function by name.
    async fn invoke(&self, function: &str, payload: Value) -> Result<Value>;

    /// Generic record-query entry point for a table.
    async fn fetch_records(&self, table: &str) -> Result<Vec<Value>>;

    /// Whether backend credentials are configured for this environment.
    fn is_configured(&self) -> bool;
}

/// One recorded stub invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    GetUser,
    GetSession,
    Invoke { function: String, payload: Value },
    FetchRecords { table: String },
}

/// Recording no-op substitute for the hosted backend.
///
/// Every operation succeeds with an empty result and is recorded for
/// assertion; `is_configured` is hardcoded `true` so code under test
/// follows its configured path deterministically.
#[derive(Debug, Default)]
pub struct StubBackend {
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("stub call log lock").clone()
    }

    fn record(&self, call: RecordedCall) {
        tracing::debug!(?call, "stub backend call");
        self.calls.lock().expect("stub call log lock").push(call);
    }
}

#[async_trait]
impl BackendClient for StubBackend {
    async fn get_user(&self) -> Result<Option<AuthUser>> {
        self.record(RecordedCall::GetUser);
        Ok(None)
    }

    async fn get_session(&self) -> Result<Option<AuthSession>> {
        self.record(RecordedCall::GetSession);
        Ok(None)
    }

    async fn invoke(&self, function: &str, payload: Value) -> Result<Value> {
        self.record(RecordedCall::Invoke {
            function: function.to_string(),
            payload,
        });
        Ok(Value::Null)
    }

    async fn fetch_records(&self, table: &str) -> Result<Vec<Value>> {
        self.record(RecordedCall::FetchRecords {
            table: table.to_string(),
        });
        Ok(Vec::new())
    }

    fn is_configured(&self) -> bool {
        true
    }
}
