//! The enriched native panic error.
//!
//! A [`NativePanic`] is built exactly once, at the point a subprocess or
//! embedded-module failure has been confirmed as a panic. Its fields are
//! private: after the optional `with_*` builders the value never changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Subsystem;

/// A confirmed panic of a native component, with provenance attached.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct NativePanic {
    message: String,

    native_stack: String,

    /// Opaque request/operation context supplied by the caller.
    #[serde(default)]
    request: serde_json::Value,

    subsystem: Subsystem,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    introspection_url: Option<String>,
}

impl NativePanic {
    /// Create a panic error with the mandatory fields.
    pub fn new(
        message: impl Into<String>,
        native_stack: impl Into<String>,
        request: serde_json::Value,
        subsystem: Subsystem,
    ) -> Self {
        NativePanic {
            message: message.into(),
            native_stack: native_stack.into(),
            request,
            subsystem,
            schema_path: None,
            schema: None,
            introspection_url: None,
        }
    }

    /// Attach the path of the schema being processed.
    pub fn with_schema_path(mut self, path: impl Into<String>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    /// Attach the schema content being processed.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Attach the introspection URL in use.
    pub fn with_introspection_url(mut self, url: impl Into<String>) -> Self {
        self.introspection_url = Some(url.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Native stack or panic output of the failed component.
    pub fn native_stack(&self) -> &str {
        &self.native_stack
    }

    pub fn request(&self) -> &serde_json::Value {
        &self.request
    }

    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    pub fn schema_path(&self) -> Option<&str> {
        self.schema_path.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn introspection_url(&self) -> Option<&str> {
        self.introspection_url.as_deref()
    }
}
