//! # Resource-style Surface
//!
//! [`Jor`] treats every operation as a resource and lets the caller pick the HTTP verb of
//! each call: `jor.resource("users").get(..)`, `.post(..)`, `.delete(..)` and so on.
use super::{bind_params, dispatch};
use crate::{
    error::JoError,
    request::{HttpVerb, InvocationParams},
    transport::Transport,
};
use serde_json::Value;
use std::sync::Arc;

/// The resource-style invocation surface.
#[derive(Debug)]
pub struct Jor<T> {
    transport: Arc<T>,
    service: Option<String>,
}

impl<T> Clone for Jor<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            service: self.service.clone(),
        }
    }
}

impl<T: Transport> Jor<T> {
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    pub fn from_shared(transport: Arc<T>) -> Self {
        Self {
            transport,
            service: None,
        }
    }

    /// Returns a new surface scoped to `service`.
    pub fn service(&self, service: impl Into<String>) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            service: Some(service.into()),
        }
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Binds `operation` and returns its verb table.
    pub fn resource(&self, operation: impl Into<String>) -> Resource<T> {
        Resource {
            transport: Arc::clone(&self.transport),
            service: self.service.clone(),
            name: operation.into(),
        }
    }
}

/// An operation whose verbs can be invoked one by one.
///
/// Each verb method pins the HTTP verb of the call, overriding `params.method`.
#[derive(Debug)]
pub struct Resource<T> {
    transport: Arc<T>,
    service: Option<String>,
    name: String,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            service: self.service.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T: Transport> Resource<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the operation with a verb chosen at runtime.
    pub async fn verb(
        &self,
        verb: HttpVerb,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        let params = bind_params(data, params, self.service.as_deref(), Some(verb));
        dispatch(self.transport.as_ref(), &self.name, params).await
    }

    pub async fn get(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Get, data, params).await
    }

    pub async fn post(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Post, data, params).await
    }

    pub async fn delete(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Delete, data, params).await
    }

    pub async fn head(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Head, data, params).await
    }

    pub async fn patch(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Patch, data, params).await
    }

    pub async fn options(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Options, data, params).await
    }

    pub async fn put(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        self.verb(HttpVerb::Put, data, params).await
    }
}
