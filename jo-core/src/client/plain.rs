//! # Plain Surface
//!
//! [`Jo`] invokes operations by name. The HTTP verb comes from the parameters and defaults
//! to `POST`.
use super::{bind_params, dispatch};
use crate::{error::JoError, request::InvocationParams, transport::Transport};
use serde_json::Value;
use std::sync::Arc;

/// The plain invocation surface.
///
/// Cloning is cheap: the transport is shared.
#[derive(Debug)]
pub struct Jo<T> {
    transport: Arc<T>,
    service: Option<String>,
}

impl<T> Clone for Jo<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            service: self.service.clone(),
        }
    }
}

impl<T: Transport> Jo<T> {
    /// Creates a surface that addresses operations at the server root (`/<operation>`).
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Creates a surface over a transport that is already shared with other surfaces.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self {
            transport,
            service: None,
        }
    }

    /// Returns a new surface scoped to `service`.
    ///
    /// Every operation invoked on it is addressed as `/!/<service>!/<operation>`, whatever
    /// service the call parameters name.
    pub fn service(&self, service: impl Into<String>) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            service: Some(service.into()),
        }
    }

    /// The service this surface is scoped to, if any.
    pub fn service_name(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Binds `operation` and returns a function-like handle to invoke it.
    pub fn operation(&self, operation: impl Into<String>) -> Operation<T> {
        Operation {
            transport: Arc::clone(&self.transport),
            service: self.service.clone(),
            name: operation.into(),
        }
    }

    /// Invokes `operation` right away. Same as `self.operation(operation).call_with(data, params)`.
    pub async fn invoke(
        &self,
        operation: &str,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        let params = bind_params(data, params, self.service.as_deref(), None);
        dispatch(self.transport.as_ref(), operation, params).await
    }

    /// Invokes the conventional `test` operation, which answers with a fixed acknowledgement.
    pub async fn test(&self) -> Result<Value, JoError> {
        self.invoke("test", None, InvocationParams::new()).await
    }
}

/// A single operation bound to a surface.
#[derive(Debug)]
pub struct Operation<T> {
    transport: Arc<T>,
    service: Option<String>,
    name: String,
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            service: self.service.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T: Transport> Operation<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn call(&self, data: Option<Value>) -> Result<Value, JoError> {
        self.call_with(data, InvocationParams::new()).await
    }

    /// Invokes the operation.
    ///
    /// # Arguments
    ///
    /// * `data` - The payload. When `Some`, it replaces `params.data`.
    /// * `params` - Method, service and payload of the call.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The decoded JSON answer of the service.
    /// * `Err(JoError)` - If the request could not be sent, the service answered with a fault,
    ///   or the answer was not valid JSON.
    pub async fn call_with(
        &self,
        data: Option<Value>,
        params: InvocationParams,
    ) -> Result<Value, JoError> {
        let params = bind_params(data, params, self.service.as_deref(), None);
        dispatch(self.transport.as_ref(), &self.name, params).await
    }
}
