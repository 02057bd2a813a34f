//! # CLI
//!
//! This module defines the command-line interface of `jo` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring the body is valid JSON);
use clap::{Parser, Subcommand};
use jo_core::HttpVerb;

#[derive(Parser)]
#[command(name = "jo", version, about = "Call Jolie services over HTTP/JSON")]
pub struct Cli {
    /// The server URL to send requests to
    #[arg(long, env = "JO_URL", default_value = "http://localhost:8000", global = true)]
    pub url: String,

    /// Request timeout, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Invoke an operation
    ///
    /// Without `--method` the operation is invoked with POST. With `--method` the verb is pinned
    /// for the call, resource style. GET and HEAD send the body as a JSON query string.
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// jo --url http://localhost:8000 call ChuckNorris/search --body '{"query": "Computer"}'
    /// jo call ChuckNorris/search --method GET --body '{"query": "Earth"}'
    /// jo call twice --body 21
    /// ```
    Call {
        /// Endpoint (Service/operation, or just operation)
        #[arg(value_parser = parse_endpoint)]
        endpoint: (Option<String>, String),

        /// JSON payload of the operation
        #[arg(long, value_parser = parse_body)]
        body: Option<serde_json::Value>,

        /// HTTP verb (GET, POST, DELETE, HEAD, PATCH, OPTIONS, PUT)
        #[arg(short = 'X', long, value_parser = parse_verb)]
        method: Option<HttpVerb>,
    },

    /// Invoke the `test` operation and print its acknowledgement
    Test {
        /// Service exposing the `test` operation
        #[arg(long)]
        service: Option<String>,
    },
}

fn parse_endpoint(value: &str) -> Result<(Option<String>, String), String> {
    let (service, operation) = match value.rsplit_once('/') {
        Some((service, operation)) => (Some(service.trim()), operation.trim()),
        None => (None, value.trim()),
    };

    if operation.is_empty() || service.is_some_and(str::is_empty) {
        return Err(format!(
            "Invalid endpoint format: '{value}'. Expected 'Service/operation' or 'operation'"
        ));
    }

    Ok((service.map(str::to_string), operation.to_string()))
}

fn parse_body(value: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))
}

fn parse_verb(value: &str) -> Result<HttpVerb, String> {
    value.parse().map_err(|e: jo_core::UnknownVerb| e.to_string())
}
