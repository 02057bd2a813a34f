//! # Jo CLI Entry Point
//!
//! The main executable for the Jo tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and sets up logging
//!    (`RUST_LOG`, defaults to `warn`, written to standard error).
//! 2. **Transport**: Builds the HTTP transport for the target server via `jo_core`.
//! 3. **Execution**: Invokes the operation through the plain or the resource-style surface.
//! 4. **Presentation**: Formats and prints the resulting data or error to standard output/error.

mod cli;
mod formatter;

use clap::Parser;
use cli::{Cli, Commands};
use formatter::FormattedString;
use jo_core::{HttpTransport, HttpVerb, InvocationParams, Jo, Jor, JoError};
use serde_json::Value;
use std::{process, time::Duration};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let transport = transport_or_exit(&args.url, args.timeout);

    let result = match args.command {
        Commands::Call {
            endpoint,
            body,
            method,
        } => {
            let (service, operation) = endpoint;
            run_call(transport, service, operation, body, method).await
        }
        Commands::Test { service } => run_test(transport, service).await,
    };

    match result {
        Ok(value) => println!("{}", FormattedString::from(value)),
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn transport_or_exit(url: &str, timeout: Option<u64>) -> HttpTransport {
    let mut builder = HttpTransport::builder(url);
    if let Some(secs) = timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    match builder.build() {
        Ok(transport) => transport,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

async fn run_call(
    transport: HttpTransport,
    service: Option<String>,
    operation: String,
    body: Option<Value>,
    method: Option<HttpVerb>,
) -> Result<Value, JoError> {
    tracing::info!(?service, %operation, ?method, "calling operation");

    match method {
        // An explicit verb goes through the resource-style surface
        Some(verb) => {
            let jor = Jor::new(transport);
            let jor = match service {
                Some(service) => jor.service(service),
                None => jor,
            };
            jor.resource(operation)
                .verb(verb, body, InvocationParams::new())
                .await
        }
        None => {
            let jo = Jo::new(transport);
            let jo = match service {
                Some(service) => jo.service(service),
                None => jo,
            };
            jo.operation(operation).call(body).await
        }
    }
}

async fn run_test(transport: HttpTransport, service: Option<String>) -> Result<Value, JoError> {
    let jo = Jo::new(transport);
    match service {
        Some(service) => jo.service(service).test().await,
        None => jo.test().await,
    }
}
