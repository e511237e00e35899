//! WooCommerce Schema CLI
//!
//! Command-line interface for resolving request paths and decoding
//! response bodies against the fixed endpoint table.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use wc_schema::{decode, load_json, Resolver};

#[derive(Parser)]
#[command(name = "wc-schema")]
#[command(about = "Resolve WooCommerce REST API paths and decode response bodies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request path or URL to its response schema
    Resolve {
        /// Request path or full URL (e.g. /wp-json/wc/v3/orders/727)
        path: String,

        /// Output the result as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Decode a response body against the schema of its request path
    Decode {
        /// JSON file holding the response body
        body: PathBuf,

        /// The request path or URL the body answers
        #[arg(long, short)]
        path: String,

        /// Output the result as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// List every known endpoint template
    Routes {
        /// Output the table as JSON (for automation)
        #[arg(long)]
        json: bool,
    },

    /// Fetch an endpoint from a live store and decode the response
    #[cfg(feature = "remote")]
    Fetch {
        /// Endpoint path relative to the namespace (e.g. orders/727)
        endpoint: String,

        /// Store base URL (e.g. https://shop.example.com)
        #[arg(long)]
        url: String,

        /// Consumer key
        #[arg(long)]
        key: String,

        /// Consumer secret
        #[arg(long)]
        secret: String,

        /// Output the result as JSON (for automation)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve { path, json } => run_resolve(&path, json),
        Commands::Decode { body, path, json } => run_decode(&body, &path, json),
        Commands::Routes { json } => run_routes(json),
        #[cfg(feature = "remote")]
        Commands::Fetch {
            endpoint,
            url,
            key,
            secret,
            json,
        } => run_fetch(&endpoint, &url, &key, &secret, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_resolve(path: &str, json_output: bool) -> Result<(), u8> {
    let resolver = Resolver::new();
    let route = resolver.resolve(path).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    if json_output {
        let output = serde_json::json!({
            "schema": route.schema.name(),
            "kind": route.kind.name(),
        });
        println!("{}", output);
    } else {
        println!("{} ({})", route.schema, route.kind);
    }
    Ok(())
}

fn run_decode(body_path: &PathBuf, request_path: &str, json_output: bool) -> Result<(), u8> {
    let resolver = Resolver::new();
    let route = resolver.resolve(request_path).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    let body = load_json(body_path).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    match decode(route, &body) {
        Ok(payload) => {
            if json_output {
                let output = serde_json::json!({
                    "valid": true,
                    "schema": route.schema.name(),
                    "kind": payload.kind().name(),
                    "count": payload.count(),
                });
                println!("{}", output);
            } else {
                println!(
                    "Valid: {} {} record(s) ({})",
                    payload.count(),
                    route.schema,
                    payload.kind()
                );
            }
            Ok(())
        }
        Err(e) => {
            report_error(json_output, &e.to_string());
            Err(e.exit_code() as u8)
        }
    }
}

fn run_routes(json_output: bool) -> Result<(), u8> {
    let resolver = Resolver::new();

    if json_output {
        let routes: Vec<_> = resolver
            .table()
            .entries()
            .map(|entry| {
                serde_json::json!({
                    "template": entry.template(),
                    "kind": entry.kind().name(),
                    "schema": entry.schema().name(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(routes));
    } else {
        for entry in resolver.table().entries() {
            println!(
                "{:<55} {:<11} {}",
                entry.template(),
                entry.kind(),
                entry.schema()
            );
        }
    }
    Ok(())
}

#[cfg(feature = "remote")]
fn run_fetch(
    endpoint: &str,
    url: &str,
    key: &str,
    secret: &str,
    json_output: bool,
) -> Result<(), u8> {
    use wc_schema::Api;

    let api = Api::new(url, key, secret).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    let response = api.get(endpoint).map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    let payload = response.data().map_err(|e| {
        report_error(json_output, &e.to_string());
        e.exit_code() as u8
    })?;

    if json_output {
        let output = serde_json::json!({
            "valid": true,
            "schema": response.route().schema.name(),
            "kind": payload.kind().name(),
            "count": payload.count(),
            "status": response.status(),
        });
        println!("{}", output);
    } else {
        println!(
            "HTTP {}: {} {} record(s) ({})",
            response.status(),
            payload.count(),
            response.route().schema,
            payload.kind()
        );
    }
    Ok(())
}

/// Output an error message in plain text or JSON format.
fn report_error(json_output: bool, msg: &str) {
    if json_output {
        let output = serde_json::json!({ "valid": false, "error": msg });
        println!("{}", output);
    } else {
        eprintln!("Error: {}", msg);
    }
}
