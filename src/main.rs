//! census-verifier CLI - one-shot census identity verification.
//!
//! Loads the registry configuration, verifies a single document number and
//! prints the verdict as JSON together with the host `unique_id`.
//!
//! Exit codes: 0 verified, 1 not verified, 2 error.

use std::path::Path;
use std::process::exit;

use census_verifier::{CensusVerificationClient, load_config};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (config_path, document_number) = match args.as_slice() {
        [_, config_path, document_number] => (config_path, document_number),
        _ => {
            eprintln!("usage: census-verifier <config.json> <document-number>");
            exit(2);
        }
    };

    let config = match load_config(Path::new(config_path)) {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {e}");
            exit(2);
        }
    };

    let client = match CensusVerificationClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to build client: {e}");
            exit(2);
        }
    };

    match client.verify(document_number) {
        Ok(result) => {
            let unique_id = client.unique_id(document_number);
            println!(
                "{}",
                serde_json::json!({
                    "verified": result.verified,
                    "raw_response_code": result.raw_response_code,
                    "unique_id": unique_id,
                })
            );
            exit(if result.verified { 0 } else { 1 });
        }
        Err(e) => {
            error!("verification failed: {e}");
            exit(2);
        }
    }
}
