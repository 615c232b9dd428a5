//! objref
//!
//! Prints the object reference of each resource manifest given on the
//! command line (or read from stdin), one JSON line per manifest.
//!
//! Configuration is read from environment variables:
//! - `OBJREF_FIELD_PATH`: when set, references address this sub-object
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use api::{AnyObject, ObjectReference, get_partial_reference, get_reference};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let field_path = env::var("OBJREF_FIELD_PATH").ok();
    let files: Vec<String> = env::args().skip(1).collect();

    info!("Starting objref");
    info!("  Field path: {}", field_path.as_deref().unwrap_or("<none>"));
    info!("  Inputs: {}", if files.is_empty() { "stdin".to_string() } else { files.join(", ") });

    if files.is_empty() {
        let mut manifest = String::new();
        std::io::stdin()
            .read_to_string(&mut manifest)
            .context("Failed to read manifest from stdin")?;
        emit("<stdin>", &manifest, false, field_path.as_deref())?;
    }

    for file in &files {
        let manifest = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read manifest {file}"))?;
        let is_json = Path::new(file)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        emit(file, &manifest, is_json, field_path.as_deref())?;
    }

    Ok(())
}

/// Decode one manifest and print its reference.
fn emit(source: &str, manifest: &str, is_json: bool, field_path: Option<&str>) -> Result<()> {
    let reference = resolve(manifest, is_json, field_path).inspect_err(|e| {
        error!("Failed to resolve reference for {}: {:#}", source, e);
    })?;
    debug!("{} -> {}/{} {}", source, reference.kind, reference.name, reference.api_version);
    println!("{}", serde_json::to_string(&reference)?);
    Ok(())
}

fn resolve(manifest: &str, is_json: bool, field_path: Option<&str>) -> Result<ObjectReference> {
    let decoded = if is_json {
        AnyObject::from_json(manifest)?
    } else {
        AnyObject::from_yaml(manifest)?
    };
    let obj = Some(decoded.as_object());
    let reference = match field_path {
        Some(path) => get_partial_reference(obj, path)?,
        None => get_reference(obj)?,
    };
    Ok(reference)
}
