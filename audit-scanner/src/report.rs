//! Writes audit results as JSON lines.

use crate::core::{record_name, record_namespace, AuditableResources, Record};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct Entry {
    gvr: String,
    policies: Vec<String>,
    resources: Vec<String>,
}

/// Writes one line per resource type.
pub fn write<W: Write>(mut out: W, auditable: &[AuditableResources]) -> Result<()> {
    for resources in auditable {
        let entry = Entry {
            gvr: resources.gvr.to_string(),
            policies: resources
                .policies
                .iter()
                .map(|p| p.id().to_string())
                .collect(),
            resources: resources.resources.iter().map(resource_name).collect(),
        };
        serde_json::to_writer(&mut out, &entry)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn resource_name(record: &Record) -> String {
    let name = record_name(record).unwrap_or("<unnamed>");
    match record_namespace(record) {
        Some(ns) => format!("{ns}/{name}"),
        None => name.to_string(),
    }
}
