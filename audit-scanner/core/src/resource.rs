use crate::{Gvr, Policy};

/// An untyped resource record, as returned by the API server.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Resources of a single type paired with every policy that governs that
/// type.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditableResources {
    pub gvr: Gvr,
    pub policies: Vec<Policy>,
    pub resources: Vec<Record>,
}

/// Where a listing looks for resources.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListScope<'a> {
    Namespace(&'a str),
    Cluster,
}

/// Lists resources by coordinate.
///
/// Implementations perform a single, unpaged listing per call. They must not
/// modify cluster state.
#[async_trait::async_trait]
pub trait ResourceCatalog {
    async fn list(&self, gvr: &Gvr, scope: ListScope<'_>) -> anyhow::Result<Vec<Record>>;
}

pub fn record_name(record: &Record) -> Option<&str> {
    metadata_str(record, "name")
}

pub fn record_namespace(record: &Record) -> Option<&str> {
    metadata_str(record, "namespace")
}

fn metadata_str<'r>(record: &'r Record, field: &str) -> Option<&'r str> {
    record.get("metadata")?.get(field)?.as_str()
}
