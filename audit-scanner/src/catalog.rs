use crate::core::{Gvr, ListScope, Record, ResourceCatalog};
use anyhow::{bail, Result};
use kube::{
    api::{Api, ApiResource, DynamicObject, ListParams},
    Client,
};
use tracing::warn;

/// Lists resources of arbitrary types through the Kubernetes API.
#[derive(Clone)]
pub struct KubeCatalog {
    client: Client,
}

// === impl KubeCatalog ===

impl KubeCatalog {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ResourceCatalog for KubeCatalog {
    async fn list(&self, gvr: &Gvr, scope: ListScope<'_>) -> Result<Vec<Record>> {
        if gvr.has_wildcard() {
            warn!(%gvr, "Listing a coordinate with an unexpanded wildcard");
        }
        let resource = api_resource(gvr);
        let api = match scope {
            ListScope::Namespace(ns) => {
                Api::<DynamicObject>::namespaced_with(self.client.clone(), ns, &resource)
            }
            ListScope::Cluster => Api::<DynamicObject>::all_with(self.client.clone(), &resource),
        };

        let list = api.list(&ListParams::default()).await?;
        list.items
            .into_iter()
            .map(|obj| into_record(gvr, obj))
            .collect()
    }
}

/// Describes the coordinate to the dynamic client. The kind is not known from
/// a coordinate and isn't needed to list.
fn api_resource(gvr: &Gvr) -> ApiResource {
    ApiResource {
        group: gvr.group.clone(),
        version: gvr.version.clone(),
        api_version: gvr.api_version(),
        kind: String::new(),
        plural: gvr.resource.clone(),
    }
}

/// List items are usually served without type metadata, so the record's
/// `apiVersion` is filled in from the coordinate when absent.
fn into_record(gvr: &Gvr, obj: DynamicObject) -> Result<Record> {
    let serde_json::Value::Object(mut record) = serde_json::to_value(obj)? else {
        bail!("{gvr} object is not a JSON object");
    };
    record
        .entry("apiVersion")
        .or_insert_with(|| serde_json::Value::String(gvr.api_version()));
    Ok(record)
}
