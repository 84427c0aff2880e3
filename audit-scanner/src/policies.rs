use crate::{
    core::Policy,
    k8s::{AdmissionPolicy, ClusterAdmissionPolicy, ResourceExt},
};
use anyhow::Result;
use kube::{
    api::{Api, ListParams},
    Client,
};
use tracing::debug;

/// Reads the policies that apply to an audited namespace from the cluster.
#[derive(Clone)]
pub struct PolicySource {
    client: Client,
}

// === impl PolicySource ===

impl PolicySource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the `AdmissionPolicy` resources in `namespace` and every
    /// `ClusterAdmissionPolicy`, keeping only those that take part in audits.
    pub async fn list(&self, namespace: &str) -> Result<Vec<Policy>> {
        let params = ListParams::default();
        let namespaced = Api::<AdmissionPolicy>::namespaced(self.client.clone(), namespace)
            .list(&params)
            .await?
            .items;
        let cluster = Api::<ClusterAdmissionPolicy>::all(self.client.clone())
            .list(&params)
            .await?
            .items;
        Ok(auditable(namespaced, cluster))
    }
}

/// Namespaced policies come first, and each kind is ordered by name.
fn auditable(
    mut namespaced: Vec<AdmissionPolicy>,
    mut cluster: Vec<ClusterAdmissionPolicy>,
) -> Vec<Policy> {
    namespaced.retain(|p| {
        let keep = p.is_auditable();
        if !keep {
            debug!(name = %p.name_any(), "Skipping AdmissionPolicy");
        }
        keep
    });
    cluster.retain(|p| {
        let keep = p.is_auditable();
        if !keep {
            debug!(name = %p.name_any(), "Skipping ClusterAdmissionPolicy");
        }
        keep
    });
    namespaced.sort_by_key(|p| p.name_any());
    cluster.sort_by_key(|p| p.name_any());

    namespaced
        .iter()
        .map(Policy::from)
        .chain(cluster.iter().map(Policy::from))
        .collect()
}
