use super::{PolicySpec, PolicyStatus};
use kube::{CustomResource, ResourceExt};
use kubewarden_audit_scanner_core as scanner;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A policy that governs resources across the whole cluster.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "policies.kubewarden.io",
    version = "v1",
    kind = "ClusterAdmissionPolicy",
    status = "PolicyStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAdmissionPolicySpec {
    #[serde(flatten)]
    pub policy: PolicySpec,
}

impl ClusterAdmissionPolicy {
    pub fn is_auditable(&self) -> bool {
        self.spec.policy.is_auditable(self.status.as_ref())
    }
}

impl From<&ClusterAdmissionPolicy> for scanner::Policy {
    fn from(policy: &ClusterAdmissionPolicy) -> Self {
        scanner::Policy::cluster(policy.name_any(), policy.spec.policy.scanner_rules())
    }
}
