use super::{PolicySpec, PolicyStatus};
use kube::{CustomResource, ResourceExt};
use kubewarden_audit_scanner_core as scanner;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A policy that governs resources in its own namespace.
#[derive(Clone, Debug, PartialEq, CustomResource, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "policies.kubewarden.io",
    version = "v1",
    kind = "AdmissionPolicy",
    status = "PolicyStatus",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionPolicySpec {
    #[serde(flatten)]
    pub policy: PolicySpec,
}

impl AdmissionPolicy {
    pub fn is_auditable(&self) -> bool {
        self.spec.policy.is_auditable(self.status.as_ref())
    }
}

impl From<&AdmissionPolicy> for scanner::Policy {
    fn from(policy: &AdmissionPolicy) -> Self {
        scanner::Policy::namespaced(
            policy.namespace().unwrap_or_default(),
            policy.name_any(),
            policy.spec.policy.scanner_rules(),
        )
    }
}
