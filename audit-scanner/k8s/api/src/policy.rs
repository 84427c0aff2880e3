pub mod admission_policy;
pub mod cluster_admission_policy;

pub use self::{
    admission_policy::{AdmissionPolicy, AdmissionPolicySpec},
    cluster_admission_policy::{ClusterAdmissionPolicy, ClusterAdmissionPolicySpec},
};
use kubewarden_audit_scanner_core as scanner;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration shared by namespaced and cluster-wide policies.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicySpec {
    /// The policy server that evaluates this policy.
    #[serde(default = "default_policy_server")]
    pub policy_server: String,

    /// Location of the WebAssembly module implementing the policy.
    pub module: String,

    #[serde(default)]
    pub mode: PolicyMode,

    /// Free-form settings passed to the policy module.
    #[serde(default)]
    pub settings: Option<serde_json::Value>,

    pub rules: Vec<RuleWithOperations>,

    #[serde(default)]
    pub mutating: bool,

    /// Whether resources already in the cluster are evaluated against this
    /// policy.
    #[serde(default = "default_background_audit")]
    pub background_audit: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    #[default]
    Protect,
    Monitor,
}

/// Mirrors the `admissionregistration.k8s.io/v1` rule type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleWithOperations {
    pub api_groups: Option<Vec<String>>,
    pub api_versions: Option<Vec<String>>,
    pub resources: Option<Vec<String>>,
    pub operations: Option<Vec<String>>,
    pub scope: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyStatus {
    pub policy_status: Option<PolicyState>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PolicyState {
    Unscheduled,
    Scheduled,
    Pending,
    Active,
    Unschedulable,
}

fn default_policy_server() -> String {
    "default".to_string()
}

fn default_background_audit() -> bool {
    true
}

// === impl PolicySpec ===

impl PolicySpec {
    /// A policy takes part in an audit once it is active and only if
    /// background auditing has not been turned off.
    pub fn is_auditable(&self, status: Option<&PolicyStatus>) -> bool {
        self.background_audit
            && status.and_then(|s| s.policy_status) == Some(PolicyState::Active)
    }

    fn scanner_rules(&self) -> Vec<scanner::Rule> {
        self.rules.iter().map(Into::into).collect()
    }
}

// === impl RuleWithOperations ===

impl From<&RuleWithOperations> for scanner::Rule {
    fn from(rule: &RuleWithOperations) -> Self {
        let operations = rule
            .operations
            .iter()
            .flatten()
            .filter_map(|op| match op.parse::<scanner::Operation>() {
                Ok(op) => Some(op),
                Err(error) => {
                    tracing::trace!(%error, "Ignoring operation");
                    None
                }
            })
            .collect();
        Self {
            api_groups: rule.api_groups.clone().unwrap_or_default(),
            api_versions: rule.api_versions.clone().unwrap_or_default(),
            resources: rule.resources.clone().unwrap_or_default(),
            operations,
        }
    }
}
