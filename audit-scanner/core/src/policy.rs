use crate::Rule;
use std::fmt;

/// An admission policy, as seen by the audit.
///
/// Namespaced policies correspond to `AdmissionPolicy` resources and only
/// govern resources in their own namespace; cluster policies correspond to
/// `ClusterAdmissionPolicy` resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    Namespaced(PolicyRef),
    Cluster(PolicyRef),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyRef {
    pub id: PolicyId,
    pub rules: Vec<Rule>,
}

/// Uniquely identifies a policy within a cluster.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyId {
    pub namespace: Option<String>,
    pub name: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolicyScope {
    Namespaced,
    Cluster,
}

// === impl Policy ===

impl Policy {
    pub fn namespaced(
        namespace: impl Into<String>,
        name: impl Into<String>,
        rules: Vec<Rule>,
    ) -> Self {
        Self::Namespaced(PolicyRef {
            id: PolicyId {
                namespace: Some(namespace.into()),
                name: name.into(),
            },
            rules,
        })
    }

    pub fn cluster(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self::Cluster(PolicyRef {
            id: PolicyId {
                namespace: None,
                name: name.into(),
            },
            rules,
        })
    }

    fn inner(&self) -> &PolicyRef {
        match self {
            Self::Namespaced(p) | Self::Cluster(p) => p,
        }
    }

    pub fn id(&self) -> &PolicyId {
        &self.inner().id
    }

    pub fn rules(&self) -> &[Rule] {
        &self.inner().rules
    }

    pub fn scope(&self) -> PolicyScope {
        match self {
            Self::Namespaced(_) => PolicyScope::Namespaced,
            Self::Cluster(_) => PolicyScope::Cluster,
        }
    }
}

// === impl PolicyId ===

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.as_deref() {
            Some(ns) => write!(f, "{}/{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}
