use crate::Gvr;
use std::{fmt, str::FromStr};

/// Selects the resource types, and the operations on them, that a policy
/// governs.
///
/// Group, version, and resource values are taken verbatim. A group of `""`
/// names the core API group and `"*"` is an ordinary string here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rule {
    pub api_groups: Vec<String>,
    pub api_versions: Vec<String>,
    pub resources: Vec<String>,
    pub operations: Vec<Operation>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Connect,
    All,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown admission operation: {0}")]
pub struct InvalidOperation(String);

// === impl Rule ===

impl Rule {
    /// Expands the rule into every coordinate in the cross-product of its
    /// groups, versions, and resources.
    ///
    /// Coordinates are produced group-major, then by version, then by
    /// resource, each in the order listed on the rule. If any of the three
    /// lists is empty, nothing is produced.
    pub fn gvrs(&self) -> impl Iterator<Item = Gvr> + '_ {
        self.api_groups.iter().flat_map(move |group| {
            self.api_versions.iter().flat_map(move |version| {
                self.resources
                    .iter()
                    .map(move |resource| Gvr::new(group, version, resource))
            })
        })
    }
}

// === impl Operation ===

impl FromStr for Operation {
    type Err = InvalidOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            "CONNECT" => Ok(Self::Connect),
            "*" => Ok(Self::All),
            s => Err(InvalidOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Connect => "CONNECT",
            Self::All => "*",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(groups: &[&str], versions: &[&str], resources: &[&str]) -> Rule {
        Rule {
            api_groups: groups.iter().map(|s| s.to_string()).collect(),
            api_versions: versions.iter().map(|s| s.to_string()).collect(),
            resources: resources.iter().map(|s| s.to_string()).collect(),
            operations: vec![],
        }
    }

    #[test]
    fn expands_cross_product() {
        let r = rule(&["", "apps"], &["v1", "alphav1"], &["pods", "deployments"]);
        let gvrs = r.gvrs().collect::<Vec<_>>();
        assert_eq!(
            gvrs,
            vec![
                Gvr::new("", "v1", "pods"),
                Gvr::new("", "v1", "deployments"),
                Gvr::new("", "alphav1", "pods"),
                Gvr::new("", "alphav1", "deployments"),
                Gvr::new("apps", "v1", "pods"),
                Gvr::new("apps", "v1", "deployments"),
                Gvr::new("apps", "alphav1", "pods"),
                Gvr::new("apps", "alphav1", "deployments"),
            ]
        );
    }

    #[test]
    fn empty_list_expands_to_nothing() {
        assert_eq!(rule(&[], &["v1"], &["pods"]).gvrs().count(), 0);
        assert_eq!(rule(&[""], &[], &["pods"]).gvrs().count(), 0);
        assert_eq!(rule(&[""], &["v1"], &[]).gvrs().count(), 0);
    }

    #[test]
    fn wildcards_are_not_expanded() {
        let gvrs = rule(&["*"], &["*"], &["*"]).gvrs().collect::<Vec<_>>();
        assert_eq!(gvrs, vec![Gvr::new("*", "*", "*")]);
    }

    #[test]
    fn operation_names_match() {
        for op in [
            Operation::Create,
            Operation::Update,
            Operation::Delete,
            Operation::Connect,
            Operation::All,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn parses_operations() {
        assert_eq!("CREATE".parse::<Operation>().unwrap(), Operation::Create);
        assert_eq!("*".parse::<Operation>().unwrap(), Operation::All);
        assert!("create".parse::<Operation>().is_err());
        assert_eq!(Operation::Connect.to_string(), "CONNECT");
    }
}
