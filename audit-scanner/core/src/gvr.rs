use std::fmt;

/// Identifies a Kubernetes resource type by API group, version, and plural
/// resource name.
///
/// Ordering is lexicographic by group, then version, then resource. The
/// derived `Ord` depends on the field order below.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gvr {
    pub group: String,
    pub version: String,
    pub resource: String,
}

// === impl Gvr ===

impl Gvr {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            resource: resource.into(),
        }
    }

    /// Returns true when the coordinate refers to the unnamed core group.
    pub fn is_core_group(&self) -> bool {
        self.group.is_empty()
    }

    /// Returns true when any component is the `*` wildcard, which is passed
    /// through unexpanded.
    pub fn has_wildcard(&self) -> bool {
        [&self.group, &self.version, &self.resource]
            .iter()
            .any(|s| s.as_str() == "*")
    }

    /// The `apiVersion` string objects of this type are served with.
    pub fn api_version(&self) -> String {
        if self.is_core_group() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for Gvr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = if self.is_core_group() {
            "core"
        } else {
            &self.group
        };
        write!(f, "{}/{}/{}", group, self.version, self.resource)
    }
}
