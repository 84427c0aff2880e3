#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod policy;

pub use self::policy::{
    AdmissionPolicy, AdmissionPolicySpec, ClusterAdmissionPolicy, ClusterAdmissionPolicySpec,
    PolicySpec, PolicyState, PolicyStatus,
};
pub use kube::{core::ObjectMeta, ResourceExt};
