#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod fetch;
mod gvr;
pub mod index;
mod policy;
mod resource;
mod rule;

pub use self::{
    fetch::Fetcher,
    gvr::Gvr,
    index::Index,
    policy::{Policy, PolicyId, PolicyRef, PolicyScope},
    resource::{
        record_name, record_namespace, AuditableResources, ListScope, Record, ResourceCatalog,
    },
    rule::{InvalidOperation, Operation, Rule},
};
