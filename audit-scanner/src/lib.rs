#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub use kubewarden_audit_scanner_core as core;
pub use kubewarden_audit_scanner_k8s_api as k8s;

mod args;
pub mod catalog;
pub mod policies;
pub mod report;

pub use self::{args::Args, catalog::KubeCatalog, policies::PolicySource};
