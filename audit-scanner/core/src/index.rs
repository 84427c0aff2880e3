//! Maps each resource coordinate to the policies whose rules select it.

use crate::{Gvr, Policy};
use std::collections::BTreeMap;

/// Policies indexed by the coordinates they govern.
///
/// Iteration yields coordinates in lexicographic order, and each coordinate's
/// policies in the order they were given to [`build`].
pub type Index<'p> = BTreeMap<Gvr, Vec<&'p Policy>>;

/// Builds an index from every coordinate in every policy's rules.
///
/// A policy is appended once per rule that selects a coordinate, so a policy
/// with two rules covering the same coordinate is listed twice.
pub fn build(policies: &[Policy]) -> Index<'_> {
    let mut index = Index::new();
    for policy in policies {
        for rule in policy.rules() {
            for gvr in rule.gvrs() {
                index.entry(gvr).or_default().push(policy);
            }
        }
    }
    index
}
