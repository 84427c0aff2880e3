use crate::{
    index, AuditableResources, Gvr, ListScope, Policy, PolicyScope, Record, ResourceCatalog,
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info_span, warn, Instrument};


/// Collects the resources governed by a set of policies.
#[derive(Clone, Debug)]
pub struct Fetcher<C> {
    catalog: C,
    list_timeout: Option<Duration>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource listing cancelled")]
    Cancelled,

    #[error("listing {0} did not complete within {1:?}")]
    DeadlineExceeded(Gvr, Duration),

    #[error(transparent)]
    Catalog(anyhow::Error),
}

// === impl Fetcher ===

impl<C: ResourceCatalog> Fetcher<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            list_timeout: None,
        }
    }

    /// Bounds the time each listing may take.
    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = Some(timeout);
        self
    }

    /// Lists the resources of every type selected by `policies`, pairing
    /// each type's resources with the policies that select it.
    ///
    /// Types are visited in coordinate order, with one listing per type. A
    /// type is listed across the whole cluster if any of its policies is
    /// cluster-scoped and within `namespace` otherwise.
    ///
    /// The first failed listing fails the whole fetch; nothing collected
    /// before it is returned.
    pub async fn fetch(
        &self,
        cancel: &CancellationToken,
        policies: &[Policy],
        namespace: &str,
    ) -> Result<Vec<AuditableResources>, Error> {
        if policies.is_empty() {
            return Ok(Vec::new());
        }

        let index = index::build(policies);
        let mut auditable = Vec::with_capacity(index.len());
        for (gvr, policies) in index {
            let scope = list_scope(&policies, namespace);
            let resources = self
                .list(cancel, &gvr, scope)
                .instrument(info_span!("list", %gvr))
                .await?;
            debug!(%gvr, ?scope, resources = resources.len(), "Listed resources");
            auditable.push(AuditableResources {
                gvr,
                policies: policies.into_iter().cloned().collect(),
                resources,
            });
        }

        Ok(auditable)
    }

    async fn list(
        &self,
        cancel: &CancellationToken,
        gvr: &Gvr,
        scope: ListScope<'_>,
    ) -> Result<Vec<Record>, Error> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let list = async {
            let Some(timeout) = self.list_timeout else {
                return self.catalog.list(gvr, scope).await.map_err(Error::Catalog);
            };
            match tokio::time::timeout(timeout, self.catalog.list(gvr, scope)).await {
                Ok(res) => res.map_err(Error::Catalog),
                Err(_) => Err(Error::DeadlineExceeded(gvr.clone(), timeout)),
            }
        };

        let res = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            res = list => res,
        };
        if let Err(error) = &res {
            warn!(%error, ?scope, "Failed to list resources");
        }
        res
    }
}

fn list_scope<'n>(policies: &[&Policy], namespace: &'n str) -> ListScope<'n> {
    if policies.iter().any(|p| p.scope() == PolicyScope::Cluster) {
        ListScope::Cluster
    } else {
        ListScope::Namespace(namespace)
    }
}
