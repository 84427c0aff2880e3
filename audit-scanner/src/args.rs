use crate::{core::Fetcher, KubeCatalog, PolicySource};
use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, info_span, Instrument};

#[derive(Debug, Parser)]
#[clap(
    name = "audit-scanner",
    about = "Audits existing cluster resources against Kubewarden policies"
)]
pub struct Args {
    #[clap(
        long,
        default_value = "kubewarden_audit_scanner=info,warn",
        env = "KUBEWARDEN_AUDIT_SCANNER_LOG"
    )]
    log_level: kubert::LogFilter,

    #[clap(long, default_value = "plain")]
    log_format: kubert::LogFormat,

    #[clap(flatten)]
    client: kubert::ClientArgs,

    /// Namespace whose resources are audited.
    #[clap(short, long, default_value = "default")]
    namespace: String,

    /// Limits how long each resource listing may take.
    #[clap(long, default_value = "10000")]
    list_timeout_ms: u64,
}

impl Args {
    #[inline]
    pub async fn parse_and_run() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let Self {
            log_level,
            log_format,
            client,
            namespace,
            list_timeout_ms,
        } = self;

        log_format.try_init(log_level)?;
        let client = client.try_client().await?;

        let cancel = CancellationToken::new();
        tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Received shutdown signal");
                    cancel.cancel();
                }
            }
        });

        let policies = PolicySource::new(client.clone())
            .list(&namespace)
            .instrument(info_span!("policies", %namespace))
            .await?;
        info!(policies = policies.len(), %namespace, "Auditing resources");

        let fetcher = Fetcher::new(KubeCatalog::new(client))
            .with_list_timeout(Duration::from_millis(list_timeout_ms));
        let auditable = fetcher
            .fetch(&cancel, &policies, &namespace)
            .instrument(info_span!("fetch", %namespace))
            .await?;
        info!(types = auditable.len(), "Collected resources");

        crate::report::write(std::io::stdout().lock(), &auditable)
    }
}
