//! Goose load test binary for the DreamApp REST API.
//!
//! # Usage
//!
//! ```bash
//! # 50 users, hatched 5 per second, for 5 minutes
//! cargo run --release -- \
//!   --host https://dreamapp.example.com \
//!   -u50 -r5 -t5m \
//!   --report-file load-test-report.html
//!
//! # Short smoke run against a local instance
//! DREAMAPP_HOST=http://localhost:8000 cargo run --release -- -u5 -r1 -t30s
//! ```
//!
//! Concurrency, spawn rate, run time, and reporting are all Goose's; see
//! `--help` for the full flag list. `DREAMAPP_*` environment variables cover
//! credentials, a default host, and tag filtering (see the `config` module).

use dreamapp_loadtest::{config, registry};
use goose::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tags = config::tag_filter();
    if let Some(tags) = &tags {
        info!(?tags, "restricting the run to tagged tasks");
    }

    let mut attack = GooseAttack::initialize()?.register_scenario(registry::scenario(tags.as_ref())?);

    if let Some(host) = config::default_host() {
        info!(%host, "defaulting host from DREAMAPP_HOST");
        attack = *attack.set_default(GooseDefault::Host, host.as_str())?;
    }

    attack.execute().await?;

    Ok(())
}
