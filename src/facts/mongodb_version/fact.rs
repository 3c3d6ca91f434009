use crate::facts::Fact;
use crate::probe::{CommandRunner, ExecutableLocator, PathLocator, ShellRunner, VersionProbe};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const FACT_NAME: &str = "mongodb_version";
pub const BINARY: &str = "mongod";

pub struct MongodbVersionFact {
    probe: VersionProbe,
}

impl MongodbVersionFact {
    pub fn new(timeout: Duration) -> Self {
        Self::with_collaborators(Arc::new(PathLocator), Arc::new(ShellRunner::new(timeout)))
    }

    pub(crate) fn with_collaborators(
        locator: Arc<dyn ExecutableLocator>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            probe: VersionProbe::new(BINARY, locator, runner),
        }
    }
}

#[async_trait]
impl Fact for MongodbVersionFact {
    fn name(&self) -> &str {
        FACT_NAME
    }

    fn binary(&self) -> &str {
        self.probe.binary()
    }

    async fn resolve(&self) -> Result<Option<String>> {
        self.probe
            .resolve_version()
            .await
            .with_context(|| format!("Failed to resolve {}", FACT_NAME))
    }
}
