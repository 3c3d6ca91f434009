use crate::facts::Fact;
use crate::probe::VersionProbe;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Version fact for an arbitrary binary named on the command line.
pub struct BinaryVersionFact {
    fact_name: String,
    probe: VersionProbe,
}

impl BinaryVersionFact {
    pub fn new(binary: &str, timeout: Duration) -> Self {
        Self::with_probe(VersionProbe::system(binary, timeout))
    }

    pub(crate) fn with_probe(probe: VersionProbe) -> Self {
        Self {
            fact_name: Self::fact_name_for(probe.binary()),
            probe,
        }
    }

    // "/usr/bin/redis-server" -> "redis_server_version"
    pub(crate) fn fact_name_for(binary: &str) -> String {
        let file_name = binary.rsplit(['/', '\\']).next().unwrap_or(binary);
        let stem: String = file_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        format!("{}_version", stem)
    }
}

#[async_trait]
impl Fact for BinaryVersionFact {
    fn name(&self) -> &str {
        &self.fact_name
    }

    fn binary(&self) -> &str {
        self.probe.binary()
    }

    async fn resolve(&self) -> Result<Option<String>> {
        self.probe
            .resolve_version()
            .await
            .with_context(|| format!("Failed to resolve {}", self.fact_name))
    }
}
