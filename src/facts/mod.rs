pub mod binary_version;
pub mod mongodb_version;

use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactValue {
    Resolved(String),
    Undefined,
    Failed(String),
}

impl std::fmt::Display for FactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactValue::Resolved(value) => write!(f, "{}", value),
            FactValue::Undefined => write!(f, "undefined"),
            FactValue::Failed(reason) => write!(f, "error: {}", reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactResult {
    pub fact_name: String,
    pub binary: String,
    pub value: FactValue,
}

impl FactResult {
    pub fn from_resolution(fact: &dyn Fact, resolution: Result<Option<String>>) -> Self {
        let value = match resolution {
            Ok(Some(version)) => FactValue::Resolved(version),
            Ok(None) => FactValue::Undefined,
            Err(e) => FactValue::Failed(format!("{:#}", e)),
        };

        FactResult {
            fact_name: fact.name().to_string(),
            binary: fact.binary().to_string(),
            value,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.value, FactValue::Failed(_))
    }
}

/// A named piece of host inventory, resolved on demand.
///
/// `Ok(None)` means the fact does not apply to this host; `Err` is reserved
/// for an environment problem that stopped resolution.
#[async_trait::async_trait]
pub trait Fact: Send + Sync {
    fn name(&self) -> &str;
    fn binary(&self) -> &str;
    async fn resolve(&self) -> Result<Option<String>>;
}

pub fn registry(timeout: Duration) -> Vec<Box<dyn Fact>> {
    vec![Box::new(mongodb_version::MongodbVersionFact::new(timeout))]
}
