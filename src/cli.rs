use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hostfacts")]
#[command(version = "0.1.0")]
#[command(about = "Host inventory: detects installed server binaries and their versions", long_about = None)]
pub struct Cli {
    /// Seconds to wait for a `--version` command before treating the fact as undefined
    #[arg(long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Log level when RUST_LOG is unset (e.g., "debug", "hostfacts=trace")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the registered facts
    Run(RunArgs),
    /// Resolve a version fact for each named binary
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Include only these facts (comma-separated, e.g., "mongodb_version")
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,

    /// Exclude these facts (comma-separated, e.g., "mongodb_version")
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Binaries to probe with `<binary> --version`
    #[arg(required = true)]
    pub binaries: Vec<String>,
}

impl RunArgs {
    pub fn should_resolve(&self, fact_name: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.iter().any(|name| name == fact_name) {
                return false;
            }
        }

        if let Some(exclude) = &self.exclude {
            if exclude.iter().any(|name| name == fact_name) {
                return false;
            }
        }

        true
    }
}
