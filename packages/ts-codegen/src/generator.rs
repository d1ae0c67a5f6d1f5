use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context};
use tracing::{debug, info};

use crate::config::CodegenConfig;

/// Something that turns a [`CodegenConfig`] into generated sources
pub trait Generator {
    fn generate(&self, config: &CodegenConfig) -> anyhow::Result<()>;
}

/// Loads `@cosmwasm/ts-codegen` and awaits its default export with the JSON config
/// passed as the first script argument. Rejections end the process with status 1.
const DRIVER_SCRIPT: &str = "require('@cosmwasm/ts-codegen')\
.default(JSON.parse(process.argv[1]))\
.catch((err) => { console.error(err); process.exit(1); });";

/// Runs the generator in a node child process. Module resolution and all relative
/// paths of the config are relative to the current directory.
#[derive(Debug, Clone)]
pub struct NodeGenerator {
    pub node: PathBuf,
}

impl Default for NodeGenerator {
    fn default() -> Self {
        NodeGenerator {
            node: PathBuf::from("node"),
        }
    }
}

impl NodeGenerator {
    fn command(&self, config: &CodegenConfig) -> anyhow::Result<Command> {
        let config = config.to_json().context("serializing codegen config")?;
        debug!(%config, "codegen config");

        let mut cmd = Command::new(&self.node);
        cmd.arg("-e").arg(DRIVER_SCRIPT).arg(config);
        Ok(cmd)
    }
}

impl Generator for NodeGenerator {
    fn generate(&self, config: &CodegenConfig) -> anyhow::Result<()> {
        let mut cmd = self.command(config)?;
        info!(node = %self.node.display(), out_path = %config.out_path.display(), "running @cosmwasm/ts-codegen");

        // stdout and stderr are inherited so the generator's own errors reach the shell
        let status = cmd
            .status()
            .with_context(|| format!("failed to start {}", self.node.display()))?;
        if !status.success() {
            bail!("@cosmwasm/ts-codegen failed ({status})");
        }
        Ok(())
    }
}
