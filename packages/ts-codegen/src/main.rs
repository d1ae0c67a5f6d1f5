use std::io;

use pegasus_ts_codegen::{run, CodegenConfig, NodeGenerator};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the completion message
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = CodegenConfig::trade();
    run(&NodeGenerator::default(), &config, &mut io::stdout())
}
