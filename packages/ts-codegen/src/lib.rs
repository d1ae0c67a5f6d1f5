pub mod config;
mod generator;

use std::io::Write;

use anyhow::Context;

pub use crate::config::CodegenConfig;
pub use crate::generator::{Generator, NodeGenerator};

/// Printed once the generator finished successfully
pub const SUCCESS_MESSAGE: &str = "✨ all done!";

/// Generates the bindings described by `config` and reports success on `out`.
/// Nothing is written to `out` when the generator fails.
pub fn run(
    generator: &dyn Generator,
    config: &CodegenConfig,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    generator
        .generate(config)
        .context("generator invocation failed")?;
    writeln!(out, "{SUCCESS_MESSAGE}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    /// Records every config it is called with
    #[derive(Default)]
    struct FakeGenerator {
        calls: RefCell<Vec<CodegenConfig>>,
        fail_with: Option<String>,
    }

    impl Generator for FakeGenerator {
        fn generate(&self, config: &CodegenConfig) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(config.clone());
            match &self.fail_with {
                Some(msg) => Err(anyhow!(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn run_prints_after_success() {
        let generator = FakeGenerator::default();
        let mut out = Vec::new();

        run(&generator, &CodegenConfig::trade(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "✨ all done!\n");
        assert_eq!(*generator.calls.borrow(), vec![CodegenConfig::trade()]);
    }

    #[test]
    fn run_propagates_failure() {
        let generator = FakeGenerator {
            fail_with: Some("ENOENT: no such file or directory, scandir '../schema'".to_string()),
            ..Default::default()
        };
        let mut out = Vec::new();

        let err = run(&generator, &CodegenConfig::trade(), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert_eq!(err.to_string(), "generator invocation failed");
        let chain = format!("{err:#}");
        assert!(chain.contains("../schema"), "{chain}");
    }

    #[test]
    fn run_twice_uses_identical_config() {
        let generator = FakeGenerator::default();
        let mut out = Vec::new();
        run(&generator, &CodegenConfig::trade(), &mut out).unwrap();
        run(&generator, &CodegenConfig::trade(), &mut out).unwrap();

        let calls = generator.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }
}
