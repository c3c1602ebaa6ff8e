#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
use crate::core::fibonacci;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "people-report")]
#[command(about = "Prints an age report for a sample roster of people")]
pub struct CliConfig {
    /// Number of Fibonacci terms to include in the report
    #[arg(long, default_value = "15")]
    pub fib_count: usize,

    /// Report output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn fib_count(&self) -> usize {
        self.fib_count
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("fib-count", self.fib_count, 0, fibonacci::MAX_COUNT)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn config(fib_count: usize) -> CliConfig {
        CliConfig {
            fib_count,
            format: OutputFormat::Text,
            verbose: false,
        }
    }

    #[test]
    fn test_default_fib_count_is_valid() {
        assert!(config(15).validate().is_ok());
    }

    #[test]
    fn test_fib_count_upper_bound() {
        assert!(config(fibonacci::MAX_COUNT).validate().is_ok());
        assert!(config(fibonacci::MAX_COUNT + 1).validate().is_err());
    }
}
