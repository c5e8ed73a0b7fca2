use crate::error::ConfigError;

/// Configuration for chain behavior
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub error_strategy: ErrorStrategy,
}

/// Simple error handling strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ErrorStrategy {
    /// Drop the document branch that failed and continue processing
    #[default]
    #[value(name = "skip")]
    Skip,
    /// Stop processing on first error
    #[value(name = "fail-fast")]
    FailFast,
}

impl std::str::FromStr for ErrorStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(ErrorStrategy::Skip),
            "fail-fast" | "failfast" | "fail_fast" => Ok(ErrorStrategy::FailFast),
            _ => Err(ConfigError::UnknownErrorStrategy(s.to_string())),
        }
    }
}
