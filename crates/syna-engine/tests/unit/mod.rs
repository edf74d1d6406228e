mod config_coverage;
mod error_coverage;
