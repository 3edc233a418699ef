//! Configuration and filesystem plumbing shared by the pipeline and the CLI.
//!
//! - **Configuration**: loading, discovering and validating [`config::SplitConfig`]
//! - **I/O**: input directory validation, output directory creation and PDF discovery

pub mod config;
pub mod io;

pub use config::SplitConfig;
