pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{render_report, FileUserSource, HttpUserSource};
pub use crate::core::{
    engine::ReportEngine, report::show, ClientUser, ExecutorUser, Report, SortMode, SourceSpec,
    UserSource,
};
pub use crate::utils::error::{ReportError, Result};
