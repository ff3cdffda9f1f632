pub mod engine;
pub mod report;

pub use crate::domain::model::{ClientUser, ExecutorUser, Report, SortMode};
pub use crate::domain::ports::{ConfigProvider, SourceSpec, UserSource};
pub use crate::utils::error::Result;
