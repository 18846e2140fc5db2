pub mod common;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod policies;
pub mod source;

pub use common::error::{Result, UpdaterError};
pub use common::types::{Dataset, ItemRecord, ItemStats, ModRecord, RawRecordSet};
pub use config::Config;
pub use pipeline::{Pipeline, StageReport};
pub use source::{DataSource, ReqwestSource};
