pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, DEFAULT_INPUT_PATH};
pub use self::core::{
    engine::ReportEngine,
    pipeline::DuplicateNamePipeline,
    report::{render_report, write_report},
};
pub use domain::model::{DuplicateSet, NameTally, Record};
pub use utils::error::{DupesError, ErrorCategory, Result};
