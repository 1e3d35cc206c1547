pub mod engine;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{DuplicateSet, NameTally, Record};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
