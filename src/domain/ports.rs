use crate::domain::model::{DuplicateSet, NameTally, Record};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn name_field(&self) -> &str;
}

/// load → extract → tally → filter. Each stage either succeeds fully or
/// aborts the run.
pub trait Pipeline {
    fn load(&self) -> Result<Vec<Record>>;
    fn extract_names<'a>(&self, records: &'a [Record]) -> Result<Vec<&'a str>>;
    fn tally(&self, names: &[&str]) -> NameTally;
    fn find_duplicates(&self, tally: &NameTally) -> DuplicateSet;
}
