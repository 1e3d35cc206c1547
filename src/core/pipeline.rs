use crate::core::{ConfigProvider, DuplicateSet, NameTally, Pipeline, Record, Storage};
use crate::utils::error::{DupesError, Result};

pub struct DuplicateNamePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DuplicateNamePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Parses raw bytes into records. Anything other than an array of objects is
/// an input error.
pub fn parse_records(path: &str, data: &[u8]) -> Result<Vec<Record>> {
    let json_data: serde_json::Value =
        serde_json::from_slice(data).map_err(|source| DupesError::ParseError {
            path: path.to_string(),
            source,
        })?;

    let items = match json_data {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(DupesError::NotAnArrayError {
                path: path.to_string(),
                found: json_kind(&other).to_string(),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(obj) => Ok(Record::new(obj)),
            other => Err(DupesError::NotAnObjectError {
                path: path.to_string(),
                index,
                found: json_kind(&other).to_string(),
            }),
        })
        .collect()
}

impl<S: Storage, C: ConfigProvider> Pipeline for DuplicateNamePipeline<S, C> {
    fn load(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        let data = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path);

        let records = parse_records(path, &data)?;
        tracing::info!("Loaded {} records from {}", records.len(), path);
        Ok(records)
    }

    fn extract_names<'a>(&self, records: &'a [Record]) -> Result<Vec<&'a str>> {
        let field = self.config.name_field();

        // 缺欄位直接失敗，不能跳過，否則計數會失真
        records
            .iter()
            .enumerate()
            .map(|(index, record)| match record.get(field) {
                Some(serde_json::Value::String(name)) => Ok(name.as_str()),
                Some(other) => Err(DupesError::NotTextError {
                    index,
                    field: field.to_string(),
                    found: json_kind(other).to_string(),
                }),
                None => Err(DupesError::MissingFieldError {
                    index,
                    field: field.to_string(),
                }),
            })
            .collect()
    }

    fn tally(&self, names: &[&str]) -> NameTally {
        let tally: NameTally = names.iter().copied().collect();
        tracing::debug!(
            "Tallied {} names into {} distinct values",
            tally.total(),
            tally.len()
        );
        tally
    }

    fn find_duplicates(&self, tally: &NameTally) -> DuplicateSet {
        let duplicates = DuplicateSet::from_tally(tally);
        tracing::info!("Found {} duplicate names", duplicates.len());
        duplicates
    }
}
