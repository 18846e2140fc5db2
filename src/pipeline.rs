use crate::common::constants::OUTPUT_EXTENSION;
use crate::common::error::Result;
use crate::common::types::{Dataset, RawRecordSet};
use crate::config::Config;
use crate::policies::{process_items, process_mods};
use crate::source::{join_url, DataSource};
use metrics::{counter, histogram};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument, Instrument};

/// Result of one fetch → transform → persist stage
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub dataset: String,
    pub source_url: String,
    pub record_count: usize,
    pub output_file: PathBuf,
}

pub struct Pipeline;

impl Pipeline {
    /// Fetch `remote_path`, map it with `transform` and write the result to
    /// `<output_dir>/<output_name>.json`.
    ///
    /// Any failure is returned as a stage error naming `output_name`. Nothing
    /// is written unless fetching and mapping both succeeded.
    #[instrument(skip(source, base_url, output_dir, transform))]
    pub async fn run_stage<T, F>(
        source: &dyn DataSource,
        base_url: &str,
        output_dir: &Path,
        remote_path: &str,
        output_name: &str,
        transform: F,
    ) -> Result<StageReport>
    where
        T: Serialize,
        F: Fn(&RawRecordSet) -> Vec<T>,
    {
        let url = join_url(base_url, remote_path);
        counter!("poe2_stage_runs_total", "dataset" => output_name.to_string()).increment(1);

        let result = Self::fetch_transform_persist(source, &url, output_dir, output_name, transform).await;
        match result {
            Ok((record_count, output_file)) => {
                counter!("poe2_records_written_total", "dataset" => output_name.to_string())
                    .increment(record_count as u64);
                Ok(StageReport {
                    dataset: output_name.to_string(),
                    source_url: url,
                    record_count,
                    output_file,
                })
            }
            Err(e) => {
                counter!("poe2_stage_failures_total", "dataset" => output_name.to_string()).increment(1);
                error!("Stage {} failed: {}", output_name, e);
                Err(e.in_stage(output_name, &url))
            }
        }
    }

    async fn fetch_transform_persist<T, F>(
        source: &dyn DataSource,
        url: &str,
        output_dir: &Path,
        output_name: &str,
        transform: F,
    ) -> Result<(usize, PathBuf)>
    where
        T: Serialize,
        F: Fn(&RawRecordSet) -> Vec<T>,
    {
        // Step 1: Fetch
        info!("📡 Fetching data from {}...", url);
        println!("📡 Fetching data from {}...", url);
        let t_fetch = std::time::Instant::now();
        let raw = source.fetch_json(url).await?;
        histogram!("poe2_fetch_duration_seconds", "dataset" => output_name.to_string())
            .record(t_fetch.elapsed().as_secs_f64());

        // Step 2: Transform
        let records = transform(&raw);
        info!("🔧 Mapped {} {} records", records.len(), output_name);

        // Step 3: Persist
        let output_file = Self::persist_to_json(&records, output_name, output_dir)?;
        info!("💾 {}.{} updated at {}", output_name, OUTPUT_EXTENSION, output_file.display());
        println!("✅ {}.{} updated successfully at {}", output_name, OUTPUT_EXTENSION, output_file.display());

        Ok((records.len(), output_file))
    }

    /// Serialize records as pretty-printed JSON, replacing any existing file
    pub fn persist_to_json<T: Serialize>(
        records: &[T],
        output_name: &str,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let filepath = output_path(output_dir, output_name);
        let json_content = serde_json::to_string_pretty(records)?;
        fs::write(&filepath, json_content)?;
        Ok(filepath)
    }

    /// Refresh one dataset with its matching policy
    pub async fn run_dataset(
        source: &dyn DataSource,
        config: &Config,
        dataset: Dataset,
    ) -> Result<StageReport> {
        let (base_url, output_dir) = (config.base_url.as_str(), config.output_dir.as_path());
        match dataset {
            Dataset::Items => {
                Self::run_stage(source, base_url, output_dir, dataset.remote_path(), dataset.name(), process_items)
                    .await
            }
            Dataset::Mods => {
                Self::run_stage(source, base_url, output_dir, dataset.remote_path(), dataset.name(), process_mods)
                    .await
            }
        }
    }

    /// Refresh every configured dataset strictly one after another, stopping
    /// at the first failed stage
    pub async fn run_all(source: &dyn DataSource, config: &Config) -> Result<Vec<StageReport>> {
        let mut reports = Vec::with_capacity(config.datasets.len());
        for dataset in &config.datasets {
            let span = tracing::info_span!("Refreshing dataset", dataset = %dataset);
            let report = Self::run_dataset(source, config, *dataset).instrument(span).await?;
            reports.push(report);
        }
        Ok(reports)
    }
}

/// `<output_dir>/<output_name>.json`
pub fn output_path(output_dir: &Path, output_name: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", output_name, OUTPUT_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("/opt/poe2"), "items"),
            PathBuf::from("/opt/poe2/items.json")
        );
    }

    #[test]
    fn test_persist_writes_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = Pipeline::persist_to_json(&[json!({ "id": "a", "tags": [1] })], "items", dir.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "[\n  {\n    \"id\": \"a\",\n    \"tags\": [\n      1\n    ]\n  }\n]");
    }

    #[test]
    fn test_persist_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<serde_json::Value> = Vec::new();
        let path = Pipeline::persist_to_json(&records, "mods", dir.path()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }
}
