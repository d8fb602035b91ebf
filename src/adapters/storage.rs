use crate::domain::model::MenuRecord;
use crate::domain::ports::MenuStore;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

fn in_range(record: &MenuRecord, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    record.date_modified >= start && record.date_modified < end
}

/// All records in one JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    fn read_all(&self) -> Result<Vec<MenuRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(&self.path)?;
        if data.is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&data)?)
    }
}

impl MenuStore for JsonFileStore {
    async fn find_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<MenuRecord>> {
        let _guard = self.lock.lock().await;
        let records = self.read_all()?;
        Ok(records
            .into_iter()
            .filter(|record| in_range(record, start, end))
            .collect())
    }

    async fn insert(&self, record: MenuRecord) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_all()?;
        records.push(record);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<Vec<MenuRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

impl MenuStore for MemoryStore {
    async fn find_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<MenuRecord>> {
        let records = self.records.lock().await;
        Ok(records
            .iter()
            .filter(|record| in_range(record, start, end))
            .cloned()
            .collect())
    }

    async fn insert(&self, record: MenuRecord) -> Result<()> {
        self.records.lock().await.push(record);
        Ok(())
    }
}
