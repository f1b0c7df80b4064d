//! Flat-file persistence for dashboard records.
//!
//! Each collection is one pretty-printed JSON array rewritten wholesale on every
//! mutation. A process-wide mutex serialises read-modify-write cycles.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::calendar::CalendarEntry;
use crate::models::engineer::{Engineer, EngineerUpdate};
use crate::models::pricing::{PriceItem, PriceItemUpdate};

const ENGINEERS_FILE: &str = "engineers.json";
const CALENDAR_FILE: &str = "calendar.json";
const PRICING_FILE: &str = "pricing.json";

pub struct DataStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl DataStore {
    /// Opens the store, creating the data directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Missing or unparsable files read as an empty collection.
    async fn read_all<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.dir.join(file);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read {}: {e}", path.display());
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring corrupt data file {}: {e}", path.display());
            Vec::new()
        })
    }

    async fn write_all<T: Serialize>(&self, file: &str, records: &[T]) -> Result<(), AppError> {
        let path = self.dir.join(file);
        let body = serde_json::to_string_pretty(records)
            .map_err(|e| AppError::Storage(format!("Failed to encode {file}: {e}")))?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {e}", path.display())))
    }

    async fn insert<T: Serialize + DeserializeOwned>(
        &self,
        file: &str,
        record: T,
    ) -> Result<T, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<T> = self.read_all(file).await;
        records.push(record);
        self.write_all(file, &records).await?;
        // The pushed record is always last.
        records
            .pop()
            .ok_or_else(|| AppError::Storage(format!("{file} lost the inserted record")))
    }

    async fn update<T, F>(
        &self,
        file: &str,
        mut matches: F,
        apply: impl FnOnce(&mut T),
    ) -> Result<Option<T>, AppError>
    where
        T: Serialize + DeserializeOwned + Clone,
        F: FnMut(&T) -> bool,
    {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<T> = self.read_all(file).await;
        let Some(record) = records.iter_mut().find(|r| matches(r)) else {
            return Ok(None);
        };
        apply(record);
        let updated = record.clone();
        self.write_all(file, &records).await?;
        Ok(Some(updated))
    }

    async fn remove<T, F>(&self, file: &str, mut matches: F) -> Result<bool, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut(&T) -> bool,
    {
        let _guard = self.write_lock.lock().await;
        let records: Vec<T> = self.read_all(file).await;
        let before = records.len();
        let kept: Vec<T> = records.into_iter().filter(|r| !matches(r)).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.write_all(file, &kept).await?;
        Ok(true)
    }

    // ── Engineers ───────────────────────────────────────────────────────────

    pub async fn engineers(&self) -> Vec<Engineer> {
        self.read_all(ENGINEERS_FILE).await
    }

    /// `engineer.id` is replaced with a fresh identifier.
    pub async fn add_engineer(&self, mut engineer: Engineer) -> Result<Engineer, AppError> {
        engineer.id = new_id();
        self.insert(ENGINEERS_FILE, engineer).await
    }

    pub async fn update_engineer(
        &self,
        id: &str,
        update: EngineerUpdate,
    ) -> Result<Option<Engineer>, AppError> {
        self.update(ENGINEERS_FILE, |e: &Engineer| e.id == id, |e| e.apply(update))
            .await
    }

    pub async fn delete_engineer(&self, id: &str) -> Result<bool, AppError> {
        self.remove(ENGINEERS_FILE, |e: &Engineer| e.id == id).await
    }

    // ── Calendar ────────────────────────────────────────────────────────────

    pub async fn calendar_entries(&self) -> Vec<CalendarEntry> {
        self.read_all(CALENDAR_FILE).await
    }

    /// `entry.id` is replaced with a fresh identifier.
    pub async fn add_calendar_entry(
        &self,
        mut entry: CalendarEntry,
    ) -> Result<CalendarEntry, AppError> {
        entry.id = new_id();
        self.insert(CALENDAR_FILE, entry).await
    }

    pub async fn delete_calendar_entry(&self, id: &str) -> Result<bool, AppError> {
        self.remove(CALENDAR_FILE, |e: &CalendarEntry| e.id == id).await
    }

    // ── Pricing ─────────────────────────────────────────────────────────────

    pub async fn price_items(&self) -> Vec<PriceItem> {
        self.read_all(PRICING_FILE).await
    }

    /// `item.id` is replaced with a fresh identifier.
    pub async fn add_price_item(&self, mut item: PriceItem) -> Result<PriceItem, AppError> {
        item.id = new_id();
        self.insert(PRICING_FILE, item).await
    }

    pub async fn update_price_item(
        &self,
        id: &str,
        update: PriceItemUpdate,
    ) -> Result<Option<PriceItem>, AppError> {
        self.update(PRICING_FILE, |i: &PriceItem| i.id == id, |i| i.apply(update))
            .await
    }

    pub async fn delete_price_item(&self, id: &str) -> Result<bool, AppError> {
        self.remove(PRICING_FILE, |i: &PriceItem| i.id == id).await
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
