use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AiolosError, Result};
use crate::formats::fold_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: u32,
    /// `R-<year>-<seq>`, sequence restarting every year.
    pub number: String,
    pub date: NaiveDate,
    pub received_from: String,
    pub amount: f64,
    pub purpose: String,
    #[serde(default)]
    pub project: String,
    #[serde(default)]
    pub method: String,
}

/// Receipt fields supplied by the user; id and number are assigned on append.
#[derive(Debug, Clone)]
pub struct NewReceipt {
    pub date: NaiveDate,
    pub received_from: String,
    pub amount: f64,
    pub purpose: String,
    pub project: String,
    pub method: String,
}

/// Narrows a receipt listing. An empty filter keeps everything.
#[derive(Debug, Clone, Default)]
pub struct ReceiptFilter {
    /// Case-insensitive text looked up in payer, purpose, project and number.
    pub search: Option<String>,
    pub year: Option<i32>,
}

impl ReceiptFilter {
    pub fn matches(&self, receipt: &Receipt) -> bool {
        if self.year.is_some_and(|y| receipt.date.year() != y) {
            return false;
        }
        let Some(needle) = self.search.as_deref().map(fold_text) else {
            return true;
        };
        [
            &receipt.received_from,
            &receipt.purpose,
            &receipt.project,
            &receipt.number,
        ]
        .iter()
        .any(|field| fold_text(field).contains(needle.trim()))
    }
}

/// On-disk shape of the receipt file.
///
/// `next_id` and `last_sequence` never decrease: ids and numbers of deleted
/// receipts stay retired.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Ledger {
    #[serde(default)]
    next_id: u32,
    #[serde(default)]
    last_sequence: BTreeMap<i32, u32>,
    #[serde(default)]
    receipts: Vec<Receipt>,
}

impl Ledger {
    /// Raise the counters to cover every receipt still present.
    fn settle(&mut self) {
        for r in &self.receipts {
            self.next_id = self.next_id.max(r.id + 1);
            let year = r.date.year();
            if let Some(seq) = sequence_in_year(&r.number, year) {
                let last = self.last_sequence.entry(year).or_insert(0);
                *last = (*last).max(seq);
            }
        }
        self.next_id = self.next_id.max(1);
    }
}

/// Files written before the counters existed hold a bare list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredReceipts {
    Ledger(Ledger),
    List(Vec<Receipt>),
}

/// JSON-file backed list of issued receipts.
pub struct ReceiptStore {
    path: PathBuf,
}

impl ReceiptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<Vec<Receipt>> {
        Ok(self.load()?.receipts)
    }

    pub fn search(&self, filter: &ReceiptFilter) -> Result<Vec<Receipt>> {
        Ok(self.list()?.into_iter().filter(|r| filter.matches(r)).collect())
    }

    fn load(&self) -> Result<Ledger> {
        let content = if self.path.exists() {
            std::fs::read_to_string(&self.path)?
        } else {
            String::new()
        };
        let mut ledger = if content.trim().is_empty() {
            Ledger::default()
        } else {
            match serde_json::from_str(&content)? {
                StoredReceipts::Ledger(ledger) => ledger,
                StoredReceipts::List(receipts) => Ledger {
                    receipts,
                    ..Ledger::default()
                },
            }
        };
        ledger.settle();
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(ledger)?;
        std::fs::write(&tmp, format!("{json}\n"))?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), count = ledger.receipts.len(), "receipts saved");
        Ok(())
    }

    pub fn append(&self, new: NewReceipt) -> Result<Receipt> {
        if !new.amount.is_finite() || new.amount <= 0.0 {
            return Err(AiolosError::Other(format!(
                "Receipt amount must be positive, got {}",
                new.amount
            )));
        }
        let mut ledger = self.load()?;
        let id = ledger.next_id;
        let year = new.date.year();
        let seq = ledger.last_sequence.get(&year).copied().unwrap_or(0) + 1;
        let receipt = Receipt {
            id,
            number: format!("R-{year}-{seq:04}"),
            date: new.date,
            received_from: new.received_from,
            amount: new.amount,
            purpose: new.purpose,
            project: new.project,
            method: new.method,
        };
        ledger.next_id = id + 1;
        ledger.last_sequence.insert(year, seq);
        ledger.receipts.push(receipt.clone());
        self.save(&ledger)?;
        info!(number = %receipt.number, "receipt issued");
        Ok(receipt)
    }

    pub fn get(&self, id: u32) -> Result<Receipt> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AiolosError::NotFound(format!("receipt {id}")))
    }

    pub fn delete(&self, id: u32) -> Result<Receipt> {
        let mut ledger = self.load()?;
        let pos = ledger
            .receipts
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AiolosError::NotFound(format!("receipt {id}")))?;
        let removed = ledger.receipts.remove(pos);
        self.save(&ledger)?;
        info!(number = %removed.number, "receipt deleted");
        Ok(removed)
    }
}

fn sequence_in_year(number: &str, year: i32) -> Option<u32> {
    number
        .strip_prefix(&format!("R-{year}-"))
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_receipt(y: i32, m: u32, d: u32, amount: f64) -> NewReceipt {
        NewReceipt {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            received_from: "Nikos Petrou".to_string(),
            amount,
            purpose: "Deposit".to_string(),
            project: "Y1".to_string(),
            method: "Bank transfer".to_string(),
        }
    }

    fn store() -> (tempfile::TempDir, ReceiptStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(dir.path().join("receipts.json"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_assigns_ids_and_numbers() {
        let (_dir, store) = store();
        let a = store.append(new_receipt(2025, 1, 10, 100.0)).unwrap();
        let b = store.append(new_receipt(2025, 2, 1, 200.0)).unwrap();
        assert_eq!((a.id, a.number.as_str()), (1, "R-2025-0001"));
        assert_eq!((b.id, b.number.as_str()), (2, "R-2025-0002"));
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn test_sequence_restarts_each_year() {
        let (_dir, store) = store();
        store.append(new_receipt(2024, 12, 30, 10.0)).unwrap();
        store.append(new_receipt(2024, 12, 31, 10.0)).unwrap();
        let next = store.append(new_receipt(2025, 1, 2, 10.0)).unwrap();
        assert_eq!(next.number, "R-2025-0001");
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_get_and_delete() {
        let (_dir, store) = store();
        store.append(new_receipt(2025, 1, 10, 100.0)).unwrap();
        store.append(new_receipt(2025, 1, 11, 50.0)).unwrap();
        assert_eq!(store.get(2).unwrap().amount, 50.0);
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.number, "R-2025-0001");
        assert!(matches!(store.get(1), Err(AiolosError::NotFound(_))));
        assert!(matches!(store.delete(1), Err(AiolosError::NotFound(_))));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_deleted_numbers_are_not_reissued() {
        let (_dir, store) = store();
        store.append(new_receipt(2025, 1, 10, 100.0)).unwrap();
        let second = store.append(new_receipt(2025, 1, 11, 50.0)).unwrap();
        store.delete(second.id).unwrap();
        let third = store.append(new_receipt(2025, 1, 12, 75.0)).unwrap();
        assert_eq!(third.id, 3);
        assert_eq!(third.number, "R-2025-0003");
        assert!(matches!(store.get(2), Err(AiolosError::NotFound(_))));
    }

    #[test]
    fn test_reads_plain_list_file() {
        let (_dir, store) = store();
        let old = vec![Receipt {
            id: 4,
            number: "R-2025-0007".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            received_from: "Maria K.".to_string(),
            amount: 20.0,
            purpose: "Rent".to_string(),
            project: String::new(),
            method: String::new(),
        }];
        std::fs::write(store.path(), serde_json::to_string(&old).unwrap()).unwrap();
        assert_eq!(store.list().unwrap(), old);
        let next = store.append(new_receipt(2025, 3, 2, 10.0)).unwrap();
        assert_eq!((next.id, next.number.as_str()), (5, "R-2025-0008"));
    }

    #[test]
    fn test_search_by_text_and_year() {
        let (_dir, store) = store();
        store.append(new_receipt(2024, 12, 20, 100.0)).unwrap();
        let mut other = new_receipt(2025, 2, 1, 40.0);
        other.received_from = "Ελένη Σταύρου".to_string();
        other.purpose = "Προκαταβολή".to_string();
        other.project = "G2".to_string();
        store.append(other).unwrap();

        let by = |search: Option<&str>, year: Option<i32>| {
            store
                .search(&ReceiptFilter {
                    search: search.map(str::to_string),
                    year,
                })
                .unwrap()
                .into_iter()
                .map(|r| r.number)
                .collect::<Vec<_>>()
        };
        assert_eq!(by(None, None).len(), 2);
        assert_eq!(by(Some("petrou"), None), vec!["R-2024-0001"]);
        assert_eq!(by(Some("ελενη"), None), vec!["R-2025-0001"]);
        assert_eq!(by(Some("προκαταβολη"), None), vec!["R-2025-0001"]);
        assert_eq!(by(Some("g2"), None), vec!["R-2025-0001"]);
        assert_eq!(by(Some("R-2024"), None), vec!["R-2024-0001"]);
        assert_eq!(by(None, Some(2025)), vec!["R-2025-0001"]);
        assert_eq!(by(Some("petrou"), Some(2025)), Vec::<String>::new());
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let (_dir, store) = store();
        assert!(store.append(new_receipt(2025, 1, 10, 0.0)).is_err());
        assert!(store.append(new_receipt(2025, 1, 10, -5.0)).is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (dir, store) = store();
        store.append(new_receipt(2025, 1, 10, 100.0)).unwrap();
        assert!(!dir.path().join("receipts.json.tmp").exists());
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"date\": \"2025-01-10\""));
    }
}
