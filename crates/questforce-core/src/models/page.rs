//! Result shapes shared by list and delete operations.

use serde::{Deserialize, Serialize};

/// A filtered listing with its count metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Records after filtering and limiting
    pub data: Vec<T>,

    /// Number of records that matched the filters, before any limit
    pub total: usize,

    /// Limit that was applied, for endpoints that support one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl<T> Page<T> {
    /// A page of every matched record, no limit applied.
    pub fn unlimited(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            data,
            total,
            limit: None,
        }
    }

    /// Keeps the first `limit` records while reporting the full match count.
    pub fn limited(matched: Vec<T>, limit: usize) -> Self {
        let total = matched.len();
        let data = matched.into_iter().take(limit).collect();
        Self {
            data,
            total,
            limit: Some(limit),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Confirmation returned by delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deleted {
    pub message: String,
    pub id: String,
}

impl Deleted {
    pub fn new(kind: &str, id: impl Into<String>) -> Self {
        Self {
            message: format!("{kind} deleted successfully"),
            id: id.into(),
        }
    }
}
