//! Gleaner Storage Layer
//!
//! Implements the `RecordStore` trait over SQLite.
//!
//! # Architecture
//!
//! - One `analyses` table, append-only: records are immutable once
//!   written and identifiers are monotonic (`AUTOINCREMENT`)
//! - Topics and keywords stored as JSON text; search is a flat LIKE scan
//!   over the lowercased columns, matching both sets case-insensitively
//!
//! # Thread Safety
//!
//! SQLite connections are not thread-safe. Callers serialize access, e.g.
//! behind a mutex in the API layer.
//!
//! # Examples
//!
//! ```no_run
//! use gleaner_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for record operations
//! ```

#![warn(missing_docs)]

use gleaner_domain::traits::RecordStore;
use gleaner_domain::{Analysis, AnalysisDraft, Sentiment};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored data could not be decoded back into a record
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// SQLite-based implementation of `RecordStore`
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path.
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_analysis(row: &Row<'_>) -> Result<Analysis, StoreError> {
        let sentiment_str: String = row.get("sentiment")?;
        let sentiment: Sentiment = sentiment_str
            .parse()
            .map_err(|e| StoreError::InvalidData(format!("{}", e)))?;

        let topics_json: String = row.get("topics")?;
        let topics: Vec<String> = serde_json::from_str(&topics_json)
            .map_err(|e| StoreError::InvalidData(format!("Bad topics JSON: {}", e)))?;

        let keywords_json: String = row.get("keywords")?;
        let keywords: Vec<String> = serde_json::from_str(&keywords_json)
            .map_err(|e| StoreError::InvalidData(format!("Bad keywords JSON: {}", e)))?;

        Ok(Analysis {
            id: row.get("id")?,
            summary: row.get("summary")?,
            title: row.get("title")?,
            topics,
            sentiment,
            keywords,
            confidence: row.get("confidence")?,
            created_at: row.get::<_, i64>("created_at")? as u64,
        })
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn insert(&mut self, raw_text: &str, draft: &AnalysisDraft) -> Result<Analysis, StoreError> {
        let topics_json = serde_json::to_string(&draft.insight.topics)
            .map_err(|e| StoreError::InvalidData(format!("Bad topics: {}", e)))?;
        let keywords_json = serde_json::to_string(&draft.keywords)
            .map_err(|e| StoreError::InvalidData(format!("Bad keywords: {}", e)))?;

        self.conn.execute(
            "INSERT INTO analyses
                 (raw_text, summary, title, topics, sentiment, keywords, confidence, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                raw_text,
                draft.insight.summary,
                draft.insight.title,
                topics_json,
                draft.insight.sentiment.as_str(),
                keywords_json,
                draft.insight.confidence,
                draft.created_at as i64,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        Ok(Analysis::from_draft(id, draft.clone()))
    }

    fn get(&self, id: i64) -> Result<Option<Analysis>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, summary, title, topics, sentiment, keywords, confidence, created_at
                 FROM analyses WHERE id = ?1",
                params![id],
                |row| Ok(Self::row_to_analysis(row)),
            )
            .optional()?
            .transpose()
    }

    fn search(&self, term: Option<&str>) -> Result<Vec<Analysis>, StoreError> {
        let mut results = Vec::new();

        match term {
            Some(term) => {
                let pattern = format!("%{}%", term.to_lowercase());
                let mut stmt = self.conn.prepare(
                    "SELECT id, summary, title, topics, sentiment, keywords, confidence, created_at
                     FROM analyses
                     WHERE lower(topics) LIKE ?1 OR lower(keywords) LIKE ?1
                     ORDER BY created_at DESC, id DESC",
                )?;
                let rows = stmt.query_map(params![pattern], |row| Ok(Self::row_to_analysis(row)))?;
                for row in rows {
                    results.push(row??);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, summary, title, topics, sentiment, keywords, confidence, created_at
                     FROM analyses
                     ORDER BY created_at DESC, id DESC",
                )?;
                let rows = stmt.query_map([], |row| Ok(Self::row_to_analysis(row)))?;
                for row in rows {
                    results.push(row??);
                }
            }
        }

        Ok(results)
    }
}
