use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::{Chunk, ChunkId, DocumentId, DocumentMetadata, Embedding};

/// On-disk vector collection backed by a single SQLite file per
/// collection. Insertion is append-only (id-keyed upsert); search is a
/// brute-force cosine scan with a deterministic tie-break on chunk id.
pub struct SqliteVectorStore {
    conn: Arc<Mutex<Connection>>,
    collection: String,
}

impl SqliteVectorStore {
    pub fn open(root: &Path, collection: &str) -> Result<Self, VectorStoreError> {
        std::fs::create_dir_all(root).map_err(|e| VectorStoreError::OpenFailed(e.to_string()))?;

        let db_path = root.join(format!("{collection}.db"));
        let conn =
            Connection::open(&db_path).map_err(|e| VectorStoreError::OpenFailed(e.to_string()))?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS chunks (
                id          TEXT PRIMARY KEY,
                document_id TEXT NOT NULL,
                source      TEXT NOT NULL,
                page        INTEGER,
                char_offset INTEGER NOT NULL,
                text        TEXT NOT NULL,
                dimensions  INTEGER NOT NULL,
                embedding   BLOB NOT NULL,
                created_at  TEXT NOT NULL
            );",
        )
        .map_err(|e| VectorStoreError::OpenFailed(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            collection: collection.to_string(),
        })
    }
}

#[async_trait]
impl VectorStore for SqliteVectorStore {
    fn collection_name(&self) -> &str {
        &self.collection
    }

    #[tracing::instrument(skip(self, chunks, embeddings), fields(collection = %self.collection, chunks = chunks.len()))]
    async fn append(
        &self,
        chunks: &[Chunk],
        embeddings: &[Embedding],
    ) -> Result<(), VectorStoreError> {
        if chunks.len() != embeddings.len() {
            return Err(VectorStoreError::LengthMismatch {
                chunks: chunks.len(),
                embeddings: embeddings.len(),
            });
        }

        let rows: Vec<ChunkRow> = chunks
            .iter()
            .zip(embeddings.iter())
            .map(|(chunk, embedding)| ChunkRow {
                id: chunk.id.as_uuid().to_string(),
                document_id: chunk.document_id.as_uuid().to_string(),
                source: chunk.metadata.source.clone(),
                page: chunk.metadata.page,
                char_offset: chunk.char_offset as i64,
                text: chunk.text.clone(),
                dimensions: embedding.dimensions() as i64,
                embedding: encode_vector(&embedding.values),
            })
            .collect();

        let conn = Arc::clone(&self.conn);
        let inserted = tokio::task::spawn_blocking(move || -> Result<usize, VectorStoreError> {
            let mut conn = conn
                .lock()
                .map_err(|_| VectorStoreError::AppendFailed("connection poisoned".to_string()))?;
            let tx = conn
                .transaction()
                .map_err(|e| VectorStoreError::AppendFailed(e.to_string()))?;

            let created_at = Utc::now().to_rfc3339();
            for row in &rows {
                tx.execute(
                    "INSERT OR REPLACE INTO chunks
                     (id, document_id, source, page, char_offset, text, dimensions, embedding, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        row.id,
                        row.document_id,
                        row.source,
                        row.page,
                        row.char_offset,
                        row.text,
                        row.dimensions,
                        row.embedding,
                        created_at,
                    ],
                )
                .map_err(|e| VectorStoreError::AppendFailed(e.to_string()))?;
            }

            tx.commit()
                .map_err(|e| VectorStoreError::AppendFailed(e.to_string()))?;
            Ok(rows.len())
        })
        .await
        .map_err(|e| VectorStoreError::AppendFailed(format!("task join error: {e}")))??;

        tracing::info!(inserted, "chunks persisted");
        Ok(())
    }

    #[tracing::instrument(skip(self, embedding), fields(collection = %self.collection, top_k))]
    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        let query = embedding.clone();
        let conn = Arc::clone(&self.conn);

        let mut scored = tokio::task::spawn_blocking(
            move || -> Result<Vec<(f32, SearchResult)>, VectorStoreError> {
                let conn = conn.lock().map_err(|_| {
                    VectorStoreError::SearchFailed("connection poisoned".to_string())
                })?;

                let mut stmt = conn
                    .prepare(
                        "SELECT id, document_id, source, page, char_offset, text, embedding
                         FROM chunks",
                    )
                    .map_err(|e| VectorStoreError::SearchFailed(e.to_string()))?;

                let rows = stmt
                    .query_map([], |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, Option<u32>>(3)?,
                            row.get::<_, i64>(4)?,
                            row.get::<_, String>(5)?,
                            row.get::<_, Vec<u8>>(6)?,
                        ))
                    })
                    .map_err(|e| VectorStoreError::SearchFailed(e.to_string()))?;

                let mut scored = Vec::new();
                for row in rows {
                    let (id, document_id, source, page, char_offset, text, blob) =
                        row.map_err(|e| VectorStoreError::SearchFailed(e.to_string()))?;

                    let values = decode_vector(&blob)?;
                    let score = query.cosine_similarity(&Embedding::new(values));

                    let chunk_id = parse_uuid(&id, "chunk id")?;
                    let doc_id = parse_uuid(&document_id, "document id")?;

                    let mut chunk = Chunk::new(
                        text,
                        DocumentId::from_uuid(doc_id),
                        DocumentMetadata { source, page },
                        char_offset as usize,
                    );
                    chunk.id = ChunkId::from_uuid(chunk_id);

                    scored.push((score, SearchResult { chunk, score }));
                }
                Ok(scored)
            },
        )
        .await
        .map_err(|e| VectorStoreError::SearchFailed(format!("task join error: {e}")))??;

        // Descending score; equal scores break ties on chunk id so results
        // are stable across runs.
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.chunk.id.cmp(&b.1.chunk.id))
        });

        Ok(scored
            .into_iter()
            .take(top_k)
            .map(|(_, result)| result)
            .collect())
    }

    async fn count(&self) -> Result<u64, VectorStoreError> {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || -> Result<u64, VectorStoreError> {
            let conn = conn
                .lock()
                .map_err(|_| VectorStoreError::SearchFailed("connection poisoned".to_string()))?;
            conn.query_row("SELECT COUNT(*) FROM chunks", [], |row| row.get::<_, u64>(0))
                .map_err(|e| VectorStoreError::SearchFailed(e.to_string()))
        })
        .await
        .map_err(|e| VectorStoreError::SearchFailed(format!("task join error: {e}")))?
    }
}

struct ChunkRow {
    id: String,
    document_id: String,
    source: String,
    page: Option<u32>,
    char_offset: i64,
    text: String,
    dimensions: i64,
    embedding: Vec<u8>,
}

/// Vectors are stored as little-endian `f32` byte sequences.
pub fn encode_vector(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

pub fn decode_vector(bytes: &[u8]) -> Result<Vec<f32>, VectorStoreError> {
    if bytes.len() % 4 != 0 {
        return Err(VectorStoreError::SearchFailed(format!(
            "embedding blob length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

fn parse_uuid(raw: &str, what: &str) -> Result<Uuid, VectorStoreError> {
    Uuid::parse_str(raw)
        .map_err(|e| VectorStoreError::SearchFailed(format!("invalid {what} '{raw}': {e}")))
}
