mod sqlite_catalog;
mod sqlite_vector_store;

pub use sqlite_catalog::SqliteCatalog;
pub use sqlite_vector_store::{decode_vector, encode_vector, SqliteVectorStore};
