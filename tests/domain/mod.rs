mod conversation_test;
mod document_test;
mod embedding_test;
