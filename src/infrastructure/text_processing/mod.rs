mod extension_router;
mod pdf_loader;
mod recursive_splitter;
mod text_loader;
mod text_sanitizer;

pub use extension_router::ExtensionRouter;
pub use pdf_loader::PdfLoader;
pub use recursive_splitter::RecursiveCharacterSplitter;
pub use text_loader::PlainTextLoader;
pub use text_sanitizer::sanitize_extracted_text;
