// Export boundary: lossless JSON interchange plus the document (PDF)
// export orchestration. Rasterization and packaging are external
// collaborators behind traits — only the page math and the busy-flag
// protocol live here.

pub mod document;
pub mod json;

pub use document::{
    document_file_name, scaled_page_size, Capture, DocumentExporter, DocumentFile,
    DocumentPackager, PageSize, PreviewRasterizer,
};
pub use json::{export_file_name, from_json, import_into, to_json};
