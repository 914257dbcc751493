pub mod parser;
pub mod types;

pub use parser::{decode_workbook, read_file_bytes, PreviewError};
pub use types::SheetPreview;
