pub mod classifications;
pub mod highlight;
pub mod traits;

// Re-export main types and functions
pub use classifications::StaticClassifications;
pub use highlight::{handle_highlight, highlight_document};
pub use traits::ClassificationProvider;
