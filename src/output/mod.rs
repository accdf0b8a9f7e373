//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `style` - The immutable color table
//! - `utils` - Long-format columns (mode, size, modification time)
//! - `streaming` - Line-at-a-time formatter for `TreeWalker`

mod config;
mod streaming;
mod style;
mod utils;

pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use style::StyleTable;
pub use utils::{format_mode, format_mtime, format_size, permission_bits};
