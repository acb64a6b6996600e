//! Text file I/O for graph dumps.

pub mod reader;
pub mod writer;

pub use reader::{GraphReader, Parsed};
pub use writer::{Dump, GraphWriter, SaveFormat};
