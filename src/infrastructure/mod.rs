//! Infrastructure layer: I/O boundary traits and real implementations

pub mod traits;

pub use traits::{FileSystem, RealFileSystem};
