//! Archive adapters.

mod zipfile;

pub use zipfile::ZipArchiver;
