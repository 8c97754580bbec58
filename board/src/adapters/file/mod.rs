//! On-disk feed adapter, for static builds

mod reader;

pub use reader::FileFeedSource;
