#![allow(dead_code)]

mod doubles;

pub use doubles::{RecordingSink, StaticProber, metadata_xml};
