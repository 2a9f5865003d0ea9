pub mod converter;

pub use converter::{convert, ConvertReport, ConvertRequest, ConvertRequestBuilder, OutputTarget};
