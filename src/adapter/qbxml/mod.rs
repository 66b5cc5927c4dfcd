//! qbXML Codec
//!
//! リクエスト文書の組み立てとレスポンスの解析

pub mod request;
pub mod response;

pub use request::{build_terms_add_request, DEFAULT_QBXML_VERSION};
pub use response::parse_terms_add_response;
