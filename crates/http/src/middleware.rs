//! # ミドルウェア
//!
//! API 共通のミドルウェアを提供する。

mod api_version;
mod cors;

pub use api_version::{
    API_VERSION_HEADER,
    ApiVersionState,
    DEFAULT_API_VERSION,
    UNSUPPORTED_API_VERSION_MESSAGE,
    require_api_version,
};
pub use cors::cors_layer;
