//! バックエンドAPI

pub mod explore;

pub use explore::FetchSource;
