//! 作物病害エクスプローラー（CLI）

pub mod browse;
pub mod cli;
pub mod config;
pub mod detail;
pub mod error;
pub mod fetcher;
pub mod terminal;
