//! Crop Disease Explorer Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型とロジック

pub mod types;
pub mod config;
pub mod error;
pub mod response;
pub mod filter;
pub mod dropdown;
pub mod card;
pub mod render;
pub mod state;
pub mod surface;
pub mod debounce;
pub mod explorer;

pub use types::DiseaseRecord;
pub use config::ExplorerConfig;
pub use error::{Error, FetchError, Result};
pub use response::{parse_explore_body, parse_explore_response};
pub use filter::{filter_diseases, FilterState};
pub use dropdown::{crop_options, CropOption};
pub use card::DiseaseCard;
pub use state::ExplorerState;
pub use surface::{MemorySurface, Region, Surface};
pub use debounce::{Debouncer, Ticket};
pub use explorer::{DiseaseSource, Explorer};
