use disease_explorer_common::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データ取得エラー: {0}")]
    Fetch(#[from] FetchError),

    #[error("該当する病害が見つかりません: {0}")]
    DiseaseNotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<disease_explorer_common::Error> for ExplorerError {
    fn from(error: disease_explorer_common::Error) -> Self {
        match error {
            disease_explorer_common::Error::Json(e) => ExplorerError::JsonParse(e),
            disease_explorer_common::Error::Config(message) => ExplorerError::Config(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
