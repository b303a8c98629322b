//! エラー型定義

use thiserror::Error;

/// データ取得（`/api/explore`）の失敗種別
///
/// どれも取得処理の境界で捕捉され、画面上のエラーメッセージに変換される。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// サーバーに到達できなかった
    #[error("{0}")]
    Network(String),

    /// 2xx以外のHTTPステータス
    #[error("Server Error: {0}")]
    Server(u16),

    /// 受け付けられない応答ボディ
    #[error("{0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// 形の合わない応答
    pub fn unsuccessful() -> Self {
        FetchError::InvalidResponse("API returned unsuccessful response".into())
    }

    /// 利用者に見せるメッセージ
    pub fn user_message(&self) -> String {
        format!("Could not load data. Is the Backend Server running? ({})", self)
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
