//! クライアント設定

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 既定のAPIベースURL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// 病害一覧のエンドポイント
pub const EXPLORE_PATH: &str = "/api/explore";

/// 画像URLが無いカードに使う画像
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x200?text=No+Image";

/// 検索入力のデバウンス時間（ミリ秒）
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// カードに表示する症状の文字数
pub const DEFAULT_SYMPTOMS_EXCERPT_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub api_base_url: String,
    pub debounce_ms: u32,
    pub placeholder_image_url: String,
    pub symptoms_excerpt_chars: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.into(),
            symptoms_excerpt_chars: DEFAULT_SYMPTOMS_EXCERPT_CHARS,
        }
    }
}

impl ExplorerConfig {
    /// ベースURLを差し替える。http(s) 以外は拒否
    pub fn with_api_base_url(mut self, url: &str) -> Result<Self> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must start with http:// or https://: {}",
                url
            )));
        }
        self.api_base_url = url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// `<base_url>/api/explore`
    pub fn explore_url(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), EXPLORE_PATH)
    }
}
