//! HTTPでのレコード取得

use disease_explorer_common::{
    parse_explore_response, DiseaseRecord, DiseaseSource, Explorer, ExplorerConfig, FetchError,
};
use tracing::debug;

use crate::error::{ExplorerError, Result};
use crate::terminal::{Spinner, TerminalSurface};

/// `reqwest` で `/api/explore` を取得する
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl DiseaseSource for HttpSource {
    async fn fetch_diseases(&self) -> std::result::Result<Vec<DiseaseRecord>, FetchError> {
        debug!(url = %self.url, "GET");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

        parse_explore_response(body)
    }
}

/// 取得して描画済みのエクスプローラーを返す
///
/// 失敗時は画面のエラーメッセージを標準エラーに出し、`ExplorerError::Fetch` を返す。
pub async fn load_explorer(
    config: ExplorerConfig,
    spinner: Spinner,
) -> Result<Explorer<TerminalSurface>> {
    let source = HttpSource::new(config.explore_url());
    let mut explorer = Explorer::new(config, TerminalSurface::new(spinner));

    if let Err(e) = explorer.load(&source).await {
        if let Some(message) = explorer.surface().error_message() {
            eprintln!("⚠️ {}", message);
        }
        return Err(ExplorerError::Fetch(e));
    }
    Ok(explorer)
}
