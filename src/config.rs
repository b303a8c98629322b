use crate::error::{ExplorerError, Result};
use disease_explorer_common::ExplorerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "DISEASE_EXPLORER_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExplorerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("disease-explorer").join("config.json"))
    }

    pub fn set_api_base_url(&mut self, url: &str) -> Result<()> {
        // 形式チェックのみ
        ExplorerConfig::default().with_api_base_url(url)?;
        self.api_base_url = Some(url.trim().to_string());
        Ok(())
    }

    /// 実際に使うクライアント設定
    ///
    /// 優先順位: コマンドライン > 環境変数 > 設定ファイル > 既定値
    pub fn explorer_config(&self, cli_api_url: Option<&str>) -> Result<ExplorerConfig> {
        let env_api_url = std::env::var(API_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        self.resolve(cli_api_url, env_api_url.as_deref())
    }

    fn resolve(&self, cli_api_url: Option<&str>, env_api_url: Option<&str>) -> Result<ExplorerConfig> {
        let url = cli_api_url
            .or(env_api_url)
            .or(self.api_base_url.as_deref());

        let config = ExplorerConfig::default();
        match url {
            Some(url) => Ok(config.with_api_base_url(url)?),
            None => Ok(config),
        }
    }
}
