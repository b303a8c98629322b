use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "disease-explorer")]
#[command(about = "作物病害データの検索・閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（例: http://localhost:8000）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 病害を一覧表示（検索語・作物で絞り込み）
    List {
        /// 検索語（病名・作物名・症状の部分一致）
        #[arg(short, long)]
        search: Option<String>,

        /// 作物名（完全一致）
        #[arg(short, long)]
        crop: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 作物フィルタの選択肢を表示
    Crops,

    /// 病害の詳細を表示
    Show {
        /// 病名（大文字小文字を区別しない）
        #[arg(required = true)]
        disease_name: String,
    },

    /// 対話的に検索
    Browse,

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::parse_from([
            "disease-explorer",
            "list",
            "--search",
            "rust",
            "--crop",
            "Wheat",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::List { search, crop, format } => {
                assert_eq!(search.as_deref(), Some("rust"));
                assert_eq!(crop.as_deref(), Some("Wheat"));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_global_api_url() {
        let cli = Cli::parse_from(["disease-explorer", "crops", "--api-url", "http://10.0.0.2:8000"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.2:8000"));
        assert!(matches!(cli.command, Commands::Crops));
    }

    #[test]
    fn test_show_requires_name() {
        assert!(Cli::try_parse_from(["disease-explorer", "show"]).is_err());
    }
}
