use clap::Parser;
use disease_explorer::{browse, cli, config, detail, error, fetcher, terminal};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{ExplorerError, Result};
use fetcher::load_explorer;
use std::io::Write;
use terminal::Spinner;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let explorer_config = config.explorer_config(cli.api_url.as_deref())?;
    info!(url = %explorer_config.explore_url(), "Using API");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { search, crop, format } => {
            let mut explorer = load_explorer(explorer_config, Spinner::new()).await?;

            let screen = explorer.surface_mut().screen_mut();
            screen.type_search(search.as_deref().unwrap_or(""));
            screen.select_crop(crop.as_deref().unwrap_or(""));
            explorer.filter_diseases();

            match format {
                OutputFormat::Text => explorer.surface().present(&mut out)?,
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(explorer.state().filtered())?;
                    writeln!(out, "{}", json)?;
                }
            }
        }

        Commands::Crops => {
            let explorer = load_explorer(explorer_config, Spinner::new()).await?;
            let options = explorer
                .surface()
                .screen()
                .crop_select
                .as_ref()
                .map(|s| s.options.clone())
                .unwrap_or_default();

            for label in browse::crop_choice_labels(&options) {
                writeln!(out, "{}", label)?;
            }
        }

        Commands::Show { disease_name } => {
            let explorer = load_explorer(explorer_config, Spinner::new()).await?;
            let found = detail::find_by_disease_name(explorer.state().all(), &disease_name);

            if found.is_empty() {
                return Err(ExplorerError::DiseaseNotFound(disease_name));
            }

            let blocks: Vec<String> = found.into_iter().map(detail::format_detail).collect();
            writeln!(out, "{}", blocks.join("\n\n"))?;
        }

        Commands::Browse => {
            let mut explorer = load_explorer(explorer_config, Spinner::new()).await?;
            explorer.surface().present(&mut out)?;
            browse::run_browse(&mut explorer, &mut out)?;
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_base_url(&url)?;
                config.save()?;
                writeln!(out, "✔ APIのベースURLを設定しました")?;
            }

            if show {
                writeln!(out, "設定:")?;
                writeln!(out, "  設定ファイル: {}", Config::config_path()?.display())?;
                writeln!(
                    out,
                    "  APIベースURL: {}",
                    config.api_base_url.as_deref().unwrap_or("(未設定)")
                )?;
                writeln!(out, "  使用するURL: {}", explorer_config.explore_url())?;
            }
        }
    }

    Ok(())
}
