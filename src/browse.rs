//! 対話式検索

use std::io::Write;

use crate::error::{ExplorerError, Result};
use crate::terminal::TerminalSurface;
use dialoguer::{Confirm, Input, Select};
use disease_explorer_common::dropdown::CropOption;
use disease_explorer_common::Explorer;

/// 選択肢の表示名。作物名の無いものは明示する
pub fn crop_choice_labels(options: &[CropOption]) -> Vec<String> {
    options
        .iter()
        .map(|option| match option {
            CropOption::Unnamed => "(no crop name)".to_string(),
            other => other.label().to_string(),
        })
        .collect()
}

/// 検索語と作物を繰り返し入力して絞り込む
pub fn run_browse<W: Write>(explorer: &mut Explorer<TerminalSurface>, out: &mut W) -> Result<()> {
    let options = explorer
        .surface()
        .screen()
        .crop_select
        .as_ref()
        .map(|s| s.options.clone())
        .unwrap_or_default();
    let labels = crop_choice_labels(&options);

    let mut search = String::new();
    let mut crop_index = 0;

    loop {
        search = Input::<String>::new()
            .with_prompt("Search")
            .with_initial_text(search.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ExplorerError::Prompt(e.to_string()))?;

        if !labels.is_empty() {
            crop_index = Select::new()
                .with_prompt("Crop")
                .items(&labels)
                .default(crop_index)
                .interact()
                .map_err(|e| ExplorerError::Prompt(e.to_string()))?;
        }

        let crop_value = options
            .get(crop_index)
            .map(|o| o.value().to_string())
            .unwrap_or_default();

        let screen = explorer.surface_mut().screen_mut();
        screen.type_search(&search);
        screen.select_crop(&crop_value);
        explorer.filter_diseases();

        writeln!(out)?;
        explorer.surface().present(out)?;
        writeln!(out)?;

        let again = Confirm::new()
            .with_prompt("Search again?")
            .default(true)
            .interact()
            .map_err(|e| ExplorerError::Prompt(e.to_string()))?;
        if !again {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_choice_labels() {
        let options = vec![
            CropOption::All,
            CropOption::Crop("Rice".into()),
            CropOption::Unnamed,
        ];
        assert_eq!(
            crop_choice_labels(&options),
            vec!["All Crops", "Rice", "(no crop name)"]
        );
    }
}
