//! 病害カードの表示内容

use serde::Serialize;

use crate::config::ExplorerConfig;
use crate::types::{non_empty, DiseaseRecord};

pub const NO_SYMPTOMS_TEXT: &str = "No detailed symptoms available.";
pub const NO_TREATMENT_TEXT: &str = "Consult an expert.";

/// カード1枚分の表示テキスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseCard {
    pub image_url: String,
    pub crop_name: String,
    pub disease_name: String,
    pub symptoms_excerpt: String,
    pub treatment: String,
}

impl DiseaseCard {
    /// レコードからカードを作る
    ///
    /// 画像・症状・治療法は欠落時（空文字列を含む）に既定文言へ置き換える。
    /// 症状は先頭から指定文字数で単純に切り、`...` を付ける。
    pub fn from_record(record: &DiseaseRecord, config: &ExplorerConfig) -> Self {
        let image_url = non_empty(&record.crop_image_url)
            .unwrap_or(config.placeholder_image_url.as_str())
            .to_string();
        let symptoms = non_empty(&record.symptoms).unwrap_or(NO_SYMPTOMS_TEXT);
        let treatment = non_empty(&record.treatment_name).unwrap_or(NO_TREATMENT_TEXT);

        Self {
            image_url,
            crop_name: record.crop_name_or_empty().to_string(),
            disease_name: record.disease_name_or_empty().to_string(),
            symptoms_excerpt: excerpt(symptoms, config.symptoms_excerpt_chars),
            treatment: treatment.to_string(),
        }
    }
}

fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
