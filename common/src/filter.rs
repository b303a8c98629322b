//! 検索語と作物名による絞り込み

use crate::types::DiseaseRecord;

/// 現在の絞り込み条件
///
/// 値は入力欄から都度読み取る。ここでは保持しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// 小文字化済みの検索語
    pub search_term: String,
    /// 選択中の作物名（空なら全作物）
    pub selected_crop: String,
}

impl FilterState {
    pub fn new(search_text: &str, selected_crop: &str) -> Self {
        Self {
            search_term: search_text.to_lowercase(),
            selected_crop: selected_crop.to_string(),
        }
    }

    /// レコードが条件に一致するか
    ///
    /// 検索語: 病名・作物名・症状のいずれかに部分一致（大文字小文字を無視）
    /// 作物名: 完全一致
    pub fn matches(&self, record: &DiseaseRecord) -> bool {
        let matches_search = self.search_term.is_empty() || {
            [
                record.disease_name_or_empty(),
                record.crop_name_or_empty(),
                record.symptoms_or_empty(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.search_term))
        };

        let matches_crop = self.selected_crop.is_empty()
            || record.crop_name.as_deref() == Some(self.selected_crop.as_str());

        matches_search && matches_crop
    }
}

/// 一致するレコードを元の順序のまま取り出す
pub fn filter_diseases(all: &[DiseaseRecord], state: &FilterState) -> Vec<DiseaseRecord> {
    all.iter().filter(|d| state.matches(d)).cloned().collect()
}
