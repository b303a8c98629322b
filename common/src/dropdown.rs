//! 作物フィルタの選択肢

use std::collections::BTreeSet;

use crate::types::DiseaseRecord;

/// 「全作物」の表示名
pub const ALL_CROPS_LABEL: &str = "All Crops";

/// 作物名が無いレコードの選択肢が持つ値（ブラウザが未定義値を文字列化した形）
pub const UNNAMED_CROP_VALUE: &str = "undefined";

/// 作物フィルタの選択肢
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropOption {
    /// 絞り込みなし（先頭の番兵）
    All,
    /// 作物名
    Crop(String),
    /// 作物名が欠落したレコード群
    Unnamed,
}

impl CropOption {
    pub fn value(&self) -> &str {
        match self {
            CropOption::All => "",
            CropOption::Crop(name) => name,
            CropOption::Unnamed => UNNAMED_CROP_VALUE,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CropOption::All => ALL_CROPS_LABEL,
            CropOption::Crop(name) => name,
            CropOption::Unnamed => "",
        }
    }
}

/// 全レコードから選択肢を組み立てる
///
/// 先頭に `All`、続いて重複を除いた作物名を昇順に並べる。
/// 作物名の無いレコードがあれば末尾に `Unnamed` を1つだけ置く。
pub fn crop_options(all: &[DiseaseRecord]) -> Vec<CropOption> {
    let mut names = BTreeSet::new();
    let mut has_unnamed = false;

    for record in all {
        match &record.crop_name {
            Some(name) => {
                names.insert(name.as_str());
            }
            None => has_unnamed = true,
        }
    }

    let mut options = Vec::with_capacity(names.len() + 2);
    options.push(CropOption::All);
    options.extend(names.into_iter().map(|n| CropOption::Crop(n.to_string())));
    if has_unnamed {
        options.push(CropOption::Unnamed);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_only_has_sentinel() {
        let options = crop_options(&[]);
        assert_eq!(options, vec![CropOption::All]);
        assert_eq!(options[0].value(), "");
        assert_eq!(options[0].label(), "All Crops");
    }

    #[test]
    fn test_distinct_sorted_crops() {
        let all = vec![
            DiseaseRecord::new("Wheat", "Rust", ""),
            DiseaseRecord::new("Corn", "Blight", ""),
            DiseaseRecord::new("Wheat", "Smut", ""),
            DiseaseRecord::new("Apple", "Scab", ""),
        ];

        let options = crop_options(&all);
        let values: Vec<&str> = options.iter().map(|o| o.value()).collect();
        assert_eq!(values, vec!["", "Apple", "Corn", "Wheat"]);
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let all = vec![
            DiseaseRecord::new("banana", "a", ""),
            DiseaseRecord::new("Cherry", "b", ""),
            DiseaseRecord::new("apple", "c", ""),
        ];
        let labels: Vec<String> = crop_options(&all)
            .iter()
            .map(|o| o.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All Crops", "Cherry", "apple", "banana"]);
    }

    #[test]
    fn test_missing_crop_name_is_kept_as_absent() {
        let all = vec![
            DiseaseRecord::default(),
            DiseaseRecord::new("Rice", "Blast", ""),
            DiseaseRecord::default(),
        ];

        let options = crop_options(&all);
        assert_eq!(
            options,
            vec![
                CropOption::All,
                CropOption::Crop("Rice".into()),
                CropOption::Unnamed,
            ]
        );
        assert_eq!(options[2].label(), "");
        assert_eq!(options[2].value(), "undefined");
    }

    #[test]
    fn test_null_crop_name_is_same_as_missing() {
        let all = vec![
            DiseaseRecord::from_value(serde_json::json!({"crop_name": null, "disease_name": "A"})).unwrap(),
            DiseaseRecord::from_value(serde_json::json!({"disease_name": "B"})).unwrap(),
            DiseaseRecord::from_value(serde_json::json!({"crop_name": "Maize"})).unwrap(),
        ];

        let options = crop_options(&all);
        assert_eq!(
            options,
            vec![
                CropOption::All,
                CropOption::Crop("Maize".into()),
                CropOption::Unnamed,
            ]
        );
        assert!(options.iter().all(|o| o.value() != "null"));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let all = vec![DiseaseRecord::new("Rice", "Blast", "")];
        assert_eq!(crop_options(&all), crop_options(&all));
    }
}
