//! 病害の詳細表示

use disease_explorer_common::DiseaseRecord;

/// 病名で検索（大文字小文字・前後の空白を無視した完全一致）
pub fn find_by_disease_name<'a>(records: &'a [DiseaseRecord], name: &str) -> Vec<&'a DiseaseRecord> {
    let wanted = name.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.disease_name_or_empty().trim().to_lowercase() == wanted)
        .collect()
}

/// 全フィールドを1行ずつ並べる。欠落したフィールドは出さない
pub fn format_detail(record: &DiseaseRecord) -> String {
    let fields = [
        ("Disease", &record.disease_name),
        ("Crop", &record.crop_name),
        ("Crop description", &record.crop_description),
        ("Symptoms", &record.symptoms),
        ("Prevention", &record.prevention),
        ("Treatment", &record.treatment_name),
        ("Dosage", &record.dosage),
        ("Application method", &record.application_method),
        ("Precautions", &record.precautions),
        ("Image", &record.crop_image_url),
    ];

    let mut lines: Vec<String> = fields
        .iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| format!("{}: {}", label, v)))
        .collect();

    for (key, value) in &record.extra {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        lines.push(format!("{}: {}", key, text));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<DiseaseRecord> {
        vec![
            DiseaseRecord::new("Wheat", "Rust", "Orange pustules"),
            DiseaseRecord::new("Corn", "Common Rust", "Brown pustules"),
            DiseaseRecord::new("Barley", "rust ", "Yellow stripes"),
        ]
    }

    #[test]
    fn test_find_is_exact_and_case_insensitive() {
        let all = records();
        let found = find_by_disease_name(&all, "RUST");
        let crops: Vec<&str> = found.iter().map(|r| r.crop_name_or_empty()).collect();
        assert_eq!(crops, vec!["Wheat", "Barley"]);
    }

    #[test]
    fn test_find_nothing() {
        assert!(find_by_disease_name(&records(), "Blight").is_empty());
    }

    #[test]
    fn test_format_detail_skips_missing_fields() {
        let record = DiseaseRecord {
            dosage: Some("2 ml/l".into()),
            ..DiseaseRecord::new("Wheat", "Rust", "Orange pustules")
        };

        let text = format_detail(&record);
        assert_eq!(
            text,
            "Disease: Rust\nCrop: Wheat\nSymptoms: Orange pustules\nDosage: 2 ml/l"
        );
    }

    #[test]
    fn test_format_detail_includes_unknown_keys() {
        let record = DiseaseRecord::from_value(json!({
            "disease_name": "Blast",
            "severity": "high",
            "season": 2
        }))
        .unwrap();

        let text = format_detail(&record);
        assert!(text.contains("severity: high"));
        assert!(text.contains("season: 2"));
    }
}
