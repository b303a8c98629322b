//! 病害レコードの型定義
//!
//! `/api/explore` が返す1件分のデータ。どのフィールドも欠落しうるため
//! すべて `Option` で保持し、未知のキーは `extra` にそのまま残す。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 作物病害レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseRecord {
    #[serde(deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub disease_id: Option<u64>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub disease_name: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub prevention: Option<String>,

    #[serde(deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub crop_id: Option<u64>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub crop_name: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub crop_image_url: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub crop_description: Option<String>,

    #[serde(deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub treatment_id: Option<u64>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub treatment_name: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub application_method: Option<String>,

    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub precautions: Option<String>,

    /// 認識しないキー
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiseaseRecord {
    /// 作物名・病名・症状だけを指定したレコード（テストや手入力用）
    pub fn new(crop_name: &str, disease_name: &str, symptoms: &str) -> Self {
        Self {
            crop_name: Some(crop_name.to_string()),
            disease_name: Some(disease_name.to_string()),
            symptoms: Some(symptoms.to_string()),
            ..Default::default()
        }
    }

    /// JSON値から変換する。オブジェクト以外は空レコードとして扱う
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            _ => Ok(Self::default()),
        }
    }

    pub fn crop_name_or_empty(&self) -> &str {
        self.crop_name.as_deref().unwrap_or("")
    }

    pub fn disease_name_or_empty(&self) -> &str {
        self.disease_name.as_deref().unwrap_or("")
    }

    pub fn symptoms_or_empty(&self) -> &str {
        self.symptoms.as_deref().unwrap_or("")
    }
}

/// 空文字列を欠落扱いにする（表示時のフォールバック判定用）
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// 文字列・数値・真偽値をテキストとして受け付け、それ以外は欠落扱い
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// 数値または数値文字列のID
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let value = json!({
            "disease_id": 7,
            "disease_name": "Rust",
            "symptoms": "Orange pustules on leaves",
            "prevention": "Resistant varieties",
            "crop_id": 1,
            "crop_name": "Wheat",
            "crop_image_url": "https://example.com/wheat.jpg",
            "crop_description": "Cereal grain",
            "treatment_id": 3,
            "treatment_name": "Fungicide",
            "dosage": "2 ml/l",
            "application_method": "Foliar spray",
            "precautions": "Wear gloves"
        });

        let record = DiseaseRecord::from_value(value).unwrap();
        assert_eq!(record.disease_id, Some(7));
        assert_eq!(record.crop_name.as_deref(), Some("Wheat"));
        assert_eq!(record.treatment_name.as_deref(), Some("Fungicide"));
        assert_eq!(record.application_method.as_deref(), Some("Foliar spray"));
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_are_absent() {
        let record = DiseaseRecord::from_value(json!({
            "disease_name": null,
            "crop_name": "Corn"
        }))
        .unwrap();

        assert_eq!(record.disease_name, None);
        assert_eq!(record.symptoms, None);
        assert_eq!(record.disease_name_or_empty(), "");
        assert_eq!(record.crop_name_or_empty(), "Corn");
    }

    #[test]
    fn test_lenient_scalar_fields() {
        let record = DiseaseRecord::from_value(json!({
            "crop_name": 42,
            "symptoms": true,
            "treatment_name": ["not", "text"],
            "crop_id": "12"
        }))
        .unwrap();

        assert_eq!(record.crop_name.as_deref(), Some("42"));
        assert_eq!(record.symptoms.as_deref(), Some("true"));
        assert_eq!(record.treatment_name, None);
        assert_eq!(record.crop_id, Some(12));
    }

    #[test]
    fn test_non_object_becomes_empty_record() {
        assert_eq!(DiseaseRecord::from_value(json!(null)).unwrap(), DiseaseRecord::default());
        assert_eq!(DiseaseRecord::from_value(json!("Wheat")).unwrap(), DiseaseRecord::default());
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let record = DiseaseRecord::from_value(json!({
            "crop_name": "Rice",
            "severity": "high"
        }))
        .unwrap();

        assert_eq!(record.extra.get("severity"), Some(&json!("high")));

        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(serialized["severity"], json!("high"));
        assert_eq!(serialized["crop_name"], json!("Rice"));
        assert!(serialized.get("disease_name").is_none());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }
}
