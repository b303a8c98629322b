//! `/api/explore` レスポンスのデコード
//!
//! 受け付ける形:
//! 1. レコードの配列そのもの
//! 2. `{ "success": true, "data": [...] }`
//!
//! 取り出しの優先順位は「`data` が真値ならそれ、そうでなければ本体」。
//! 取り出した値が配列でなければ失敗とする。

use serde_json::Value;

use crate::error::FetchError;
use crate::types::DiseaseRecord;

/// レスポンスボディ（テキスト）をパース
pub fn parse_explore_body(body: &str) -> Result<Vec<DiseaseRecord>, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))?;
    parse_explore_response(value)
}

/// パース済みJSONからレコード列を取り出す
pub fn parse_explore_response(body: Value) -> Result<Vec<DiseaseRecord>, FetchError> {
    let accepted = body.is_array() || body.get("success").is_some_and(is_truthy);
    if !accepted {
        return Err(FetchError::unsuccessful());
    }

    let selected = match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if is_truthy(&data) => data,
            _ => Value::Object(map),
        },
        other => other,
    };

    let Value::Array(items) = selected else {
        return Err(FetchError::InvalidResponse("response data is not a list".into()));
    };

    items
        .into_iter()
        .map(DiseaseRecord::from_value)
        .collect::<serde_json::Result<Vec<_>>>()
        .map_err(|e| FetchError::InvalidResponse(e.to_string()))
}

/// JSON値の真偽判定（null・false・0・空文字列が偽）
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
