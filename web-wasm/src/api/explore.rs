//! `/api/explore` の取得（fetch API）

use disease_explorer_common::{parse_explore_body, DiseaseRecord, DiseaseSource, FetchError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// ブラウザの fetch でレコードを取得する
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DiseaseSource for FetchSource {
    async fn fetch_diseases(&self) -> Result<Vec<DiseaseRecord>, FetchError> {
        let body = fetch_text(&self.url).await?;
        parse_explore_body(&body)
    }
}

/// GETしてボディを文字列で返す
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;

    let window = web_sys::window()
        .ok_or_else(|| FetchError::Network("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(FetchError::Server(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(invalid_response)?)
        .await
        .map_err(invalid_response)?;
    text.as_string()
        .ok_or_else(|| FetchError::InvalidResponse("response body is not text".into()))
}

fn network_error(value: JsValue) -> FetchError {
    FetchError::Network(js_message(&value))
}

fn invalid_response(value: JsValue) -> FetchError {
    FetchError::InvalidResponse(js_message(&value))
}

/// JSの例外からメッセージを取り出す
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_message_from_error() {
        let error = js_sys::Error::new("Failed to fetch");
        assert_eq!(js_message(&error.into()), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_js_message_from_string() {
        assert_eq!(js_message(&JsValue::from_str("offline")), "offline");
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_server_is_network_error() {
        let source = FetchSource::new("http://127.0.0.1:9/api/explore");
        let error = source.fetch_diseases().await.unwrap_err();
        assert!(matches!(error, FetchError::Network(_)));
    }
}
