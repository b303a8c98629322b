//! ページの初期化とイベント配線

use std::cell::RefCell;
use std::rc::Rc;

use disease_explorer_common::{Debouncer, DiseaseSource, Explorer, ExplorerConfig};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, DocumentReadyState};

use crate::api::FetchSource;
use crate::dom::DomSurface;

type SharedExplorer = Rc<RefCell<Explorer<DomSurface>>>;

/// 検索入力の遅延実行
///
/// 新しい入力で `Timeout` を差し替えると、古いものは破棄時に取り消される。
struct SearchDebounce {
    debouncer: Debouncer,
    timeout: Option<Timeout>,
}

/// ページの準備ができたら初期化する
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    run_when_ready(&document, init);
    Ok(())
}

/// 読み込み中なら `DOMContentLoaded` まで待つ
fn needs_deferral(state: DocumentReadyState) -> bool {
    state == DocumentReadyState::Loading
}

/// 準備済みならその場で、読み込み中なら `DOMContentLoaded` で `f` を呼ぶ
fn run_when_ready(document: &Document, f: impl FnOnce() + 'static) {
    if needs_deferral(document.ready_state()) {
        EventListener::once(document, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}

fn init() {
    console::log_1(&"Initializing Crop Disease Explorer...".into());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        console::error_1(&"document is not available".into());
        return;
    };

    let config = ExplorerConfig::default();
    let source = FetchSource::new(config.explore_url());
    let explorer: SharedExplorer = Rc::new(RefCell::new(Explorer::new(
        config,
        DomSurface::from_document(&document),
    )));

    initialize_event_listeners(&explorer);
    spawn_local(fetch_diseases(explorer, source));
}

/// 取得して反映する。通信中は借用を持たない
async fn fetch_diseases(explorer: SharedExplorer, source: FetchSource) {
    explorer.borrow_mut().begin_load();
    let outcome = source.fetch_diseases().await;

    match explorer.borrow_mut().finish_load(outcome) {
        Ok(count) => console::log_1(&format!("Loaded {} items", count).into()),
        Err(e) => console::error_1(&format!("Error fetching diseases: {}", e).into()),
    }
}

fn initialize_event_listeners(explorer: &SharedExplorer) {
    let (search, select, wait_ms) = {
        let explorer = explorer.borrow();
        let surface = explorer.surface();
        (
            surface.search_element().cloned(),
            surface.crop_select_element().cloned(),
            explorer.config().debounce_ms,
        )
    };

    if let Some(search) = search {
        let debounce = Rc::new(RefCell::new(SearchDebounce {
            debouncer: Debouncer::new(wait_ms),
            timeout: None,
        }));
        let explorer = explorer.clone();
        EventListener::new(&search, "input", move |_| {
            on_search_input(&debounce, &explorer);
        })
        .forget();
    }

    if let Some(select) = select {
        let explorer = explorer.clone();
        EventListener::new(&select, "change", move |_| {
            explorer.borrow_mut().filter_diseases();
        })
        .forget();
    }
}

/// 入力のたびに予約し直し、最後の入力から待ち時間が経ったら絞り込む
fn on_search_input(debounce: &Rc<RefCell<SearchDebounce>>, explorer: &SharedExplorer) {
    let mut state = debounce.borrow_mut();
    let ticket = state.debouncer.arm();
    let wait_ms = state.debouncer.wait_ms();

    let debounce_ref = debounce.clone();
    let explorer = explorer.clone();
    state.timeout = Some(Timeout::new(wait_ms, move || {
        let due = debounce_ref.borrow_mut().debouncer.fire(ticket);
        if due {
            explorer.borrow_mut().filter_diseases();
        }
    }));
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use crate::dom::{CONTAINER_ID, CROP_FILTER_ID, ERROR_ID, LOADING_ID, RESULTS_COUNT_ID, SEARCH_ID};
    use disease_explorer_common::DiseaseRecord;
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use web_sys::{Event, EventTarget, HtmlInputElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// 6つの領域を持つページを用意し、3件読み込んだ状態で配線する
    fn wired_page() -> (Document, SharedExplorer) {
        let document = document();
        let body = document.body().unwrap();
        body.set_inner_html("");
        for (tag, id) in [
            ("div", CONTAINER_ID),
            ("div", LOADING_ID),
            ("div", ERROR_ID),
            ("input", SEARCH_ID),
            ("select", CROP_FILTER_ID),
            ("span", RESULTS_COUNT_ID),
        ] {
            let element = document.create_element(tag).unwrap();
            element.set_id(id);
            body.append_child(&element).unwrap();
        }

        let explorer: SharedExplorer = Rc::new(RefCell::new(Explorer::new(
            ExplorerConfig::default(),
            DomSurface::from_document(&document),
        )));
        explorer
            .borrow_mut()
            .finish_load(Ok(vec![
                DiseaseRecord::new("Wheat", "Rust", "Orange pustules"),
                DiseaseRecord::new("Corn", "Blight", "Grey lesions"),
                DiseaseRecord::new("Rice", "Blast", "Diamond spots"),
            ]))
            .unwrap();
        initialize_event_listeners(&explorer);
        (document, explorer)
    }

    fn counter_text(document: &Document) -> String {
        document
            .get_element_by_id(RESULTS_COUNT_ID)
            .unwrap()
            .text_content()
            .unwrap()
    }

    fn card_count(document: &Document) -> u32 {
        document
            .get_element_by_id(CONTAINER_ID)
            .unwrap()
            .query_selector_all(".disease-card")
            .unwrap()
            .length()
    }

    fn dispatch(target: &EventTarget, kind: &str) {
        target.dispatch_event(&Event::new(kind).unwrap()).unwrap();
    }

    fn type_search(document: &Document, value: &str) {
        let input: HtmlInputElement = document
            .get_element_by_id(SEARCH_ID)
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_value(value);
        dispatch(&input, "input");
    }

    #[wasm_bindgen_test]
    fn wasm_only_loading_state_is_deferred() {
        assert!(needs_deferral(DocumentReadyState::Loading));
        assert!(!needs_deferral(DocumentReadyState::Interactive));
        assert!(!needs_deferral(DocumentReadyState::Complete));
    }

    #[wasm_bindgen_test]
    fn wasm_ready_document_runs_immediately() {
        let ran = Rc::new(RefCell::new(false));
        let flag = ran.clone();
        run_when_ready(&document(), move || *flag.borrow_mut() = true);
        assert!(*ran.borrow());
    }

    #[wasm_bindgen_test]
    async fn wasm_search_burst_filters_once_with_last_value() {
        let (document, _explorer) = wired_page();
        assert_eq!(counter_text(&document), "Showing 3 results");

        type_search(&document, "rust");
        gloo_timers::future::sleep(Duration::from_millis(200)).await;
        type_search(&document, "blight");

        // 最初の入力から待ち時間を過ぎても、予約し直したので未実行
        gloo_timers::future::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter_text(&document), "Showing 3 results");
        assert_eq!(card_count(&document), 3);

        gloo_timers::future::sleep(Duration::from_millis(250)).await;
        assert_eq!(counter_text(&document), "Showing 1 results");
        assert_eq!(card_count(&document), 1);
    }

    #[wasm_bindgen_test]
    fn wasm_crop_change_filters_immediately() {
        let (document, explorer) = wired_page();

        let select: HtmlSelectElement = document
            .get_element_by_id(CROP_FILTER_ID)
            .unwrap()
            .dyn_into()
            .unwrap();
        select.set_value("Rice");
        dispatch(&select, "change");

        assert_eq!(counter_text(&document), "Showing 1 results");
        assert_eq!(card_count(&document), 1);
        assert_eq!(explorer.borrow().state().filtered()[0].crop_name_or_empty(), "Rice");
    }
}
