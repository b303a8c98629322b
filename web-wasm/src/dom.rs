//! DOM上の描画先
//!
//! ページ上の既存要素をIDで探し、見つかった領域だけを持つ。

use disease_explorer_common::card::DiseaseCard;
use disease_explorer_common::dropdown::CropOption;
use disease_explorer_common::surface::{
    CardContainer, CropSelect, ErrorArea, LoadingIndicator, ResultsCounter, SearchInput, Surface,
};
use wasm_bindgen::prelude::*;
use web_sys::{console, Document, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

pub const CONTAINER_ID: &str = "disease-container";
pub const LOADING_ID: &str = "loading-spinner";
pub const ERROR_ID: &str = "error-message";
pub const SEARCH_ID: &str = "search-input";
pub const CROP_FILTER_ID: &str = "filter-crop";
pub const RESULTS_COUNT_ID: &str = "results-count";

fn find<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn set_display(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(e) = element.style().set_property("display", display) {
        console::error_2(&"failed to set display".into(), &e);
    }
}

fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document.create_element(tag)?.dyn_into()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// カード一覧
pub struct DomCards {
    document: Document,
    container: HtmlElement,
}

impl DomCards {
    fn build_no_results(&self, message: &str) -> Result<(), JsValue> {
        let wrapper = create(&self.document, "div", "no-results")?;
        wrapper.set_attribute("style", "grid-column: 1/-1; text-align: center;")?;
        let paragraph = create(&self.document, "p", "")?;
        paragraph.set_text_content(Some(message));
        wrapper.append_child(&paragraph)?;
        self.container.append_child(&wrapper)?;
        Ok(())
    }

    /// カード要素を組み立てる。値はすべてテキストとして入れる
    fn build_card(&self, card: &DiseaseCard) -> Result<HtmlElement, JsValue> {
        let doc = &self.document;
        let root = create(doc, "div", "explore-card disease-card")?;

        let image_wrapper = create(doc, "div", "card-image-wrapper")?;
        image_wrapper.set_attribute("style", "margin-bottom:15px;")?;
        let image = create(doc, "img", "")?;
        image.set_attribute("src", &card.image_url)?;
        image.set_attribute("alt", &card.crop_name)?;
        image.set_attribute(
            "style",
            "width:100%; border-radius:8px; height:150px; object-fit:cover;",
        )?;
        let badge = create(doc, "div", "badge")?;
        badge.set_attribute("style", "margin-top:5px;")?;
        badge.set_text_content(Some(&card.crop_name));
        image_wrapper.append_child(&image)?;
        image_wrapper.append_child(&badge)?;

        let heading = create(doc, "h3", "")?;
        heading.set_text_content(Some(&card.disease_name));

        let details = create(doc, "div", "card-details")?;
        details.set_attribute("style", "font-size: 0.9rem; color: #ccc;")?;
        details.append_child(&labelled(doc, "Symptoms:", &card.symptoms_excerpt)?.into())?;
        details.append_child(&labelled(doc, "Treatment:", &card.treatment)?.into())?;

        root.append_child(&image_wrapper)?;
        root.append_child(&heading)?;
        root.append_child(&details)?;
        Ok(root)
    }
}

/// `<p><strong>label</strong> text</p>`
fn labelled(document: &Document, label: &str, text: &str) -> Result<HtmlElement, JsValue> {
    let paragraph = create(document, "p", "")?;
    let strong = create(document, "strong", "")?;
    strong.set_text_content(Some(label));
    paragraph.append_child(&strong)?;
    paragraph.append_with_str_1(&format!(" {}", text))?;
    Ok(paragraph)
}

impl CardContainer for DomCards {
    fn clear(&mut self) {
        self.container.set_inner_html("");
    }

    fn show_no_results(&mut self, message: &str) {
        if let Err(e) = self.build_no_results(message) {
            console::error_2(&"failed to render placeholder".into(), &e);
        }
    }

    fn append_card(&mut self, card: &DiseaseCard) {
        let appended = self
            .build_card(card)
            .and_then(|element| self.container.append_child(&element).map(|_| ()));
        if let Err(e) = appended {
            console::error_2(&"failed to render card".into(), &e);
        }
    }
}

/// 読み込み中表示
pub struct DomLoading(HtmlElement);

impl LoadingIndicator for DomLoading {
    fn set_visible(&mut self, visible: bool) {
        set_display(&self.0, visible);
    }
}

/// エラーメッセージ表示
pub struct DomError(HtmlElement);

impl ErrorArea for DomError {
    fn show(&mut self, message: &str) {
        self.0.set_text_content(Some(message));
        set_display(&self.0, true);
    }

    fn hide(&mut self) {
        set_display(&self.0, false);
    }
}

pub struct DomSearch(HtmlInputElement);

impl SearchInput for DomSearch {
    fn value(&self) -> String {
        self.0.value()
    }
}

pub struct DomCropSelect {
    select: HtmlSelectElement,
}

impl DomCropSelect {
    fn replace_options(&self, options: &[CropOption]) -> Result<(), JsValue> {
        self.select.set_inner_html("");
        for option in options {
            let element = HtmlOptionElement::new_with_text_and_value(option.label(), option.value())?;
            self.select.append_child(&element)?;
        }
        Ok(())
    }
}

impl CropSelect for DomCropSelect {
    fn value(&self) -> String {
        self.select.value()
    }

    fn set_options(&mut self, options: &[CropOption]) {
        if let Err(e) = self.replace_options(options) {
            console::error_2(&"failed to populate crop filter".into(), &e);
        }
    }
}

pub struct DomCounter(HtmlElement);

impl ResultsCounter for DomCounter {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// ページ上の各領域
pub struct DomSurface {
    cards: Option<DomCards>,
    loading: Option<DomLoading>,
    error: Option<DomError>,
    search: Option<DomSearch>,
    crop_select: Option<DomCropSelect>,
    counter: Option<DomCounter>,
}

impl DomSurface {
    /// 要素IDから領域を探す。見つからない領域は持たない
    pub fn from_document(document: &Document) -> Self {
        Self {
            cards: find::<HtmlElement>(document, CONTAINER_ID).map(|container| DomCards {
                document: document.clone(),
                container,
            }),
            loading: find(document, LOADING_ID).map(DomLoading),
            error: find(document, ERROR_ID).map(DomError),
            search: find(document, SEARCH_ID).map(DomSearch),
            crop_select: find(document, CROP_FILTER_ID).map(|select| DomCropSelect { select }),
            counter: find(document, RESULTS_COUNT_ID).map(DomCounter),
        }
    }

    pub fn search_element(&self) -> Option<&HtmlInputElement> {
        self.search.as_ref().map(|s| &s.0)
    }

    pub fn crop_select_element(&self) -> Option<&HtmlSelectElement> {
        self.crop_select.as_ref().map(|s| &s.select)
    }
}

impl Surface for DomSurface {
    fn cards(&mut self) -> Option<&mut dyn CardContainer> {
        self.cards.as_mut().map(|c| c as &mut dyn CardContainer)
    }

    fn loading(&mut self) -> Option<&mut dyn LoadingIndicator> {
        self.loading.as_mut().map(|l| l as &mut dyn LoadingIndicator)
    }

    fn error_area(&mut self) -> Option<&mut dyn ErrorArea> {
        self.error.as_mut().map(|e| e as &mut dyn ErrorArea)
    }

    fn search_input(&mut self) -> Option<&mut dyn SearchInput> {
        self.search.as_mut().map(|s| s as &mut dyn SearchInput)
    }

    fn crop_select(&mut self) -> Option<&mut dyn CropSelect> {
        self.crop_select.as_mut().map(|s| s as &mut dyn CropSelect)
    }

    fn results_counter(&mut self) -> Option<&mut dyn ResultsCounter> {
        self.counter.as_mut().map(|c| c as &mut dyn ResultsCounter)
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use disease_explorer_common::surface::Region;
    use disease_explorer_common::{DiseaseRecord, Explorer, ExplorerConfig};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// テスト用のページ領域を作り直す
    fn mount(ids: &[(&str, &str)]) -> Document {
        let document = document();
        let body = document.body().unwrap();
        body.set_inner_html("");
        for (tag, id) in ids {
            let element = document.create_element(tag).unwrap();
            element.set_id(id);
            body.append_child(&element).unwrap();
        }
        document
    }

    fn full_page() -> Document {
        mount(&[
            ("div", CONTAINER_ID),
            ("div", LOADING_ID),
            ("div", ERROR_ID),
            ("input", SEARCH_ID),
            ("select", CROP_FILTER_ID),
            ("span", RESULTS_COUNT_ID),
        ])
    }

    #[wasm_bindgen_test]
    fn wasm_finds_all_regions() {
        let document = full_page();
        let mut surface = DomSurface::from_document(&document);
        assert_eq!(surface.regions(), Region::ALL.to_vec());
    }

    #[wasm_bindgen_test]
    fn wasm_missing_elements_are_absent_regions() {
        let document = mount(&[("div", CONTAINER_ID)]);
        let mut surface = DomSurface::from_document(&document);
        assert_eq!(surface.regions(), vec![Region::Cards]);
    }

    #[wasm_bindgen_test]
    fn wasm_renders_card_and_count() {
        let document = full_page();
        let mut explorer = Explorer::new(ExplorerConfig::default(), DomSurface::from_document(&document));

        let record = DiseaseRecord {
            treatment_name: Some("Fungicide".into()),
            ..DiseaseRecord::new("Wheat", "Rust", "Orange pustules on leaves")
        };
        explorer.finish_load(Ok(vec![record])).unwrap();

        let container = document.get_element_by_id(CONTAINER_ID).unwrap();
        assert_eq!(container.query_selector_all(".disease-card").unwrap().length(), 1);
        let heading = container.query_selector("h3").unwrap().unwrap();
        assert_eq!(heading.text_content().unwrap(), "Rust");
        let badge = container.query_selector(".badge").unwrap().unwrap();
        assert_eq!(badge.text_content().unwrap(), "Wheat");
        assert!(container.text_content().unwrap().contains("Treatment: Fungicide"));

        let count = document.get_element_by_id(RESULTS_COUNT_ID).unwrap();
        assert_eq!(count.text_content().unwrap(), "Showing 1 results");

        let select: HtmlSelectElement = find(&document, CROP_FILTER_ID).unwrap();
        assert_eq!(select.length(), 2);
    }

    #[wasm_bindgen_test]
    fn wasm_card_text_is_not_markup() {
        let document = full_page();
        let mut explorer = Explorer::new(ExplorerConfig::default(), DomSurface::from_document(&document));
        explorer
            .finish_load(Ok(vec![DiseaseRecord::new("<b>Wheat</b>", "<i>Rust</i>", "")]))
            .unwrap();

        let container = document.get_element_by_id(CONTAINER_ID).unwrap();
        assert!(container.query_selector("b").unwrap().is_none());
        assert!(container.query_selector("i").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn wasm_error_and_loading_toggle() {
        let document = full_page();
        let mut explorer = Explorer::new(ExplorerConfig::default(), DomSurface::from_document(&document));

        explorer.begin_load();
        let loading: HtmlElement = find(&document, LOADING_ID).unwrap();
        assert_eq!(loading.style().get_property_value("display").unwrap(), "block");

        explorer
            .finish_load(Err(disease_explorer_common::FetchError::Server(500)))
            .ok();
        assert_eq!(loading.style().get_property_value("display").unwrap(), "none");

        let error: HtmlElement = find(&document, ERROR_ID).unwrap();
        assert!(error.text_content().unwrap().contains("Server Error: 500"));
        assert_eq!(error.style().get_property_value("display").unwrap(), "block");
    }
}
