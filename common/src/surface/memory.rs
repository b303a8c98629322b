//! メモリ上の描画先
//!
//! ブラウザや端末を使わずに、描画された内容をそのまま保持する。

use super::{CardContainer, CropSelect, ErrorArea, LoadingIndicator, Region, ResultsCounter, SearchInput, Surface};
use crate::card::DiseaseCard;
use crate::dropdown::CropOption;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCards {
    pub cards: Vec<DiseaseCard>,
    pub no_results: Option<String>,
    /// `clear` が呼ばれた回数
    pub clears: usize,
}

impl CardContainer for MemoryCards {
    fn clear(&mut self) {
        self.cards.clear();
        self.no_results = None;
        self.clears += 1;
    }

    fn show_no_results(&mut self, message: &str) {
        self.no_results = Some(message.to_string());
    }

    fn append_card(&mut self, card: &DiseaseCard) {
        self.cards.push(card.clone());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryLoading {
    pub visible: bool,
    /// 表示切り替えの履歴
    pub history: Vec<bool>,
}

impl LoadingIndicator for MemoryLoading {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.history.push(visible);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryError {
    pub message: String,
    pub visible: bool,
}

impl ErrorArea for MemoryError {
    fn show(&mut self, message: &str) {
        self.message = message.to_string();
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySearch {
    pub value: String,
}

impl SearchInput for MemorySearch {
    fn value(&self) -> String {
        self.value.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCropSelect {
    pub value: String,
    pub options: Vec<CropOption>,
}

impl CropSelect for MemoryCropSelect {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_options(&mut self, options: &[CropOption]) {
        self.options = options.to_vec();
        // 作り直した <select> と同じく先頭（全作物）が選ばれた状態になる
        self.value = options
            .first()
            .map(|o| o.value().to_string())
            .unwrap_or_default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCounter {
    pub text: String,
}

impl ResultsCounter for MemoryCounter {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// 全領域をメモリに保持する描画先
///
/// `Default` はどの領域も持たない状態。`MemorySurface::full()` で全領域を持つ。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySurface {
    pub cards: Option<MemoryCards>,
    pub loading: Option<MemoryLoading>,
    pub error: Option<MemoryError>,
    pub search: Option<MemorySearch>,
    pub crop_select: Option<MemoryCropSelect>,
    pub counter: Option<MemoryCounter>,
}

impl MemorySurface {
    pub fn full() -> Self {
        Self {
            cards: Some(MemoryCards::default()),
            loading: Some(MemoryLoading::default()),
            error: Some(MemoryError::default()),
            search: Some(MemorySearch::default()),
            crop_select: Some(MemoryCropSelect::default()),
            counter: Some(MemoryCounter::default()),
        }
    }

    /// 指定した領域を取り除く
    pub fn without(mut self, region: Region) -> Self {
        match region {
            Region::Cards => self.cards = None,
            Region::Loading => self.loading = None,
            Region::Error => self.error = None,
            Region::Search => self.search = None,
            Region::CropFilter => self.crop_select = None,
            Region::ResultsCount => self.counter = None,
        }
        self
    }

    /// 検索欄への入力
    pub fn type_search(&mut self, text: &str) {
        if let Some(search) = self.search.as_mut() {
            search.value = text.to_string();
        }
    }

    /// 作物フィルタの選択
    pub fn select_crop(&mut self, value: &str) {
        if let Some(select) = self.crop_select.as_mut() {
            select.value = value.to_string();
        }
    }

    pub fn counter_text(&self) -> Option<&str> {
        self.counter.as_ref().map(|c| c.text.as_str())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| e.visible)
            .map(|e| e.message.as_str())
    }

    pub fn rendered_cards(&self) -> &[DiseaseCard] {
        self.cards.as_ref().map(|c| c.cards.as_slice()).unwrap_or(&[])
    }
}

impl Surface for MemorySurface {
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
