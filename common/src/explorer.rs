//! 病害エクスプローラー本体
//!
//! 状態（`ExplorerState`）と描画先（`Surface`）を持ち、
//! 取得・選択肢の構築・絞り込み・描画・件数表示を行う。

use tracing::{debug, info, warn};

use crate::config::ExplorerConfig;
use crate::dropdown::crop_options;
use crate::error::FetchError;
use crate::filter::{filter_diseases, FilterState};
use crate::render::{render_diseases, results_count_text};
use crate::state::ExplorerState;
use crate::surface::{Region, Surface};
use crate::types::DiseaseRecord;

/// レコードの取得元
#[allow(async_fn_in_trait)]
pub trait DiseaseSource {
    async fn fetch_diseases(&self) -> Result<Vec<DiseaseRecord>, FetchError>;
}

pub struct Explorer<S: Surface> {
    config: ExplorerConfig,
    state: ExplorerState,
    surface: S,
}

impl<S: Surface> Explorer<S> {
    pub fn new(config: ExplorerConfig, surface: S) -> Self {
        Self {
            config,
            state: ExplorerState::new(),
            surface,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// 状態を空に戻す（画面はそのまま）
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// 取得して描画する
    pub async fn load<D: DiseaseSource>(&mut self, source: &D) -> Result<usize, FetchError> {
        self.begin_load();
        let outcome = source.fetch_diseases().await;
        self.finish_load(outcome)
    }

    /// 取得開始: 読み込み表示を出し、エラー表示を消す
    pub fn begin_load(&mut self) {
        self.show_loading(true);
        self.hide_error();
    }

    /// 取得結果を反映する
    ///
    /// 成功時は全レコードを置き換えて選択肢・一覧・件数を描き直す。
    /// 失敗時はエラーを表示し、状態には触れない。
    /// どちらの場合も最後に読み込み表示を消す。
    pub fn finish_load(
        &mut self,
        outcome: Result<Vec<DiseaseRecord>, FetchError>,
    ) -> Result<usize, FetchError> {
        let result = match outcome {
            Ok(records) => {
                self.state.replace_all(records);
                self.populate_filter_dropdown();
                self.render_diseases();
                self.update_results_count();
                info!("Loaded {} items", self.state.all().len());
                Ok(self.state.all().len())
            }
            Err(e) => {
                warn!(error = %e, "Error fetching diseases");
                self.show_error(&e.user_message());
                Err(e)
            }
        };

        self.show_loading(false);
        result
    }

    /// 作物フィルタの選択肢を作り直す
    pub fn populate_filter_dropdown(&mut self) -> bool {
        let Some(select) = self.surface.crop_select() else {
            debug!(region = ?Region::CropFilter, "region missing, skipped");
            return false;
        };
        select.set_options(&crop_options(self.state.all()));
        true
    }

    /// 現在の絞り込み結果を描画する
    pub fn render_diseases(&mut self) -> bool {
        let rendered = render_diseases(&mut self.surface, self.state.filtered(), &self.config);
        if !rendered {
            debug!(region = ?Region::Cards, "region missing, skipped");
        }
        rendered
    }

    /// 入力欄の値を読み取る
    pub fn current_filter(&mut self) -> FilterState {
        let search = self
            .surface
            .search_input()
            .map(|input| input.value())
            .unwrap_or_default();
        let crop = self
            .surface
            .crop_select()
            .map(|select| select.value())
            .unwrap_or_default();
        FilterState::new(&search, &crop)
    }

    /// 入力欄の条件で絞り込み、描画と件数表示を更新する
    ///
    /// 一致件数を返す。
    pub fn filter_diseases(&mut self) -> usize {
        let filter = self.current_filter();
        let filtered = filter_diseases(self.state.all(), &filter);
        self.state.set_filtered(filtered);

        self.render_diseases();
        self.update_results_count();
        self.state.filtered().len()
    }

    pub fn update_results_count(&mut self) -> bool {
        let count = self.state.filtered().len();
        match self.surface.results_counter() {
            Some(counter) => {
                counter.set_text(&results_count_text(count));
                true
            }
            None => {
                debug!(region = ?Region::ResultsCount, "region missing, skipped");
                false
            }
        }
    }

    pub fn show_loading(&mut self, show: bool) -> bool {
        match self.surface.loading() {
            Some(loading) => {
                loading.set_visible(show);
                true
            }
            None => {
                debug!(region = ?Region::Loading, "region missing, skipped");
                false
            }
        }
    }

    pub fn show_error(&mut self, message: &str) -> bool {
        match self.surface.error_area() {
            Some(area) => {
                area.show(message);
                true
            }
            None => {
                debug!(region = ?Region::Error, "region missing, skipped");
                false
            }
        }
    }

    pub fn hide_error(&mut self) -> bool {
        match self.surface.error_area() {
            Some(area) => {
                area.hide();
                true
            }
            None => {
                debug!(region = ?Region::Error, "region missing, skipped");
                false
            }
        }
    }
}
