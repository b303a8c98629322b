//! 端末上の描画先
//!
//! 画面内容はメモリに保持し、`present` でまとめて書き出す。
//! 読み込み表示だけは `indicatif` のスピナーで即時に出す。

use std::io::Write;
use std::time::Duration;

use disease_explorer_common::card::DiseaseCard;
use disease_explorer_common::surface::{
    CardContainer, CropSelect, ErrorArea, LoadingIndicator, ResultsCounter, SearchInput, Surface,
};
use disease_explorer_common::MemorySurface;
use indicatif::{ProgressBar, ProgressStyle};

/// 読み込み中スピナー
pub struct Spinner {
    bar: Option<ProgressBar>,
    hidden: bool,
}

impl Spinner {
    pub fn new() -> Self {
        Self { bar: None, hidden: false }
    }

    /// 何も描かない（テスト・パイプ出力用）
    pub fn hidden() -> Self {
        Self { bar: None, hidden: true }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    fn start(&self) -> ProgressBar {
        if self.hidden {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message("Loading...");
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator for Spinner {
    fn set_visible(&mut self, visible: bool) {
        if visible {
            if self.bar.is_none() {
                self.bar = Some(self.start());
            }
        } else if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

pub struct TerminalSurface {
    screen: MemorySurface,
    spinner: Spinner,
}

impl TerminalSurface {
    pub fn new(spinner: Spinner) -> Self {
        Self {
            screen: MemorySurface::full(),
            spinner,
        }
    }

    pub fn screen(&self) -> &MemorySurface {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut MemorySurface {
        &mut self.screen
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// 表示中のエラーメッセージ
    pub fn error_message(&self) -> Option<&str> {
        self.screen.error_message()
    }

    /// カード一覧と件数を書き出す
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if let Some(cards) = &self.screen.cards {
            if let Some(message) = &cards.no_results {
                writeln!(out, "{}", message)?;
            }
            for card in &cards.cards {
                writeln!(out, "{}", format_card(card))?;
            }
        }
        if let Some(text) = self.screen.counter_text() {
            writeln!(out, "{}", text)?;
        }
        Ok(())
    }
}

/// カード1枚分のテキスト
pub fn format_card(card: &DiseaseCard) -> String {
    format!(
        "{} [{}]\n  Symptoms:  {}\n  Treatment: {}\n  Image:     {}\n",
        card.disease_name, card.crop_name, card.symptoms_excerpt, card.treatment, card.image_url
    )
}

impl Surface for TerminalSurface {
    fn cards(&mut self) -> Option<&mut dyn CardContainer> {
        self.screen.cards()
    }

    fn loading(&mut self) -> Option<&mut dyn LoadingIndicator> {
        Some(&mut self.spinner as &mut dyn LoadingIndicator)
    }

    fn error_area(&mut self) -> Option<&mut dyn ErrorArea> {
        self.screen.error_area()
    }

    fn search_input(&mut self) -> Option<&mut dyn SearchInput> {
        self.screen.search_input()
    }

    fn crop_select(&mut self) -> Option<&mut dyn CropSelect> {
        self.screen.crop_select()
    }

    fn results_counter(&mut self) -> Option<&mut dyn ResultsCounter> {
        self.screen.results_counter()
    }
}
