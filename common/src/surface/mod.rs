//! 描画先の抽象化
//!
//! 画面の各領域（カード一覧・読み込み表示・エラー表示・検索欄・作物フィルタ・件数表示）は
//! それぞれ独立した能力で、`Surface` の実装が持っていなければ `None` を返す。
//! 欠けた領域への操作は何もせず、呼び出し側には「適用されなかった」ことが返る。

mod memory;

pub use memory::{
    MemoryCards, MemoryCounter, MemoryCropSelect, MemoryError, MemoryLoading, MemorySearch, MemorySurface,
};

use crate::card::DiseaseCard;
use crate::dropdown::CropOption;

/// カード一覧の表示領域
pub trait CardContainer {
    /// 既存の内容をすべて消す
    fn clear(&mut self);
    /// 一覧全体を占める「該当なし」表示
    fn show_no_results(&mut self, message: &str);
    fn append_card(&mut self, card: &DiseaseCard);
}

pub trait LoadingIndicator {
    fn set_visible(&mut self, visible: bool);
}

pub trait ErrorArea {
    fn show(&mut self, message: &str);
    fn hide(&mut self);
}

pub trait SearchInput {
    fn value(&self) -> String;
}

pub trait CropSelect {
    /// 選択中の値（`CropOption::value`）
    fn value(&self) -> String;
    /// 選択肢を丸ごと置き換える
    fn set_options(&mut self, options: &[CropOption]);
}

pub trait ResultsCounter {
    fn set_text(&mut self, text: &str);
}

/// 画面の領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Cards,
    Loading,
    Error,
    Search,
    CropFilter,
    ResultsCount,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Cards,
        Region::Loading,
        Region::Error,
        Region::Search,
        Region::CropFilter,
        Region::ResultsCount,
    ];
}

/// 描画先
///
/// 既定実装はどの領域も持たない。実装側は持っている領域だけを上書きする。
pub trait Surface {
    fn cards(&mut self) -> Option<&mut dyn CardContainer> {
        None
    }

    fn loading(&mut self) -> Option<&mut dyn LoadingIndicator> {
        None
    }

    fn error_area(&mut self) -> Option<&mut dyn ErrorArea> {
        None
    }

    fn search_input(&mut self) -> Option<&mut dyn SearchInput> {
        None
    }

    fn crop_select(&mut self) -> Option<&mut dyn CropSelect> {
        None
    }

    fn results_counter(&mut self) -> Option<&mut dyn ResultsCounter> {
        None
    }

    /// 実際に存在する領域
    fn regions(&mut self) -> Vec<Region> {
        Region::ALL
            .into_iter()
            .filter(|region| match region {
                Region::Cards => self.cards().is_some(),
                Region::Loading => self.loading().is_some(),
                Region::Error => self.error_area().is_some(),
                Region::Search => self.search_input().is_some(),
                Region::CropFilter => self.crop_select().is_some(),
                Region::ResultsCount => self.results_counter().is_some(),
            })
            .collect()
    }
}
