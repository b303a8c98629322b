//! クライアントの状態

use crate::types::DiseaseRecord;

/// 取得済みの全レコードと、絞り込み後のレコード
///
/// 全レコードは置き換えのみで、並べ替えや部分的な変更はしない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplorerState {
    all: Vec<DiseaseRecord>,
    filtered: Vec<DiseaseRecord>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全レコードを丸ごと置き換え、絞り込み結果をその複製に戻す
    pub fn replace_all(&mut self, records: Vec<DiseaseRecord>) {
        self.filtered = records.clone();
        self.all = records;
    }

    /// 初期状態（空）に戻す
    pub fn reset(&mut self) {
        self.all.clear();
        self.filtered.clear();
    }

    pub fn set_filtered(&mut self, filtered: Vec<DiseaseRecord>) {
        self.filtered = filtered;
    }

    pub fn all(&self) -> &[DiseaseRecord] {
        &self.all
    }

    pub fn filtered(&self) -> &[DiseaseRecord] {
        &self.filtered
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
