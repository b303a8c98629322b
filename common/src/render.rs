//! カード一覧と件数表示の描画

use crate::card::DiseaseCard;
use crate::config::ExplorerConfig;
use crate::surface::Surface;
use crate::types::DiseaseRecord;

pub const NO_RESULTS_TEXT: &str = "No results found matching your criteria.";

/// 一覧を描き直す。カード領域が無ければ何もせず `false`
///
/// 差分更新はせず、毎回すべてを置き換える。
pub fn render_diseases<S>(surface: &mut S, list: &[DiseaseRecord], config: &ExplorerConfig) -> bool
where
    S: Surface + ?Sized,
{
    let Some(container) = surface.cards() else {
        return false;
    };

    container.clear();

    if list.is_empty() {
        container.show_no_results(NO_RESULTS_TEXT);
        return true;
    }

    for record in list {
        container.append_card(&DiseaseCard::from_record(record, config));
    }
    true
}

/// 件数表示の文言
pub fn results_count_text(count: usize) -> String {
    format!("Showing {} results", count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemorySurface, Region};

    #[test]
    fn test_render_cards() {
        let mut surface = MemorySurface::full();
        let list = vec![
            DiseaseRecord::new("Wheat", "Rust", "Orange pustules"),
            DiseaseRecord::new("Corn", "Blight", "Grey lesions"),
        ];

        assert!(render_diseases(&mut surface, &list, &ExplorerConfig::default()));

        let cards = surface.rendered_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].disease_name, "Rust");
        assert_eq!(cards[1].crop_name, "Corn");
        assert!(surface.cards.as_ref().unwrap().no_results.is_none());
    }

    #[test]
    fn test_render_empty_shows_placeholder() {
        let mut surface = MemorySurface::full();
        assert!(render_diseases(&mut surface, &[], &ExplorerConfig::default()));

        let cards = surface.cards.as_ref().unwrap();
        assert!(cards.cards.is_empty());
        assert_eq!(cards.no_results.as_deref(), Some(NO_RESULTS_TEXT));
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut surface = MemorySurface::full();
        let config = ExplorerConfig::default();

        render_diseases(&mut surface, &[DiseaseRecord::new("Rice", "Blast", "")], &config);
        render_diseases(&mut surface, &[], &config);
        assert!(surface.rendered_cards().is_empty());

        render_diseases(&mut surface, &[DiseaseRecord::new("Rice", "Blast", "")], &config);
        let cards = surface.cards.as_ref().unwrap();
        assert_eq!(cards.cards.len(), 1);
        assert!(cards.no_results.is_none());
        assert_eq!(cards.clears, 3);
    }

    #[test]
    fn test_render_without_container_is_skipped() {
        let mut surface = MemorySurface::full().without(Region::Cards);
        assert!(!render_diseases(&mut surface, &[], &ExplorerConfig::default()));
    }

    #[test]
    fn test_results_count_text() {
        assert_eq!(results_count_text(0), "Showing 0 results");
        assert_eq!(results_count_text(1), "Showing 1 results");
        assert_eq!(results_count_text(12), "Showing 12 results");
    }
}
