//! Окно пагинации: какие номера страниц и где разрывы показывать под таблицей.

/// Элемент окна пагинации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    /// Разрыв ("...") между несмежными номерами
    Gap,
}

/// Строит окно для `current` из `total_pages` с `siblings` соседями с каждой стороны.
///
/// Первая и последняя страницы видны всегда. Пока страниц не больше
/// `2 * siblings + 3`, показываются все. `current` зажимается в
/// `[1, total_pages]`; при `total_pages == 0` окно пустое.
pub fn pagination_window(current: u32, total_pages: u32, siblings: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let window_size = siblings.saturating_mul(2).saturating_add(3);

    if total_pages <= window_size {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let left = current.saturating_sub(siblings).max(1);
    let right = current.saturating_add(siblings).min(total_pages);

    let show_left_gap = left > 2;
    let show_right_gap = right < total_pages - 1;

    // Сколько номеров в "длинном" краю окна
    let edge_count = siblings * 2 + 1;

    match (show_left_gap, show_right_gap) {
        (false, true) => (1..=edge_count)
            .map(PageItem::Page)
            .chain([PageItem::Gap, PageItem::Page(total_pages)])
            .collect(),
        (true, false) => [PageItem::Page(1), PageItem::Gap]
            .into_iter()
            .chain((total_pages - edge_count + 1..=total_pages).map(PageItem::Page))
            .collect(),
        (true, true) => [PageItem::Page(1), PageItem::Gap]
            .into_iter()
            .chain((left..=right).map(PageItem::Page))
            .chain([PageItem::Gap, PageItem::Page(total_pages)])
            .collect(),
        // При total_pages > window_size сюда не попасть
        (false, false) => (1..=total_pages).map(PageItem::Page).collect(),
    }
}

/// Можно ли вообще листать
pub fn navigation_enabled(total_pages: u32) -> bool {
    total_pages > 1
}

/// Текст рядом с кнопками: "Page 2 / 5 (47)", для пустого результата
/// "Aucun résultat"
pub fn pagination_summary(current: u32, total_pages: u32, total_count: u64) -> String {
    if total_pages == 0 {
        return "Aucun résultat".to_string();
    }
    let page = current.clamp(1, total_pages);
    format!("Page {} / {} ({})", page, total_pages, total_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use PageItem::{Gap, Page as P};

    #[test]
    fn test_empty_when_no_pages() {
        assert_eq!(pagination_window(1, 0, 1), vec![]);
        assert_eq!(pagination_window(7, 0, 1), vec![]);
        assert!(!navigation_enabled(0));
    }

    #[test]
    fn test_summary_of_empty_result() {
        assert_eq!(pagination_summary(1, 0, 0), "Aucun résultat");
        assert_eq!(pagination_summary(3, 0, 0), "Aucun résultat");
    }

    #[test]
    fn test_summary_clamps_page() {
        assert_eq!(pagination_summary(2, 5, 47), "Page 2 / 5 (47)");
        assert_eq!(pagination_summary(9, 5, 47), "Page 5 / 5 (47)");
        assert_eq!(pagination_summary(1, 1, 3), "Page 1 / 1 (3)");
    }

    #[test]
    fn test_single_page() {
        assert_eq!(pagination_window(1, 1, 1), vec![P(1)]);
        assert!(!navigation_enabled(1));
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(pagination_window(2, 4, 1), vec![P(1), P(2), P(3), P(4)]);
        assert_eq!(
            pagination_window(3, 5, 1),
            vec![P(1), P(2), P(3), P(4), P(5)]
        );
    }

    #[test]
    fn test_right_gap_only() {
        assert_eq!(
            pagination_window(1, 50, 1),
            vec![P(1), P(2), P(3), Gap, P(50)]
        );
        assert_eq!(
            pagination_window(2, 6, 1),
            vec![P(1), P(2), P(3), Gap, P(6)]
        );
    }

    #[test]
    fn test_left_gap_only() {
        assert_eq!(
            pagination_window(50, 50, 1),
            vec![P(1), Gap, P(48), P(49), P(50)]
        );
        assert_eq!(
            pagination_window(5, 6, 1),
            vec![P(1), Gap, P(4), P(5), P(6)]
        );
    }

    #[test]
    fn test_both_gaps() {
        assert_eq!(
            pagination_window(25, 50, 1),
            vec![P(1), Gap, P(24), P(25), P(26), Gap, P(50)]
        );
        assert_eq!(
            pagination_window(10, 50, 2),
            vec![P(1), Gap, P(8), P(9), P(10), P(11), P(12), Gap, P(50)]
        );
    }

    #[test]
    fn test_current_is_clamped() {
        assert_eq!(pagination_window(0, 50, 1), pagination_window(1, 50, 1));
        assert_eq!(pagination_window(99, 50, 1), pagination_window(50, 50, 1));
    }

    #[test]
    fn test_zero_siblings_keeps_edges() {
        // Без соседей текущая страница у края может уйти в разрыв
        assert_eq!(pagination_window(2, 4, 0), vec![P(1), Gap, P(4)]);
        assert_eq!(pagination_window(3, 6, 0), vec![P(1), Gap, P(3), Gap, P(6)]);
    }

    fn pages(items: &[PageItem]) -> Vec<u32> {
        items
            .iter()
            .filter_map(|i| match i {
                P(n) => Some(*n),
                Gap => None,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_window_is_well_formed(
            total in proptest::sample::select(vec![0u32, 1, 4, 5, 6, 50]),
            current in 0u32..60,
            siblings in 0u32..4,
        ) {
            let window = pagination_window(current, total, siblings);

            if total == 0 {
                prop_assert!(window.is_empty());
                return Ok(());
            }

            let numbers = pages(&window);
            prop_assert!(numbers.iter().all(|n| (1..=total).contains(n)));
            prop_assert_eq!(numbers.first().copied(), Some(1));
            prop_assert_eq!(numbers.last().copied(), Some(total));
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));

            for (i, item) in window.iter().enumerate() {
                if *item == Gap {
                    // Разрыв никогда не стоит с краю и не соседствует с другим разрывом
                    prop_assert!(i > 0 && i + 1 < window.len());
                    match (window[i - 1], window[i + 1]) {
                        (P(before), P(after)) => prop_assert!(after - before >= 2),
                        _ => prop_assert!(false, "adjacent gaps in {:?}", window),
                    }
                }
            }

            if siblings >= 1 {
                let clamped = current.clamp(1, total);
                prop_assert!(numbers.contains(&clamped));
            }
        }
    }
}
