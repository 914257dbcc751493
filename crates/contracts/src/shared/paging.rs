use serde::{Deserialize, Serialize};

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Текущая страница списка (нумерация с 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    index: u32,
    size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            index: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    /// Нулевые значения заменяются значениями по умолчанию
    pub fn new(index: u32, size: u32) -> Self {
        Self {
            index: index.max(1),
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
        }
    }

    pub fn first(size: u32) -> Self {
        Self::new(1, size)
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Переход на другую страницу того же размера
    pub fn with_index(self, index: u32) -> Self {
        Self::new(index, self.size)
    }

    /// Смена размера страницы всегда возвращает на первую страницу:
    /// старое смещение для нового размера не имеет смысла.
    pub fn with_size(self, size: u32) -> Self {
        Self::first(size)
    }

    /// Зажимает номер страницы в `[1, total_pages]`
    pub fn clamped(self, total_pages: u32) -> Self {
        Self::new(self.index.min(total_pages.max(1)), self.size)
    }
}

/// ceil(total / page_size)
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_change_resets_index() {
        let page = Page::new(7, 10);
        let resized = page.with_size(50);
        assert_eq!(resized.index(), 1);
        assert_eq!(resized.size(), 50);

        // Даже тот же размер сбрасывает смещение
        assert_eq!(Page::new(3, 20).with_size(20).index(), 1);
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let page = Page::new(0, 0);
        assert_eq!(page, Page::default());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(2, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(500, 10), 50);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Page::new(9, 10).clamped(4).index(), 4);
        assert_eq!(Page::new(2, 10).clamped(0).index(), 1);
        assert_eq!(Page::new(2, 10).clamped(5).index(), 2);
    }
}
