//! インクリメンタル描画（無限スクロール）
//!
//! カーソルは「これまでに描画した件数」。新しい検索で0に戻り、
//! 描画のたびにバッチサイズ分進む（件数で頭打ちにしない）。

/// 描画済み件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderCursor(usize);

impl RenderCursor {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn position(&self) -> usize {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// `len` 件中、まだ描画していないものが残っているか
    pub fn has_remaining(&self, len: usize) -> bool {
        self.0 < len
    }
}

/// 次のバッチを切り出す
///
/// # Returns
/// (進めたカーソル, 追加する要素)。カーソルが末尾を超えていれば空スライス
pub fn render_next_batch<T>(items: &[T], cursor: RenderCursor, batch_size: usize) -> (RenderCursor, &[T]) {
    let start = cursor.0.min(items.len());
    let end = cursor.0.saturating_add(batch_size).min(items.len());
    (RenderCursor(cursor.0.saturating_add(batch_size)), &items[start..end])
}

/// スクロール位置（ブラウザの window / body から取得する値）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// 下端から `threshold` 以内までスクロールしているか
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batches_cover_all_items_once() {
        for n in 0..40usize {
            let items: Vec<usize> = (0..n).collect();
            let mut cursor = RenderCursor::new();
            let mut rendered = Vec::new();
            let mut batches = 0;

            while cursor.has_remaining(items.len()) {
                let (next, batch) = render_next_batch(&items, cursor, 6);
                assert!(!batch.is_empty());
                rendered.extend_from_slice(batch);
                cursor = next;
                batches += 1;
            }

            assert_eq!(batches, n.div_ceil(6), "n = {}", n);
            assert_eq!(rendered, items, "n = {}", n);
        }
    }

    #[test]
    fn test_cursor_is_not_clamped() {
        let items = vec!['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
        let (cursor, batch) = render_next_batch(&items, RenderCursor::new(), 6);
        assert_eq!(batch.len(), 6);

        let (cursor, batch) = render_next_batch(&items, cursor, 6);
        assert_eq!(batch, &['g', 'h']);
        assert_eq!(cursor.position(), 12);
        assert!(!cursor.has_remaining(items.len()));

        // 末尾を超えたカーソルは常に空
        let (cursor, batch) = render_next_batch(&items, cursor, 6);
        assert!(batch.is_empty());
        assert_eq!(cursor.position(), 18);
    }

    #[test]
    fn test_reset() {
        let mut cursor = RenderCursor(12);
        cursor.reset();
        assert_eq!(cursor, RenderCursor::new());
    }

    #[test]
    fn test_near_bottom() {
        let metrics = ScrollMetrics {
            viewport_height: 800.0,
            scroll_y: 1200.0,
            document_height: 2500.0,
        };
        assert!(metrics.near_bottom(500.0));

        let metrics = ScrollMetrics { scroll_y: 1199.0, ..metrics };
        assert!(!metrics.near_bottom(500.0));
    }
}
