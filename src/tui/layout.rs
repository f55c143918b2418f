use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Stacked layout:
/// - Search bar: 3 rows (bordered)
/// - Conversation: remaining rows (bordered)
/// - Status bar: bottom row
pub struct AppLayout {
    pub search_area: Rect,
    pub conversation_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self { search_area: chunks[0], conversation_area: chunks[1], status_area: chunks[2] }
    }

    /// Conversation area without its border
    pub fn conversation_inner(&self) -> Rect {
        self.conversation_area.inner(Margin::new(1, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_areas() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));

        assert_eq!(layout.search_area.height, 3);
        assert_eq!(layout.search_area.y, 0);
        assert_eq!(layout.conversation_area.y, 3);
        assert_eq!(layout.conversation_area.height, 26);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);
        assert_eq!(layout.conversation_area.width, 100);
    }

    #[test]
    fn test_conversation_inner_strips_border() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        let inner = layout.conversation_inner();

        assert_eq!(inner.width, 98);
        assert_eq!(inner.height, 24);
        assert_eq!(inner.y, 4);
    }
}
