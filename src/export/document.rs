use unicode_width::UnicodeWidthStr;

use crate::config::LIKE_EMOJI;
use crate::models::{Alignment, RenderInstruction};
use crate::utils::wrap_text;

const MIN_WIDTH: usize = 20;
/// Body lines plus the blank line and footer
const MIN_LINES_PER_PAGE: usize = 5;
/// Lines reserved at the bottom of each page for the footer
const FOOTER_LINES: usize = 2;

/// Page geometry in characters and lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: usize,
    pub lines_per_page: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self { width: 80, lines_per_page: 60 }
    }
}

impl PageLayout {
    pub fn new(width: usize, lines_per_page: usize) -> Self {
        Self { width: width.max(MIN_WIDTH), lines_per_page: lines_per_page.max(MIN_LINES_PER_PAGE) }
    }

    fn width(&self) -> usize {
        self.width.max(MIN_WIDTH)
    }

    fn body_lines(&self) -> usize {
        self.lines_per_page.max(MIN_LINES_PER_PAGE) - FOOTER_LINES
    }

    /// Bubbles take three quarters of the page width
    fn bubble_width(&self) -> usize {
        self.width() * 3 / 4
    }
}

/// One page of body lines; the footer is added when rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub lines: Vec<String>,
}

/// Lay out one message as a block of lines
fn message_block(instruction: &RenderInstruction, layout: &PageLayout) -> Vec<String> {
    let bubble_width = layout.bubble_width();
    let mut lines = Vec::new();

    if instruction.show_sender && !instruction.sender.is_empty() {
        lines.extend(wrap_text(&instruction.sender, layout.width()));
    }

    let content = if instruction.is_liked {
        format!("{} {}", instruction.content, LIKE_EMOJI)
    } else {
        instruction.content.clone()
    };
    lines.extend(wrap_text(&content, bubble_width).into_iter().map(|line| format!("  {}", line)));

    if !instruction.reactions.is_empty() {
        lines.extend(
            wrap_text(&instruction.reactions.join(" "), bubble_width)
                .into_iter()
                .map(|line| format!("  {}", line)),
        );
    }
    if !instruction.timestamp.is_empty() {
        lines.extend(
            wrap_text(&instruction.timestamp, bubble_width)
                .into_iter()
                .map(|line| format!("  {}", line)),
        );
    }

    if instruction.alignment == Alignment::Right {
        let width = layout.width();
        lines = lines.into_iter().map(|line| align_right(line.trim_start(), width)).collect();
    }

    lines
}

/// Pad `line` on the left so its display width reaches `width`.
///
/// Wide characters (emoji, CJK) take two columns, so padding by `char` count would
/// push them past the right edge.
fn align_right(line: &str, width: usize) -> String {
    let padding = width.saturating_sub(line.width());
    format!("{}{}", " ".repeat(padding), line)
}

fn flush(current: &mut Vec<String>, pages: &mut Vec<Page>) {
    pages.push(Page { number: pages.len() + 1, lines: std::mem::take(current) });
}

/// Split the conversation into pages.
///
/// Messages are separated by a blank line. A message that fits on one page is moved to
/// the next page rather than split; longer messages continue across pages. There is
/// always at least one page.
pub fn paginate(instructions: &[RenderInstruction], layout: &PageLayout) -> Vec<Page> {
    let capacity = layout.body_lines();
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for instruction in instructions {
        let block = message_block(instruction, layout);
        let needed = block.len() + usize::from(!current.is_empty());

        if !current.is_empty() && block.len() <= capacity && current.len() + needed > capacity {
            flush(&mut current, &mut pages);
        }
        // A separator that would fill the page leaves no room for the block
        if !current.is_empty() && current.len() + 1 >= capacity {
            flush(&mut current, &mut pages);
        }
        if !current.is_empty() {
            current.push(String::new());
        }
        for line in block {
            if current.len() >= capacity {
                flush(&mut current, &mut pages);
            }
            current.push(line);
        }
    }

    if !current.is_empty() || pages.is_empty() {
        flush(&mut current, &mut pages);
    }

    pages
}

/// Render pages as plain text with a `Page n of m` footer, separated by form feeds
pub fn render_text(pages: &[Page], layout: &PageLayout) -> String {
    let total = pages.len();
    let width = layout.width();

    pages
        .iter()
        .map(|page| {
            let mut text = page.lines.join("\n");
            let footer = format!("Page {} of {}", page.number, total);
            text.push_str("\n\n");
            text.push_str(format!("{:^width$}", footer).trim_end());
            text.push('\n');
            text
        })
        .collect::<Vec<_>>()
        .join("\x0c")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(index: usize, content: &str, alignment: Alignment) -> RenderInstruction {
        RenderInstruction {
            index,
            sender: "Alice".to_string(),
            content: content.to_string(),
            timestamp: "Jan 05, 2024 3:12 pm".to_string(),
            reactions: vec![],
            alignment,
            is_liked: false,
            show_sender: alignment == Alignment::Left,
        }
    }

    #[test]
    fn test_layout_clamps_minimums() {
        let layout = PageLayout::new(1, 1);
        assert_eq!(layout.width, MIN_WIDTH);
        assert_eq!(layout.lines_per_page, MIN_LINES_PER_PAGE);
    }

    #[test]
    fn test_message_block_left() {
        let mut inst = instruction(0, "Nice!", Alignment::Left);
        inst.is_liked = true;
        inst.reactions = vec!["😂 Bob".to_string(), "👍 Carol".to_string()];

        let block = message_block(&inst, &PageLayout::default());

        assert_eq!(
            block,
            vec!["Alice", "  Nice! ❤️", "  😂 Bob 👍 Carol", "  Jan 05, 2024 3:12 pm"]
        );
    }

    #[test]
    fn test_message_block_right_is_padded_without_sender() {
        let layout = PageLayout::new(40, 20);
        let block = message_block(&instruction(0, "mine", Alignment::Right), &layout);

        assert_eq!(block.len(), 2);
        assert!(block.iter().all(|line| line.chars().count() == 40));
        assert!(block[0].ends_with("mine"));
        assert!(!block.iter().any(|line| line.contains("Alice")));
    }

    #[test]
    fn test_paginate_empty_conversation_has_one_page() {
        let pages = paginate(&[], &PageLayout::default());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[test]
    fn test_paginate_keeps_blocks_together() {
        // 10 lines per page -> 8 body lines; each block is 3 lines
        let layout = PageLayout::new(40, 10);
        let instructions: Vec<_> =
            (0..3).map(|i| instruction(i, &format!("msg {}", i), Alignment::Left)).collect();

        let pages = paginate(&instructions, &layout);

        // 3 + 1 + 3 = 7 lines fit, the third block moves to page 2
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 7);
        assert_eq!(pages[1].lines[0], "Alice");
        assert_eq!(pages[1].number, 2);
    }

    #[test]
    fn test_paginate_splits_oversized_block() {
        let layout = PageLayout::new(20, 6); // 4 body lines, bubble width 15
        let long = "word ".repeat(20);

        let pages = paginate(&[instruction(0, &long, Alignment::Left)], &layout);

        assert!(pages.len() > 1);
        assert!(pages.iter().all(|page| page.lines.len() <= 4));
    }

    #[test]
    fn test_paginate_oversized_block_after_full_page() {
        let layout = PageLayout::new(20, 6); // 4 body lines
        // Sender plus three content lines exactly fills the page
        let mut full = instruction(0, "a\nb\nc", Alignment::Left);
        full.timestamp = String::new();
        let long = instruction(1, &"word ".repeat(20), Alignment::Left);

        let pages = paginate(&[full, long], &layout);

        assert_eq!(pages[0].lines, vec!["Alice", "  a", "  b", "  c"]);
        assert!(pages.len() > 2);
        assert!(pages.iter().all(|page| page.lines.len() <= 4));
        // The long block starts on a fresh page with no leading separator
        assert_eq!(pages[1].lines[0], "Alice");
    }

    #[test]
    fn test_paginate_never_ends_page_with_separator_only_room() {
        let layout = PageLayout::new(20, 6); // 4 body lines
        let three = instruction(0, "x", Alignment::Left); // 3 lines
        let long = instruction(1, &"word ".repeat(20), Alignment::Left);

        let pages = paginate(&[three, long], &layout);

        assert!(pages.iter().all(|page| page.lines.len() <= 4));
        assert!(pages.iter().all(|page| page.lines.last().is_none_or(|line| !line.is_empty())));
    }

    #[test]
    fn test_right_alignment_uses_display_width() {
        let layout = PageLayout::new(40, 20);
        let mut inst = instruction(0, "寿司 🍣 tonight", Alignment::Right);
        inst.timestamp = "Jan 05, 2024 3:12 pm".to_string();

        let block = message_block(&inst, &layout);

        assert!(block.iter().all(|line| line.width() == 40));
        assert!(block[0].ends_with("寿司 🍣 tonight"));
    }

    #[test]
    fn test_long_sender_and_timestamp_are_wrapped() {
        let layout = PageLayout::new(20, 20); // bubble width 15
        let mut inst = instruction(0, "hi", Alignment::Left);
        inst.sender = "Bartholomew Maximilian Fitzgerald".to_string();
        inst.timestamp = "Wednesday, January 05, 2024 3:12 pm".to_string();

        let block = message_block(&inst, &layout);

        assert!(block.iter().all(|line| line.chars().count() <= 20));
        assert!(block.len() > 4);
    }

    #[test]
    fn test_render_text_footers_and_form_feeds() {
        let layout = PageLayout::new(40, 10);
        let instructions: Vec<_> =
            (0..3).map(|i| instruction(i, &format!("msg {}", i), Alignment::Left)).collect();
        let pages = paginate(&instructions, &layout);

        let text = render_text(&pages, &layout);

        assert_eq!(text.matches('\x0c').count(), 1);
        assert!(text.contains("Page 1 of 2"));
        assert!(text.contains("Page 2 of 2"));
    }
}
