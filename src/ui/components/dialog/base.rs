//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

impl<'a> Default for DialogConfig<'a> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// "Press Enter or Esc to dismiss"
pub fn dismiss_hint() -> Vec<Span<'static>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let dialog_area = dialog_rect(area, &config);
    let max_line_width = (config.max_width - PADDING) as usize;

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    // Build content
    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrap_text(config.message, max_line_width) {
        content.push(Line::from(line));
    }

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// 2 chars padding on each side
const PADDING: u16 = 4;

/// Size the dialog to its content and center it in `area`
fn dialog_rect(area: Rect, config: &DialogConfig) -> Rect {
    let max_line_width = (config.max_width - PADDING) as usize;
    let wrapped_lines = wrap_text(config.message, max_line_width);

    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|s| s.content.chars().count()).sum::<usize>())
        .unwrap_or(0);
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count())
        .max(hint_width) as u16;
    let dialog_width = (content_width + PADDING + 2)
        .min(config.max_width)
        .min(area.width); // +2 for borders

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (2 + wrapped_lines.len() as u16 + hint_lines + 2)
        .max(5)
        .min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wrap_text {
        use super::*;

        #[test]
        fn test_short_text_is_one_line() {
            assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
        }

        #[test]
        fn test_wraps_on_word_boundaries() {
            assert_eq!(
                wrap_text("one two three four", 9),
                vec!["one two", "three", "four"]
            );
        }

        #[test]
        fn test_keeps_explicit_newlines() {
            assert_eq!(wrap_text("a\n\nb", 40), vec!["a", "", "b"]);
        }

        #[test]
        fn test_long_word_is_not_split() {
            assert_eq!(wrap_text("abcdefghij", 4), vec!["abcdefghij"]);
        }

        #[test]
        fn test_empty_text_yields_one_empty_line() {
            assert_eq!(wrap_text("", 10), vec![String::new()]);
        }
    }

    mod dialog_rect {
        use super::*;

        #[test]
        fn test_is_centered() {
            let area = Rect::new(0, 0, 80, 24);
            let config = DialogConfig {
                title: "Title",
                message: "short",
                ..Default::default()
            };
            let rect = dialog_rect(area, &config);
            assert_eq!(rect.x, (80 - rect.width) / 2);
            assert_eq!(rect.y, (24 - rect.height) / 2);
        }

        #[test]
        fn test_fits_small_terminals() {
            let area = Rect::new(0, 0, 20, 4);
            let config = DialogConfig {
                message: "a message that is much longer than the terminal is wide",
                hint: Some(dismiss_hint()),
                ..Default::default()
            };
            let rect = dialog_rect(area, &config);
            assert!(rect.width <= area.width);
            assert!(rect.height <= area.height);
        }

        #[test]
        fn test_grows_for_hint() {
            let area = Rect::new(0, 0, 80, 24);
            let without = dialog_rect(
                area,
                &DialogConfig {
                    message: "x",
                    ..Default::default()
                },
            );
            let with = dialog_rect(
                area,
                &DialogConfig {
                    message: "x",
                    hint: Some(dismiss_hint()),
                    ..Default::default()
                },
            );
            assert_eq!(with.height, without.height + 2);
            assert!(with.width > without.width);
        }
    }
}
