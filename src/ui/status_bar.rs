use crate::ui::input::InputMode;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub mode_tabs: &'a [(&'a str, bool)],
    pub account: &'a str,
    pub last_sync: &'a str,
    pub rate_limit: Option<u32>,
    pub input_mode: InputMode,
    pub input_text: &'a str,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        if self.input_mode.is_editing() {
            let line = Line::from(vec![
                Span::styled(
                    " @",
                    Style::default()
                        .fg(theme::INPUT_COLOR)
                        .bg(theme::STATUS_BG)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.input_text.to_string(),
                    Style::default().bg(theme::STATUS_BG),
                ),
                Span::styled(
                    "\u{258c}",
                    Style::default().fg(theme::INPUT_COLOR).bg(theme::STATUS_BG),
                ),
            ]);
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let mut spans = Vec::new();

        spans.push(Span::styled(" ", Style::default().bg(theme::STATUS_BG)));
        for (name, is_active) in self.mode_tabs {
            let style = if *is_active {
                Style::default()
                    .fg(theme::INPUT_COLOR)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG)
            };
            spans.push(Span::styled(format!("[{name}]"), style));
            spans.push(Span::styled(" ", Style::default().bg(theme::STATUS_BG)));
        }

        spans.push(Span::styled(
            "\u{2502}",
            Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
        ));
        spans.push(Span::styled(
            format!(" @{} ", self.account),
            Style::default().bg(theme::STATUS_BG),
        ));

        spans.push(Span::styled(
            "\u{2502}",
            Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
        ));
        spans.push(Span::styled(
            format!(" synced: {} ", self.last_sync),
            Style::default().bg(theme::STATUS_BG),
        ));

        if let Some(remaining) = self.rate_limit {
            spans.push(Span::styled(
                "\u{2502}",
                Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
            ));
            spans.push(Span::styled(
                format!(" API: {remaining} "),
                Style::default().bg(theme::STATUS_BG),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
