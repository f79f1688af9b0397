use crate::data_source::FetchMode;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct HeaderBar<'a> {
    pub account: &'a str,
    pub mode: FetchMode,
    pub total: usize,
    pub loading: bool,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span<'static>> = Vec::new();

        spans.push(Span::styled(
            " tally",
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ));

        spans.push(Span::styled(
            " \u{2503} ",
            Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
        ));

        spans.push(Span::styled(
            format!("@{}", self.account),
            Style::default()
                .fg(theme::SECTION_HEADER_FG)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ));

        spans.push(Span::styled(
            " \u{2503} ",
            Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
        ));

        let summary = if self.loading {
            "fetching...".to_string()
        } else {
            format!("{} {}", self.total, self.mode.label())
        };
        spans.push(Span::styled(
            summary,
            Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
        ));

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
