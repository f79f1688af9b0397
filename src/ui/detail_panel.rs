use crate::contrib::types::Contribution;
use crate::ui::{centered_rect, format_time_ago, theme};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

pub struct DetailPanel<'a> {
    pub contribution: &'a Contribution,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = centered_rect(70, 50, area);
        if popup.height < 3 || popup.width < 12 {
            return;
        }
        Clear.render(popup, buf);

        let c = self.contribution;
        let block = Block::default()
            .title(format!(" {} ", c.kind.section_title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::kind_color(c.kind)));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.width == 0 {
            return;
        }

        let label_style = Style::default().fg(theme::ACCENT);
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![
            Span::styled("Repo ", label_style),
            Span::raw(c.repo.clone()),
        ]));

        lines.push(Line::from(vec![
            Span::styled("Date ", label_style),
            Span::raw(format!(
                "{} ({})",
                c.date.format("%Y-%m-%d %H:%M UTC"),
                format_time_ago(&c.date)
            )),
        ]));

        if let Some(url) = &c.url {
            lines.push(Line::from(vec![
                Span::styled("Link ", label_style),
                Span::styled(url.clone(), Style::default().fg(theme::INPUT_COLOR)),
            ]));
        }

        lines.push(Line::from(""));
        let text = c.title.as_deref().or(c.message.as_deref()).unwrap_or(&c.repo);
        for part in text.lines() {
            lines.push(Line::from(Span::raw(part.to_string())));
        }

        for (i, line) in lines.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            buf.set_line(inner.x + 1, inner.y + i as u16, line, inner.width.saturating_sub(1));
        }
    }
}
