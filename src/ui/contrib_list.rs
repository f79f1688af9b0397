use crate::contrib::group::Grouped;
use crate::contrib::types::{Contribution, ContributionKind};
use crate::data_source::FetchMode;
use crate::ui::{format_time_short, theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow {
    Section { kind: ContributionKind, count: usize },
    Item(Contribution),
    Notice(&'static str),
    Blank,
}

/// Flattens the grouped result into render rows. The events view always
/// shows the three fixed categories, an empty one with its notice line;
/// the repos view shows groups in first-occurrence order. An entirely
/// empty result renders a single placeholder, suppressed while a fetch is
/// in flight.
pub fn build_rows(grouped: &Grouped, mode: FetchMode, loading: bool) -> Vec<DisplayRow> {
    if grouped.is_empty() {
        if loading {
            return Vec::new();
        }
        return vec![DisplayRow::Notice("No contributions found yet.")];
    }

    let mut rows = Vec::new();
    match mode {
        FetchMode::Events => {
            for kind in ContributionKind::EVENT_KINDS {
                push_section(&mut rows, kind, grouped.get(kind));
            }
        }
        FetchMode::Repos => {
            for (kind, items) in grouped.iter() {
                push_section(&mut rows, kind, items);
            }
        }
    }
    rows
}

fn push_section(rows: &mut Vec<DisplayRow>, kind: ContributionKind, items: &[Contribution]) {
    if !rows.is_empty() {
        rows.push(DisplayRow::Blank);
    }
    rows.push(DisplayRow::Section {
        kind,
        count: items.len(),
    });
    if items.is_empty() {
        rows.push(DisplayRow::Notice(kind.empty_notice()));
    } else {
        rows.extend(items.iter().cloned().map(DisplayRow::Item));
    }
}

pub struct ContribList<'a> {
    pub rows: &'a [DisplayRow],
    pub selected: usize,
    pub scroll: usize,
    pub loading: bool,
}

impl<'a> Widget for ContribList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let title = if self.loading {
            " Contributions (fetching...) "
        } else {
            " Contributions "
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = inner.height as usize;
        for (i, row) in self.rows.iter().skip(self.scroll).take(visible).enumerate() {
            let y = inner.y + i as u16;
            let abs_idx = self.scroll + i;
            let is_selected = abs_idx == self.selected;

            let line = row_line(row, is_selected, inner.width as usize);
            buf.set_line(inner.x, y, &line, inner.width);

            if is_selected {
                for x in inner.x..(inner.x + inner.width) {
                    buf[(x, y)].set_style(Style::default().bg(theme::SELECTED_BG));
                }
            }
        }
    }
}

fn row_line(row: &DisplayRow, selected: bool, width: usize) -> Line<'static> {
    match row {
        DisplayRow::Blank => Line::from(""),
        DisplayRow::Notice(text) => Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(theme::DIM_TEXT),
        )),
        DisplayRow::Section { kind, count } => Line::from(Span::styled(
            format!("{} ({count})", kind.section_title()),
            Style::default()
                .fg(theme::kind_color(*kind))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        DisplayRow::Item(c) => Line::from(item_spans(c, selected, width)),
    }
}

fn item_spans(c: &Contribution, selected: bool, total_budget: usize) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    if selected {
        spans.push(Span::styled(
            "\u{258e} ",
            Style::default().fg(theme::ACCENT).bg(theme::SELECTED_BG),
        ));
    } else {
        spans.push(Span::raw("  "));
    }

    let time_str = format_time_short(&c.date);
    let time_w = UnicodeWidthStr::width(time_str.as_str());
    let mut budget = total_budget.saturating_sub(2 + time_w + 1);

    let repo_str = format!(" {}", c.repo);
    let repo_w = UnicodeWidthStr::width(repo_str.as_str());
    let title_budget = if budget > repo_w + 5 {
        budget - repo_w
    } else {
        budget
    };

    let title = truncate_with_ellipsis(c.display_title(), title_budget);
    let title_w = UnicodeWidthStr::width(title.as_str());
    let title_style = if selected {
        Style::default().bg(theme::SELECTED_BG)
    } else {
        Style::default()
    };
    spans.push(Span::styled(title, title_style));
    budget = budget.saturating_sub(title_w);

    if budget >= repo_w {
        let style = if selected {
            Style::default().fg(theme::DIM_TEXT).bg(theme::SELECTED_BG)
        } else {
            Style::default().fg(theme::DIM_TEXT)
        };
        spans.push(Span::styled(repo_str, style));
    }

    let current_w: usize = spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum();
    let remaining = total_budget.saturating_sub(current_w);
    if remaining > time_w {
        let padding = remaining - time_w;
        if padding > 0 {
            let pad_style = if selected {
                Style::default().bg(theme::SELECTED_BG)
            } else {
                Style::default()
            };
            spans.push(Span::styled(" ".repeat(padding), pad_style));
        }
        let time_style = if selected {
            Style::default().fg(theme::DIM_TEXT).bg(theme::SELECTED_BG)
        } else {
            Style::default().fg(theme::DIM_TEXT)
        };
        spans.push(Span::styled(time_str, time_style));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrib::group::group_by_kind;
    use crate::test_utils::make_contribution;
    use ContributionKind::{Commit, Issue, PullRequest, Repository};

    #[test]
    fn empty_result_shows_single_placeholder() {
        let grouped = group_by_kind(Vec::new());
        let rows = build_rows(&grouped, FetchMode::Events, false);
        assert_eq!(rows, vec![DisplayRow::Notice("No contributions found yet.")]);
    }

    #[test]
    fn empty_result_while_loading_shows_nothing() {
        let grouped = group_by_kind(Vec::new());
        assert!(build_rows(&grouped, FetchMode::Events, true).is_empty());
    }

    #[test]
    fn events_view_always_shows_three_sections() {
        let grouped = group_by_kind(vec![make_contribution(Issue, "o/a")]);
        let rows = build_rows(&grouped, FetchMode::Events, false);

        let sections: Vec<_> = rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Section { kind, count } => Some((*kind, *count)),
                _ => None,
            })
            .collect();
        assert_eq!(sections, vec![(Issue, 1), (PullRequest, 0), (Commit, 0)]);

        // empty categories carry their notice line
        assert!(rows.contains(&DisplayRow::Notice("No commits found.")));
        assert!(rows.contains(&DisplayRow::Notice("No pull requests found.")));
    }

    #[test]
    fn repos_view_shows_groups_in_encounter_order() {
        let grouped = group_by_kind(vec![
            make_contribution(Repository, "o/a"),
            make_contribution(Repository, "o/b"),
        ]);
        let rows = build_rows(&grouped, FetchMode::Repos, false);

        assert_eq!(
            rows[0],
            DisplayRow::Section {
                kind: Repository,
                count: 2
            }
        );
        assert_eq!(
            rows.iter()
                .filter(|r| matches!(r, DisplayRow::Item(_)))
                .count(),
            2
        );
    }

    #[test]
    fn items_keep_group_input_order() {
        let grouped = group_by_kind(vec![
            make_contribution(Commit, "o/first"),
            make_contribution(Commit, "o/second"),
        ]);
        let rows = build_rows(&grouped, FetchMode::Events, false);
        let repos: Vec<_> = rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Item(c) => Some(c.repo.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(repos, vec!["o/first", "o/second"]);
    }
}
