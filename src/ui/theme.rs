use crate::contrib::types::ContributionKind;
use ratatui::style::Color;

pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const BORDER: Color = Color::Rgb(55, 55, 75);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const INPUT_COLOR: Color = Color::Cyan;
pub const ERROR_FG: Color = Color::LightRed;
pub const WARN_FG: Color = Color::Yellow;
pub const SECTION_HEADER_FG: Color = Color::White;

pub fn kind_color(kind: ContributionKind) -> Color {
    match kind {
        ContributionKind::Issue => Color::Green,
        ContributionKind::PullRequest => Color::Magenta,
        ContributionKind::Commit => Color::Cyan,
        ContributionKind::Repository => Color::Yellow,
    }
}
