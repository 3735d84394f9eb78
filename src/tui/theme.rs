use ratatui::style::{Color, Modifier, Style};

// Tile colours of the puzzle itself: green = right spot, yellow = wrong spot, grey = absent.
pub const BG: Color = Color::Rgb(18, 18, 19);
pub const SURFACE: Color = Color::Rgb(26, 26, 27);
pub const BORDER: Color = Color::Rgb(58, 58, 60);
pub const TEXT: Color = Color::Rgb(232, 232, 232);
pub const TEXT_DIM: Color = Color::Rgb(129, 131, 132);
pub const TILE_GREEN: Color = Color::Rgb(83, 141, 78);
pub const TILE_YELLOW: Color = Color::Rgb(181, 159, 59);
pub const TILE_GREY: Color = Color::Rgb(86, 87, 88);
pub const RED: Color = Color::Rgb(190, 80, 70);
pub const HIGHLIGHT: Color = Color::Rgb(44, 52, 44);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn green() -> Style {
    Style::default().fg(TILE_GREEN)
}

pub fn yellow() -> Style {
    Style::default().fg(TILE_YELLOW)
}

pub fn grey() -> Style {
    Style::default().fg(TILE_GREY)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn title() -> Style {
    green().add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default().bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}
