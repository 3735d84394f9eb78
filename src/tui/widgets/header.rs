use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_big_text::{BigText, PixelSize};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, scope_title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::green())
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(0)])
        .split(inner);

    let title = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::title())
        .lines(vec!["wordboard".into()])
        .build();
    frame.render_widget(title, columns[0]);

    let today = Utc::now().format("%A, %b %d, %Y").to_string();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(scope_title.to_string(), theme::yellow())),
        Line::from(Span::styled(today, theme::dim())),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Right);
    frame.render_widget(paragraph, columns[1]);
}
