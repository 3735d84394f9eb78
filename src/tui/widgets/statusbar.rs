use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, message: Option<&str>) {
    let hints = [
        ("[Tab]", " all time / week  "),
        ("[↑ ↓]", " select  "),
        ("[r]", " reload  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let mut spans = Vec::new();
    if let Some(msg) = message {
        spans.push(Span::styled(format!("{}  ", msg), theme::red()));
    }
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::green()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
