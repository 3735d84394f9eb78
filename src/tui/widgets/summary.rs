use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::GlobalSummary;
use crate::tui::theme;
use crate::utils::format::{format_average, format_rate, format_score};

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", label), theme::dim()),
        Span::styled(value, theme::bold()),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, summary: &GlobalSummary) {
    let block = Block::default()
        .title(Span::styled(" Overview ", theme::green()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![
        row("Players", summary.total_players.to_string()),
        row(
            "Games",
            format!("{} ({} ✓, {} ✗)", summary.total_games, summary.wins, summary.losses),
        ),
        row("Success rate", format_rate(summary.overall_win_rate)),
        row("Average", format_average(summary.overall_average)),
    ];
    if summary.best_ever.is_some() {
        lines.push(row("Best ever", format_score(summary.best_ever)));
    }

    if let Some(recent) = &summary.recent {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Recent  ", theme::dim()),
            Span::styled(
                format!("{} games · {} players", recent.games, recent.active_players),
                theme::yellow(),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  since {}", recent.since.format("%b %-d")),
            theme::dim(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
