use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::{MAX_ATTEMPTS, PlayerStatistics};
use crate::tui::theme;
use crate::utils::format::{Performance, format_average, format_score, progress_bar};

const BAR_WIDTH: usize = 14;

pub fn render(frame: &mut Frame, area: Rect, player: Option<&PlayerStatistics>, show_distribution: bool) {
    let title = player
        .map(|p| format!(" {} ", p.player))
        .unwrap_or_else(|| " Player ".to_string());
    let block = Block::default()
        .title(Span::styled(title, theme::green()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let Some(p) = player else {
        let text = vec![Line::from(""), Line::from(Span::styled("  No player selected", theme::dim()))];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("  Streak  ", theme::dim()),
            Span::styled(
                format!("{} current", p.current_streak),
                theme::green().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ·  {} best", p.max_streak), theme::dim()),
        ]),
        Line::from(vec![
            Span::styled("  Best / worst  ", theme::dim()),
            Span::styled(
                format!("{} / {}", format_score(p.best_score), format_score(p.worst_score)),
                theme::bold(),
            ),
            Span::styled(format!("  ·  avg {}", format_average(p.average_attempts)), theme::dim()),
        ]),
        Line::from(""),
    ];

    if show_distribution {
        let peak = p.attempt_distribution.iter().copied().max().unwrap_or(0);
        for attempts in 1..=MAX_ATTEMPTS {
            let count = p.wins_in(attempts);
            let style = if count > 0 && count == peak {
                theme::green()
            } else {
                theme::grey()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", attempts), theme::dim()),
                Span::styled(progress_bar(count, peak, BAR_WIDTH), style),
                Span::styled(format!(" {}", count), theme::dim()),
            ]));
        }
        if p.losses > 0 {
            lines.push(Line::from(vec![
                Span::styled("  X ", theme::dim()),
                Span::styled(format!("{} failed", p.losses), theme::red()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", Performance::assess(p).message()),
        theme::yellow(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
