use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::stats::{Leaderboard, Scope};
use crate::tui::theme;
use crate::utils::format::{format_average, format_ranking_score, format_rate, medal, truncate_name};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    board: &Leaderboard,
    selected: usize,
    name_width: usize,
) {
    let block = Block::default()
        .title(Span::styled(" Rankings ", theme::green()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    if board.is_empty() {
        let msg = match board.scope {
            Scope::AllTime => "No games recorded yet! Send a Wordle score to get started.",
            Scope::Week { .. } => "No games this week yet.",
        };
        let text = vec![Line::from(""), Line::from(Span::styled(format!("  {}", msg), theme::dim()))];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let header = Row::new(["", "Player", "Games", "W / L", "Win %", "Avg", "Streak", "Score"])
        .style(theme::bold());

    let rows: Vec<Row> = board
        .players
        .iter()
        .map(|p| {
            let rank_style = match p.rank {
                1 => theme::green(),
                2 | 3 => theme::yellow(),
                _ => theme::grey(),
            };
            Row::new(vec![
                Cell::from(Span::styled(medal(p.rank), rank_style)),
                Cell::from(truncate_name(&p.player, name_width)),
                Cell::from(p.total_games.to_string()),
                Cell::from(format!("{} / {}", p.wins, p.losses)),
                Cell::from(format_rate(p.win_rate)),
                Cell::from(format_average(p.average_attempts)),
                Cell::from(format!("{} ({})", p.current_streak, p.max_streak)),
                Cell::from(Span::styled(format_ranking_score(p.ranking_score), theme::bold())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(name_width as u16 + 1),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Min(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}
