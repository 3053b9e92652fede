//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Cell, Position, Status, winning_line};

use super::app::{App, Focus};

const HELP: &str = concat!(
    "arrows move · enter places/jumps · 1-9 place · ",
    "tab history · r restart · q quit"
);

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_board(frame, panels[0], app);
    draw_history(frame, panels[1], app);

    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel(" Board ", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = app.view();
    let winning = winning_line(app.game().current_board());
    let show_cursor = app.board_active();

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let index = row * 3 + col;
            let position = Position::from_index(index);
            let highlighted =
                winning.is_some_and(|line| position.is_some_and(|p| line.contains(&p)));
            let under_cursor = show_cursor && position == Some(app.cursor());
            spans.push(cell_span(view.cells[index], index, highlighted, under_cursor));
        }
        lines.push(Line::from(spans));
    }

    let board_area = center_rect(inner, 11, 5);
    frame.render_widget(Paragraph::new(lines), board_area);
}

fn cell_span(cell: Cell, index: usize, highlighted: bool, under_cursor: bool) -> Span<'static> {
    let (text, mut style) = match cell {
        Cell::Empty => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
        Cell::X => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if highlighted {
        style = style.fg(Color::Green);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(text, style)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = app
        .moves()
        .into_iter()
        .map(|entry| {
            let mut text = entry.label;
            if let Some((player, position)) = entry.placed {
                text.push_str(&format!("  {} {}", player, position));
            }
            let style = if entry.current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(panel(" History ", focused))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black))
        .highlight_symbol("> ");

    let selected = if focused { app.selected() } else { app.game().current_move() };
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let text = match app.message() {
        Some(message) => format!("{}  ·  {}", status, message),
        None => status.to_string(),
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_tictactoe::DrawPolicy;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_initial_status_and_history() {
        let screen = render(&App::new(DrawPolicy::Report));
        assert!(screen.contains("Rewind - Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to start"));
    }

    #[test]
    fn test_renders_winner_and_moves() {
        let mut app = App::new(DrawPolicy::Report);
        for index in [0, 1, 4, 2, 8] {
            app.handle(Action::PlaceAt(index));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5"));
    }
}
