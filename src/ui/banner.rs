// Winner box drawn over the field while the match-over pause runs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::Player;

#[derive(Debug, Clone, PartialEq)]
pub struct WinnerBanner {
    pub winner: Player,
    pub title: &'static str,
    pub accent: Color,
}

impl WinnerBanner {
    pub fn new(winner: Player, title: &'static str, accent: Color) -> Self {
        Self {
            winner,
            title,
            accent,
        }
    }

    pub fn message(&self) -> String {
        format!("{} is the winner!", self.winner.display_name())
    }
}

/// A `width` x `height` box in the middle of `area`, shrunk if it does not fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_winner(frame: &mut Frame, banner: &WinnerBanner, area: Rect) {
    let message = banner.message();
    // one border cell and one space either side; border rows above and below
    let width = message.chars().count() as u16 + 4;
    let boxed = centered(area, width.max(banner.title.len() as u16 + 4), 3);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", banner.title))
        .border_style(Style::default().fg(banner.accent))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(Clear, boxed);
    frame.render_widget(text, boxed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_centered_box() {
        let area = Rect::new(0, 0, 40, 11);
        assert_eq!(centered(area, 20, 3), Rect::new(10, 4, 20, 3));
        // too big: clipped to the area
        assert_eq!(centered(area, 60, 20), area);
    }

    #[test]
    fn test_banner_draws_winner_line() {
        let mut terminal = Terminal::new(TestBackend::new(40, 9)).unwrap();
        let banner = WinnerBanner::new(Player::Right, "Match over", Color::Green);

        terminal
            .draw(|f| {
                let area = f.area();
                render_winner(f, &banner, area);
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Player 2 is the winner!"));
        assert!(screen.contains("Match over"));
    }
}
