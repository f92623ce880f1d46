use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::banner::{render_winner, WinnerBanner};
use crate::config::{DisplayConfig, SpeedPreset};
use crate::game::{Body, MatchState, Player, Rect as WorldRect, World};

// Layout: score row, hint row, then the bordered field drawn in Braille
// Row 0: Scores and current speeds
// Row 1: Controls hint
// Rows 2..N: Field, with a one-pixel border line top and bottom
const UI_HEADER_ROWS: u16 = 2;

/// Text shown around the field that is not part of the match state
pub struct Hud<'a> {
    pub ball_speed: f32,
    pub paddle_speed: f32,
    pub controls: &'a str,
}

pub fn render(
    frame: &mut Frame,
    state: &MatchState,
    display: &DisplayConfig,
    hud: &Hud,
    banner: Option<&WinnerBanner>,
) {
    let area = frame.area();

    // Draw background (true black RGB, not terminal default)
    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    draw_scores(frame, state, display, hud, area);
    draw_controls(frame, hud, area);

    let field_rows = area.height.saturating_sub(UI_HEADER_ROWS);
    if field_rows < 2 {
        return;
    }
    let field_area = Rect {
        x: area.x,
        y: area.y + UI_HEADER_ROWS,
        width: area.width,
        height: field_rows,
    };

    let mut canvas = BrailleCanvas::new(field_area.width as usize, field_area.height as usize);
    let viewport = Viewport::fit(&state.world, canvas.pixel_width(), canvas.pixel_height());

    canvas.set_pen(rgb(display.center_line_color));
    canvas.draw_horizontal_line(0);
    canvas.draw_horizontal_line(canvas.pixel_height() - 1);
    draw_center_line(&mut canvas, &viewport);

    canvas.set_pen(rgb(display.paddle_color));
    for player in [Player::Left, Player::Right] {
        fill_world_rect(&mut canvas, &viewport, &state.bat(player).paddle.rect());
    }

    canvas.set_pen(rgb(display.ball_color));
    fill_world_rect(&mut canvas, &viewport, &state.ball.rect());

    render_braille_canvas(frame, &canvas, field_area);

    if let Some(banner) = banner {
        render_winner(frame, banner, area);
    }
}

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Maps world coordinates onto Braille pixels inside the field border
#[derive(Debug, Clone, Copy)]
struct Viewport {
    world_width: f32,
    world_height: f32,
    scale_x: f32,
    scale_y: f32,
    offset_y: usize,
}

impl Viewport {
    fn fit(world: &World, pixel_width: usize, pixel_height: usize) -> Self {
        // One pixel row for each border line
        let inner_height = pixel_height.saturating_sub(2).max(1);
        Self {
            world_width: world.width as f32,
            world_height: world.height as f32,
            scale_x: pixel_width as f32 / world.width as f32,
            scale_y: inner_height as f32 / world.height as f32,
            offset_y: 1,
        }
    }

    /// Pixel box for a world box, clipped to the field and at least one pixel each way
    fn project(&self, rect: &WorldRect) -> (usize, usize, usize, usize) {
        let left = rect.left().clamp(0.0, self.world_width);
        let right = rect.right().clamp(0.0, self.world_width);
        let top = rect.top().clamp(0.0, self.world_height);
        let bottom = rect.bottom().clamp(0.0, self.world_height);

        let x = (left * self.scale_x) as usize;
        let y = (top * self.scale_y) as usize + self.offset_y;
        let width = (((right - left) * self.scale_x) as usize).max(1);
        let height = (((bottom - top) * self.scale_y) as usize).max(1);
        (x, y, width, height)
    }
}

fn fill_world_rect(canvas: &mut BrailleCanvas, viewport: &Viewport, rect: &WorldRect) {
    let (x, y, width, height) = viewport.project(rect);
    // A paddle resting on x = width would otherwise start past the last column
    let x = x.min(canvas.pixel_width().saturating_sub(width));
    canvas.fill_rect(x, y, width, height);
}

fn draw_center_line(canvas: &mut BrailleCanvas, viewport: &Viewport) {
    let center_pixel_x = (viewport.world_width / 2.0 * viewport.scale_x) as usize;
    let height = (viewport.world_height * viewport.scale_y) as usize;

    // Dotted: two pixels on, two off
    for y in (0..height).step_by(4) {
        let pixel_y = viewport.offset_y + y;
        canvas.set_pixel(center_pixel_x, pixel_y);
        canvas.set_pixel(center_pixel_x, pixel_y + 1);
    }
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect) {
    for y in 0..canvas.height() {
        // Group runs of same-colored cells into spans
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_color = canvas.color_at(0, y);
        for x in 0..canvas.width() {
            let color = canvas.color_at(x, y);
            if color != run_color && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_color),
                ));
            }
            run_color = color;
            run.push(canvas.to_char(x, y));
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_color)));
        }

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn speed_label(speed: f32) -> String {
    match SpeedPreset::from_value(speed) {
        Some(preset) => preset.to_string(),
        None => format!("{}", speed),
    }
}

/// "Player 2 (computer): 4"
fn player_label(state: &MatchState, player: Player) -> String {
    let suffix = if state.bat(player).is_computer() {
        " (computer)"
    } else {
        ""
    };
    format!("{}{}: {}", player.display_name(), suffix, state.score(player))
}

fn draw_scores(frame: &mut Frame, state: &MatchState, display: &DisplayConfig, hud: &Hud, area: Rect) {
    let style = Style::default().fg(rgb(display.score_color));
    let row = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };

    let left = Paragraph::new(format!(" {}", player_label(state, Player::Left)))
    .style(style)
    .alignment(Alignment::Left);
    frame.render_widget(left, row);

    let speeds = Paragraph::new(format!(
        "ball {}  paddles {}",
        speed_label(hud.ball_speed),
        speed_label(hud.paddle_speed)
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(speeds, row);

    let right = Paragraph::new(format!("{} ", player_label(state, Player::Right)))
    .style(style)
    .alignment(Alignment::Right);
    frame.render_widget(right, row);
}

fn draw_controls(frame: &mut Frame, hud: &Hud, area: Rect) {
    if area.height < 2 {
        return;
    }
    let controls = Paragraph::new(hud.controls)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    let controls_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };

    frame.render_widget(controls, controls_area);
}
