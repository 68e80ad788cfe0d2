pub mod home;
pub mod profile;
pub mod question;
pub mod screen;
pub mod summary;

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use webbrowser::Browser;

use crate::controller::{Controller, Phase};

pub const HORIZONTAL_MARGIN: u16 = 2;

pub const ACCENT: Color = Color::LightBlue;

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// Render the whole frame: header with the live clock, the screen for the
/// current phase, and a one-line key legend.
pub fn draw(controller: &Controller, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // padding
            Constraint::Min(1),    // screen body
            Constraint::Length(1), // legend
        ])
        .split(f.area());

    render_header(controller, f, chunks[0]);
    screen::current_screen(controller.phase).render(controller, f, chunks[2]);
    render_legend(controller, f, chunks[3]);
}

fn render_header(controller: &Controller, f: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(area);

    let mut title_spans = vec![
        Span::styled("Quiz", bold()),
        Span::styled("Mind", bold().fg(ACCENT)),
    ];
    if controller.phase == Phase::Active {
        if let Some(quiz) = &controller.quiz {
            title_spans.push(Span::raw("  "));
            title_spans.push(Span::styled(quiz.title.clone(), dim()));
            title_spans.push(Span::styled(
                format!("  score {}", controller.session.score),
                bold().fg(Color::Yellow),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(title_spans)), halves[0]);

    // Informational only; refreshed every tick.
    let now = Local::now();
    let clock = Paragraph::new(Span::styled(
        format!("{} {}", now.format("%a %b %-d"), now.format("%H:%M:%S")),
        dim(),
    ))
    .alignment(Alignment::Right);
    f.render_widget(clock, halves[1]);
}

fn render_legend(controller: &Controller, f: &mut Frame, area: Rect) {
    let text = match controller.phase {
        Phase::Idle => {
            "type a topic + (enter) begin / (tab) length / (up/down) category / (ctrl+p)rofile / (esc) quit"
        }
        Phase::Loading => "(esc) back home",
        Phase::Active => "(1-4) answer / (esc) home",
        Phase::Finished => "(r)etry / (h)ome / (esc) quit",
        Phase::Profile => {
            if Browser::is_available() {
                "(g)ithub / (b)ack"
            } else {
                "(b)ack"
            }
        }
    };

    let legend = Paragraph::new(Span::styled(
        text,
        Style::default().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);
    f.render_widget(legend, area);
}
