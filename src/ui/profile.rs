use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::Controller;
use crate::ui::{bold, dim, screen::centered, ACCENT};

pub const AUTHOR_NAME: &str = "Kaumah Tadeo";
pub const AUTHOR_ROLE: &str = "Full Stack Developer";
pub const GITHUB_URL: &str = "https://github.com/kaumah24";

pub struct ProfileScreen;

impl crate::ui::screen::Screen for ProfileScreen {
    fn render(&self, _controller: &Controller, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(AUTHOR_NAME, bold().fg(ACCENT))),
            Line::from(Span::styled(AUTHOR_ROLE, dim())),
            Line::from(""),
            Line::from(Span::raw(
                "Builder of small sharp tools. QuizMind turns any topic into a quiz.",
            )),
            Line::from(""),
            link_line("GitHub   ", GITHUB_URL),
            link_line("Portfolio", "https://kaumah24.github.io"),
            link_line("LinkedIn ", "https://www.linkedin.com/in/kaumah24"),
        ];

        let card = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(card, centered(area, 8));
    }
}

fn link_line(label: &'static str, url: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}  "), bold()),
        Span::styled(url, Style::default().add_modifier(ratatui::style::Modifier::UNDERLINED)),
    ])
}
