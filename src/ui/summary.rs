use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

use crate::controller::Controller;
use crate::session::Tier;
use crate::ui::{bold, dim, screen::centered};

pub struct SummaryScreen;

impl crate::ui::screen::Screen for SummaryScreen {
    fn render(&self, controller: &Controller, f: &mut Frame, area: Rect) {
        let area = centered(area, 8);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(1),
                Constraint::Length(1), // gauge
                Constraint::Length(1),
                Constraint::Length(1), // score
                Constraint::Length(1), // tier
                Constraint::Min(0),
            ])
            .split(area);

        let percentage = controller.percentage();
        let tier = controller.tier();

        let heading = Paragraph::new(Span::styled("Quiz Results", bold()))
            .alignment(Alignment::Center);
        f.render_widget(heading, rows[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(tier_color(tier)))
            .percent(percentage.min(100) as u16)
            .label(format!("{percentage}%"));
        f.render_widget(gauge, rows[2]);

        let score = Paragraph::new(Line::from(vec![
            Span::styled("Score: ", dim()),
            Span::styled(
                format!(
                    "{} / {}",
                    controller.session.score,
                    controller.total_questions()
                ),
                bold(),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(score, rows[4]);

        let tier_line = Paragraph::new(Line::from(vec![
            Span::styled("Rating: ", dim()),
            Span::styled(tier.to_string(), bold().fg(tier_color(tier))),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(tier_line, rows[5]);
    }
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Elite => Color::Green,
        Tier::Strong => Color::Yellow,
        Tier::Average => Color::Red,
    }
}
