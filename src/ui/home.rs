use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::category::Category;
use crate::controller::{Controller, QuizLength};
use crate::ui::{bold, dim, screen::Screen, ACCENT};

const TOPIC_PLACEHOLDER: &str = "e.g. Rust lifetimes, the Silk Road, synthwave...";

pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, controller: &Controller, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // tagline
                Constraint::Length(2), // topic input
                Constraint::Length(2), // length selector
                Constraint::Length(1), // error line
                Constraint::Length(1), // category heading
                Constraint::Min(6),    // category list
            ])
            .split(area);

        let tagline = Paragraph::new(Line::from(Span::styled(
            "What do you want to be quizzed on?",
            bold(),
        )));
        f.render_widget(tagline, rows[0]);

        render_topic_input(controller, f, rows[1]);
        render_length_selector(controller.home.length, f, rows[2]);

        if let Some(message) = &controller.last_error {
            let error = Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(error, rows[3]);
        }

        let heading = Paragraph::new(Span::styled("Or pick a category:", dim()));
        f.render_widget(heading, rows[4]);

        render_categories(controller.home.highlighted, f, rows[5]);
    }
}

fn render_topic_input(controller: &Controller, f: &mut Frame, area: Rect) {
    let topic = &controller.home.topic;
    let line = if topic.is_empty() {
        Line::from(vec![
            Span::styled("> ", bold().fg(ACCENT)),
            Span::styled("█", Style::default().fg(ACCENT)),
            Span::styled(TOPIC_PLACEHOLDER, dim()),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", bold().fg(ACCENT)),
            Span::raw(topic.clone()),
            Span::styled("█", Style::default().fg(ACCENT)),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_length_selector(length: QuizLength, f: &mut Frame, area: Rect) {
    let selected = bold().fg(Color::Black).bg(ACCENT);
    let unselected = dim();

    let style_for = |this: QuizLength| {
        if length == this {
            selected
        } else {
            unselected
        }
    };

    let line = Line::from(vec![
        Span::styled("Length: ", Style::default()),
        Span::styled(" SHORT (5) ", style_for(QuizLength::Short)),
        Span::raw("  "),
        Span::styled(" LONG (15) ", style_for(QuizLength::Long)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_categories(highlighted: usize, f: &mut Frame, area: Rect) {
    // Pad labels so descriptions line up in one column.
    let label_width = Category::ALL
        .iter()
        .map(|c| c.to_string().width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(Category::ALL.len());
    for (i, category) in Category::ALL.iter().enumerate() {
        let is_highlighted = i == highlighted;
        let marker = if is_highlighted { "❯ " } else { "  " };
        let label = format!("{:<width$}", category.to_string(), width = label_width);

        let mut label_style = Style::default().fg(category.color());
        if is_highlighted {
            label_style = label_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::styled(marker, bold().fg(ACCENT)),
            Span::styled(format!("{} ", category.glyph()), Style::default().fg(category.color())),
            Span::styled(label, label_style),
            Span::raw("  "),
            Span::styled(category.description(), dim()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}
