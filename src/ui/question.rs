use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::controller::Controller;
use crate::quiz::Question;
use crate::ui::{bold, dim, ACCENT};

const OPTION_KEYS: [&str; 4] = ["1", "2", "3", "4"];

pub struct QuestionScreen;

impl crate::ui::screen::Screen for QuestionScreen {
    fn render(&self, controller: &Controller, f: &mut Frame, area: Rect) {
        let Some(question) = controller.current_question() else {
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // progress label
                Constraint::Length(1), // progress gauge
                Constraint::Length(1),
                Constraint::Length(3), // prompt
                Constraint::Length(question.options.len() as u16 + 1),
                Constraint::Min(2), // explanation
            ])
            .split(area);

        let index = controller.session.current_index;
        let total = controller.total_questions();

        let label = Paragraph::new(Span::styled(
            format!("Question {} of {}", index + 1, total),
            dim(),
        ));
        f.render_widget(label, rows[0]);

        // Progress reflects questions already entered, not yet answered.
        let ratio = if total == 0 {
            0.0
        } else {
            (index + 1) as f64 / total as f64
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT))
            .ratio(ratio)
            .label("");
        f.render_widget(gauge, rows[1]);

        let prompt = Paragraph::new(Span::styled(question.question.clone(), bold()))
            .wrap(Wrap { trim: true });
        f.render_widget(prompt, rows[3]);

        render_options(question, controller.session.selected_answer, f, rows[4]);

        if controller.session.selected_answer.is_some() {
            render_explanation(question, f, rows[5]);
        }
    }
}

fn render_options(
    question: &Question,
    selected: Option<usize>,
    f: &mut Frame,
    area: Rect,
) {
    let option_width = question
        .options
        .iter()
        .map(|o| o.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(question.options.len());
    for (i, option) in question.options.iter().enumerate() {
        let key = OPTION_KEYS.get(i).copied().unwrap_or("?");
        let padded = format!("{option:<option_width$}");

        let (style, verdict) = option_appearance(question, selected, i);
        lines.push(Line::from(vec![
            Span::styled(format!("({key}) "), dim()),
            Span::styled(padded, style),
            Span::raw(" "),
            Span::styled(verdict, style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// Styling for one option row. Before an answer every row is neutral; after,
/// the correct row goes green, a wrong selection goes red, and the rest dim.
fn option_appearance(
    question: &Question,
    selected: Option<usize>,
    index: usize,
) -> (Style, &'static str) {
    let Some(selected) = selected else {
        return (Style::default(), "");
    };

    if question.is_correct(index) {
        (
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            "✓",
        )
    } else if index == selected {
        (
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            "✗",
        )
    } else {
        (dim(), "")
    }
}

fn render_explanation(question: &Question, f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Explanation", bold().fg(ACCENT))),
        Line::from(Span::raw(question.explanation.clone())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
