use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::controller::{Controller, Phase};
use crate::ui::{bold, dim, home::HomeScreen, profile::ProfileScreen, question::QuestionScreen,
    summary::SummaryScreen, ACCENT};

/// One renderer per phase. Screens are stateless; everything they show comes
/// from the controller.
pub trait Screen {
    fn render(&self, controller: &Controller, f: &mut Frame, area: Rect);
}

pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::Idle => Box::new(HomeScreen),
        Phase::Loading => Box::new(LoadingScreen),
        Phase::Active => Box::new(QuestionScreen),
        Phase::Finished => Box::new(SummaryScreen),
        Phase::Profile => Box::new(ProfileScreen),
    }
}

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct LoadingScreen;

impl Screen for LoadingScreen {
    fn render(&self, controller: &Controller, f: &mut Frame, area: Rect) {
        let frame = SPINNER_FRAMES[(controller.ticks as usize) % SPINNER_FRAMES.len()];
        let count = controller.home.length.question_count();
        let lines = vec![
            Line::from(Span::styled(
                format!("{frame} Forging your quiz {frame}"),
                bold().fg(ACCENT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Writing {count} questions just for you..."),
                dim(),
            )),
        ];
        let para = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(para, centered(area, 3));
    }
}

/// Vertically center a block of `height` rows inside `area`.
pub fn centered(area: Rect, height: u16) -> Rect {
    if area.height <= height {
        return area;
    }
    let pad = (area.height - height) / 2;
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(pad),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area)[1]
}
