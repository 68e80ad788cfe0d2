use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    sync::Arc,
    time::Duration,
};
use webbrowser::Browser;

use quizmind::{
    config::{Config, ConfigStore, FileConfigStore},
    controller::{Controller, Effect, Msg, Phase, QuizLength},
    generator::{spawn_generation, GeminiGenerator, GeneratorConfig, QuizGenerator},
    logging,
    runtime::{CrosstermEventSource, Event, FixedTicker, Runner},
    ui::{self, profile::GITHUB_URL},
};

const TICK_RATE_MS: u64 = 100;

/// AI-powered quiz TUI: pick any topic, answer generated questions, get rated
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Turns any topic into a multiple-choice quiz, generated on the fly by Gemini. Needs the GEMINI_API_KEY environment variable."
)]
pub struct Cli {
    /// topic to generate a quiz for immediately, skipping the home screen
    #[clap(short = 't', long)]
    topic: Option<String>,

    /// quiz length
    #[clap(short = 'l', long, value_enum, default_value_t = CliLength::Short)]
    length: CliLength,

    /// milliseconds to keep an answered question on screen before advancing
    #[clap(long)]
    advance_delay_ms: Option<u64>,

    /// gemini model to use for generation
    #[clap(short = 'm', long)]
    model: Option<String>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum CliLength {
    /// 5 questions
    Short,
    /// 15 questions
    Long,
}

impl CliLength {
    fn as_quiz_length(self) -> QuizLength {
        match self {
            CliLength::Short => QuizLength::Short,
            CliLength::Long => QuizLength::Long,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init();

    let mut config = FileConfigStore::new().load();
    if let Some(ms) = cli.advance_delay_ms {
        config.advance_delay_ms = ms;
    }
    if let Some(model) = &cli.model {
        config.model = model.clone();
    }

    let generator: Arc<dyn QuizGenerator> = Arc::new(GeminiGenerator::new(
        GeneratorConfig::from_env(config.api_base_url.clone(), config.model.clone()),
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &cli, &config, generator);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    cli: &Cli,
    config: &Config,
    generator: Arc<dyn QuizGenerator>,
) -> Result<(), Box<dyn Error>> {
    let events = CrosstermEventSource::new();
    let gateway_tx = events.sender();
    let runner = Runner::new(events, FixedTicker::new(Duration::from_millis(TICK_RATE_MS)));

    let mut controller = Controller::new(config.advance_delay());
    controller.home.length = cli.length.as_quiz_length();

    // --topic starts generation before the first frame.
    if let Some(topic) = &cli.topic {
        if let Some(Effect::Generate(request)) = controller.request_quiz(topic) {
            spawn_generation(Arc::clone(&generator), request, gateway_tx.clone());
        }
    }

    loop {
        terminal.draw(|f| ui::draw(&controller, f))?;

        match runner.step() {
            Event::Tick => controller.on_tick(),
            Event::Resize => {}
            Event::Generated { request_id, result } => {
                let _ = controller.handle(Msg::GenerationResolved { request_id, result });
            }
            Event::Key(key) => match key_to_action(&controller, key) {
                Action::Quit => break,
                Action::OpenGithub => {
                    if Browser::is_available() {
                        webbrowser::open(GITHUB_URL).unwrap_or_default();
                    }
                }
                Action::Dispatch(msg) => {
                    if let Some(Effect::Generate(request)) = controller.handle(msg) {
                        spawn_generation(Arc::clone(&generator), request, gateway_tx.clone());
                    }
                }
                Action::None => {}
            },
        }
    }

    Ok(())
}

#[derive(Debug)]
enum Action {
    Dispatch(Msg),
    OpenGithub,
    Quit,
    None,
}

/// Map one key event to an action for the current phase. Keys that mean
/// nothing in the current phase fall through to Action::None.
fn key_to_action(controller: &Controller, key: KeyEvent) -> Action {
    // ctrl+c quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match controller.phase {
        Phase::Idle => match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => Action::Dispatch(Msg::SubmitTopic),
            KeyCode::Tab => Action::Dispatch(Msg::ToggleLength),
            KeyCode::Up => Action::Dispatch(Msg::HighlightPrevious),
            KeyCode::Down => Action::Dispatch(Msg::HighlightNext),
            KeyCode::Backspace => Action::Dispatch(Msg::Backspace),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::Dispatch(Msg::OpenProfile)
            }
            KeyCode::Char(c) => Action::Dispatch(Msg::TypeChar(c)),
            _ => Action::None,
        },
        Phase::Loading => match key.code {
            KeyCode::Esc => Action::Dispatch(Msg::GoHome),
            _ => Action::None,
        },
        Phase::Active => match key.code {
            KeyCode::Esc => Action::Dispatch(Msg::GoHome),
            KeyCode::Char(c @ '1'..='4') => {
                Action::Dispatch(Msg::SelectAnswer(c as usize - '1' as usize))
            }
            KeyCode::Char(c @ 'a'..='d') => {
                Action::Dispatch(Msg::SelectAnswer(c as usize - 'a' as usize))
            }
            _ => Action::None,
        },
        Phase::Finished => match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Dispatch(Msg::Retry),
            KeyCode::Char('h') | KeyCode::Enter => Action::Dispatch(Msg::GoHome),
            _ => Action::None,
        },
        Phase::Profile => match key.code {
            KeyCode::Esc | KeyCode::Char('b') => Action::Dispatch(Msg::GoHome),
            KeyCode::Char('g') => Action::OpenGithub,
            _ => Action::None,
        },
    }
}
