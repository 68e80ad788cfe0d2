use std::time::{Duration, Instant};

use crate::category::Category;
use crate::generator::{GenerateError, GenerationRequest};
use crate::quiz::{Question, Quiz};
use crate::session::{accuracy_percentage, SessionState, Tier, DEFAULT_ADVANCE_DELAY};

/// The one failure message users ever see; the underlying cause goes to the
/// diagnostic log only.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate quiz. Check your connection and API key, then try again.";

/// Where the session currently is. Every user action maps to exactly one
/// next phase; actions that don't apply in the current phase are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Active,
    Finished,
    Profile,
}

/// The two supported quiz lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum QuizLength {
    Short,
    Long,
}

impl QuizLength {
    pub fn question_count(self) -> usize {
        match self {
            QuizLength::Short => 5,
            QuizLength::Long => 15,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            QuizLength::Short => QuizLength::Long,
            QuizLength::Long => QuizLength::Short,
        }
    }
}

/// Everything the UI may ask the controller to do. Key events are mapped to
/// these; nothing outside the controller mutates session state.
#[derive(Debug)]
pub enum Msg {
    TypeChar(char),
    Backspace,
    ToggleLength,
    HighlightPrevious,
    HighlightNext,
    SubmitTopic,
    OpenProfile,
    GoHome,
    Retry,
    SelectAnswer(usize),
    GenerationResolved {
        request_id: u64,
        result: Result<Quiz, GenerateError>,
    },
}

/// Side effect a transition asks the runtime to perform.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    Generate(GenerationRequest),
}

/// Inputs gathered on the home screen before a quiz is requested.
#[derive(Clone, Debug)]
pub struct HomeState {
    pub topic: String,
    pub length: QuizLength,
    pub highlighted: usize,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            length: QuizLength::Short,
            highlighted: 0,
        }
    }
}

/// Single source of truth for one session. Owns the phase, the current quiz
/// document, and all per-quiz progress; the only component permitted to
/// mutate them.
#[derive(Debug)]
pub struct Controller {
    pub phase: Phase,
    pub quiz: Option<Quiz>,
    pub session: SessionState,
    pub home: HomeState,
    pub last_error: Option<String>,
    /// Tick counter, drives the loading spinner.
    pub ticks: u64,
    advance_delay: Duration,
    request_seq: u64,
}

impl Controller {
    pub fn new(advance_delay: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            quiz: None,
            session: SessionState::default(),
            home: HomeState::default(),
            last_error: None,
            ticks: 0,
            advance_delay,
            request_seq: 0,
        }
    }

    /// Dispatch one message through the transition table. Returns an effect
    /// when the runtime has work to do (currently only gateway calls).
    pub fn handle(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::TypeChar(c) => {
                if self.phase == Phase::Idle {
                    self.home.topic.push(c);
                }
                None
            }
            Msg::Backspace => {
                if self.phase == Phase::Idle {
                    self.home.topic.pop();
                }
                None
            }
            Msg::ToggleLength => {
                if self.phase == Phase::Idle {
                    self.home.length = self.home.length.toggled();
                }
                None
            }
            Msg::HighlightPrevious => {
                if self.phase == Phase::Idle {
                    let len = Category::ALL.len();
                    self.home.highlighted = (self.home.highlighted + len - 1) % len;
                }
                None
            }
            Msg::HighlightNext => {
                if self.phase == Phase::Idle {
                    self.home.highlighted = (self.home.highlighted + 1) % Category::ALL.len();
                }
                None
            }
            Msg::SubmitTopic => self.submit_topic(),
            Msg::OpenProfile => {
                if self.phase == Phase::Idle {
                    self.phase = Phase::Profile;
                }
                None
            }
            Msg::GoHome => {
                self.go_home();
                None
            }
            Msg::Retry => {
                self.retry();
                None
            }
            Msg::SelectAnswer(index) => {
                self.submit_answer(index);
                None
            }
            Msg::GenerationResolved { request_id, result } => {
                self.generation_resolved(request_id, result);
                None
            }
        }
    }

    /// Timer hook: counts ticks and fires the delayed advance when due.
    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);

        if self.phase == Phase::Active
            && self
                .session
                .advance_at
                .is_some_and(|at| Instant::now() >= at)
        {
            self.advance();
        }
    }

    /// Start generation for a topic. Only meaningful from Idle; an empty
    /// (trimmed) topic is inert rather than an error.
    pub fn request_quiz(&mut self, topic: &str) -> Option<Effect> {
        if self.phase != Phase::Idle {
            return None;
        }
        let topic = topic.trim();
        if topic.is_empty() {
            return None;
        }

        self.last_error = None;
        self.phase = Phase::Loading;
        self.request_seq += 1;

        Some(Effect::Generate(GenerationRequest {
            request_id: self.request_seq,
            topic: topic.to_string(),
            count: self.home.length.question_count(),
        }))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|quiz| quiz.questions.get(self.session.current_index))
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.as_ref().map_or(0, Quiz::len)
    }

    pub fn highlighted_category(&self) -> Category {
        Category::ALL[self.home.highlighted % Category::ALL.len()]
    }

    pub fn percentage(&self) -> u32 {
        accuracy_percentage(self.session.score, self.total_questions())
    }

    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }

    fn submit_topic(&mut self) -> Option<Effect> {
        if self.phase != Phase::Idle {
            return None;
        }
        let topic = if self.home.topic.trim().is_empty() {
            self.highlighted_category().topic()
        } else {
            self.home.topic.clone()
        };
        self.request_quiz(&topic)
    }

    fn generation_resolved(&mut self, request_id: u64, result: Result<Quiz, GenerateError>) {
        // A result that arrives after the user navigated away (or after a
        // newer request was issued) must not touch the session.
        if self.phase != Phase::Loading || request_id != self.request_seq {
            tracing::debug!(request_id, "discarding stale generation result");
            return;
        }

        match result {
            Ok(quiz) => {
                self.session.reset();
                self.quiz = Some(quiz);
                self.phase = Phase::Active;
            }
            Err(_) => {
                // Full detail was logged at the gateway; the user gets one
                // generic, recoverable message.
                self.last_error = Some(GENERATION_FAILED_MESSAGE.to_string());
                self.phase = Phase::Idle;
            }
        }
    }

    /// Record an answer for the current question. Exactly one scoring
    /// increment per question: re-submission while an answer is pending is a
    /// no-op, as is an out-of-range index.
    fn submit_answer(&mut self, index: usize) {
        if self.phase != Phase::Active || self.session.answer_pending() {
            return;
        }
        let correct = match self.current_question() {
            Some(question) if index < question.options.len() => question.is_correct(index),
            _ => return,
        };

        self.session.selected_answer = Some(index);
        if correct {
            self.session.score += 1;
        }
        self.session.advance_at = Some(Instant::now() + self.advance_delay);
    }

    fn advance(&mut self) {
        self.session.advance_at = None;
        if self.session.current_index + 1 < self.total_questions() {
            self.session.current_index += 1;
            self.session.selected_answer = None;
        } else {
            self.phase = Phase::Finished;
        }
    }

    fn go_home(&mut self) {
        // Bump the sequence so an in-flight generation can no longer land.
        self.request_seq += 1;
        self.phase = Phase::Idle;
        self.quiz = None;
        self.session.reset();
        self.last_error = None;
        self.home.topic.clear();
    }

    fn retry(&mut self) {
        if self.phase != Phase::Finished || self.quiz.is_none() {
            return;
        }
        self.session.reset();
        self.phase = Phase::Active;
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY)
    }
}
