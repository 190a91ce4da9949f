use crate::ai::{ModelConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MODEL_CHOICES};
use crate::quiz::{parse_quiz, QuizQuestion};
use std::sync::mpsc;
use std::time::Instant;

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 20;
pub const DEFAULT_QUESTIONS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Analyze,
    CreateContent,
    GenerateQuiz,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Analyze, Mode::CreateContent, Mode::GenerateQuiz];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Analyze => "Analyze",
            Mode::CreateContent => "Create Content",
            Mode::GenerateQuiz => "Generate Quiz",
        }
    }

    pub fn editor_title(self) -> &'static str {
        match self {
            Mode::Analyze => "Enter text to analyze",
            Mode::CreateContent => "Describe what you want to create",
            Mode::GenerateQuiz => "Enter the topic or lesson for the quiz",
        }
    }

    pub fn result_title(self) -> &'static str {
        match self {
            Mode::Analyze => "Analysis Result",
            Mode::CreateContent => "Generated Content",
            Mode::GenerateQuiz => "Generated Quiz",
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Editor,
    Generating,
    Result,
}

#[derive(Debug)]
pub enum AiRequest {
    Generate {
        mode: Mode,
        input: String,
        question_count: u8,
        config: ModelConfig,
    },
}

#[derive(Debug)]
pub enum AiResponse {
    Completed { mode: Mode, text: String },
    Error { error: String },
}

/// All mutable application state: the selected mode and model, the editor
/// buffer, the latest generation result and its parsed quiz, and the worker
/// channel endpoints.
#[derive(Debug)]
pub struct Workspace {
    pub mode: Mode,
    pub menu_index: usize,
    pub model_index: usize,
    pub question_count: u8,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub output: Option<String>,
    pub quiz: Vec<QuizQuestion>,
    pub result_scroll_y: u16,
    pub generation_start: Option<Instant>,
    pub last_error: Option<String>,
    pub status_line: Option<String>,
    pub ai_enabled: bool,
    pub ai_tx: Option<mpsc::Sender<AiRequest>>,
    pub ai_rx: Option<mpsc::Receiver<AiResponse>>,
}

impl Workspace {
    pub fn new(ai_enabled: bool) -> Self {
        Self {
            mode: Mode::Analyze,
            menu_index: 0,
            model_index: 0,
            question_count: DEFAULT_QUESTIONS,
            input_buffer: String::new(),
            cursor_position: 0,
            output: None,
            quiz: Vec::new(),
            result_scroll_y: 0,
            generation_start: None,
            last_error: None,
            status_line: None,
            ai_enabled,
            ai_tx: None,
            ai_rx: None,
        }
    }

    /// The quiz topic used for export file names: the first line of the
    /// editor buffer.
    pub fn topic(&self) -> &str {
        self.input_buffer.lines().next().unwrap_or("").trim()
    }

    pub fn adjust_question_count(&mut self, delta: i16) {
        let count = (self.question_count as i16 + delta).clamp(MIN_QUESTIONS as i16, MAX_QUESTIONS as i16);
        self.question_count = count as u8;
    }

    /// Send the current editor content to the worker. Returns false (with a
    /// reason on `last_error`) when nothing was sent.
    pub fn begin_generation(&mut self) -> bool {
        if !self.ai_enabled {
            self.last_error = Some("AI disabled: set OPENROUTER_API_KEY in .env".to_string());
            return false;
        }
        if self.input_buffer.trim().is_empty() {
            self.last_error = Some("Please enter some text first".to_string());
            return false;
        }
        let Some(tx) = &self.ai_tx else {
            self.last_error = Some("Generation worker is not running".to_string());
            return false;
        };

        let config = ModelConfig {
            model: MODEL_CHOICES[self.model_index].to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
        };
        let request = AiRequest::Generate {
            mode: self.mode,
            input: self.input_buffer.clone(),
            question_count: self.question_count,
            config,
        };

        if tx.send(request).is_err() {
            self.last_error = Some("Generation worker is gone".to_string());
            return false;
        }

        self.last_error = None;
        self.status_line = None;
        self.generation_start = Some(Instant::now());
        true
    }

    pub fn process_ai_response(&mut self, response: AiResponse) {
        self.generation_start = None;
        match response {
            AiResponse::Completed { mode, text } => {
                self.quiz = if mode == Mode::GenerateQuiz {
                    parse_quiz(&text)
                } else {
                    Vec::new()
                };
                self.output = Some(text);
                self.result_scroll_y = 0;
                self.last_error = None;
            }
            AiResponse::Error { error } => {
                self.last_error = Some(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_defaults() {
        let ws = Workspace::new(true);
        assert_eq!(ws.mode, Mode::Analyze);
        assert_eq!(ws.question_count, DEFAULT_QUESTIONS);
        assert!(ws.output.is_none());
        assert!(ws.quiz.is_empty());
    }

    #[test]
    fn test_question_count_clamps() {
        let mut ws = Workspace::new(true);
        ws.adjust_question_count(100);
        assert_eq!(ws.question_count, MAX_QUESTIONS);
        ws.adjust_question_count(-100);
        assert_eq!(ws.question_count, MIN_QUESTIONS);
        ws.adjust_question_count(1);
        assert_eq!(ws.question_count, MIN_QUESTIONS + 1);
    }

    #[test]
    fn test_topic_is_first_line_trimmed() {
        let mut ws = Workspace::new(true);
        ws.input_buffer = "  Rust ownership  \nmore detail".to_string();
        assert_eq!(ws.topic(), "Rust ownership");
    }

    #[test]
    fn test_begin_generation_requires_api_key() {
        let mut ws = Workspace::new(false);
        ws.input_buffer = "topic".to_string();
        assert!(!ws.begin_generation());
        assert!(ws.last_error.as_deref().unwrap().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_begin_generation_requires_input() {
        let mut ws = Workspace::new(true);
        ws.input_buffer = "   ".to_string();
        assert!(!ws.begin_generation());
    }

    #[test]
    fn test_begin_generation_sends_request() {
        let (tx, rx) = mpsc::channel();
        let mut ws = Workspace::new(true);
        ws.ai_tx = Some(tx);
        ws.mode = Mode::GenerateQuiz;
        ws.input_buffer = "Photosynthesis".to_string();
        ws.question_count = 7;

        assert!(ws.begin_generation());
        assert!(ws.generation_start.is_some());

        let AiRequest::Generate {
            mode,
            input,
            question_count,
            config,
        } = rx.try_recv().unwrap();
        assert_eq!(mode, Mode::GenerateQuiz);
        assert_eq!(input, "Photosynthesis");
        assert_eq!(question_count, 7);
        assert_eq!(config.model, MODEL_CHOICES[0]);
    }

    #[test]
    fn test_quiz_response_is_parsed() {
        let mut ws = Workspace::new(true);
        ws.process_ai_response(AiResponse::Completed {
            mode: Mode::GenerateQuiz,
            text: "1. Q?\nA. yes\nB. no\nAnswer: A".to_string(),
        });
        assert_eq!(ws.quiz.len(), 1);
        assert_eq!(ws.quiz[0].answer, Some('A'));
        assert!(ws.output.is_some());
    }

    #[test]
    fn test_analysis_response_leaves_quiz_empty() {
        let mut ws = Workspace::new(true);
        ws.process_ai_response(AiResponse::Completed {
            mode: Mode::Analyze,
            text: "1. This numbered insight is not a quiz question".to_string(),
        });
        assert!(ws.quiz.is_empty());
        assert!(ws.output.is_some());
    }

    #[test]
    fn test_error_response_recorded() {
        let mut ws = Workspace::new(true);
        ws.generation_start = Some(Instant::now());
        ws.process_ai_response(AiResponse::Error {
            error: "boom".to_string(),
        });
        assert!(ws.generation_start.is_none());
        assert_eq!(ws.last_error.as_deref(), Some("boom"));
    }
}
