use crate::models::Mode;

pub fn system_prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Analyze => {
            "You are a careful content analyst. Summarize the key insights of the text you are given."
        }
        Mode::CreateContent => "You are a versatile writing assistant.",
        Mode::GenerateQuiz => {
            "You are an educational assistant writing school quizzes. Follow the requested format exactly."
        }
    }
}

/// The user-facing prompt for a mode. For quizzes the prompt pins the output
/// shape the parser expects: numbered questions, A-D options, `Answer: X`
/// markers.
pub fn user_prompt(mode: Mode, input: &str, question_count: u8) -> String {
    match mode {
        Mode::Analyze => format!("Analyze the following text and provide insights:\n{input}"),
        Mode::CreateContent => input.to_string(),
        Mode::GenerateQuiz => format!(
            "Create a school quiz with {question_count} questions on the topic '{input}'. \
             Format the output with numbered questions followed by multiple choice options (A, B, C, D), \
             and indicate the correct answer like 'Answer: B' after each question."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_prompt_carries_topic_and_count() {
        let prompt = user_prompt(Mode::GenerateQuiz, "Photosynthesis", 7);
        assert!(prompt.contains("7 questions"));
        assert!(prompt.contains("'Photosynthesis'"));
        assert!(prompt.contains("Answer: B"));
    }

    #[test]
    fn test_create_prompt_is_passthrough() {
        assert_eq!(
            user_prompt(Mode::CreateContent, "Write a haiku about rain", 5),
            "Write a haiku about rain"
        );
    }

    #[test]
    fn test_analyze_prompt_wraps_input() {
        let prompt = user_prompt(Mode::Analyze, "Some article text", 5);
        assert!(prompt.starts_with("Analyze the following text"));
        assert!(prompt.ends_with("Some article text"));
    }

    #[test]
    fn test_each_mode_has_system_prompt() {
        for mode in Mode::ALL {
            assert!(!system_prompt(mode).is_empty());
        }
    }
}
