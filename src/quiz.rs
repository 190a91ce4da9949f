use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    // A numbered-list marker starts a new question block.
    static ref BLOCK_MARKER: Regex = Regex::new(r"\n?\d+\.\s").unwrap();
    static ref OPTION_LINE: Regex = Regex::new(r"^([A-D])[.)]\s*(.*)$").unwrap();
    static ref ANSWER_LINE: Regex = Regex::new(r"(?i)answer\s*[:\-]\s*([A-D])").unwrap();
}

/// One parsed quiz question. `options` is keyed by the letters A-D; letters
/// the model omitted are simply absent. `answer` stays `None` when no answer
/// line was found in the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: BTreeMap<char, String>,
    pub answer: Option<char>,
}

/// Parse model-authored quiz text into question records.
///
/// Best-effort over free-form generated text: every numbered marker yields a
/// record, even when the block has no recognizable options or answer, so the
/// record count always matches the marker count. Text before the first marker
/// (preambles like "Here is your quiz:") is discarded. Input with no markers
/// at all parses to an empty vec. Never fails.
pub fn parse_quiz(raw: &str) -> Vec<QuizQuestion> {
    BLOCK_MARKER.split(raw).skip(1).map(parse_block).collect()
}

fn parse_block(block: &str) -> QuizQuestion {
    let mut lines = block.trim().lines();
    let question = lines.next().unwrap_or("").trim().to_string();

    let mut options = BTreeMap::new();
    let mut answer = None;

    for line in lines {
        // A line can be both an option and carry the answer marker; both
        // classifiers run on every line. Last answer line wins.
        if let Some(caps) = OPTION_LINE.captures(line.trim()) {
            let letter = caps[1].chars().next().unwrap();
            options.insert(letter, caps[2].to_string());
        }
        if let Some(caps) = ANSWER_LINE.captures(line) {
            answer = caps[1].chars().next().map(|c| c.to_ascii_uppercase());
        }
    }

    QuizQuestion {
        question,
        options,
        answer,
    }
}
