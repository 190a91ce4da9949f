use crate::quiz::QuizQuestion;

const HEADER: [&str; 6] = [
    "Question",
    "Option A",
    "Option B",
    "Option C",
    "Option D",
    "Answer",
];

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Serialize a parsed quiz as a UTF-8 CSV buffer: one header row, one row per
/// question, missing options and answers as empty fields.
pub fn quiz_to_csv(questions: &[QuizQuestion]) -> Vec<u8> {
    let mut out = String::new();
    write_row(&mut out, HEADER.iter().map(|s| s.to_string()));

    for q in questions {
        let mut fields = Vec::with_capacity(6);
        fields.push(q.question.clone());
        for letter in OPTION_LETTERS {
            fields.push(q.options.get(&letter).cloned().unwrap_or_default());
        }
        fields.push(q.answer.map(String::from).unwrap_or_default());
        write_row(&mut out, fields.into_iter());
    }

    out.into_bytes()
}

fn write_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(&field));
    }
    out.push_str("\r\n");
}

/// A field containing the delimiter, a quote or a line break gets quoted,
/// with embedded quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse_quiz;

    fn csv_string(questions: &[QuizQuestion]) -> String {
        String::from_utf8(quiz_to_csv(questions)).unwrap()
    }

    #[test]
    fn test_csv_empty_quiz_is_header_only() {
        let text = csv_string(&[]);
        assert_eq!(text, "Question,Option A,Option B,Option C,Option D,Answer\r\n");
    }

    #[test]
    fn test_csv_sample_quiz_three_lines() {
        let quiz = parse_quiz(
            "1. What is 2+2?\nA. 3\nB. 4\nC. 5\nD. 6\nAnswer: B\n2. Capital of France?\nA. Rome\nB. Paris\nAnswer: B",
        );
        let text = csv_string(&quiz);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Question,Option A,Option B,Option C,Option D,Answer");
        assert_eq!(lines[1], "What is 2+2?,3,4,5,6,B");
        // Record 2 has no C or D option: empty fields, not dropped columns.
        assert_eq!(lines[2], "Capital of France?,Rome,Paris,,,B");
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let quiz = parse_quiz("1. Which city is in France?\nA. Paris, the capital\nAnswer: A");
        let text = csv_string(&quiz);
        assert!(text.contains("\"Paris, the capital\""));
    }

    #[test]
    fn test_csv_doubles_embedded_quotes() {
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_quotes_fields_with_newlines() {
        assert_eq!(escape_field("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_csv_plain_field_untouched() {
        assert_eq!(escape_field("plain text"), "plain text");
    }

    #[test]
    fn test_csv_round_trips_parsed_fields() {
        let source = "1. What is 2+2?\nA. 3\nB. 4\nC. 5\nD. 6\nAnswer: B";
        let quiz = parse_quiz(source);
        let text = csv_string(&quiz);
        let row = text.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields[0], quiz[0].question);
        assert_eq!(fields[1], quiz[0].options[&'A']);
        assert_eq!(fields[4], quiz[0].options[&'D']);
        assert_eq!(fields[5], "B");
    }

    #[test]
    fn test_csv_question_without_answer_has_empty_last_field() {
        let quiz = parse_quiz("1. Unanswered?\nA. maybe");
        let text = csv_string(&quiz);
        assert!(text.lines().nth(1).unwrap().ends_with(",,,"));
    }
}
