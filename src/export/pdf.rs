use crate::quiz::QuizQuestion;

// A4 geometry in points, with the auto page break pinned to a fixed bottom
// margin like the original tool's renderer.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 40.0;
const BOTTOM_MARGIN: f32 = 42.0;

const TITLE_ROW: f32 = 28.0;
const ROW: f32 = 28.0;
const OPTION_ROW: f32 = 22.0;
const GAP: f32 = 14.0;

// Average Helvetica glyph width as a fraction of the font size. Used for
// wrapping and centering; exact metrics are not needed for this layout.
const GLYPH_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
    Oblique,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "/F1",
            Font::Bold => "/F2",
            Font::Oblique => "/F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Oblique => "Helvetica-Oblique",
        }
    }

    const ALL: [Font; 3] = [Font::Regular, Font::Bold, Font::Oblique];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Center,
}

/// Minimal PDF assembler: built-in Helvetica fonts, WinAnsi text encoding,
/// uncompressed content streams, automatic page breaks. Produces a single
/// self-contained byte buffer with no external resource references.
struct DocumentBuilder {
    pages: Vec<Vec<u8>>,
    content: Vec<u8>,
    y: f32,
    font: Font,
    size: f32,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            content: Vec::new(),
            y: MARGIN,
            font: Font::Regular,
            size: 12.0,
        }
    }

    fn set_font(&mut self, font: Font, size: f32) {
        self.font = font;
        self.size = size;
    }

    fn break_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.content));
        self.y = MARGIN;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y + height > PAGE_HEIGHT - BOTTOM_MARGIN {
            self.break_page();
        }
    }

    /// One line of text in the current font. Out-of-range characters are
    /// replaced at encode time, so this never fails.
    fn write_line(&mut self, text: &str, height: f32, align: Align) {
        self.ensure_room(height);
        let encoded = encode_winansi(text);

        let x = match align {
            Align::Left => MARGIN,
            Align::Center => {
                let width = encoded.len() as f32 * self.size * GLYPH_WIDTH;
                ((PAGE_WIDTH - width) / 2.0).max(MARGIN)
            }
        };
        let baseline = PAGE_HEIGHT - self.y - self.size;

        let op = format!(
            "BT {} {} Tf {:.2} {:.2} Td (",
            self.font.resource(),
            self.size,
            x,
            baseline
        );
        self.content.extend_from_slice(op.as_bytes());
        self.content.extend_from_slice(&escape_text(&encoded));
        self.content.extend_from_slice(b") Tj ET\n");

        self.y += height;
    }

    /// Word-wrapped block, one `height`-tall line per wrapped row. An empty
    /// string still advances the cursor by one row.
    fn write_wrapped(&mut self, text: &str, height: f32) {
        let max_chars = ((PAGE_WIDTH - 2.0 * MARGIN) / (self.size * GLYPH_WIDTH)) as usize;
        let rows = wrap_text(text, max_chars.max(1));
        if rows.is_empty() {
            self.ensure_room(height);
            self.y += height;
            return;
        }
        for row in rows {
            self.write_line(&row, height, Align::Left);
        }
    }

    fn advance(&mut self, height: f32) {
        self.y += height;
    }

    fn finish(mut self) -> Vec<u8> {
        self.pages.push(self.content);
        let page_count = self.pages.len();

        // Object ids: 1 catalog, 2 page tree, 3-5 fonts, then an
        // alternating page/content pair per page.
        let mut objects: Vec<Vec<u8>> = Vec::with_capacity(5 + 2 * page_count);
        objects.push(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());

        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 6 + 2 * i)).collect();
        objects.push(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                page_count
            )
            .into_bytes(),
        );

        for font in Font::ALL {
            objects.push(
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    font.base_font()
                )
                .into_bytes(),
            );
        }

        for (i, stream) in self.pages.into_iter().enumerate() {
            objects.push(
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >> >> \
                     /Contents {} 0 R >>",
                    7 + 2 * i
                )
                .into_bytes(),
            );
            let mut content = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
            content.extend_from_slice(&stream);
            content.extend_from_slice(b"endstream");
            objects.push(content);
        }

        let mut buf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, obj) in objects.iter().enumerate() {
            offsets.push(buf.len());
            buf.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            buf.extend_from_slice(obj);
            buf.extend_from_slice(b"\nendobj\n");
        }

        let xref_start = buf.len();
        buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        buf
    }
}

/// Map text to WinAnsi bytes. Characters with no WinAnsi slot become `?`, so
/// export stays total instead of inheriting the renderer's range as a crash.
fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '\u{20ac}' => 0x80,
            '\u{201a}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201e}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02c6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8a,
            '\u{2039}' => 0x8b,
            '\u{0152}' => 0x8c,
            '\u{017d}' => 0x8e,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{02dc}' => 0x98,
            '\u{2122}' => 0x99,
            '\u{0161}' => 0x9a,
            '\u{203a}' => 0x9b,
            '\u{0153}' => 0x9c,
            '\u{017e}' => 0x9e,
            '\u{0178}' => 0x9f,
            _ => b'?',
        })
        .collect()
}

fn escape_text(encoded: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded.len());
    for &b in encoded {
        if matches!(b, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    // Leading spaces are layout (option indentation); keep them on the
    // first row.
    let indent: String = text.chars().take_while(|c| *c == ' ').collect();

    let mut rows = Vec::new();
    let mut current = indent;
    let mut has_word = false;

    for word in text.split_whitespace() {
        if !has_word {
            current.push_str(word);
            has_word = true;
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }

        // Hard-split words longer than a full row.
        while current.chars().count() > max_chars {
            let head: String = current.chars().take(max_chars).collect();
            let tail: String = current.chars().skip(max_chars).collect();
            rows.push(head);
            current = tail;
        }
    }

    if has_word {
        rows.push(current);
    }
    rows
}

/// Render a parsed quiz as a paginated PDF: centered title, bold numbered
/// stems, indented options, italic answer lines, a gap between questions.
pub fn quiz_to_pdf(questions: &[QuizQuestion], title: &str) -> Vec<u8> {
    let mut doc = DocumentBuilder::new();
    doc.set_font(Font::Regular, 12.0);
    doc.write_line(title, TITLE_ROW, Align::Center);
    doc.advance(ROW);

    for (i, q) in questions.iter().enumerate() {
        doc.set_font(Font::Bold, 12.0);
        doc.write_wrapped(&format!("{}. {}", i + 1, q.question), ROW);

        doc.set_font(Font::Regular, 12.0);
        for (letter, text) in &q.options {
            doc.write_wrapped(&format!("   {letter}. {text}"), OPTION_ROW);
        }

        if let Some(answer) = q.answer {
            doc.set_font(Font::Oblique, 12.0);
            doc.write_line(&format!("Answer: {answer}"), OPTION_ROW, Align::Left);
        }
        doc.advance(GAP);
    }

    doc.finish()
}

/// Render free text as a paginated PDF: centered bold title, then the text
/// line by line in reading order, each line word-wrapped.
pub fn text_to_pdf(text: &str, title: &str) -> Vec<u8> {
    let mut doc = DocumentBuilder::new();
    doc.set_font(Font::Bold, 16.0);
    doc.write_line(title, TITLE_ROW, Align::Center);
    doc.advance(ROW);

    doc.set_font(Font::Regular, 12.0);
    for line in text.lines() {
        doc.write_wrapped(line, ROW);
    }

    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::parse_quiz;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_pdf_header_and_trailer() {
        let buf = text_to_pdf("hello", "Title");
        assert!(buf.starts_with(b"%PDF-1.4"));
        assert!(buf.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_pdf_contains_title_and_body() {
        let buf = text_to_pdf("The body line.", "Analysis Result");
        assert!(contains(&buf, b"(Analysis Result)"));
        assert!(contains(&buf, b"(The body line.)"));
    }

    #[test]
    fn test_quiz_pdf_layout_pieces() {
        let quiz = parse_quiz("1. What is 2+2?\nA. 3\nB. 4\nAnswer: B");
        let buf = quiz_to_pdf(&quiz, "Generated Quiz");

        assert!(contains(&buf, b"(Generated Quiz)"));
        assert!(contains(&buf, b"(1. What is 2+2?)"));
        assert!(contains(&buf, b"(   A. 3)"));
        assert!(contains(&buf, b"(Answer: B)"));
        // Stem uses the bold face and the answer line the oblique one.
        assert!(contains(&buf, b"/Helvetica-Bold"));
        assert!(contains(&buf, b"/Helvetica-Oblique"));
    }

    #[test]
    fn test_pdf_empty_quiz_is_still_valid_document() {
        let buf = quiz_to_pdf(&[], "Generated Quiz");
        assert!(buf.starts_with(b"%PDF-1.4"));
        assert!(buf.ends_with(b"%%EOF"));
        assert_eq!(count(&buf, b"/Contents"), 1);
    }

    #[test]
    fn test_pdf_breaks_pages_on_long_quiz() {
        let mut source = String::new();
        for i in 1..=40 {
            source.push_str(&format!("{i}. Question number {i}?\nA. yes\nB. no\nAnswer: A\n"));
        }
        let quiz = parse_quiz(&source);
        assert_eq!(quiz.len(), 40);

        let buf = quiz_to_pdf(&quiz, "Generated Quiz");
        assert!(count(&buf, b"/Contents") > 1);
    }

    #[test]
    fn test_pdf_escapes_parentheses_and_backslash() {
        let buf = text_to_pdf("weird (text) with \\ inside", "T");
        assert!(contains(&buf, b"\\(text\\)"));
        assert!(contains(&buf, b"\\\\ inside"));
    }

    #[test]
    fn test_winansi_passthrough_and_specials() {
        assert_eq!(encode_winansi("abc"), b"abc".to_vec());
        assert_eq!(encode_winansi("caf\u{e9}"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_winansi("\u{20ac}5"), vec![0x80, b'5']);
        assert_eq!(encode_winansi("\u{2014}"), vec![0x97]);
    }

    #[test]
    fn test_winansi_replaces_out_of_range() {
        assert_eq!(encode_winansi("\u{65e5}\u{672c}"), b"??".to_vec());
        let buf = text_to_pdf("\u{65e5}\u{672c}", "T");
        assert!(contains(&buf, b"(??)"));
    }

    #[test]
    fn test_wrap_text_words() {
        let rows = wrap_text("one two three four", 9);
        assert_eq!(rows, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        let rows = wrap_text("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_text_keeps_option_indent() {
        assert_eq!(wrap_text("   A. 3", 80), vec!["   A. 3"]);
    }

    #[test]
    fn test_pdf_xref_count_matches_objects() {
        let buf = quiz_to_pdf(&parse_quiz("1. Q?\nA. a"), "T");
        // 5 fixed objects + one page + one content stream.
        assert!(contains(&buf, b"xref\n0 8\n"));
        assert!(contains(&buf, b"/Size 8"));
    }
}
