// src/ports/text.rs
use crate::domain::Note;

/// Renders the note collection for the terminal.
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One row per note: id, name, first line of the description.
    /// Descriptions may span lines; the list view only shows the first.
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes yet.\n".to_string();
        }

        let mut out = String::new();
        for note in notes {
            out.push_str(&format!(
                "{:>6}  {:<24}  {}\n",
                note.id,
                note.name,
                first_line(&note.description)
            ));
        }
        out
    }

    /// Full rendering of a single note, description unabridged.
    pub fn render_note(&self, note: &Note) -> String {
        format!("{:>6}  {}\n{}\n", note.id, note.name, note.description)
    }
}

/// First non-empty line of a text block, trimmed.
pub fn first_line(text: &str) -> &str {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, name: &str, description: &str) -> Note {
        Note {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn given_no_notes_when_rendering_list_then_placeholder_line() {
        let presenter = TextPresenter::new();

        assert_eq!(presenter.render_list(&[]), "No notes yet.\n");
    }

    #[test]
    fn given_notes_when_rendering_list_then_one_row_per_note_in_order() {
        let presenter = TextPresenter::new();
        let notes = vec![note(1, "first", "a"), note(2, "second", "b")];

        let rendered = presenter.render_list(&notes);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("first"));
        assert!(lines[1].contains("second"));
    }

    #[test]
    fn given_multiline_description_when_rendering_list_then_only_first_line_shown() {
        let presenter = TextPresenter::new();
        let notes = vec![note(1, "recipe", "flour and water\nknead for ten minutes")];

        let rendered = presenter.render_list(&notes);

        assert!(rendered.contains("flour and water"));
        assert!(!rendered.contains("knead"));
    }

    #[test]
    fn given_note_when_rendering_single_then_description_unabridged() {
        let presenter = TextPresenter::new();
        let rendered = presenter.render_note(&note(7, "recipe", "flour\nwater"));

        assert!(rendered.contains("recipe"));
        assert!(rendered.contains("flour\nwater"));
    }

    #[test]
    fn given_leading_blank_lines_when_extracting_first_line_then_skips_them() {
        assert_eq!(first_line("\n\n  actual content  \nrest"), "actual content");
    }

    #[test]
    fn given_empty_text_when_extracting_first_line_then_empty() {
        assert_eq!(first_line(""), "");
    }
}
