use vitai_types::Card;

/// First line of every cards file
pub const CARDS_HEADER: &str = "#Word   Definition  Example Audio";

/// Anki's marker for a deliberately empty field
pub const EMPTY_FIELD: &str = "\"\"";

/// Make fetched text safe inside one tab-separated field.
///
/// Anki treats `"` as a field delimiter, so quotes become `'`. Tabs and line
/// breaks would split the row and are collapsed to single spaces.
pub fn strip_quotes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;

    for c in text.chars() {
        match c {
            '"' => {
                out.push('\'');
                in_break = false;
            }
            '\t' | '\n' | '\r' => {
                if !in_break {
                    out.push(' ');
                    in_break = true;
                }
            }
            c => {
                out.push(c);
                in_break = false;
            }
        }
    }

    out
}

fn wrap_li(text: &str) -> String {
    format!("<li align='left'>{}</li>", strip_quotes(text))
}

fn list_items(items: &[String]) -> String {
    items.iter().map(|item| wrap_li(item)).collect()
}

pub fn format_definitions(definitions: &[String]) -> String {
    format!("Definitions:<br><ul>{}</ul><br>", list_items(definitions))
}

/// `""` when there is nothing to show
pub fn format_examples(examples: Option<&[String]>) -> String {
    match examples {
        Some(examples) if !examples.is_empty() => {
            format!("Examples:<br><ul>{}</ul></br>", list_items(examples))
        }
        _ => EMPTY_FIELD.to_string(),
    }
}

/// Name of the clip on disk and in the `[sound:]` tag
pub fn audio_file_name(word: &str) -> String {
    let safe: String = strip_quotes(word)
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{safe}.mp3")
}

pub fn audio_field(card: &Card) -> String {
    match card.audio.bytes() {
        Some(_) => format!("[sound:{}]", audio_file_name(&card.word)),
        None => EMPTY_FIELD.to_string(),
    }
}

/// One cards file line, without the trailing newline
pub fn format_row(card: &Card) -> String {
    [
        strip_quotes(&card.word),
        format_definitions(&card.definitions),
        format_examples(card.examples.as_deref()),
        audio_field(card),
    ]
    .join("\t")
}

#[cfg(test)]
mod tests {
    use vitai_types::Audio;

    use super::*;

    fn card(examples: Option<Vec<&str>>, audio: Audio) -> Card {
        Card {
            word: "apple".to_string(),
            definitions: vec!["A fruit.".to_string(), "A tree.".to_string()],
            examples: examples.map(|e| e.into_iter().map(String::from).collect()),
            audio,
        }
    }

    #[test]
    fn test_row_with_everything() {
        let row = format_row(&card(Some(vec!["An apple a day."]), Audio::Present(vec![1])));
        assert_eq!(
            row,
            "apple\t\
             Definitions:<br><ul><li align='left'>A fruit.</li><li align='left'>A tree.</li></ul><br>\t\
             Examples:<br><ul><li align='left'>An apple a day.</li></ul></br>\t\
             [sound:apple.mp3]"
        );
    }

    #[test]
    fn test_row_without_examples_or_audio() {
        let row = format_row(&card(None, Audio::Absent));
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[2], "\"\"");
        assert_eq!(fields[3], "\"\"");
    }

    #[test]
    fn test_empty_example_list_is_empty_field() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(format_examples(Some(empty.as_slice())), EMPTY_FIELD);
    }

    #[test]
    fn test_double_quotes_never_reach_the_row() {
        let mut c = card(Some(vec!["He said \"hi\"."]), Audio::Absent);
        c.definitions = vec!["So-called \"fruit\".".to_string()];
        let row = format_row(&c);

        let fields: Vec<&str> = row.split('\t').collect();
        assert!(!fields[1].contains('"'));
        assert!(!fields[2].contains('"'));
        assert!(fields[1].contains("So-called 'fruit'."));
        assert!(fields[2].contains("He said 'hi'."));
    }

    #[test]
    fn test_tabs_and_newlines_cannot_split_a_row() {
        assert_eq!(strip_quotes("one\ttwo\r\nthree"), "one two three");

        let mut c = card(None, Audio::Absent);
        c.definitions = vec!["line one\nline two".to_string()];
        let row = format_row(&c);
        assert_eq!(row.split('\t').count(), 4);
        assert!(!row.contains('\n'));
    }

    #[test]
    fn test_audio_file_name_stays_in_directory() {
        assert_eq!(audio_file_name("apple"), "apple.mp3");
        assert_eq!(audio_file_name("../etc/x"), ".._etc_x.mp3");
    }

    #[test]
    fn test_quoted_word_keeps_sound_field_clean() {
        let mut c = card(None, Audio::Present(vec![1]));
        c.word = "say \"cheese\"".to_string();

        let row = format_row(&c);
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields[0], "say 'cheese'");
        assert_eq!(fields[3], "[sound:say 'cheese'.mp3]");
        assert_eq!(audio_file_name(&c.word), "say 'cheese'.mp3");
    }
}
