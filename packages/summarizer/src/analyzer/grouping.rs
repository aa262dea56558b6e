//! Grouping of tagged tokens into entity phrases and POS buckets.

use indexmap::IndexMap;

use crate::types::sentence::Token;

/// NER tag for tokens outside any entity.
const OUTSIDE: &str = "O";

fn entity_tag(token: &Token) -> Option<&str> {
    token
        .named_entity
        .as_deref()
        .filter(|tag| !tag.is_empty() && *tag != OUTSIDE)
}

/// Join runs of same-tagged tokens into phrases, keyed by tag.
///
/// An untagged or "O" token ends the current phrase, and so does a change
/// of tag (compared case-insensitively). A phrase open at the end of the
/// sentence is kept.
pub fn group_entities(tokens: &[Token]) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut current: Option<(String, String)> = None;

    for token in tokens {
        match entity_tag(token) {
            Some(tag) => {
                let continues = current
                    .as_ref()
                    .is_some_and(|(open_tag, _)| open_tag.eq_ignore_ascii_case(tag));

                if continues {
                    if let Some((_, phrase)) = current.as_mut() {
                        phrase.push(' ');
                        phrase.push_str(&token.word);
                    }
                } else {
                    if let Some((open_tag, phrase)) = current.take() {
                        groups.entry(open_tag).or_default().push(phrase);
                    }
                    current = Some((tag.to_string(), token.word.clone()));
                }
            }
            None => {
                if let Some((open_tag, phrase)) = current.take() {
                    groups.entry(open_tag).or_default().push(phrase);
                }
            }
        }
    }

    if let Some((open_tag, phrase)) = current {
        groups.entry(open_tag).or_default().push(phrase);
    }

    groups
}

/// Words of entity tokens keyed by their part-of-speech tag.
pub fn group_parts_of_speech(tokens: &[Token]) -> IndexMap<String, Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();

    for token in tokens.iter().filter(|t| entity_tag(t).is_some()) {
        if let Some(pos) = token.part_of_speech.as_deref() {
            groups
                .entry(pos.to_string())
                .or_default()
                .push(token.word.clone());
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ner(word: &str, tag: &str) -> Token {
        Token::new(word).with_named_entity(tag)
    }

    #[test]
    fn test_adjacent_same_tag_joins() {
        let groups = group_entities(&[
            ner("New", "CITY"),
            ner("York", "city"),
            ner("is", "O"),
            ner("big", "O"),
        ]);
        assert_eq!(groups["CITY"], vec!["New York".to_string()]);
    }

    #[test]
    fn test_tag_change_starts_new_phrase() {
        let groups = group_entities(&[ner("Alice", "PERSON"), ner("Acme", "ORGANIZATION")]);
        assert_eq!(groups["PERSON"], vec!["Alice".to_string()]);
        assert_eq!(groups["ORGANIZATION"], vec!["Acme".to_string()]);
        let tags: Vec<_> = groups.keys().cloned().collect();
        assert_eq!(tags, ["PERSON", "ORGANIZATION"]);
    }

    #[test]
    fn test_separate_runs_are_separate_phrases() {
        let groups = group_entities(&[
            ner("Alice", "PERSON"),
            ner("met", "O"),
            ner("Bob", "PERSON"),
        ]);
        assert_eq!(groups["PERSON"], vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn test_untagged_tokens_break_phrases() {
        let groups = group_entities(&[ner("Alice", "PERSON"), Token::new("x"), ner("Bob", "PERSON")]);
        assert_eq!(groups["PERSON"].len(), 2);
    }

    #[test]
    fn test_pos_only_for_entities() {
        let tokens = [
            Token::new("Alice")
                .with_part_of_speech("NNP")
                .with_named_entity("PERSON"),
            Token::new("runs")
                .with_part_of_speech("VBZ")
                .with_named_entity("O"),
            Token::new("Monday")
                .with_part_of_speech("NNP")
                .with_named_entity("DATE"),
        ];
        let groups = group_parts_of_speech(&tokens);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["NNP"], vec!["Alice".to_string(), "Monday".to_string()]);
    }
}
