//! Prompt text and parsing of model output
//!
//! The upstream model is asked for bare JSON but routinely wraps it in
//! markdown fences or adds a sentence of prose. The card list is the first
//! complete JSON array in the text; prose on either side is ignored, even
//! when it contains brackets of its own.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use super::{GatewayError, Result};
use crate::flashcards::{Card, GenerationRequest, LanguagePair};

/// Build the instruction for a batch of cards
pub fn generation_prompt(request: &GenerationRequest) -> String {
    let from = request.language_pair.source().name_nominative();
    let to = request.language_pair.target().name_nominative();

    format!(
        "Создай {count} флеш-карточек для изучения языка на тему \"{topic}\".\n\
         \n\
         Язык оригинала: {from}\n\
         Язык перевода: {to}\n\
         \n\
         Верни ТОЛЬКО валидный JSON массив в следующем формате (без дополнительного текста, без markdown):\n\
         [\n  {{\n    \"front\": \"слово или фраза на {from}\",\n    \"back\": \"перевод на {to}\"\n  }}\n]\n\
         \n\
         ВАЖНО: Верни только JSON массив, никакого другого текста!",
        count = request.count,
        topic = request.topic,
        from = from,
        to = to,
    )
}

/// Build the instruction for a single-word translation
pub fn translation_prompt(word: &str, pair: LanguagePair) -> String {
    format!(
        "Переведи с {from} на {to}: \"{word}\"\n\nВерни ТОЛЬКО перевод, без дополнительного текста.",
        from = pair.source().name_genitive(),
        to = pair.target().name_nominative(),
        word = word,
    )
}

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"```[A-Za-z]*[ \t]*\r?\n?").unwrap())
}

/// Remove markdown code fences (```json, ```) and trim
pub fn strip_code_fences(text: &str) -> String {
    fence_pattern().replace_all(text, "").trim().to_string()
}

#[derive(Deserialize)]
struct RawCard {
    front: String,
    back: String,
}

/// Find the card list: the first `[` that starts a complete array of
/// `{front, back}` objects. Parsing stops at the end of that array.
/// An empty array is only used when no non-empty one exists.
fn find_card_array(text: &str) -> Result<Vec<RawCard>> {
    let mut first_error = None;
    let mut saw_empty = false;

    for (start, _) in text.match_indices('[') {
        let mut stream =
            serde_json::Deserializer::from_str(&text[start..]).into_iter::<Vec<RawCard>>();
        match stream.next() {
            Some(Ok(raw)) if raw.is_empty() => saw_empty = true,
            Some(Ok(raw)) => return Ok(raw),
            Some(Err(e)) => {
                first_error.get_or_insert(e);
            }
            None => {}
        }
    }

    if saw_empty {
        return Ok(Vec::new());
    }
    Err(match first_error {
        Some(e) => GatewayError::MalformedResponse(format!("invalid card list: {}", e)),
        None => GatewayError::MalformedResponse("no JSON array in response".to_string()),
    })
}

/// Parse model output into exactly `expected` cards
pub fn parse_cards(text: &str, expected: usize) -> Result<Vec<Card>> {
    let cleaned = strip_code_fences(text);
    let raw = find_card_array(&cleaned)?;

    let mut cards = Vec::with_capacity(raw.len());
    for (i, entry) in raw.into_iter().enumerate() {
        let front = entry.front.trim();
        let back = entry.back.trim();
        if front.is_empty() || back.is_empty() {
            return Err(GatewayError::MalformedResponse(format!(
                "card {} has an empty side",
                i + 1
            )));
        }
        cards.push(Card::new(front, back));
    }

    if cards.len() != expected {
        return Err(GatewayError::CountMismatch {
            expected,
            actual: cards.len(),
        });
    }

    Ok(cards)
}

/// Trim a translation and drop one layer of wrapping quotes
pub fn clean_translation(text: &str) -> Result<String> {
    let trimmed = strip_code_fences(text);
    let unquoted = [('"', '"'), ('«', '»'), ('\'', '\''), ('“', '”')]
        .iter()
        .find_map(|(open, close)| {
            trimmed
                .strip_prefix(*open)
                .and_then(|rest| rest.strip_suffix(*close))
        })
        .unwrap_or(trimmed.as_str())
        .trim();

    if unquoted.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "empty translation".to_string(),
        ));
    }
    Ok(unquoted.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(count: u8) -> GenerationRequest {
        GenerationRequest {
            topic: "еда".to_string(),
            count,
            language_pair: LanguagePair::RuEn,
        }
    }

    #[test]
    fn test_generation_prompt_mentions_count_topic_and_languages() {
        let prompt = generation_prompt(&request(7));
        assert!(prompt.contains("Создай 7 флеш-карточек"));
        assert!(prompt.contains("\"еда\""));
        assert!(prompt.contains("Язык оригинала: русский"));
        assert!(prompt.contains("Язык перевода: английский"));
        assert!(prompt.contains("\"front\""));
    }

    #[test]
    fn test_translation_prompt_uses_genitive_source() {
        let prompt = translation_prompt("house", LanguagePair::EnRu);
        assert!(prompt.starts_with("Переведи с английского на русский: \"house\""));
    }

    #[test]
    fn test_parse_plain_array() {
        let text = r#"[{"front": "собака", "back": "dog"}, {"front": "кошка", "back": "cat"}]"#;
        let cards = parse_cards(text, 2).unwrap();
        assert_eq!(cards, vec![Card::new("собака", "dog"), Card::new("кошка", "cat")]);
    }

    #[test]
    fn test_parse_strips_fences_and_prose() {
        let text = "Here are your cards:\n```json\n[\n  {\"front\": \" хлеб \", \"back\": \"bread\"}\n]\n```\nEnjoy!";
        let cards = parse_cards(text, 1).unwrap();
        assert_eq!(cards, vec![Card::new("хлеб", "bread")]);
    }

    #[test]
    fn test_parse_ignores_brackets_in_leading_prose() {
        let text = "Here are 1 cards [ru-en]:\n```json\n[{\"front\": \"хлеб\", \"back\": \"bread\"}]\n```";
        let cards = parse_cards(text, 1).unwrap();
        assert_eq!(cards, vec![Card::new("хлеб", "bread")]);
    }

    #[test]
    fn test_parse_ignores_brackets_in_trailing_prose() {
        let text = "[{\"front\": \"хлеб\", \"back\": \"bread\"}]\nNote: words are nouns [A1 level].";
        let cards = parse_cards(text, 1).unwrap();
        assert_eq!(cards, vec![Card::new("хлеб", "bread")]);
    }

    #[test]
    fn test_parse_skips_empty_brackets_before_cards() {
        let text = "Tags: []\n[{\"front\": \"вода\", \"back\": \"water\"}]";
        let cards = parse_cards(text, 1).unwrap();
        assert_eq!(cards, vec![Card::new("вода", "water")]);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("  plain  "), "plain");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_cards("Sorry, I can't help with that.", 5).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));

        let err = parse_cards("[not json]", 1).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let err = parse_cards(r#"[{"word": "a", "translation": "b"}]"#, 1).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_empty_side() {
        let err = parse_cards(r#"[{"front": "a", "back": "  "}]"#, 1).unwrap_err();
        assert!(matches!(err, GatewayError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_rejects_count_mismatch() {
        let text = r#"[{"front": "a", "back": "b"}]"#;
        let err = parse_cards(text, 5).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::CountMismatch { expected: 5, actual: 1 }
        ));
    }

    #[test]
    fn test_clean_translation() {
        assert_eq!(clean_translation("  dog \n").unwrap(), "dog");
        assert_eq!(clean_translation("\"собака\"").unwrap(), "собака");
        assert_eq!(clean_translation("«собака»").unwrap(), "собака");
        assert!(clean_translation("   ").is_err());
        assert!(clean_translation("\"\"").is_err());
    }
}
