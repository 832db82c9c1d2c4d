//! Wire models for the translate and glossary endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Format tag sent with glossary entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntriesFormat {
    /// Tab-separated `source\ttarget` pairs, one per line
    Tsv,
}

impl fmt::Display for EntriesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntriesFormat::Tsv => write!(f, "tsv"),
        }
    }
}

/// Translation request
///
/// Every field is always serialized. An empty `source_lang` asks the
/// service to auto-detect, an empty `glossary_id` means no glossary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Texts to translate, in order
    #[serde(rename = "text")]
    pub texts: Vec<String>,
    /// Target language code, validated remotely
    pub target_lang: String,
    /// Source language code, empty for auto-detect
    pub source_lang: String,
    /// Glossary to apply, empty for none
    pub glossary_id: String,
}

impl TranslationRequest {
    /// Create a request with auto-detected source and no glossary
    pub fn new<I, S>(texts: I, target_lang: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            target_lang: target_lang.into(),
            source_lang: String::new(),
            glossary_id: String::new(),
        }
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = source_lang.into();
        self
    }

    /// Set the glossary ID
    pub fn with_glossary_id(mut self, glossary_id: impl Into<String>) -> Self {
        self.glossary_id = glossary_id.into();
        self
    }
}

/// One translated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Language the service detected (or was told) for the input
    pub detected_source_language: String,
    /// Translated text
    pub text: String,
}

/// Body of a `POST /translate` response
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    /// One entry per input text, same order
    pub translations: Vec<Translation>,
}

/// Payload for `POST /glossaries`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryCreateRequest {
    /// Display name
    pub name: String,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Always [`EntriesFormat::Tsv`]
    pub entries_format: EntriesFormat,
    /// LF-terminated TSV entries
    pub entries: String,
}

impl GlossaryCreateRequest {
    /// Build a TSV glossary payload from already-normalized entries
    pub fn tsv(
        name: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        entries: String,
    ) -> Self {
        Self {
            name: name.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            entries_format: EntriesFormat::Tsv,
            entries,
        }
    }
}

/// Glossary metadata returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    /// Opaque glossary ID
    #[serde(rename = "glossary_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the glossary can be used yet
    pub ready: bool,
    /// Source language code
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
    /// Creation timestamp, kept as sent
    pub creation_time: String,
    /// Number of term pairs
    pub entry_count: u64,
}

/// Body of a `GET /glossaries` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlossaryList {
    /// All glossaries owned by the account
    pub glossaries: Vec<Glossary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn test_translation_request_wire_format() {
        let request = TranslationRequest::new(["Hello", "World"], "DE");
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"text":["Hello","World"],"target_lang":"DE","source_lang":"","glossary_id":""}"#
        );
    }

    #[test]
    fn test_translation_request_builders() {
        let request = TranslationRequest::new(vec!["Hi".to_string()], "FR")
            .with_source_lang("EN")
            .with_glossary_id("g-1");

        assert_json_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "text": ["Hi"],
                "target_lang": "FR",
                "source_lang": "EN",
                "glossary_id": "g-1"
            })
        );
    }

    #[test]
    fn test_glossary_create_request_format() {
        let payload = GlossaryCreateRequest::tsv("terms", "EN", "DE", "a\tb\n".to_string());
        assert_json_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "terms",
                "source_lang": "EN",
                "target_lang": "DE",
                "entries_format": "tsv",
                "entries": "a\tb\n"
            })
        );
    }

    #[test]
    fn test_glossary_decodes_every_field() {
        let body = r#"{
            "glossary_id": "def3a26b-3e84-45b3-84ae-0c0aaf3525f7",
            "name": "My Glossary",
            "ready": true,
            "source_lang": "en",
            "target_lang": "de",
            "creation_time": "2021-08-03T14:16:18.329Z",
            "entry_count": 2
        }"#;

        let glossary: Glossary = serde_json::from_str(body).unwrap();
        assert_eq!(
            glossary,
            Glossary {
                id: "def3a26b-3e84-45b3-84ae-0c0aaf3525f7".to_string(),
                name: "My Glossary".to_string(),
                ready: true,
                source_lang: "en".to_string(),
                target_lang: "de".to_string(),
                creation_time: "2021-08-03T14:16:18.329Z".to_string(),
                entry_count: 2,
            }
        );
    }

    #[test]
    fn test_glossary_list_requires_glossaries_field() {
        assert!(serde_json::from_str::<GlossaryList>("{}").is_err());

        let list: GlossaryList = serde_json::from_str(r#"{"glossaries":[]}"#).unwrap();
        assert!(list.glossaries.is_empty());
    }

    #[test]
    fn test_translation_response_preserves_order() {
        let body = json!({
            "translations": [
                {"detected_source_language": "EN", "text": "Hallo"},
                {"detected_source_language": "EN", "text": "Welt"}
            ]
        });
        let response: TranslationResponse = serde_json::from_value(body).unwrap();
        let texts: Vec<_> = response.translations.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Hallo", "Welt"]);
    }
}
