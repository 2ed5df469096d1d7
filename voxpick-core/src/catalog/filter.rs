use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::types::{Gender, Voice};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
}

impl GenderFilter {
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
        }
    }

    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|g| *g == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|g| *g == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// User-controlled filters over the voice catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub language_code: Option<String>,
    pub gender: GenderFilter,
    pub search_query: String,
}

impl FilterState {
    /// All three filters must pass. The search query matches name, id or
    /// locale, case-insensitively.
    pub fn matches(&self, voice: &Voice) -> bool {
        if let Some(code) = self.language_code.as_deref() {
            if voice.language != code {
                return false;
            }
        }

        if !self.gender.matches(voice.gender) {
            return false;
        }

        if self.search_query.is_empty() {
            return true;
        }

        let query = self.search_query.to_lowercase();
        voice.name.to_lowercase().contains(&query)
            || voice.id.to_lowercase().contains(&query)
            || voice.locale.to_lowercase().contains(&query)
    }
}

/// Ordering used for every list shown to the user. Case is ignored first so
/// "alice" sorts next to "Alice", then the raw strings break the tie.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Recomputes the visible voice list from scratch, sorted by name.
pub fn filter_voices(voices: &[Voice], filter: &FilterState) -> Vec<Voice> {
    let mut result: Vec<Voice> = voices
        .iter()
        .filter(|voice| filter.matches(voice))
        .cloned()
        .collect();
    result.sort_by(|a, b| compare_names(&a.name, &b.name));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn voice(id: &str, name: &str, language: &str, locale: &str, gender: Gender) -> Voice {
        Voice {
            id: id.to_string(),
            name: name.to_string(),
            language: language.to_string(),
            locale: locale.to_string(),
            gender,
            country: None,
        }
    }

    fn catalog() -> Vec<Voice> {
        vec![
            voice("ru-RU-SvetlanaNeural", "Svetlana - ru-RU (Female)", "Russian", "ru-RU", Gender::Female),
            voice("ru-RU-DmitryNeural", "Dmitry - ru-RU (Male)", "Russian", "ru-RU", Gender::Male),
            voice("en-US-GuyNeural", "Guy - en-US (Male)", "English", "en-US", Gender::Male),
            voice("en-US-AriaNeural", "Aria - en-US (Female)", "English", "en-US", Gender::Female),
            voice("en-GB-SoniaNeural", "Sonia - en-GB (Female)", "English", "en-GB", Gender::Female),
            voice("de-DE-KatjaNeural", "Katja - de-DE (Female)", "German", "de-DE", Gender::Female),
        ]
    }

    fn ids(voices: &[Voice]) -> Vec<&str> {
        voices.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn search_ru_matches_only_russian_locale() {
        let voices = vec![
            voice("ru-RU-A", "A", "Russian", "ru-RU", Gender::Female),
            voice("en-US-B", "B", "English", "en-US", Gender::Male),
        ];
        let filter = FilterState {
            search_query: "ru".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_voices(&voices, &filter)), vec!["ru-RU-A"]);
    }

    #[rstest]
    #[case(None, GenderFilter::All, "", 6)]
    #[case(Some("English"), GenderFilter::All, "", 3)]
    #[case(Some("English"), GenderFilter::Female, "", 2)]
    #[case(Some("English"), GenderFilter::Female, "gb", 1)]
    #[case(None, GenderFilter::Male, "", 2)]
    #[case(None, GenderFilter::All, "NEURAL", 6)]
    #[case(Some("German"), GenderFilter::Male, "", 0)]
    #[case(None, GenderFilter::All, "nobody", 0)]
    fn filter_is_conjunctive(
        #[case] language: Option<&str>,
        #[case] gender: GenderFilter,
        #[case] query: &str,
        #[case] expected: usize,
    ) {
        let voices = catalog();
        let filter = FilterState {
            language_code: language.map(str::to_string),
            gender,
            search_query: query.to_string(),
        };
        let result = filter_voices(&voices, &filter);
        assert_eq!(result.len(), expected);

        // Exactly the voices satisfying the predicate, nothing more.
        let expected_ids: Vec<&str> = voices
            .iter()
            .filter(|v| language.map_or(true, |l| v.language == l))
            .filter(|v| gender.matches(v.gender))
            .filter(|v| {
                let q = query.to_lowercase();
                q.is_empty()
                    || v.name.to_lowercase().contains(&q)
                    || v.id.to_lowercase().contains(&q)
                    || v.locale.to_lowercase().contains(&q)
            })
            .map(|v| v.id.as_str())
            .collect();
        let mut got = ids(&result);
        got.sort();
        let mut want = expected_ids;
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn search_matches_any_of_name_id_locale() {
        let voices = catalog();

        let by_name = FilterState {
            search_query: "katja".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_voices(&voices, &by_name)), vec!["de-DE-KatjaNeural"]);

        let by_locale = FilterState {
            search_query: "EN-gb".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_voices(&voices, &by_locale)), vec!["en-GB-SoniaNeural"]);
    }

    #[test]
    fn results_are_sorted_by_name() {
        let filter = FilterState {
            language_code: Some("English".to_string()),
            ..Default::default()
        };
        let result = filter_voices(&catalog(), &filter);
        assert_eq!(
            ids(&result),
            vec!["en-US-AriaNeural", "en-US-GuyNeural", "en-GB-SoniaNeural"]
        );
    }

    #[test]
    fn compare_names_ignores_case_first() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Bob", "alice"), Ordering::Greater);
        assert_eq!(compare_names("Alice", "alice"), Ordering::Less);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn gender_filter_cycles() {
        assert_eq!(GenderFilter::All.next(), GenderFilter::Male);
        assert_eq!(GenderFilter::Female.next(), GenderFilter::All);
        assert_eq!(GenderFilter::All.prev(), GenderFilter::Female);
        assert_eq!(GenderFilter::Male.to_string(), "male");
    }
}
