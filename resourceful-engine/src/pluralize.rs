//! Pluralization collaborator used to derive collection paths for creates.

/// Turns a lowercase resource name into its collection name.
pub trait Pluralizer: Send + Sync {
    fn pluralize(&self, word: &str) -> String;
}

/// Regular English plural rules. Irregular nouns are not special-cased.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishPluralizer;

impl Pluralizer for EnglishPluralizer {
    fn pluralize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        if let Some(stem) = word.strip_suffix('y') {
            let after_vowel = stem.ends_with(['a', 'e', 'i', 'o', 'u']);
            if !stem.is_empty() && !after_vowel {
                return format!("{stem}ies");
            }
        }

        let sibilant = word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh");
        if sibilant {
            format!("{word}es")
        } else {
            format!("{word}s")
        }
    }
}
