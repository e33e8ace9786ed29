//! English inflection
//!
//! The namer only depends on the [`Inflector`] trait; [`English`] is the
//! rule-based implementation used by default.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

mod case;
mod rules;

use case::{interpolate, restore_case};

/// Answers singular/plural questions about English words
///
/// Implementations must be pure: the same word always gets the same answer.
///
/// # Examples
///
/// ```
/// use pathparse::{English, Inflector};
///
/// let english = English::shared();
/// assert!(english.is_plural("users"));
/// assert!(english.is_singular("profile"));
/// assert_eq!(english.singularize("users"), "user");
/// ```
pub trait Inflector {
    /// Whether `word` is already in singular form
    fn is_singular(&self, word: &str) -> bool;

    /// Whether `word` is already in plural form
    fn is_plural(&self, word: &str) -> bool;

    /// Singular form of `word`
    fn singularize(&self, word: &str) -> String;
}

static SHARED: Lazy<English> = Lazy::new(English::new);

/// A compiled suffix rule
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn compile(source: &str, replacement: &'static str) -> Self {
        let pattern = Regex::new(&format!("(?i){source}"))
            .unwrap_or_else(|err| panic!("invalid inflection rule {source:?}: {err}"));
        Self {
            pattern,
            replacement,
        }
    }

    /// Rewrites the first match in `word`, or `None` if the rule does not apply
    fn apply(&self, word: &str) -> Option<String> {
        let captures = self.pattern.captures(word)?;
        let matched = captures.get(0)?;
        let replaced = interpolate(self.replacement, &captures);

        // An empty match takes its casing from the preceding character
        let cased = if matched.as_str().is_empty() {
            let previous = word[..matched.start()]
                .chars()
                .last()
                .map(String::from)
                .unwrap_or_default();
            restore_case(&previous, &replaced)
        } else {
            restore_case(matched.as_str(), &replaced)
        };

        let mut out = String::with_capacity(word.len() + cased.len());
        out.push_str(&word[..matched.start()]);
        out.push_str(&cased);
        out.push_str(&word[matched.end()..]);
        Some(out)
    }
}

/// Rule-based English inflector
///
/// Lookups go, in order: irregular words, uncountable words, then suffix
/// rules from the most specific (last added) to the most general.
pub struct English {
    /// singular -> plural
    irregular_singles: HashMap<String, String>,
    /// plural -> singular
    irregular_plurals: HashMap<String, String>,
    uncountables: HashSet<&'static str>,
    plural_rules: Vec<Rule>,
    singular_rules: Vec<Rule>,
}

impl English {
    /// Compiles the rule tables
    ///
    /// Prefer [`English::shared`] unless a separate instance is needed.
    pub fn new() -> Self {
        let mut irregular_singles = HashMap::new();
        let mut irregular_plurals = HashMap::new();
        for (single, plural) in rules::IRREGULAR_RULES {
            let single = single.to_lowercase();
            let plural = plural.to_lowercase();
            irregular_singles.insert(single.clone(), plural.clone());
            irregular_plurals.insert(plural, single);
        }

        let uncountable_rules = || {
            rules::UNCOUNTABLE_PATTERNS
                .iter()
                .map(|source| Rule::compile(source, "$0"))
        };

        let plural_rules = rules::PLURAL_RULES
            .iter()
            .map(|(source, replacement)| Rule::compile(source, replacement))
            .chain(uncountable_rules())
            .collect();

        let singular_rules = rules::SINGULAR_RULES
            .iter()
            .map(|(source, replacement)| Rule::compile(source, replacement))
            .chain(uncountable_rules())
            .collect();

        tracing::debug!(
            irregulars = rules::IRREGULAR_RULES.len(),
            uncountables = rules::UNCOUNTABLE_WORDS.len(),
            "compiled English inflection rules"
        );

        Self {
            irregular_singles,
            irregular_plurals,
            uncountables: rules::UNCOUNTABLE_WORDS.iter().copied().collect(),
            plural_rules,
            singular_rules,
        }
    }

    /// Process-wide instance, compiled on first use
    pub fn shared() -> &'static English {
        &SHARED
    }

    /// Plural form of `word`
    ///
    /// ```
    /// use pathparse::English;
    ///
    /// let english = English::shared();
    /// assert_eq!(english.pluralize("user"), "users");
    /// assert_eq!(english.pluralize("Person"), "People");
    /// ```
    pub fn pluralize(&self, word: &str) -> String {
        self.replace_word(
            word,
            &self.irregular_singles,
            &self.irregular_plurals,
            &self.plural_rules,
        )
    }

    fn replace_word(
        &self,
        word: &str,
        replace: &HashMap<String, String>,
        keep: &HashMap<String, String>,
        rules: &[Rule],
    ) -> String {
        let token = word.to_lowercase();

        if keep.contains_key(&token) {
            return restore_case(word, &token);
        }

        if let Some(replacement) = replace.get(&token) {
            return restore_case(word, replacement);
        }

        self.sanitize(&token, word, rules)
    }

    fn check_word(
        &self,
        word: &str,
        replace: &HashMap<String, String>,
        keep: &HashMap<String, String>,
        rules: &[Rule],
    ) -> bool {
        let token = word.to_lowercase();

        if keep.contains_key(&token) {
            return true;
        }

        if replace.contains_key(&token) {
            return false;
        }

        self.sanitize(&token, &token, rules) == token
    }

    fn sanitize(&self, token: &str, word: &str, rules: &[Rule]) -> String {
        if token.is_empty() || self.uncountables.contains(token) {
            return word.to_string();
        }

        rules
            .iter()
            .rev()
            .find_map(|rule| rule.apply(word))
            .unwrap_or_else(|| word.to_string())
    }
}

impl Default for English {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector for English {
    fn is_singular(&self, word: &str) -> bool {
        self.check_word(
            word,
            &self.irregular_plurals,
            &self.irregular_singles,
            &self.singular_rules,
        )
    }

    fn is_plural(&self, word: &str) -> bool {
        self.check_word(
            word,
            &self.irregular_singles,
            &self.irregular_plurals,
            &self.plural_rules,
        )
    }

    fn singularize(&self, word: &str) -> String {
        self.replace_word(
            word,
            &self.irregular_plurals,
            &self.irregular_singles,
            &self.singular_rules,
        )
    }
}
