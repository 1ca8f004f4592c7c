//! Language profiles: the keyword and builtin vocabularies used to classify
//! identifier-shaped tokens.
//!
//! A [`LanguageProfile`] is immutable after construction and read-only to
//! the tokenizer. Profiles are selected by language id through a
//! [`ProfileRegistry`]; unrecognized ids are not an error — the render layer
//! degrades to unhighlighted output.

mod python;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

pub use python::{PYTHON_BUILTINS, PYTHON_KEYWORDS};

/// Keyword and builtin vocabulary for one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    name: SmolStr,
    keywords: FxHashSet<SmolStr>,
    builtins: FxHashSet<SmolStr>,
}

impl LanguageProfile {
    pub fn new(
        name: impl Into<SmolStr>,
        keywords: impl IntoIterator<Item = impl AsRef<str>>,
        builtins: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|s| SmolStr::new(s.as_ref()))
                .collect(),
            builtins: builtins
                .into_iter()
                .map(|s| SmolStr::new(s.as_ref()))
                .collect(),
        }
    }

    /// The bundled Python profile.
    pub fn python() -> Self {
        python::python()
    }

    /// Language id this profile is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    #[inline]
    pub fn is_builtin(&self, text: &str) -> bool {
        self.builtins.contains(text)
    }

    /// The keyword vocabulary, in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(SmolStr::as_str)
    }

    /// The builtin vocabulary, in no particular order.
    pub fn builtins(&self) -> impl Iterator<Item = &str> {
        self.builtins.iter().map(SmolStr::as_str)
    }
}

/// Insertion-ordered registry of language profiles.
///
/// Iteration order is registration order, so listings of bundled languages
/// stay deterministic.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: IndexMap<SmolStr, LanguageProfile>,
}

impl ProfileRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the bundled profiles (currently Python).
    pub fn bundled() -> Self {
        let mut registry = Self::new();
        registry.register(LanguageProfile::python());
        registry
    }

    /// Register a profile under its own name, replacing any previous entry.
    pub fn register(&mut self, profile: LanguageProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Look up a profile by language id.
    ///
    /// Unknown ids return `None`; callers are expected to fall back to
    /// unhighlighted output rather than fail.
    pub fn get(&self, language: &str) -> Option<&LanguageProfile> {
        let found = self.profiles.get(language);
        if found.is_none() {
            tracing::debug!("no profile for language `{language}`, rendering unhighlighted");
        }
        found
    }

    /// Registered language ids, in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
