use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Feature key carrying an element's grammatical role.
pub const DISCOURSE_FUNCTION: &str = "discourseFunction";
/// Feature key carrying grammatical number.
pub const NUMBER: &str = "number";

pub const OBJECT: &str = "OBJECT";
pub const SUBJECT: &str = "SUBJECT";
pub const PLURAL: &str = "PLURAL";
pub const SINGULAR: &str = "SINGULAR";

pub type Features = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexicalCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Pronoun,
    Preposition,
    Conjunction,
    Complementiser,
    Modal,
    Symbol,
    Any,
}

impl LexicalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexicalCategory::Noun => "noun",
            LexicalCategory::Verb => "verb",
            LexicalCategory::Adjective => "adj",
            LexicalCategory::Adverb => "adv",
            LexicalCategory::Determiner => "det",
            LexicalCategory::Pronoun => "pron",
            LexicalCategory::Preposition => "prep",
            LexicalCategory::Conjunction => "conj",
            LexicalCategory::Complementiser => "comp",
            LexicalCategory::Modal => "modal",
            LexicalCategory::Symbol => "sym",
            LexicalCategory::Any => "any",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let category = match s {
            "noun" => LexicalCategory::Noun,
            "verb" => LexicalCategory::Verb,
            "adj" => LexicalCategory::Adjective,
            "adv" => LexicalCategory::Adverb,
            "det" => LexicalCategory::Determiner,
            "pron" => LexicalCategory::Pronoun,
            "prep" => LexicalCategory::Preposition,
            "conj" => LexicalCategory::Conjunction,
            "comp" => LexicalCategory::Complementiser,
            "modal" => LexicalCategory::Modal,
            "sym" => LexicalCategory::Symbol,
            "any" => LexicalCategory::Any,
            _ => return None,
        };
        Some(category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
}

impl PhraseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseCategory::Noun => "NP",
            PhraseCategory::Verb => "VP",
            PhraseCategory::Adjective => "ADJP",
            PhraseCategory::Adverb => "ADVP",
            PhraseCategory::Preposition => "PP",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let category = match s {
            "NP" => PhraseCategory::Noun,
            "VP" => PhraseCategory::Verb,
            "ADJP" => PhraseCategory::Adjective,
            "ADVP" => PhraseCategory::Adverb,
            "PP" => PhraseCategory::Preposition,
            _ => return None,
        };
        Some(category)
    }
}

/// A node of a sentence tree.
///
/// Equality is structural: two elements are equal when they are the same kind,
/// carry the same features and have equal children in the same slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Word(Word),
    Phrase(Phrase),
    Clause(Clause),
    Coordination(Coordination),
    /// Marks the substitution site while two trees are being matched.
    /// Never equal to a real element and never part of a returned tree.
    Placeholder,
}

impl Element {
    pub fn features(&self) -> Option<&Features> {
        match self {
            Element::Word(w) => Some(&w.features),
            Element::Phrase(p) => Some(&p.features),
            Element::Clause(c) => Some(&c.features),
            Element::Coordination(c) => Some(&c.features),
            Element::Placeholder => None,
        }
    }

    pub fn features_mut(&mut self) -> Option<&mut Features> {
        match self {
            Element::Word(w) => Some(&mut w.features),
            Element::Phrase(p) => Some(&mut p.features),
            Element::Clause(c) => Some(&mut c.features),
            Element::Coordination(c) => Some(&mut c.features),
            Element::Placeholder => None,
        }
    }

    pub fn feature(&self, key: &str) -> Option<&str> {
        self.features()?.get(key).map(String::as_str)
    }

    /// Sets a feature. Has no effect on the placeholder.
    pub fn set_feature(&mut self, key: &str, value: impl Into<String>) {
        if let Some(features) = self.features_mut() {
            features.insert(String::from(key), value.into());
        }
    }

    pub fn remove_feature(&mut self, key: &str) -> Option<String> {
        self.features_mut()?.remove(key)
    }

    pub fn with_feature(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_feature(key, value);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Element::Placeholder)
    }

    pub fn as_phrase(&self) -> Option<&Phrase> {
        match self {
            Element::Phrase(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_clause(&self) -> Option<&Clause> {
        match self {
            Element::Clause(c) => Some(c),
            _ => None,
        }
    }

    /// Number of nodes in the tree rooted here, this node included.
    pub fn size(&self) -> usize {
        1 + self.children().map(Element::size).sum::<usize>()
    }

    pub fn contains_placeholder(&self) -> bool {
        self.is_placeholder() || self.children().any(Element::contains_placeholder)
    }

    /// Direct children in declaration order. Not the traversal order used for matching.
    pub fn children(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        match self {
            Element::Word(_) | Element::Placeholder => Box::new(std::iter::empty()),
            Element::Phrase(p) => Box::new(
                p.front_modifiers
                    .iter()
                    .chain(p.specifier.as_deref())
                    .chain(p.pre_modifiers.iter())
                    .chain(p.head.as_deref())
                    .chain(p.complements.iter())
                    .chain(p.post_modifiers.iter()),
            ),
            Element::Clause(c) => Box::new(c.subject.as_deref().into_iter().chain(c.predicate.as_deref())),
            Element::Coordination(c) => Box::new(c.coordinates.iter()),
        }
    }
}

impl From<Word> for Element {
    fn from(w: Word) -> Self {
        Element::Word(w)
    }
}

impl From<Phrase> for Element {
    fn from(p: Phrase) -> Self {
        Element::Phrase(p)
    }
}

impl From<Clause> for Element {
    fn from(c: Clause) -> Self {
        Element::Clause(c)
    }
}

impl From<Coordination> for Element {
    fn from(c: Coordination) -> Self {
        Element::Coordination(c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub base: String,
    pub category: LexicalCategory,
    #[serde(default)]
    pub features: Features,
}
impl Word {
    pub fn new(base: &str, category: LexicalCategory) -> Self {
        Self {
            base: String::from(base),
            category: category,
            features: Features::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub category: PhraseCategory,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub front_modifiers: Vec<Element>,
    #[serde(default)]
    pub pre_modifiers: Vec<Element>,
    #[serde(default)]
    pub head: Option<Box<Element>>,
    #[serde(default)]
    pub complements: Vec<Element>,
    #[serde(default)]
    pub post_modifiers: Vec<Element>,
    /// Determiner slot. Only noun phrases carry one.
    #[serde(default)]
    pub specifier: Option<Box<Element>>,
}
impl Phrase {
    pub fn new(category: PhraseCategory) -> Self {
        Self {
            category: category,
            features: Features::new(),
            front_modifiers: Vec::new(),
            pre_modifiers: Vec::new(),
            head: None,
            complements: Vec::new(),
            post_modifiers: Vec::new(),
            specifier: None,
        }
    }

    pub fn noun(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::Noun).with_head(head)
    }

    pub fn verb(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::Verb).with_head(head)
    }

    pub fn preposition(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::Preposition).with_head(head)
    }

    pub fn is_noun_phrase(&self) -> bool {
        self.category == PhraseCategory::Noun
    }

    pub fn with_head(mut self, head: impl Into<Element>) -> Self {
        self.head = Some(Box::new(head.into()));
        self
    }

    pub fn with_specifier(mut self, specifier: impl Into<Element>) -> Self {
        debug_assert!(self.is_noun_phrase(), "only noun phrases take a specifier");
        self.specifier = Some(Box::new(specifier.into()));
        self
    }

    pub fn with_front_modifier(mut self, e: impl Into<Element>) -> Self {
        self.front_modifiers.push(e.into());
        self
    }

    pub fn with_pre_modifier(mut self, e: impl Into<Element>) -> Self {
        self.pre_modifiers.push(e.into());
        self
    }

    pub fn with_complement(mut self, e: impl Into<Element>) -> Self {
        self.complements.push(e.into());
        self
    }

    pub fn with_post_modifier(mut self, e: impl Into<Element>) -> Self {
        self.post_modifiers.push(e.into());
        self
    }

    pub fn with_feature(mut self, key: &str, value: impl Into<String>) -> Self {
        self.features.insert(String::from(key), value.into());
        self
    }

    pub fn with_object(mut self, object: impl Into<Element>) -> Self {
        self.set_object(Some(object.into()));
        self
    }

    fn object_index(&self) -> Option<usize> {
        self.complements
            .iter()
            .position(|c| c.feature(DISCOURSE_FUNCTION) == Some(OBJECT))
    }

    /// The complement tagged as the direct object.
    pub fn object(&self) -> Option<&Element> {
        self.object_index().map(|i| &self.complements[i])
    }

    /// Detaches the direct object, returning its complement position with it.
    pub fn take_object(&mut self) -> Option<(usize, Element)> {
        let i = self.object_index()?;
        Some((i, self.complements.remove(i)))
    }

    /// Replaces the direct object in place, or inserts it as the first complement
    /// when there was none. `None` clears it.
    pub fn set_object(&mut self, object: Option<Element>) {
        match (self.object_index(), object) {
            (Some(i), Some(o)) => self.complements[i] = Self::tag_object(o),
            (None, Some(o)) => self.complements.insert(0, Self::tag_object(o)),
            (Some(i), None) => {
                self.complements.remove(i);
            }
            (None, None) => {}
        }
    }

    /// Puts the object back at a position previously returned by `take_object`.
    pub fn insert_object(&mut self, index: usize, object: Element) {
        let index = index.min(self.complements.len());
        self.complements.insert(index, Self::tag_object(object));
    }

    fn tag_object(object: Element) -> Element {
        object.with_feature(DISCOURSE_FUNCTION, OBJECT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub subject: Option<Box<Element>>,
    #[serde(default)]
    pub predicate: Option<Box<Element>>,
}
impl Clause {
    pub fn new(subject: impl Into<Element>, predicate: impl Into<Element>) -> Self {
        Self {
            features: Features::new(),
            subject: Some(Box::new(subject.into())),
            predicate: Some(Box::new(predicate.into())),
        }
    }

    /// A clause with no subject, e.g. an imperative.
    pub fn imperative(predicate: impl Into<Element>) -> Self {
        Self {
            features: Features::new(),
            subject: None,
            predicate: Some(Box::new(predicate.into())),
        }
    }
}

pub const DEFAULT_CONJUNCTION: &str = "and";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordination {
    pub conjunction: String,
    #[serde(default)]
    pub features: Features,
    pub coordinates: Vec<Element>,
}
impl Coordination {
    pub fn new(coordinates: Vec<Element>) -> Self {
        Self {
            conjunction: String::from(DEFAULT_CONJUNCTION),
            features: Features::new(),
            coordinates: coordinates,
        }
    }
}
