//! Bracketed text form for sentence trees.
//!
//! ```text
//! (S subj: (NP head: "John"/noun)
//!    vp: (VP {number=SINGULAR} head: "write"/verb
//!            comp: [(NP {discourseFunction=OBJECT} spec: "an"/det head: "article"/noun)]))
//! ```
//!
//! Words are `"base"/category`, phrases `(NP|VP|PP|ADJP|ADVP ...)` with named
//! slots, clauses `(S subj: .. vp: ..)`, coordinations `(COORD "and" a b ..)`
//! and the placeholder `_`. Any node may carry `{key=VALUE, ..}` right after
//! its head token. `Display` on [`Element`] prints the same form.

use std::fmt;

use pest::{iterators::{Pair, Pairs}, Parser};
use pest_derive::Parser;
use thiserror::Error;

use super::element::{Clause, Coordination, Element, Features, LexicalCategory, Phrase, PhraseCategory, Word};

#[derive(Parser)]
#[grammar = "structure/grammar.pest"] // relative to src
struct PestNotationParser;

pub struct NotationParser;

#[derive(Error, Debug)]
pub enum NotationError {
    #[error("Failed to parse sentence: {0}")]
    FailSentence(String),
    #[error("Unknown word category \"{0}\"")]
    UnknownCategory(String),
    #[error("Unknown phrase category \"{0}\"")]
    UnknownPhrase(String),
    #[error("Slot \"{0}\" given more than once in {1}")]
    DuplicateSlot(String, String),
    #[error("Only noun phrases take a specifier: {0}")]
    MisplacedSpecifier(String),
    #[error("A coordination needs at least two members: {0}")]
    ShortCoordination(String),
    #[error("Unexpected input \"{0}\"")]
    Unexpected(String),
}

impl NotationParser {
    pub fn parse_sentence(input: &str) -> Result<Element, NotationError> {
        let mut pairs = PestNotationParser::parse(Rule::sentence, input)
            .map_err(|_| NotationError::FailSentence(String::from(input)))?;
        let sentence = next_pair(&mut pairs, input)?;
        let element = next_pair(&mut sentence.into_inner(), input)?;
        Self::parse_element(element)
    }

    fn parse_element(pair: Pair<Rule>) -> Result<Element, NotationError> {
        let pair_str = pair.as_str();
        let inner = next_pair(&mut pair.into_inner(), pair_str)?;
        match inner.as_rule() {
            Rule::placeholder => Ok(Element::Placeholder),
            Rule::word => Ok(Element::Word(Self::parse_word(inner)?)),
            Rule::clause => Ok(Element::Clause(Self::parse_clause(inner)?)),
            Rule::coordination => Ok(Element::Coordination(Self::parse_coordination(inner)?)),
            Rule::phrase => Ok(Element::Phrase(Self::parse_phrase(inner)?)),
            _ => Err(NotationError::Unexpected(String::from(pair_str))),
        }
    }

    fn parse_word(pair: Pair<Rule>) -> Result<Word, NotationError> {
        let pair_str = pair.as_str();
        let mut pairs = pair.into_inner();
        let base = unquote(next_pair(&mut pairs, pair_str)?.as_str());
        let category_str = next_pair(&mut pairs, pair_str)?.as_str();
        let category = LexicalCategory::from_str(category_str)
            .ok_or_else(|| NotationError::UnknownCategory(String::from(category_str)))?;
        let mut word = Word::new(&base, category);
        if let Some(features) = pairs.next() {
            word.features = Self::parse_features(features)?;
        }
        Ok(word)
    }

    fn parse_clause(pair: Pair<Rule>) -> Result<Clause, NotationError> {
        let pair_str = pair.as_str();
        let mut clause = Clause {
            features: Features::new(),
            subject: None,
            predicate: None,
        };
        for p in pair.into_inner() {
            match p.as_rule() {
                Rule::features => clause.features = Self::parse_features(p)?,
                Rule::clause_slot => {
                    let mut slot = p.into_inner();
                    let name = next_pair(&mut slot, pair_str)?.as_str();
                    let element = Self::parse_element(next_pair(&mut slot, pair_str)?)?;
                    let target = match name {
                        "subj" => &mut clause.subject,
                        "vp" => &mut clause.predicate,
                        _ => return Err(NotationError::Unexpected(String::from(name))),
                    };
                    if target.is_some() {
                        return Err(NotationError::DuplicateSlot(String::from(name), String::from(pair_str)));
                    }
                    *target = Some(Box::new(element));
                }
                _ => return Err(NotationError::Unexpected(String::from(p.as_str()))),
            }
        }
        Ok(clause)
    }

    fn parse_coordination(pair: Pair<Rule>) -> Result<Coordination, NotationError> {
        let pair_str = pair.as_str();
        let mut pairs = pair.into_inner();
        let conjunction = unquote(next_pair(&mut pairs, pair_str)?.as_str());
        let mut coordination = Coordination::new(Vec::new());
        coordination.conjunction = conjunction;
        for p in pairs {
            match p.as_rule() {
                Rule::features => coordination.features = Self::parse_features(p)?,
                Rule::element => coordination.coordinates.push(Self::parse_element(p)?),
                _ => return Err(NotationError::Unexpected(String::from(p.as_str()))),
            }
        }
        if coordination.coordinates.len() < 2 {
            return Err(NotationError::ShortCoordination(String::from(pair_str)));
        }
        Ok(coordination)
    }

    fn parse_phrase(pair: Pair<Rule>) -> Result<Phrase, NotationError> {
        let pair_str = pair.as_str();
        let mut pairs = pair.into_inner();
        let category_str = next_pair(&mut pairs, pair_str)?.as_str();
        let category = PhraseCategory::from_str(category_str)
            .ok_or_else(|| NotationError::UnknownPhrase(String::from(category_str)))?;
        let mut phrase = Phrase::new(category);
        for p in pairs {
            match p.as_rule() {
                Rule::features => phrase.features = Self::parse_features(p)?,
                Rule::single_slot => {
                    let mut slot = p.into_inner();
                    let name = next_pair(&mut slot, pair_str)?.as_str();
                    let element = Self::parse_element(next_pair(&mut slot, pair_str)?)?;
                    let target = match name {
                        "head" => &mut phrase.head,
                        "spec" if phrase.is_noun_phrase() => &mut phrase.specifier,
                        "spec" => return Err(NotationError::MisplacedSpecifier(String::from(pair_str))),
                        _ => return Err(NotationError::Unexpected(String::from(name))),
                    };
                    if target.is_some() {
                        return Err(NotationError::DuplicateSlot(String::from(name), String::from(pair_str)));
                    }
                    *target = Some(Box::new(element));
                }
                Rule::list_slot => {
                    let mut slot = p.into_inner();
                    let name = next_pair(&mut slot, pair_str)?.as_str();
                    let elements = slot.map(Self::parse_element).collect::<Result<Vec<_>, _>>()?;
                    let target = match name {
                        "front" => &mut phrase.front_modifiers,
                        "pre" => &mut phrase.pre_modifiers,
                        "comp" => &mut phrase.complements,
                        "post" => &mut phrase.post_modifiers,
                        _ => return Err(NotationError::Unexpected(String::from(name))),
                    };
                    if !target.is_empty() {
                        return Err(NotationError::DuplicateSlot(String::from(name), String::from(pair_str)));
                    }
                    *target = elements;
                }
                _ => return Err(NotationError::Unexpected(String::from(p.as_str()))),
            }
        }
        Ok(phrase)
    }

    fn parse_features(pair: Pair<Rule>) -> Result<Features, NotationError> {
        let pair_str = pair.as_str();
        let mut features = Features::new();
        for feature in pair.into_inner() {
            let mut kv = feature.into_inner();
            let key = next_pair(&mut kv, pair_str)?.as_str();
            let value = next_pair(&mut kv, pair_str)?.as_str();
            features.insert(String::from(key), String::from(value));
        }
        Ok(features)
    }
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, context: &str) -> Result<Pair<'i, Rule>, NotationError> {
    pairs.next().ok_or_else(|| NotationError::FailSentence(String::from(context)))
}

/// Strips the surrounding quotes and resolves `\"` and `\\`.
fn unquote(s: &str) -> String {
    let inner = s.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(s);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            c => out.push(c),
        }
    }
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn write_features(f: &mut fmt::Formatter<'_>, features: &Features) -> fmt::Result {
    if features.is_empty() {
        return Ok(());
    }
    let joint: Vec<String> = features.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    write!(f, " {{{}}}", joint.join(", "))
}

fn write_list(f: &mut fmt::Formatter<'_>, name: &str, elements: &[Element]) -> fmt::Result {
    if elements.is_empty() {
        return Ok(());
    }
    let joint: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
    write!(f, " {}: [{}]", name, joint.join(" "))
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Placeholder => write!(f, "_"),
            Element::Word(w) => {
                write!(f, "{}/{}", quote(&w.base), w.category.as_str())?;
                write_features(f, &w.features)
            }
            Element::Phrase(p) => {
                write!(f, "({}", p.category.as_str())?;
                write_features(f, &p.features)?;
                write_list(f, "front", &p.front_modifiers)?;
                if let Some(spec) = &p.specifier {
                    write!(f, " spec: {}", spec)?;
                }
                write_list(f, "pre", &p.pre_modifiers)?;
                if let Some(head) = &p.head {
                    write!(f, " head: {}", head)?;
                }
                write_list(f, "comp", &p.complements)?;
                write_list(f, "post", &p.post_modifiers)?;
                write!(f, ")")
            }
            Element::Clause(c) => {
                write!(f, "(S")?;
                write_features(f, &c.features)?;
                if let Some(subject) = &c.subject {
                    write!(f, " subj: {}", subject)?;
                }
                if let Some(predicate) = &c.predicate {
                    write!(f, " vp: {}", predicate)?;
                }
                write!(f, ")")
            }
            Element::Coordination(c) => {
                write!(f, "(COORD {}", quote(&c.conjunction))?;
                write_features(f, &c.features)?;
                for member in &c.coordinates {
                    write!(f, " {}", member)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::element::{DISCOURSE_FUNCTION, OBJECT};

    #[test]
    fn display_prints_parseable_notation() {
        let object = Phrase::noun(Word::new("apple", LexicalCategory::Noun))
            .with_specifier(Word::new("the", LexicalCategory::Determiner));
        let vp = Phrase::verb(Word::new("put", LexicalCategory::Verb)).with_object(object);
        let clause = Element::from(Clause::imperative(vp));

        let printed = clause.to_string();
        assert_eq!(
            printed,
            "(S vp: (VP head: \"put\"/verb comp: [(NP {discourseFunction=OBJECT} spec: \"the\"/det head: \"apple\"/noun)]))"
        );
        assert_eq!(NotationParser::parse_sentence(&printed).unwrap(), clause);
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let word = Element::from(Word::new("say \"hi\" \\ bye", LexicalCategory::Verb));
        let mut coordination = Coordination::new(vec![word.clone(), word.clone()]);
        coordination.conjunction = String::from("\"or\"");
        let coordination = Element::from(coordination);

        let printed = word.to_string();
        assert_eq!(printed, r#""say \"hi\" \\ bye"/verb"#);
        assert_eq!(NotationParser::parse_sentence(&printed).unwrap(), word);
        assert_eq!(NotationParser::parse_sentence(&coordination.to_string()).unwrap(), coordination);
    }

    #[test]
    fn features_attach_to_words() {
        let parsed = NotationParser::parse_sentence("\"it\"/pron {discourseFunction=OBJECT, number=SINGULAR}").unwrap();
        assert_eq!(parsed.feature(DISCOURSE_FUNCTION), Some(OBJECT));
        assert_eq!(parsed.feature("number"), Some("SINGULAR"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            NotationParser::parse_sentence("(VP spec: \"the\"/det)"),
            Err(NotationError::MisplacedSpecifier(_))
        ));
        assert!(matches!(
            NotationParser::parse_sentence("(COORD \"and\" \"a\"/noun)"),
            Err(NotationError::ShortCoordination(_))
        ));
        assert!(matches!(
            NotationParser::parse_sentence("\"a\"/noun extra"),
            Err(NotationError::FailSentence(_))
        ));
        assert!(matches!(
            NotationParser::parse_sentence("\"a\"/thing"),
            Err(NotationError::UnknownCategory(_))
        ));
    }
}
