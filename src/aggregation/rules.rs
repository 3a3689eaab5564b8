//! Pattern-specific aggregation rules.
//!
//! Each rule takes two clauses and either merges them or returns `None`.
//! Inputs that are not clauses never match.

use tracing::debug;

use crate::structure::element::{Clause, Coordination, Element, DISCOURSE_FUNCTION, NUMBER, PLURAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Subject,
    SubjectPredicate,
    Predicate,
    PredicateDirectObject,
    DirectObject,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::Subject,
        Rule::SubjectPredicate,
        Rule::Predicate,
        Rule::PredicateDirectObject,
        Rule::DirectObject,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Subject => "subject",
            Rule::SubjectPredicate => "subject+predicate",
            Rule::Predicate => "predicate",
            Rule::PredicateDirectObject => "predicate+direct-object",
            Rule::DirectObject => "direct-object",
        }
    }

    pub fn apply(&self, sent1: &Element, sent2: &Element) -> Option<Element> {
        let merged = match self {
            Rule::Subject => aggregate_subjects(sent1, sent2),
            Rule::SubjectPredicate => aggregate_subject_predicate(sent1, sent2),
            Rule::Predicate => aggregate_predicates(sent1, sent2),
            Rule::PredicateDirectObject => aggregate_predicate_direct_object(sent1, sent2),
            Rule::DirectObject => aggregate_direct_objects(sent1, sent2),
        }?;
        debug!(rule = self.name(), first = %sent1, second = %sent2, result = %merged, "aggregated");
        Some(merged)
    }
}

fn clauses<'a>(sent1: &'a Element, sent2: &'a Element) -> Option<(&'a Clause, &'a Clause)> {
    Some((sent1.as_clause()?, sent2.as_clause()?))
}

/// "John is a boy" + "John is tall" => "John is a boy and is tall".
pub fn aggregate_subjects(sent1: &Element, sent2: &Element) -> Option<Element> {
    let (c1, c2) = clauses(sent1, sent2)?;
    if c1.subject != c2.subject {
        return None;
    }
    let p1 = c1.predicate.as_deref()?;
    let p2 = c2.predicate.as_deref()?;

    let coord_pred = Coordination::new(vec![p1.clone(), p2.clone()]);
    Some(Element::Clause(Clause {
        features: c1.features.clone(),
        subject: c1.subject.clone(),
        predicate: Some(Box::new(coord_pred.into())),
    }))
}

/// "John is a boy" + "John is tall" => "John is a boy and tall".
/// Not implemented yet; never matches.
pub fn aggregate_subject_predicate(_sent1: &Element, _sent2: &Element) -> Option<Element> {
    None
}

/// "John has a pen" + "Mary has a book" => "John and Mary have a pen and a book".
/// Not implemented yet; never matches.
pub fn aggregate_predicates(_sent1: &Element, _sent2: &Element) -> Option<Element> {
    None
}

/// "John wrote an article" + "Mary wrote an article" => "John and Mary wrote an article".
pub fn aggregate_predicate_direct_object(sent1: &Element, sent2: &Element) -> Option<Element> {
    let (c1, c2) = clauses(sent1, sent2)?;
    let predicate = c1.predicate.as_deref()?;
    if c2.predicate.as_deref() != Some(predicate) {
        return None;
    }
    let s1 = c1.subject.as_deref()?;
    let s2 = c2.subject.as_deref()?;

    let coord_subject = Coordination::new(vec![s1.clone(), s2.clone()]);
    let mut predicate = predicate.clone();
    predicate.set_feature(NUMBER, PLURAL);
    Some(Element::Clause(Clause {
        features: c1.features.clone(),
        subject: Some(Box::new(coord_subject.into())),
        predicate: Some(Box::new(predicate)),
    }))
}

/// "Put the apple in the basket" + "Put the pear in the basket" =>
/// "Put the apple and the pear in the basket".
pub fn aggregate_direct_objects(sent1: &Element, sent2: &Element) -> Option<Element> {
    if sent1 == sent2 {
        return Some(sent1.clone());
    }
    let (c1, c2) = clauses(sent1, sent2)?;
    let vp1 = c1.predicate.as_deref()?.as_phrase()?;
    let vp2 = c2.predicate.as_deref()?.as_phrase()?;
    if c1.subject != c2.subject || vp1.head != vp2.head {
        return None;
    }

    let mut vp1 = vp1.clone();
    let mut vp2 = vp2.clone();
    let (index, mut o1) = vp1.take_object()?;
    let (_, mut o2) = vp2.take_object()?;
    if vp1 != vp2 {
        return None;
    }

    o1.remove_feature(DISCOURSE_FUNCTION);
    o2.remove_feature(DISCOURSE_FUNCTION);

    let coord_obj = Coordination::new(vec![o1, o2]);
    vp1.insert_object(index, coord_obj.into());
    Some(Element::Clause(Clause {
        features: c1.features.clone(),
        subject: c1.subject.clone(),
        predicate: Some(Box::new(vp1.into())),
    }))
}
