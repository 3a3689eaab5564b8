use thiserror::Error;

use crate::structure::element::{Coordination, Element, DISCOURSE_FUNCTION};

#[derive(Error, Debug, PartialEq)]
pub enum ElementError {
    #[error("To combine elements they have to be tree elements, got the placeholder as the {0} argument")]
    Placeholder(&'static str),
    #[error("Sentences to aggregate must not contain the placeholder, found one in the {0} sentence")]
    PlaceholderInSentence(&'static str),
}

/// Rejects a pair of input sentences when either already carries the placeholder.
pub fn check_sentences(sent1: &Element, sent2: &Element) -> Result<(), ElementError> {
    if sent1.contains_placeholder() {
        return Err(ElementError::PlaceholderInSentence("first"));
    }
    if sent2.contains_placeholder() {
        return Err(ElementError::PlaceholderInSentence("second"));
    }
    Ok(())
}

/// Joins two elements under one coordination.
///
/// An existing coordination on either side is extended rather than nested,
/// so `combine([a, b], c)` gives `[a, b, c]`. The result takes the
/// grammatical role of the element that was added, falling back to the
/// other side's role when building a fresh pair.
pub fn combine(a: &Element, b: &Element) -> Result<Coordination, ElementError> {
    if a.is_placeholder() {
        return Err(ElementError::Placeholder("first"));
    }
    if b.is_placeholder() {
        return Err(ElementError::Placeholder("second"));
    }

    let coordination = match (a, b) {
        (Element::Coordination(existing), added) | (added, Element::Coordination(existing)) => {
            let mut cc = existing.clone();
            cc.coordinates.push(added.clone());
            if let Some(role) = added.feature(DISCOURSE_FUNCTION) {
                cc.features.insert(String::from(DISCOURSE_FUNCTION), String::from(role));
            }
            cc
        }
        _ => {
            let mut cc = Coordination::new(vec![a.clone(), b.clone()]);
            if let Some(role) = b.feature(DISCOURSE_FUNCTION).or_else(|| a.feature(DISCOURSE_FUNCTION)) {
                cc.features.insert(String::from(DISCOURSE_FUNCTION), String::from(role));
            }
            cc
        }
    };
    Ok(coordination)
}
