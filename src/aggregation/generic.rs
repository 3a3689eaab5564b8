//! Brute-force aggregation: find one element in each sentence such that
//! swapping both for a placeholder leaves two equal trees, then coordinate
//! the two elements at that site.
//!
//! Every pair of candidates costs up to two deep copies and one full
//! comparison, so the search is cubic in the worst case. Sentence trees are
//! small; callers that cannot guarantee that should cap the input size first
//! (see [`AggregationConfig::max_tree_size`](crate::config::AggregationConfig)).

use tracing::{debug, trace};

use super::coordinate::{check_sentences, combine, ElementError};
use super::replace::{replace, Replacement};
use super::traversal::candidates;
use crate::structure::element::Element;

/// Attempts to merge two sentences that differ in exactly one element.
///
/// Returns `Ok(None)` when either sentence is absent or no single
/// substitution makes them equal, and an error when either sentence already
/// contains the placeholder. Candidates are tried in traversal order,
/// so the same inputs always produce the same result.
pub fn try_to_aggregate(sent1: Option<&Element>, sent2: Option<&Element>) -> Result<Option<Element>, ElementError> {
    let (Some(sent1), Some(sent2)) = (sent1, sent2) else {
        return Ok(None);
    };
    check_sentences(sent1, sent2)?;

    for e1 in candidates(sent1) {
        let s1 = substitute(sent1, e1);

        for e2 in candidates(sent2) {
            let s2 = substitute(sent2, e2);

            if is_pruned(&s1, &s2) {
                continue;
            }

            if s1 == s2 {
                let cc = combine(e1, e2)?;
                let result = fill(s1, cc.into());
                debug!(first = %sent1, second = %sent2, result = %result, "aggregated");
                return Ok(Some(result));
            }
        }
    }
    trace!(first = %sent1, second = %sent2, "no single substitution makes the sentences equal");
    Ok(None)
}

/// Deep copy of `tree` with the first node equal to `target` swapped for the placeholder.
fn substitute(tree: &Element, target: &Element) -> Element {
    if tree == target {
        return Element::Placeholder;
    }
    let mut copy = tree.clone();
    replace(&mut copy, target, Replacement::With(Element::Placeholder));
    copy
}

fn fill(mut tree: Element, coordination: Element) -> Element {
    if tree.is_placeholder() {
        return coordination;
    }
    replace(&mut tree, &Element::Placeholder, Replacement::With(coordination));
    tree
}

fn is_pruned(s1: &Element, s2: &Element) -> bool {
    let Some(c1) = s1.as_clause() else {
        return false;
    };
    // Substituting the whole predicate of a subject-less clause leaves nothing shared.
    if c1.subject.is_none() && c1.predicate.as_deref().is_some_and(Element::is_placeholder) {
        return true;
    }
    let Some(c2) = s2.as_clause() else {
        return false;
    };
    match (
        c1.predicate.as_deref().and_then(Element::as_phrase),
        c2.predicate.as_deref().and_then(Element::as_phrase),
    ) {
        (Some(p1), Some(p2)) => p1.head != p2.head,
        _ => false,
    }
}
