//! Candidate substitution sites over a sentence tree.
//!
//! The order here decides which substitution the generic aggregator tries
//! first, so it must stay fixed: predicate before subject, and inside a phrase
//! right to left (post-modifiers, complements, head, pre-modifiers, specifier,
//! front-modifiers), innermost nodes first.

use crate::structure::element::{Element, Phrase};

#[derive(Debug, Clone, Copy)]
enum Step<'a> {
    Visit(&'a Element),
    Yield(&'a Element),
}

/// Lazy walk over borrowed elements. Cloning resumes from
/// the clone point; calling [`candidates`] again restarts from the top.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    stack: Vec<Step<'a>>,
}

impl<'a> Candidates<'a> {
    fn from_steps(mut steps: Vec<Step<'a>>) -> Self {
        steps.reverse();
        Self { stack: steps }
    }

    fn expand(&mut self, element: &'a Element) {
        let mut steps = Vec::new();
        match element {
            Element::Clause(c) => {
                if let Some(predicate) = c.predicate.as_deref() {
                    steps.push(Step::Visit(predicate));
                    steps.push(Step::Yield(predicate));
                }
                if let Some(subject) = c.subject.as_deref() {
                    steps.push(Step::Yield(subject));
                }
            }
            Element::Phrase(p) => {
                phrase_steps(p, &mut steps);
                steps.push(Step::Yield(element));
            }
            Element::Coordination(c) => {
                steps.extend(c.coordinates.iter().map(Step::Yield));
                steps.push(Step::Yield(element));
            }
            Element::Word(_) | Element::Placeholder => steps.push(Step::Yield(element)),
        }
        self.stack.extend(steps.into_iter().rev());
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Yield(e) => return Some(e),
                Step::Visit(e) => self.expand(e),
            }
        }
        None
    }
}

fn phrase_steps<'a>(p: &'a Phrase, steps: &mut Vec<Step<'a>>) {
    steps.extend(p.post_modifiers.iter().rev().map(Step::Visit));
    steps.extend(p.complements.iter().rev().map(Step::Visit));
    if let Some(head) = p.head.as_deref() {
        steps.push(Step::Visit(head));
    }
    steps.extend(p.pre_modifiers.iter().rev().map(Step::Visit));
    if p.is_noun_phrase() {
        if let Some(spec) = p.specifier.as_deref() {
            steps.push(Step::Visit(spec));
        }
    }
    steps.extend(p.front_modifiers.iter().rev().map(Step::Visit));
}

/// Every candidate site in `tree`, in matching order.
///
/// A clause yields its predicate's subtree (which ends with the predicate),
/// then the predicate again, then the subject, but never the clause itself.
pub fn candidates(tree: &Element) -> Candidates<'_> {
    Candidates::from_steps(vec![Step::Visit(tree)])
}

/// Candidates restricted to the predicate's modifiers and complements: no
/// subject, head, specifier or front modifiers at the top level.
pub fn shallow_candidates(tree: &Element) -> Candidates<'_> {
    let steps: Vec<Step<'_>> = match tree {
        Element::Clause(c) => c.predicate.as_deref().map(Step::Visit).into_iter().collect(),
        Element::Phrase(p) => {
            let mut steps = Vec::new();
            steps.extend(p.post_modifiers.iter().rev().map(Step::Visit));
            steps.extend(p.complements.iter().rev().map(Step::Visit));
            steps.extend(p.pre_modifiers.iter().rev().map(Step::Visit));
            steps.push(Step::Yield(tree));
            steps
        }
        _ => vec![Step::Yield(tree)],
    };
    Candidates::from_steps(steps)
}
