use crate::structure::element::Element;

#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    With(Element),
    /// Drop the node from its slot: removed from a list slot, emptied from a single one.
    Remove,
}

impl Replacement {
    fn to_slot(&self) -> Option<Box<Element>> {
        match self {
            Replacement::With(e) => Some(Box::new(e.clone())),
            Replacement::Remove => None,
        }
    }
}

/// Replaces the first node structurally equal to `target`, searching in the
/// same slot order as [`candidates`](super::traversal::candidates) but
/// checking the subject before the predicate. Returns whether a node matched.
///
/// When `tree` itself equals `target` this reports `true` without touching
/// anything: the root has no parent slot. Callers that need to swap the whole
/// tree do it themselves.
pub fn replace(tree: &mut Element, target: &Element, replacement: Replacement) -> bool {
    if *tree == *target {
        return true;
    }
    replace_below(tree, target, &replacement)
}

/// Shorthand for `replace(tree, target, Replacement::Remove)`.
pub fn remove(tree: &mut Element, target: &Element) -> bool {
    replace(tree, target, Replacement::Remove)
}

fn replace_below(tree: &mut Element, target: &Element, replacement: &Replacement) -> bool {
    match tree {
        Element::Clause(c) => {
            replace_single(&mut c.subject, target, replacement)
                || replace_single(&mut c.predicate, target, replacement)
        }
        Element::Coordination(c) => replace_in_list(&mut c.coordinates, false, target, replacement),
        Element::Phrase(p) => {
            replace_in_list(&mut p.post_modifiers, true, target, replacement)
                || replace_in_list(&mut p.complements, true, target, replacement)
                || replace_single(&mut p.head, target, replacement)
                || replace_in_list(&mut p.pre_modifiers, true, target, replacement)
                || (p.is_noun_phrase() && replace_single(&mut p.specifier, target, replacement))
                || replace_in_list(&mut p.front_modifiers, true, target, replacement)
        }
        Element::Word(_) | Element::Placeholder => false,
    }
}

fn replace_single(slot: &mut Option<Box<Element>>, target: &Element, replacement: &Replacement) -> bool {
    if slot.as_deref() == Some(target) {
        *slot = replacement.to_slot();
        return true;
    }
    match slot.as_deref_mut() {
        Some(node) => replace_below(node, target, replacement),
        None => false,
    }
}

fn replace_in_list(list: &mut Vec<Element>, reversed: bool, target: &Element, replacement: &Replacement) -> bool {
    let indices: Box<dyn Iterator<Item = usize>> = if reversed {
        Box::new((0..list.len()).rev())
    } else {
        Box::new(0..list.len())
    };
    for i in indices {
        if list[i] == *target {
            match replacement {
                Replacement::With(e) => list[i] = e.clone(),
                Replacement::Remove => {
                    list.remove(i);
                }
            }
            return true;
        }
        if replace_below(&mut list[i], target, replacement) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::notation::NotationParser;

    fn parse(s: &str) -> Element {
        NotationParser::parse_sentence(s).unwrap()
    }

    #[test]
    fn rightmost_equal_node_is_replaced_first() {
        let mut tree = parse("(NP pre: [\"big\"/adj \"big\"/adj] head: \"dog\"/noun)");
        assert!(replace(&mut tree, &parse("\"big\"/adj"), Replacement::With(Element::Placeholder)));
        assert_eq!(tree, parse("(NP pre: [\"big\"/adj _] head: \"dog\"/noun)"));
    }

    #[test]
    fn subject_is_checked_before_predicate() {
        let mut tree = parse("(S subj: \"run\"/verb vp: (VP head: \"run\"/verb))");
        assert!(remove(&mut tree, &parse("\"run\"/verb")));
        assert_eq!(tree, parse("(S vp: (VP head: \"run\"/verb))"));
    }

    #[test]
    fn removal_is_not_repeatable() {
        let mut tree = parse("(VP head: \"put\"/verb comp: [\"apple\"/noun])");
        let target = parse("\"apple\"/noun");
        assert!(remove(&mut tree, &target));
        assert!(!remove(&mut tree, &target));
        assert_eq!(tree, parse("(VP head: \"put\"/verb)"));
    }

    #[test]
    fn absent_target_leaves_tree_untouched() {
        let mut tree = parse("(S subj: \"John\"/noun vp: (VP head: \"sleep\"/verb))");
        let before = tree.clone();
        assert!(!replace(&mut tree, &parse("\"Mary\"/noun"), Replacement::Remove));
        assert_eq!(tree, before);
    }

    #[test]
    fn root_match_reports_success_without_mutation() {
        let mut tree = parse("\"John\"/noun");
        let before = tree.clone();
        assert!(replace(&mut tree, &before, Replacement::With(Element::Placeholder)));
        assert_eq!(tree, before);
    }

    #[test]
    fn descends_into_specifier_and_coordination_members() {
        let mut tree = parse("(NP spec: (COORD \"and\" \"this\"/det \"that\"/det) head: \"idea\"/noun)");
        assert!(replace(&mut tree, &parse("\"that\"/det"), Replacement::With(parse("\"those\"/det"))));
        assert_eq!(tree, parse("(NP spec: (COORD \"and\" \"this\"/det \"those\"/det) head: \"idea\"/noun)"));
    }
}
