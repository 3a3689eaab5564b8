use std::error::Error;

use nlg_aggregate::{
    aggregation::{coordinate::ElementError, generic::try_to_aggregate},
    structure::{
        element::{Element, PhraseCategory},
        notation::NotationParser,
    },
};

const BOY: &str = "(S subj: (NP head: \"John\"/noun) vp: (VP head: \"be\"/verb comp: [(NP spec: \"a\"/det head: \"boy\"/noun)]))";
const TALL: &str = "(S subj: (NP head: \"John\"/noun) vp: (VP head: \"be\"/verb comp: [(ADJP head: \"tall\"/adj)]))";

const APPLE: &str = "(S subj: (NP head: \"X\"/noun) vp: (VP head: \"put\"/verb comp: [(NP {discourseFunction=OBJECT} spec: \"the\"/det head: \"apple\"/noun) (PP head: \"in\"/prep comp: [(NP spec: \"the\"/det head: \"basket\"/noun)])]))";
const PEAR: &str = "(S subj: (NP head: \"X\"/noun) vp: (VP head: \"put\"/verb comp: [(NP {discourseFunction=OBJECT} spec: \"the\"/det head: \"pear\"/noun) (PP head: \"in\"/prep comp: [(NP spec: \"the\"/det head: \"basket\"/noun)])]))";

const JOHN_WROTE: &str = "(S subj: (NP head: \"John\"/noun) vp: (VP head: \"write\"/verb comp: [(NP {discourseFunction=OBJECT} spec: \"an\"/det head: \"article\"/noun)]))";
const MARY_WROTE: &str = "(S subj: (NP head: \"Mary\"/noun) vp: (VP head: \"write\"/verb comp: [(NP {discourseFunction=OBJECT} spec: \"an\"/det head: \"article\"/noun)]))";

const JOHN_SLEEPS: &str = "(S subj: (NP head: \"John\"/noun) vp: (VP head: \"sleep\"/verb))";
const MARY_EATS: &str = "(S subj: (NP head: \"Mary\"/noun) vp: (VP head: \"eat\"/verb comp: [(NP {discourseFunction=OBJECT} head: \"cake\"/noun)]))";

#[test]
fn differing_complements_are_coordinated() -> Result<(), Box<dyn Error>> {
    let merged = aggregate(BOY, TALL)?;
    let expected = parse(
        "(S subj: (NP head: \"John\"/noun) vp: (VP head: \"be\"/verb comp: [\
           (COORD \"and\" (NP spec: \"a\"/det head: \"boy\"/noun) (ADJP head: \"tall\"/adj))]))",
    )?;
    assert_eq!(Some(expected), merged);
    Ok(())
}

#[test]
fn smallest_differing_element_is_coordinated() -> Result<(), Box<dyn Error>> {
    let merged = aggregate(APPLE, PEAR)?;
    let expected = parse(
        "(S subj: (NP head: \"X\"/noun) vp: (VP head: \"put\"/verb comp: [\
           (NP {discourseFunction=OBJECT} spec: \"the\"/det head: (COORD \"and\" \"apple\"/noun \"pear\"/noun)) \
           (PP head: \"in\"/prep comp: [(NP spec: \"the\"/det head: \"basket\"/noun)])]))",
    )?;
    assert_eq!(Some(expected), merged);
    Ok(())
}

#[test]
fn differing_subjects_are_coordinated() -> Result<(), Box<dyn Error>> {
    let merged = aggregate(JOHN_WROTE, MARY_WROTE)?;
    let expected = parse(
        "(S subj: (COORD \"and\" (NP head: \"John\"/noun) (NP head: \"Mary\"/noun)) \
           vp: (VP head: \"write\"/verb comp: [(NP {discourseFunction=OBJECT} spec: \"an\"/det head: \"article\"/noun)]))",
    )?;
    assert_eq!(Some(expected), merged);
    Ok(())
}

#[test]
fn unrelated_sentences_do_not_aggregate() -> Result<(), Box<dyn Error>> {
    assert_eq!(None, aggregate(JOHN_SLEEPS, MARY_EATS)?);
    assert_eq!(None, aggregate(MARY_EATS, JOHN_SLEEPS)?);
    Ok(())
}

#[test]
fn self_merge_keeps_clause_shape() -> Result<(), Box<dyn Error>> {
    for input in [BOY, APPLE, JOHN_WROTE, JOHN_SLEEPS] {
        let s = parse(input)?;
        let merged = try_to_aggregate(Some(&s), Some(&s))?.ok_or("self merge failed")?;
        let (original, merged) = (s.as_clause().ok_or("not a clause")?, merged.as_clause().ok_or("not a clause")?);
        assert_eq!(original.subject, merged.subject);
        let predicate = merged.predicate.as_deref().and_then(Element::as_phrase).ok_or("predicate is not a phrase")?;
        assert_eq!(PhraseCategory::Verb, predicate.category);
    }
    Ok(())
}

#[test]
fn success_is_symmetric() -> Result<(), Box<dyn Error>> {
    let pairs = [(BOY, TALL), (APPLE, PEAR), (JOHN_WROTE, MARY_WROTE), (JOHN_SLEEPS, MARY_EATS), (BOY, APPLE)];
    for (a, b) in pairs {
        assert_eq!(aggregate(a, b)?.is_some(), aggregate(b, a)?.is_some(), "{} / {}", a, b);
    }
    Ok(())
}

#[test]
fn results_are_deterministic_and_placeholder_free() -> Result<(), Box<dyn Error>> {
    let first = aggregate(APPLE, PEAR)?.ok_or("no merge")?;
    let second = aggregate(APPLE, PEAR)?.ok_or("no merge")?;
    assert_eq!(first, second);
    assert!(!first.contains_placeholder());
    Ok(())
}

#[test]
fn inputs_are_left_untouched() -> Result<(), Box<dyn Error>> {
    let (s1, s2) = (parse(JOHN_WROTE)?, parse(MARY_WROTE)?);
    let (before1, before2) = (s1.clone(), s2.clone());
    try_to_aggregate(Some(&s1), Some(&s2))?;
    assert_eq!(before1, s1);
    assert_eq!(before2, s2);
    Ok(())
}

#[test]
fn sentences_carrying_the_placeholder_are_rejected() -> Result<(), Box<dyn Error>> {
    let run_x = parse("(S subj: _ vp: (VP head: \"run\"/verb comp: [\"x\"/noun]))")?;
    let run_y = parse("(S subj: _ vp: (VP head: \"run\"/verb comp: [\"y\"/noun]))")?;
    assert_eq!(
        Err(ElementError::PlaceholderInSentence("first")),
        try_to_aggregate(Some(&run_x), Some(&run_y))
    );

    let john = parse(JOHN_SLEEPS)?;
    assert_eq!(
        Err(ElementError::PlaceholderInSentence("second")),
        try_to_aggregate(Some(&john), Some(&run_y))
    );
    Ok(())
}

fn parse(input: &str) -> Result<Element, Box<dyn Error>> {
    Ok(NotationParser::parse_sentence(input)?)
}

fn aggregate(a: &str, b: &str) -> Result<Option<Element>, Box<dyn Error>> {
    Ok(try_to_aggregate(Some(&parse(a)?), Some(&parse(b)?))?)
}
