//! Integration tests for joining selectors with combinators.

use insta::assert_snapshot;
use selector_builder::{Combinator, CssSelectorBuilder, SelectorState, Specificity, Stage};

const BUILDER: CssSelectorBuilder = CssSelectorBuilder;

#[test]
fn test_adjacent_sibling() {
    let div = BUILDER.element("div").unwrap();
    let span = BUILDER.element("span").unwrap();
    let combined = BUILDER.combine(&div, "+", &span);
    assert_eq!(BUILDER.stringify(&combined), "div + span");
}

#[test]
fn test_combinator_enum() {
    let p = BUILDER.element("p").unwrap();
    let a = BUILDER.element("a").unwrap();

    assert_eq!(BUILDER.combine(&p, Combinator::Child, &a).stringify(), "p > a");
    assert_eq!(
        BUILDER.combine(&p, Combinator::AdjacentSibling, &a).stringify(),
        "p + a"
    );
    assert_eq!(
        BUILDER.combine(&p, Combinator::GeneralSibling, &a).stringify(),
        "p ~ a"
    );
    // The descendant combinator is a space, padded on both sides
    assert_eq!(
        BUILDER.combine(&p, Combinator::Descendant, &a).stringify(),
        "p   a"
    );
}

#[test]
fn test_nested_combinations() {
    let left = BUILDER
        .element("div")
        .and_then(|s| s.id("main"))
        .and_then(|s| s.class("container"))
        .and_then(|s| s.class("draggable"))
        .unwrap();
    let table = BUILDER.element("table").and_then(|s| s.id("data")).unwrap();
    let tr = BUILDER
        .element("tr")
        .and_then(|s| s.pseudo_class("nth-of-type(even)"))
        .unwrap();
    let td = BUILDER
        .element("td")
        .and_then(|s| s.pseudo_class("nth-of-type(even)"))
        .unwrap();

    let selector = BUILDER.combine(
        &left,
        '+',
        &BUILDER.combine(&table, '~', &BUILDER.combine(&tr, ' ', &td)),
    );

    assert_snapshot!(
        selector.stringify(),
        @"div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combination_ignores_operand_stages() {
    let left = BUILDER.pseudo_element("after").unwrap();
    let right = BUILDER.element("span").unwrap();
    let combined = SelectorState::combine(&left, '>', &right);
    assert_eq!(combined.stringify(), "::after > span");
    assert_eq!(combined.stage(), Stage::Empty);
}

#[test]
fn test_combined_selector_can_be_extended() {
    let ul = BUILDER.element("ul").unwrap();
    let li = BUILDER.element("li").unwrap();
    let combined = BUILDER.combine(&ul, '>', &li);

    let extended = combined.class("active").unwrap();
    assert_eq!(extended.stringify(), "ul > li.active");
}

#[test]
fn test_combination_leaves_operands_untouched() {
    let left = BUILDER.element("h1").unwrap();
    let right = BUILDER.element("p").unwrap();
    let _ = BUILDER.combine(&left, '+', &right);

    assert_eq!(left.stringify(), "h1");
    assert_eq!(right.stringify(), "p");
    assert_eq!(left.id("title").unwrap().stringify(), "h1#title");
}

#[test]
fn test_combined_specificity() {
    let nav = BUILDER.id("nav").unwrap();
    let link = BUILDER
        .element("a")
        .and_then(|s| s.pseudo_class("hover"))
        .unwrap();
    let combined = BUILDER.combine(&nav, Combinator::Descendant, &link);
    assert_eq!(combined.specificity(), Specificity::new(1, 1, 1));
    assert!(combined.specificity() > link.specificity());
}
