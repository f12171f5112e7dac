//! End-to-end tests for the move-to-extension transform.
//!
//! Fixtures mark the selection inline: `«` and `»` delimit the selected byte
//! range and are stripped before parsing.

use crate::{
    move_members_to_extension, MoveMembersToExtension, RefactorError, RefactoringProvider,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use shift_ir::{Span, SyntaxTree};

fn fixture(marked: &str) -> (SyntaxTree, Span) {
    let start = marked
        .find('«')
        .unwrap_or_else(|| panic!("fixture is missing the « marker"));
    let end = marked
        .find('»')
        .unwrap_or_else(|| panic!("fixture is missing the » marker"));
    let source = marked.replace('«', "").replace('»', "");
    let selection = Span::new(start as u32, (end - '«'.len_utf8()) as u32);
    (shift_parse::parse(&source), selection)
}

fn assert_moves(marked: &str, expected: &str) {
    let (tree, selection) = fixture(marked);
    let before = tree.text();
    let result = move_members_to_extension(&tree, selection)
        .unwrap_or_else(|e| panic!("refactoring failed: {e}"));
    assert_eq!(result.text(), expected);
    // the input tree is untouched by the edit
    assert_eq!(tree.text(), before);
}

fn assert_fails(marked: &str, expected: RefactorError) {
    let (tree, selection) = fixture(marked);
    let result = move_members_to_extension(&tree, selection).map(|t| t.text());
    assert_eq!(result, Err(expected));
}

#[test]
fn moves_selected_function() {
    assert_moves(
        r#"class Foo {«
  func foo() {
    print("Hello world!")
  }»

  func bar() {
    print("Hello world!")
  }
}"#,
        r#"class Foo {

  func bar() {
    print("Hello world!")
  }
}

extension Foo {
  func foo() {
    print("Hello world!")
  }
}"#,
    );
}

#[test]
fn inserts_extension_before_following_declaration() {
    assert_moves(
        r#"class Foo {«
  func foo() {
    print("Hello world!")
  }»
}

struct Bar {
}"#,
        r#"class Foo {
}

extension Foo {
  func foo() {
    print("Hello world!")
  }
}

struct Bar {
}"#,
    );
}

#[test]
fn moved_member_keeps_its_comment() {
    assert_moves(
        r#"class Foo {«
  // Function foo
  func foo() {
    print("Hello world!")
  }»
}"#,
        r#"class Foo {
}

extension Foo {
  // Function foo
  func foo() {
    print("Hello world!")
  }
}"#,
    );
}

#[test]
fn selection_inside_member_body_selects_the_member() {
    assert_moves(
        r#"class Foo {
  func foo() {
    «print("Hello world!")»
  }

  func bar() {
  }
}"#,
        r#"class Foo {

  func bar() {
  }
}

extension Foo {
  func foo() {
    print("Hello world!")
  }
}"#,
    );
}

#[test]
fn selection_touching_leading_comment_selects_the_member() {
    assert_moves(
        "class Foo {\n  «// doc»\n  func foo() {}\n}",
        "class Foo {\n}\n\nextension Foo {\n  // doc\n  func foo() {}\n}",
    );
}

#[test]
fn deinit_stays_behind() {
    assert_moves(
        r#"class Foo {«
  func foo() {}

  deinit {}

  func bar() {}»
}"#,
        r#"class Foo {

  deinit {}
}

extension Foo {
  func foo() {}

  func bar() {}
}"#,
    );
}

#[test]
fn nested_type_moves_whole() {
    assert_moves(
        r#"struct Outer {«
  struct Inner {
    var x: Int
  }»
}"#,
        r#"struct Outer {
}

extension Outer {
  struct Inner {
    var x: Int
  }
}"#,
    );
}

#[test]
fn selection_inside_nested_type_targets_the_outer_declaration() {
    assert_moves(
        r#"struct Outer {
  struct Inner {
    «var x: Int»
  }
}"#,
        r#"struct Outer {
}

extension Outer {
  struct Inner {
    var x: Int
  }
}"#,
    );
}

#[test]
fn generic_parameters_do_not_cross_over() {
    assert_moves(
        r#"struct Outer<T> {«
  func foo(t: T) {}»
}"#,
        r#"struct Outer<T> {
}

extension Outer {
  func foo(t: T) {}
}"#,
    );
}

#[test]
fn enum_cases_stay_methods_move() {
    assert_moves(
        r#"enum Direction {
  case north, south«

  func flipped() -> Direction {
    return self
  }»
}"#,
        r#"enum Direction {
  case north, south
}

extension Direction {

  func flipped() -> Direction {
    return self
  }
}"#,
    );
}

#[test]
fn protocol_requirement_moves() {
    assert_moves(
        "protocol Greeter {«\n  func greet()»\n}",
        "protocol Greeter {\n}\n\nextension Greeter {\n  func greet()\n}",
    );
}

#[test]
fn computed_property_moves() {
    assert_moves(
        r#"class Model {«
  var magnitude: Int {
    return 42
  }»
}"#,
        r#"class Model {
}

extension Model {
  var magnitude: Int {
    return 42
  }
}"#,
    );
}

#[test]
fn stored_property_stays_function_moves() {
    assert_moves(
        r#"class Model {«
  var count = 0

  func reset() {}»
}"#,
        r#"class Model {
  var count = 0
}

extension Model {

  func reset() {}
}"#,
    );
}

#[test]
fn observed_property_with_initializer_stays() {
    // an accessor block alone is not enough; the initializer pins it down
    assert_fails(
        r#"class Model {«
  var count = 0 {
    didSet {}
  }»
}"#,
        RefactorError::NoMovableMembers,
    );
}

#[test]
fn stray_semicolon_stays_behind() {
    assert_moves(
        "class Foo {\n  ;\n  «func bar() {}»\n}",
        "class Foo {\n  ;\n}\n\nextension Foo {\n  func bar() {}\n}",
    );
}

#[test]
fn inline_semicolon_separator_stays_behind() {
    assert_moves(
        "class Foo { «func foo() { a() }»; func bar() { b() } }",
        "class Foo { ; func bar() { b() } }\n\nextension Foo { func foo() { a() }}",
    );
}

#[test]
fn duplicate_members_are_told_apart_by_identity() {
    assert_moves(
        r#"class Twin {«
  func same() {}»
  func same() {}
}"#,
        r#"class Twin {
  func same() {}
}

extension Twin {
  func same() {}
}"#,
    );
}

#[test]
fn members_keep_document_order() {
    assert_moves(
        "class Foo {\n  «func a() {}\n  func b() {}\n  func c() {}»\n}",
        "class Foo {\n}\n\nextension Foo {\n  func a() {}\n  func b() {}\n  func c() {}\n}",
    );
}

#[test]
fn top_level_function_is_not_a_target() {
    assert_fails(
        "«func foo() {}»",
        RefactorError::TargetNotFound,
    );
}

#[test]
fn extension_is_not_a_target() {
    assert_fails(
        "extension Foo {«\n  func f() {}»\n}",
        RefactorError::TargetNotFound,
    );
}

#[test]
fn selection_spanning_two_declarations_finds_no_target() {
    assert_fails(
        "class A {«}\nclass B {»}",
        RefactorError::TargetNotFound,
    );
}

#[test]
fn caret_selection_moves_nothing() {
    assert_fails(
        "class Foo {\n  «»func foo() {}\n}",
        RefactorError::NoMovableMembers,
    );
}

#[test]
fn whitespace_selection_moves_nothing() {
    assert_fails(
        "class Foo {\n  func a() {}\n« »\n  func b() {}\n}",
        RefactorError::NoMovableMembers,
    );
}

#[test]
fn deinit_alone_moves_nothing() {
    assert_fails(
        "class Foo {\n  «deinit {}»\n}",
        RefactorError::NoMovableMembers,
    );
}

#[test]
fn provider_trait_delegates_to_the_transform() {
    let (tree, selection) = fixture("class Foo {«\n  func foo() {}»\n}");
    let via_trait = MoveMembersToExtension::refactor(&tree, selection).map(|t| t.text());
    let direct = move_members_to_extension(&tree, selection).map(|t| t.text());
    assert_eq!(via_trait, direct);
}

proptest! {
    #[test]
    fn every_member_survives_exactly_once(start in 0u32..100, len in 0u32..100) {
        let source = "class Foo {\n  func a() {}\n  var x = 1\n\n  func b() {}\n}\n\nstruct Bar {\n  func c() {}\n}\n";
        let tree = shift_parse::parse(source);
        let lo = start.min(source.len() as u32);
        let hi = (start + len).min(source.len() as u32);
        if let Ok(result) = move_members_to_extension(&tree, Span::new(lo, hi.max(lo))) {
            let text = result.text();
            for needle in ["func a() {}", "var x = 1", "func b() {}", "func c() {}"] {
                prop_assert_eq!(text.matches(needle).count(), 1, "lost or duplicated {}", needle);
            }
        }
    }

    #[test]
    fn tolerates_malformed_input(source in ".{0,60}", start in 0u32..80, len in 0u32..80) {
        let tree = shift_parse::parse(&source);
        let lo = start.min(source.len() as u32);
        let hi = (start + len).min(source.len() as u32);
        drop(move_members_to_extension(&tree, Span::new(lo, hi.max(lo))));
    }
}
