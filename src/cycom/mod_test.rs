use super::*;

#[test]
fn empty_file_scores_one() {
    let fa = analyze("").unwrap();
    assert_eq!(fa.complexity, 1);
    assert_eq!(fa.method_count, 0);
}

#[test]
fn branchless_method_scores_one() {
    let fa = analyze("fn f() { let x = 1; }").unwrap();
    // file baseline 1 + method baseline 1
    assert_eq!(fa.complexity, 2);
    assert_eq!(fa.method_count, 1);
}

#[test]
fn each_if_adds_exactly_one() {
    let base = analyze("fn f(a: bool) { if a { g(); } }").unwrap();
    let more = analyze("fn f(a: bool) { if a { g(); } if a { g(); } }").unwrap();
    assert_eq!(more.complexity, base.complexity + 1);
}

#[test]
fn else_if_counts_as_its_own_branch() {
    let fa = analyze("fn f(a: i32) { if a > 0 { } else if a < 0 { } }").unwrap();
    // 1 file + 1 method + 2 ifs
    assert_eq!(fa.complexity, 4);
}

#[test]
fn loops_count() {
    let fa = analyze(
        "fn f(xs: &[i32]) {
            for _x in xs { }
            while false { }
            let mut it = xs.iter();
            while let Some(_) = it.next() { }
        }",
    )
    .unwrap();
    assert_eq!(fa.complexity, 1 + 1 + 3);
}

#[test]
fn match_arms_each_count() {
    let fa = analyze(
        "fn f(x: i32) -> i32 {
            match x {
                0 => 1,
                1 => 2,
                _ => 3,
            }
        }",
    )
    .unwrap();
    assert_eq!(fa.complexity, 1 + 1 + 3);
}

#[test]
fn logical_operators_count() {
    let fa = analyze("fn f(a: bool, b: bool) -> bool { a && b || !a }").unwrap();
    // 1 file + 1 method + && + || + !
    assert_eq!(fa.complexity, 5);
}

#[test]
fn try_and_continue_count() {
    let fa = analyze(
        "fn f(xs: &[&str]) -> Result<(), std::num::ParseIntError> {
            for x in xs {
                if x.is_empty() {
                    continue;
                }
                let _n: i32 = x.parse()?;
            }
            Ok(())
        }",
    )
    .unwrap();
    // 1 file + 1 method + for + if + continue + ?
    assert_eq!(fa.complexity, 6);
}

#[test]
fn closure_body_counts_toward_enclosing_method() {
    let plain = analyze("fn f(xs: Vec<i32>) -> Vec<i32> { xs }").unwrap();
    let with_closure =
        analyze("fn f(xs: Vec<i32>) -> Vec<i32> { xs.into_iter().filter(|x| *x > 0 && *x < 10).collect() }")
            .unwrap();
    // the closure's && is one extra decision point, the closure itself none
    assert_eq!(with_closure.complexity, plain.complexity + 1);
    assert_eq!(with_closure.method_count, 1);
}

#[test]
fn nested_fn_is_a_separate_method() {
    let fa = analyze(
        "fn outer(a: bool) {
            fn inner(b: bool) {
                if b { }
            }
            if a { inner(a); }
        }",
    )
    .unwrap();
    assert_eq!(fa.method_count, 2);
    // 1 file + outer (1 + if) + inner (1 + if): nested body not double-counted
    assert_eq!(fa.complexity, 5);
}

#[test]
fn impl_and_trait_methods_count() {
    let fa = analyze(
        "struct S;
        impl S {
            fn m(&self, a: bool) { if a { } }
        }
        trait T {
            fn required(&self);
            fn provided(&self) -> bool { true }
        }",
    )
    .unwrap();
    // m and provided have bodies; required does not
    assert_eq!(fa.method_count, 2);
    // 1 file + m (1 + if) + provided (1)
    assert_eq!(fa.complexity, 4);
}

#[test]
fn if_let_counts() {
    let fa = analyze("fn f(x: Option<i32>) { if let Some(_) = x { } }").unwrap();
    assert_eq!(fa.complexity, 3);
}

#[test]
fn unparsable_source_is_none() {
    assert!(analyze("fn broken( {{{").is_none());
    assert!(analyze("this is not rust at all").is_none());
}

#[test]
fn file_with_no_methods() {
    let fa = analyze("pub const X: i32 = 1;\npub struct S { pub a: i32 }\n").unwrap();
    assert_eq!(fa.complexity, 1);
    assert_eq!(fa.method_count, 0);
}
