//! Integration tests for the derivation engine
//!
//! Exercises the engine through the public surface over small reference
//! grammars: acceptance and rejection verdicts, trace shape, and the
//! guarantees around backtracking (first success wins, no leakage from
//! abandoned alternatives).

use gramtree_parser::{parse_grammar, tokenize, Deriver, Outcome, Verdict};
use rstest::rstest;

const ARITHMETIC: &str = "E -> T + E | T\nT -> 1 | 2\n";

#[rstest]
#[case(ARITHMETIC, "E", "1+2", Verdict::Accepted)]
#[case(ARITHMETIC, "E", "2", Verdict::Accepted)]
#[case(ARITHMETIC, "E", "1+2+1", Verdict::Accepted)]
#[case(ARITHMETIC, "E", "1+", Verdict::Incomplete)]
#[case(ARITHMETIC, "E", "3", Verdict::NoDerivation)]
#[case(ARITHMETIC, "E", "+1", Verdict::NoDerivation)]
#[case("S -> a S | ε\n", "S", "", Verdict::Accepted)]
#[case("S -> a S | ε\n", "S", "aaa", Verdict::Accepted)]
#[case("S -> a S | ε\n", "S", "ab", Verdict::Incomplete)]
#[case("X -> a | a b\n", "X", "a", Verdict::Accepted)]
#[case("X -> a | a b\n", "X", "ab", Verdict::Incomplete)]
fn test_verdicts(
    #[case] grammar_source: &str,
    #[case] start: &str,
    #[case] input: &str,
    #[case] expected: Verdict,
) {
    let grammar = parse_grammar(grammar_source).unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze(start, &tokenize(input)).unwrap();
    assert_eq!(analysis.verdict, expected, "input {:?}", input);
}

#[test]
fn test_round_trip_builds_a_full_tree() {
    let grammar = parse_grammar(ARITHMETIC).unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze("E", &tokenize("1+2")).unwrap();

    assert_eq!(analysis.verdict, Verdict::Accepted);
    assert_eq!(analysis.end, 3);
    let tree = analysis.tree.expect("accepted input must have a tree");
    assert_eq!(tree.label(), "E");
    // E -> T + E, T -> 1, E -> T, T -> 2: seven nodes in total
    assert_eq!(tree.size(), 7);

    let children = tree.children();
    assert_eq!(children[0].label(), "T");
    assert_eq!(children[1].label(), "+");
    assert_eq!(children[2].label(), "E");
}

#[test]
fn test_prefix_match_reports_end_short_of_input() {
    let grammar = parse_grammar(ARITHMETIC).unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze("E", &tokenize("1+")).unwrap();

    assert_eq!(analysis.verdict, Verdict::Incomplete);
    assert_eq!(analysis.end, 1);
    // The failed continuation is visible in the trace as EOF mismatches
    assert!(analysis
        .trace
        .iter()
        .any(|entry| entry.outcome == Outcome::TerminalMismatch && entry.message.contains("EOF")));
}

#[test]
fn test_empty_input_derives_via_epsilon() {
    let grammar = parse_grammar("S -> a S | ε\n").unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze("S", &tokenize("")).unwrap();

    assert_eq!(analysis.verdict, Verdict::Accepted);
    assert_eq!(analysis.end, 0);
    let tree = analysis.tree.unwrap();
    assert_eq!(tree.label(), "S");
    assert!(tree.is_leaf(), "ε expansion must not create children");
    assert!(analysis
        .trace
        .iter()
        .any(|entry| entry.outcome == Outcome::EmptyAccepted));
}

#[test]
fn test_first_success_wins_even_when_a_later_alternative_would_accept() {
    // "a" alone satisfies the first alternative, so "a b" is never retried
    // for the longer one and the overall check rejects the trailing token.
    let grammar = parse_grammar("X -> a | a b\n").unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze("X", &tokenize("ab")).unwrap();

    assert_eq!(analysis.verdict, Verdict::Incomplete);
    assert_eq!(analysis.end, 1);
    // Only the first alternative was ever attempted
    let attempts = analysis
        .trace
        .iter()
        .filter(|entry| entry.outcome == Outcome::Attempt)
        .map(|entry| entry.message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(attempts, ["Attempting X -> a"]);
}

#[test]
fn test_abandoned_alternatives_never_leak_into_the_tree() {
    // The first two alternatives match 'a' and then fail; their tentative
    // nodes must be discarded wholesale.
    let grammar = parse_grammar("X -> a b c | a d | a\n").unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze("X", &tokenize("a")).unwrap();

    assert_eq!(analysis.verdict, Verdict::Accepted);
    let tree = analysis.tree.unwrap();
    assert_eq!(tree.size(), 2);
    assert_eq!(tree.children().len(), 1);
    assert_eq!(tree.children()[0].label(), "a");
}

#[test]
fn test_trace_is_well_nested() {
    let grammar = parse_grammar(ARITHMETIC).unwrap();
    let deriver = Deriver::new(&grammar);

    let analysis = deriver.analyze("E", &tokenize("1+2")).unwrap();
    let trace = &analysis.trace;

    assert_eq!(trace[0].depth, 0, "the root attempt opens the trace");
    for window in trace.windows(2) {
        assert!(
            window[1].depth <= window[0].depth + 1,
            "depth may only deepen one level at a time: {:?} -> {:?}",
            window[0],
            window[1]
        );
    }
}

#[test]
fn test_failed_subderivations_stay_in_the_trace() {
    let grammar = parse_grammar(ARITHMETIC).unwrap();
    let deriver = Deriver::new(&grammar);

    // "2" forces T -> 1 to fail before T -> 2 matches
    let analysis = deriver.analyze("E", &tokenize("2")).unwrap();

    let mismatches = analysis
        .trace
        .iter()
        .filter(|entry| entry.outcome == Outcome::TerminalMismatch)
        .count();
    assert!(mismatches > 0, "failed attempts must remain observable");
    assert_eq!(analysis.verdict, Verdict::Accepted);
}
