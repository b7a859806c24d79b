//! Analysis Tests
//!
//! Heuristic behaviour over realistic snippets, checked through the public
//! analyzer rather than the individual rules.

use crate::analysis::{
    BigO, CodeAnalyzer, ImpactLevel, ImprovementCategory, Readability, StructuralComplexity,
};

// ============================================================================
// Fixtures
// ============================================================================

const REVERSE_LOOP: &str = "def reverse_function(s):
    reversed_s = \"\"
    for char in s:
        reversed_s = char + reversed_s
    return reversed_s";

const REVERSE_SLICE: &str = "def reverse_function(s):
    return s[::-1]";

const PAIR_SUMS: &str = "def pair_sums(a, b):
    out = []
    for x in a:
        for y in b:
            out.append(x + y)
    return out";

// ============================================================================
// Single-sample reports
// ============================================================================

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_reverse_loop_report() {
        let report = CodeAnalyzer::new().analyze(REVERSE_LOOP);

        assert_eq!(report.lines, 5);
        assert_eq!(report.complexity, StructuralComplexity::High);
        assert_eq!(report.readability, Readability::Fair);
        assert_eq!(report.big_o, BigO::Linear);
    }

    #[test]
    fn test_slice_rewrite_report() {
        let report = CodeAnalyzer::new().analyze(REVERSE_SLICE);

        assert_eq!(report.lines, 2);
        assert_eq!(report.complexity, StructuralComplexity::Medium);
        assert_eq!(report.readability, Readability::Fair);
        assert_eq!(report.big_o, BigO::Linear);
    }

    #[test]
    fn test_flat_builtin_one_liner_is_excellent() {
        let report = CodeAnalyzer::new().analyze("return ''.join(reversed(s))");

        assert_eq!(report.lines, 1);
        assert_eq!(report.complexity, StructuralComplexity::Low);
        assert_eq!(report.readability, Readability::Excellent);
        assert_eq!(report.big_o, BigO::Linear);
    }

    #[test]
    fn test_nested_loops_are_quadratic() {
        let report = CodeAnalyzer::new().analyze(PAIR_SUMS);
        assert_eq!(report.big_o, BigO::Quadratic);
        assert_eq!(report.complexity, StructuralComplexity::High);
    }

    #[test]
    fn test_mixed_loop_keywords_are_quadratic() {
        let code = "while queue:\n    node = queue.pop()\n    for child in node.children:\n        queue.append(child)";
        assert_eq!(CodeAnalyzer::new().analyze(code).big_o, BigO::Quadratic);
    }

    #[test]
    fn test_three_loops_still_report_quadratic() {
        let code = "for i in a:\n    for j in b:\n        for k in c:\n            total += 1";
        assert_eq!(CodeAnalyzer::new().analyze(code).big_o, BigO::Quadratic);
    }

    #[test]
    fn test_sort_is_linearithmic() {
        let code = "def ordered(xs):\n    return sorted(xs)";
        assert_eq!(CodeAnalyzer::new().analyze(code).big_o, BigO::Linearithmic);
    }

    #[test]
    fn test_recursive_function_is_linear() {
        let code = "def fact(n):\n    return 1 if n < 2 else n * fact(n - 1)";
        assert_eq!(CodeAnalyzer::new().analyze(code).big_o, BigO::Linear);
    }

    #[test]
    fn test_plain_function_is_constant() {
        let code = "def area(w, h):\n    return w * h";
        assert_eq!(CodeAnalyzer::new().analyze(code).big_o, BigO::Constant);
    }

    #[test]
    fn test_loop_detection_ignores_case() {
        let code = "FOR item IN items:\n    print(item)";
        assert_eq!(CodeAnalyzer::new().analyze(code).big_o, BigO::Linear);
    }

    #[test]
    fn test_long_flat_snippet_is_fair() {
        let code = (1..=11)
            .map(|i| format!("x{} = {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let report = CodeAnalyzer::new().analyze(&code);

        assert_eq!(report.lines, 11);
        assert_eq!(report.complexity, StructuralComplexity::Low);
        assert_eq!(report.readability, Readability::Fair);
    }

    #[test]
    fn test_ten_flat_lines_stay_good() {
        let code = (1..=10)
            .map(|i| format!("x{} = {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(CodeAnalyzer::new().analyze(&code).readability, Readability::Good);
    }
}

// ============================================================================
// Pair comparisons
// ============================================================================

#[cfg(test)]
mod comparison_tests {
    use super::*;

    #[test]
    fn test_reverse_scenario_improvements() {
        let comparison = CodeAnalyzer::new().compare(REVERSE_LOOP, REVERSE_SLICE);

        let titles: Vec<&str> = comparison
            .improvements
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Built-in Functions", "Shorter Code", "No Explicit Loops", "Single Return"]
        );
        assert_eq!(comparison.improvements[0].impact, ImpactLevel::High);
        assert_eq!(comparison.line_delta(), -3);
        assert!(comparison.estimates.is_none());
    }

    #[test]
    fn test_identical_code_gets_fallback_only() {
        let comparison = CodeAnalyzer::new().compare(PAIR_SUMS, PAIR_SUMS);

        assert_eq!(comparison.original, comparison.evolved);
        assert_eq!(comparison.improvements.len(), 1);
        assert_eq!(
            comparison.improvements[0].category,
            ImprovementCategory::Maintainability
        );
        assert_eq!(comparison.line_delta(), 0);
    }

    #[test]
    fn test_improvement_list_never_empty() {
        let samples = ["", "x", PAIR_SUMS, REVERSE_LOOP, REVERSE_SLICE];
        let analyzer = CodeAnalyzer::new();

        for original in samples {
            for evolved in samples {
                let comparison = analyzer.compare(original, evolved);
                assert!(
                    !comparison.improvements.is_empty(),
                    "Expected at least one improvement for {:?} -> {:?}",
                    original,
                    evolved
                );
            }
        }
    }

    #[test]
    fn test_comparison_is_deterministic() {
        let analyzer = CodeAnalyzer::new();
        let first = analyzer.compare(PAIR_SUMS, REVERSE_SLICE);
        let second = analyzer.compare(PAIR_SUMS, REVERSE_SLICE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_comparison_serializes_labels() {
        let comparison = CodeAnalyzer::new().compare(PAIR_SUMS, "return sorted(a + b)");
        let json = serde_json::to_value(&comparison).unwrap();

        assert_eq!(json["original"]["big_o"], "O(n²)");
        assert_eq!(json["evolved"]["big_o"], "O(n log n)");
        assert!(json.get("estimates").is_none());
    }
}
