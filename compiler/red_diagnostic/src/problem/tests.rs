use super::*;

#[test]
fn test_deprecated_declaration_is_warning_with_replacement() {
    let problem = Problem::from(SettingsProblem::DeprecatedDeclaration {
        used: "Document".to_string(),
        replacement: "Documentation".to_string(),
    });
    assert_eq!(problem.severity(), Severity::Warning);
    assert_eq!(problem.code(), "S001");
    assert!(problem.has_resolution());
    assert_eq!(
        problem.fixers(),
        vec![Fixer::ReplaceWith {
            text: "Documentation".to_string()
        }]
    );
}

#[test]
fn test_for_loop_problems_are_errors() {
    let problem = Problem::from(KeywordsProblem::ForLoopWithoutIn {
        declaration: ":FOR".to_string(),
    });
    assert_eq!(problem.severity(), Severity::Error);
    assert_eq!(problem.category(), ProblemCategory::ForLoop);
    assert_eq!(
        problem.description(),
        "':FOR' loop is missing an IN separator"
    );
    assert_eq!(problem.fixers()[0].to_string(), "insert 'IN'");
}

#[test]
fn test_problems_without_resolution() {
    let problem = Problem::from(VariablesProblem::InvalidDeclaration {
        name: "var".to_string(),
    });
    assert!(!problem.has_resolution());
    assert_eq!(problem.code(), "V001");
}

#[test]
fn test_unclosed_variable_fixer_closes_brace() {
    let problem = Problem::from(VariablesProblem::UnclosedVariable {
        text: "${name".to_string(),
    });
    assert_eq!(
        problem.fixers(),
        vec![Fixer::ReplaceWith {
            text: "${name}".to_string()
        }]
    );
}

#[test]
fn test_severity_ordering() {
    assert!(Severity::Error > Severity::Warning);
    assert!(Severity::Warning > Severity::Info);
}
