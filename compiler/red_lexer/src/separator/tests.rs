use pretty_assertions::assert_eq;

use super::*;

fn texts(separator: &LineSeparator) -> Vec<&str> {
    separator.split_line().iter().map(LineElement::text).collect()
}

#[test]
fn test_whitespace_split_covers_line() {
    let separator = LineSeparator::new(1, 0, "  Log\t  hello  world", SeparatorStyle::Whitespace);
    assert_eq!(texts(&separator), vec!["  ", "Log", "\t  ", "hello", "  ", "world"]);
    assert_eq!(texts(&separator).concat(), "  Log\t  hello  world");
}

#[test]
fn test_single_space_is_not_a_separator() {
    let separator = LineSeparator::new(1, 0, "Test Setup  My Keyword", SeparatorStyle::Whitespace);
    assert_eq!(texts(&separator), vec!["Test Setup", "  ", "My Keyword"]);
}

#[test]
fn test_empty_cell_between_separators_after_first_element() {
    let separator = LineSeparator::new(1, 0, "| a | | b |", SeparatorStyle::Pipe);
    assert_eq!(texts(&separator), vec!["| ", "a", " | ", "", "| ", "b", " |"]);
}

#[test]
fn test_pipe_inside_cell_is_text() {
    let separator = LineSeparator::new(1, 0, "| Log | a|b |", SeparatorStyle::Pipe);
    assert_eq!(texts(&separator), vec!["| ", "Log", " | ", "a|b", " |"]);
}

#[test]
fn test_tsv_consecutive_tabs_make_empty_cells() {
    let separator = LineSeparator::new(1, 0, "\tLog\t\tx", SeparatorStyle::Tabulator);
    assert_eq!(texts(&separator), vec!["\t", "Log", "\t", "", "\t", "x"]);
}

#[test]
fn test_trailing_separator_emits_no_empty_token() {
    let separator = LineSeparator::new(1, 0, "Log  ", SeparatorStyle::Whitespace);
    assert_eq!(texts(&separator), vec!["Log", "  "]);
}

#[test]
fn test_empty_line_has_no_elements() {
    let separator = LineSeparator::new(1, 0, "", SeparatorStyle::Whitespace);
    assert!(separator.split_line().is_empty());
    assert!(!separator.has_next());
}

#[test]
fn test_positions_include_line_offset() {
    let separator = LineSeparator::new(3, 40, "a  b", SeparatorStyle::Whitespace);
    let token = separator.split_line()[2].as_token().cloned().unwrap_or_default();
    assert_eq!(token.position(), Some(FilePosition::new(3, 3, 43)));
}

#[test]
fn test_iterator_yields_only_separators() {
    let mut separator = LineSeparator::new(1, 0, "a  b\tc", SeparatorStyle::Whitespace);
    assert!(separator.has_next());
    let first = separator.next().map(|s| s.text().to_string());
    assert_eq!(first.as_deref(), Some("  "));
    assert!(separator.has_next());
    let second = separator.next().map(|s| s.start_column());
    assert_eq!(second, Some(4));
    assert!(!separator.has_next());
    assert!(separator.next().is_none());
}

#[test]
fn test_builder_selects_style_per_line() {
    let builder = SeparatorBuilder::new(FileFormat::TxtOrRobot);
    assert_eq!(builder.style_for("| Log |"), SeparatorStyle::Pipe);
    assert_eq!(builder.style_for("|\tLog"), SeparatorStyle::Pipe);
    assert_eq!(builder.style_for("|"), SeparatorStyle::Pipe);
    assert_eq!(builder.style_for("|Log"), SeparatorStyle::Whitespace);
    assert_eq!(builder.style_for("  Log"), SeparatorStyle::Whitespace);

    let tsv = SeparatorBuilder::new(FileFormat::Tsv);
    assert_eq!(tsv.style_for("| Log |"), SeparatorStyle::Tabulator);
}
