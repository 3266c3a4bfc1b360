use super::*;

fn text(s: &str) -> Inline {
    Inline::Text(s.to_owned())
}

fn bold(s: &str) -> Inline {
    Inline::Bold(s.to_owned())
}

#[test]
fn plain_text_is_a_single_node() {
    assert_eq!(parse_inline("hello there"), vec![text("hello there")]);
}

#[test]
fn empty_input_produces_no_nodes() {
    assert_eq!(parse_inline(""), Vec::<Inline>::new());
}

#[test]
fn bold_span_is_extracted() {
    assert_eq!(
        parse_inline("ask about our **ARP platform** today"),
        vec![text("ask about our "), bold("ARP platform"), text(" today")]
    );
}

#[test]
fn multiple_bold_spans_in_one_line() {
    assert_eq!(
        parse_inline("**a** and **b**"),
        vec![bold("a"), text(" and "), bold("b")]
    );
}

#[test]
fn newlines_become_break_nodes() {
    assert_eq!(
        parse_inline("line one\nline two"),
        vec![text("line one"), Inline::Break, text("line two")]
    );
}

#[test]
fn consecutive_newlines_keep_every_break() {
    assert_eq!(
        parse_inline("a\n\nb"),
        vec![text("a"), Inline::Break, Inline::Break, text("b")]
    );
}

#[test]
fn unterminated_bold_marker_renders_literally() {
    assert_eq!(parse_inline("oops **dangling"), vec![text("oops **dangling")]);
}

#[test]
fn bold_at_line_start_has_no_empty_prefix_node() {
    assert_eq!(parse_inline("**lead** rest"), vec![bold("lead"), text(" rest")]);
}

#[test]
fn bold_spanning_whole_line() {
    assert_eq!(parse_inline("**everything**"), vec![bold("everything")]);
}

#[test]
fn bold_and_breaks_combine() {
    assert_eq!(
        parse_inline("**Hi**\nthere"),
        vec![bold("Hi"), Inline::Break, text("there")]
    );
}
