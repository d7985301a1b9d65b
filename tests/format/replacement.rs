use slackfmt::{BoundaryPolicy, ConfigBuilder, Formatter, ReplacementMode};

fn with(boundaries: BoundaryPolicy, replacement: ReplacementMode) -> Formatter {
    Formatter::new(
        ConfigBuilder::default()
            .boundaries(boundaries)
            .replacement(replacement)
            .build(),
    )
}

#[test]
fn intraword_markers_are_styled_by_default() {
    let f = Formatter::default();
    assert_eq!(f.format("snake_case_name"), "snake<em>case</em>name");
    assert_eq!(f.format("2*3*4"), "2<strong>3</strong>4");
}

#[test]
fn enforced_boundaries_leave_intraword_markers() {
    let f = with(BoundaryPolicy::Enforce, ReplacementMode::FirstOccurrence);
    assert_eq!(f.format("snake_case_name"), "snake_case_name");
    assert_eq!(f.format("say *hi* now"), "say <strong>hi</strong> now");
}

#[test]
fn enforced_boundaries_accept_line_edges() {
    let f = with(BoundaryPolicy::Enforce, ReplacementMode::FirstOccurrence);
    assert_eq!(f.format("~old~\n`new`"), "<del>old</del><br/><code>new</code>");
}

#[test]
fn boundaries_do_not_gate_tags_or_emoji() {
    let f = with(BoundaryPolicy::Enforce, ReplacementMode::FirstOccurrence);
    assert_eq!(f.format("x<#C1>y"), r#"x<span class="slack-channel">C1</span>y"#);
    assert!(f.format("x:smile:y").contains("1f604.png"));
}

#[test]
fn first_occurrence_rewrites_the_earliest_identical_text() {
    let f = with(BoundaryPolicy::Enforce, ReplacementMode::FirstOccurrence);
    assert_eq!(f.format("x`a` `a`"), "x<code>a</code> `a`");
}

#[test]
fn offset_replacement_rewrites_the_matched_span() {
    let f = with(BoundaryPolicy::Enforce, ReplacementMode::Offset);
    assert_eq!(f.format("x`a` `a`"), "x`a` <code>a</code>");
}

#[test]
fn modes_agree_without_repeated_spans() {
    let input = "<@U1|Ann> said *yes* to _this_ :smile:\n```\ncode\n```";
    let literal = with(BoundaryPolicy::Ignore, ReplacementMode::FirstOccurrence).format(input);
    let offset = with(BoundaryPolicy::Ignore, ReplacementMode::Offset).format(input);
    similar_asserts::assert_eq!(literal, offset);
}
