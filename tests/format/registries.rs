use super::helpers::{formatter, init_logger};
use serde_json::json;
use slackfmt::{Formatter, UserRecord};
use std::collections::HashMap;

#[test]
fn non_object_users_are_rejected_without_side_effects() {
    let mut f = formatter();
    assert!(!f.register_users_value(&json!("not an object")));
    assert!(!f.register_users_value(&json!(null)));
    assert_eq!(f.format("<@U1>"), r#"<span class="slack-user">Jane</span>"#);
}

#[test]
fn unknown_user_falls_back_to_id() {
    let f = formatter();
    assert_eq!(f.format("<@U404>"), r#"<span class="slack-user">U404</span>"#);
}

#[test]
fn typed_registration_replaces_directory() {
    let mut f = formatter();
    f.register_users(HashMap::from([(
        "U2".to_string(),
        UserRecord::new("U2", "Bob"),
    )]));
    assert_eq!(f.format("<@U1>"), r#"<span class="slack-user">U1</span>"#);
    assert_eq!(f.format("<@U2>"), r#"<span class="slack-user">Bob</span>"#);
}

#[test]
fn user_list_merges_into_directory() {
    let mut f = formatter();
    assert!(f.register_users_value(&json!([
        { "id": "U2", "name": "Bob" },
        { "id": "U3", "name": "Cy", "is_admin": true },
    ])));
    assert_eq!(
        f.format("<@U1> <@U2> <@U3>"),
        concat!(
            r#"<span class="slack-user">Jane</span> "#,
            r#"<span class="slack-user">Bob</span> "#,
            r#"<span class="slack-user">Cy</span>"#
        )
    );
}

#[test]
fn custom_emoji_registration_replaces_table() {
    let mut f = formatter();
    assert!(f.register_custom_emoji_value(&json!({ "blob": "https://cdn.example/blob.png" })));
    assert!(f.custom_emoji().get("parrot").is_none());
    assert!(f.format(":blob:").contains("url('https://cdn.example/blob.png')"));
}

#[test]
fn rejected_custom_emoji_keep_previous_table() {
    let mut f = formatter();
    assert!(!f.register_custom_emoji_value(&json!("parrot")));
    assert!(f.format(":parrot:").contains("parrot.gif"));
}

#[test]
fn custom_emoji_without_slash_in_url_is_stripped_as_empty() {
    init_logger();
    let mut f = Formatter::default();
    f.register_custom_emoji(HashMap::from([("dot".to_string(), "dot.png".to_string())]));
    assert_eq!(f.format("a :dot: b"), "a  b");
}
