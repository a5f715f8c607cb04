//! Message resolution, locale fallback and JSON rendering.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use veritas_validator::prelude::*;

struct Profile {
    name: String,
    code: String,
}

fn catalog() -> MessageCatalog {
    MessageCatalog::new()
        .with_bundle(Locale::JAPANESE, [
            ("string.not_blank", "「{0}」が空白です"),
            (
                "string.fixed_size",
                "「{0}」の長さは{1}文字である必要があります。現在の長さは{2}文字です",
            ),
        ])
        .with(Locale::parse("ja-JP"), "string.not_blank", "「{0}」を入力してください")
        .with(Locale::ROOT, "string.fixed_size", "{0}: expected {1}, got {2}")
}

fn profile_validator(messages: impl MessageSource + 'static) -> Validator<Profile> {
    Validator::builder()
        .messages(messages)
        .constraint("name", |p: &Profile| p.name.as_str(), |c| c.with(not_blank()))
        .constraint("code", |p: &Profile| p.code.as_str(), |c| c.with(fixed_size(4)))
        .build()
        .unwrap()
}

fn invalid_profile() -> Profile {
    Profile {
        name: " ".into(),
        code: "AB".into(),
    }
}

#[test]
fn test_region_template_then_language_template() {
    let validator = profile_validator(catalog());
    let locale = Locale::parse("ja_JP.UTF-8");

    let violations = validator.validate_with_locale(&invalid_profile(), &locale).unwrap();
    assert_eq!(violations.messages(), [
        "「name」を入力してください",
        "「code」の長さは4文字である必要があります。現在の長さは2文字です",
    ]);
}

#[test]
fn test_root_template_then_predicate_default() {
    let validator = profile_validator(catalog());

    let violations = validator
        .validate_with_locale(&invalid_profile(), &Locale::ENGLISH)
        .unwrap();
    assert_eq!(violations.messages(), [
        "\"name\" must not be blank",
        "code: expected 4, got 2",
    ]);
}

#[test]
fn test_default_messages_use_predicate_templates() {
    let validator = profile_validator(DefaultMessages);
    let locale = Locale::parse("ja-JP");

    let violations = validator.validate_with_locale(&invalid_profile(), &locale).unwrap();
    assert_eq!(
        violations.violations()[1].message(),
        "The size of \"code\" must be 4. The given size is 2"
    );
}

#[test]
fn test_closure_message_source() {
    let source = message_source_fn(|key, locale| match (key, locale.language()) {
        ("string.not_blank", "fr") => Some("« {0} » ne doit pas être vide".to_string()),
        _ => None,
    });
    let validator = profile_validator(source);

    let violations = validator
        .validate_with_locale(&invalid_profile(), &Locale::of("fr"))
        .unwrap();
    assert_eq!(violations.messages()[0], "« name » ne doit pas être vide");
}

#[test]
fn test_shared_catalog_renders_nested_paths() {
    struct Account {
        owner: Profile,
    }

    let shared: Arc<dyn MessageSource> = Arc::new(catalog());
    let owner = Validator::<Profile>::builder()
        .shared_messages(Arc::clone(&shared))
        .constraint("name", |p: &Profile| p.name.as_str(), |c| c.with(not_blank()))
        .build()
        .unwrap();
    let account = Validator::<Account>::builder()
        .shared_messages(shared)
        .nest("owner", |a: &Account| &a.owner, owner)
        .build()
        .unwrap();

    let target = Account {
        owner: invalid_profile(),
    };
    let violations = account.validate_with_locale(&target, &Locale::JAPANESE).unwrap();

    assert_eq!(violations.messages(), ["「owner.name」が空白です"]);
}

#[test]
fn test_violations_to_json() {
    let validator = profile_validator(DefaultMessages);
    let violations = validator
        .validate_with_locale(&invalid_profile(), &Locale::ROOT)
        .unwrap();

    let expected = json!([
        {
            "field": "name",
            "message_key": "string.not_blank",
            "args": ["name"],
            "message": "\"name\" must not be blank",
        },
        {
            "field": "code",
            "message_key": "string.fixed_size",
            "args": ["code", "4", "2"],
            "message": "The size of \"code\" must be 4. The given size is 2",
        },
    ]);

    assert_eq!(violations.to_json_value(), expected);
    assert_eq!(serde_json::to_value(&violations).unwrap(), expected);
}

#[test]
fn test_display_lists_every_violation() {
    let validator = profile_validator(DefaultMessages);
    let violations = validator
        .validate_with_locale(&invalid_profile(), &Locale::ROOT)
        .unwrap();

    assert_eq!(
        violations.to_string(),
        concat!(
            "2 constraint violations\n",
            "  - \"name\" must not be blank\n",
            "  - The size of \"code\" must be 4. The given size is 2",
        )
    );
}
