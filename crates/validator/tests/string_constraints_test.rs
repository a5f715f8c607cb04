//! Built-in string predicates, exercised through a validator.

use pretty_assertions::assert_eq;
use rstest::rstest;
use veritas_validator::prelude::*;

struct Form {
    text: String,
}

fn check<V>(predicate: V, text: &str) -> ConstraintViolations
where
    V: Validate<Input = str> + Send + Sync + 'static,
{
    let validator = Validator::<Form>::builder()
        .constraint("text", |f: &Form| f.text.as_str(), |c| c.with(predicate))
        .build()
        .unwrap();

    let form = Form { text: text.into() };
    validator.validate_with_locale(&form, &Locale::ROOT).unwrap()
}

// ============================================================================
// SIZE
// ============================================================================

#[rstest]
#[case::ascii("abc", true)]
#[case::too_short("ab", false)]
#[case::too_long("abcd", false)]
#[case::composed("がぎぐ", true)]
#[case::decomposed("か\u{3099}き\u{3099}く\u{3099}", true)]
#[case::surrogate_pair("𠮷野家", true)]
fn test_fixed_size_counts_normalized_code_points(#[case] text: &str, #[case] valid: bool) {
    assert_eq!(check(fixed_size(3), text).is_valid(), valid);
}

#[test]
fn test_size_message_carries_limit_and_actual() {
    let violations = check(less_than_or_equal(3), "abcde");
    let violation = &violations.violations()[0];

    assert_eq!(violation.message_key(), "string.less_than_or_equal");
    assert_eq!(violation.args(), ["text", "3", "5"]);
    assert_eq!(
        violation.message(),
        "The size of \"text\" must be less than or equal to 3. The given size is 5"
    );
}

#[test]
fn test_size_without_normalization_counts_raw_code_points() {
    let text = "か\u{3099}";
    assert!(check(fixed_size(1), text).is_valid());
    assert!(!check(fixed_size(1).normalization(Normalization::None), text).is_valid());
    assert!(check(fixed_size(2).normalization(Normalization::None), text).is_valid());
}

#[rstest]
#[case::nfkc_half_width(Normalization::Nfkc, "ｶﾞ", 1)]
#[case::nfd_half_width(Normalization::Nfd, "ｶﾞ", 2)]
#[case::nfkd_half_width(Normalization::Nfkd, "ｶﾞ", 2)]
#[case::nfd_composed(Normalization::Nfd, "が", 2)]
#[case::nfc_composed(Normalization::Nfc, "が", 1)]
fn test_fixed_size_per_normalization_form(
    #[case] normalization: Normalization,
    #[case] text: &str,
    #[case] size: usize,
) {
    assert!(check(fixed_size(size).normalization(normalization), text).is_valid());
    assert!(!check(fixed_size(size + 1).normalization(normalization), text).is_valid());
}

#[test]
fn test_ignored_variation_selectors_are_not_counted() {
    // 葛 followed by an ideographic variation selector.
    let text = "葛\u{E0100}飾";
    assert!(check(fixed_size(3), text).is_valid());

    let ignoring = VariantOptions::noticing_all().with_ivs(VariantPolicy::Ignore);
    assert!(check(fixed_size(2).variants(ignoring), text).is_valid());

    // A standardized selector is still counted when only IVS are ignored.
    assert!(!check(fixed_size(1).variants(ignoring), "✌\u{FE0F}").is_valid());
    let ignoring_all = VariantOptions::ignoring_all();
    assert!(check(fixed_size(1).variants(ignoring_all), "✌\u{FE0F}").is_valid());
}

#[rstest]
#[case::greater_than(greater_than(2).validate("abc").is_ok(), true)]
#[case::greater_than_at_limit(greater_than(3).validate("abc").is_ok(), false)]
#[case::greater_than_or_equal(greater_than_or_equal(3).validate("abc").is_ok(), true)]
#[case::less_than(less_than(4).validate("abc").is_ok(), true)]
#[case::less_than_at_limit(less_than(3).validate("abc").is_ok(), false)]
fn test_size_bounds(#[case] outcome: bool, #[case] expected: bool) {
    assert_eq!(outcome, expected);
}

// ============================================================================
// CONTENT
// ============================================================================

#[rstest]
#[case::empty("", false, false)]
#[case::spaces("   ", true, false)]
#[case::tabs("\t\n", true, false)]
#[case::text(" a ", true, true)]
fn test_empty_and_blank(
    #[case] text: &str,
    #[case] not_empty_ok: bool,
    #[case] not_blank_ok: bool,
) {
    assert_eq!(check(not_empty(), text).is_valid(), not_empty_ok);
    assert_eq!(check(not_blank(), text).is_valid(), not_blank_ok);
}

#[test]
fn test_affixes() {
    assert!(check(starts_with("foo"), "foobar").is_valid());
    assert!(check(ends_with("bar"), "foobar").is_valid());
    assert!(check(contains("oba"), "foobar").is_valid());

    let violations = check(starts_with("bar"), "foobar");
    assert_eq!(violations.messages(), ["\"text\" must start with \"bar\""]);
}

// ============================================================================
// FORMATS
// ============================================================================

#[rstest]
#[case::empty("", true)]
#[case::simple("user@example.com", true)]
#[case::plus_and_dots("first.last+tag@sub.example.co.jp", true)]
#[case::non_ascii_local("ユーザー@example.com", true)]
#[case::ip_domain("abc@192.168.1.10", true)]
#[case::missing_at("example.com", false)]
#[case::double_at("a@b@example.com", false)]
#[case::trailing_dot("user@example.", false)]
#[case::space("us er@example.com", false)]
fn test_email(#[case] text: &str, #[case] valid: bool) {
    assert_eq!(check(email(), text).is_valid(), valid);
}

#[rstest]
#[case::empty("", true)]
#[case::https("https://example.com/path?q=1", true)]
#[case::ftp("ftp://files.example.com", true)]
#[case::mailto("mailto:someone@example.com", true)]
#[case::file("file:///tmp/data.txt", true)]
#[case::unknown_scheme("gopher://example.com", false)]
#[case::relative("/just/a/path", false)]
#[case::garbage("http//missing-colon", false)]
fn test_url(#[case] text: &str, #[case] valid: bool) {
    assert_eq!(check(url(), text).is_valid(), valid);
}

#[test]
fn test_pattern_matches_whole_value() {
    let four_digits = pattern("[0-9]{4}").unwrap();
    assert!(check(four_digits.clone(), "2024").is_valid());

    let violations = check(four_digits, "12345");
    assert_eq!(violations.messages(), ["\"text\" must match [0-9]{4}"]);
}

#[test]
fn test_pattern_normalizes_input() {
    let ga = pattern("が").unwrap();
    assert!(check(ga.clone(), "か\u{3099}").is_valid());
    assert!(!check(ga.normalization(Normalization::None), "か\u{3099}").is_valid());
}

#[test]
fn test_invalid_pattern_is_a_build_error() {
    let error = pattern("(unclosed").unwrap_err();
    assert!(matches!(
        error,
        ValidatorError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"
    ));
    assert!(std::error::Error::source(&error).is_some());
}

// ============================================================================
// NUMERIC TEXT
// ============================================================================

#[rstest]
#[case::byte_min(is_byte(), "-128", true)]
#[case::byte_max(is_byte(), "127", true)]
#[case::byte_overflow(is_byte(), "128", false)]
#[case::short_overflow(is_short(), "32768", false)]
#[case::integer(is_integer(), "2147483647", true)]
#[case::integer_overflow(is_integer(), "2147483648", false)]
#[case::long(is_long(), "-9223372036854775808", true)]
#[case::not_a_number(is_integer(), "12a", false)]
fn test_integral_text<V>(#[case] predicate: V, #[case] text: &str, #[case] valid: bool)
where
    V: Validate<Input = str> + Send + Sync + 'static,
{
    assert_eq!(check(predicate, text).is_valid(), valid);
}

#[rstest]
#[case::float("3.14", true)]
#[case::exponent("1e10", true)]
#[case::word("pi", false)]
fn test_floating_text(#[case] text: &str, #[case] valid: bool) {
    assert_eq!(check(is_float(), text).is_valid(), valid);
    assert_eq!(check(is_double(), text).is_valid(), valid);
}

#[rstest]
#[case::huge("123456789012345678901234567890", true, true)]
#[case::signed("-42", true, true)]
#[case::fraction("0.5", false, true)]
#[case::exponent("1.5e-300", false, true)]
#[case::empty("", false, false)]
#[case::word("ten", false, false)]
fn test_big_numbers(#[case] text: &str, #[case] integer: bool, #[case] decimal: bool) {
    assert_eq!(check(is_big_integer(), text).is_valid(), integer);
    assert_eq!(check(is_big_decimal(), text).is_valid(), decimal);
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_not_inverts_a_predicate() {
    let violations = check(not(contains("admin")), "superadmin");
    assert_eq!(violations.violations()[0].message_key(), "predicate.not");
    assert!(check(not(contains("admin")), "guest").is_valid());
}

#[test]
fn test_with_message_replaces_key_and_template() {
    let violations = check(
        not_blank().with_message("user.name.required", "Please enter {0}"),
        "",
    );
    assert_eq!(violations.violations()[0].message_key(), "user.name.required");
    assert_eq!(violations.messages(), ["Please enter text"]);
}

#[test]
fn test_custom_predicate() {
    let palindrome = custom("string.palindrome", "\"{0}\" must read the same backwards", |s: &str| {
        s.chars().eq(s.chars().rev())
    });

    assert!(check(palindrome.clone(), "level").is_valid());
    assert_eq!(check(palindrome, "levels").messages(), [
        "\"text\" must read the same backwards"
    ]);
}
