//! End-to-end extraction tests against realistic source snippets.

use pretty_assertions::assert_eq;

use keyglean::{Dialect, ExtractError, ExtractOptions, extract, extract_keys};

fn keys(code: &str) -> Vec<String> {
    extract(code, &ExtractOptions::default())
        .unwrap()
        .into_iter()
        .map(|record| record.key)
        .collect()
}

#[test]
fn extracts_literal_key() {
    assert_eq!(keys("i18n('hello');"), vec!["hello"]);
}

#[test]
fn extracts_concatenated_key_via_member_marker() {
    let options = ExtractOptions {
        marker: "i18n.t".to_string(),
        ..Default::default()
    };
    let records = extract("i18n.t('a' + 'b');", &options).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "ab");
}

#[test]
fn extracts_both_branches_of_conditional() {
    assert_eq!(keys("i18n(cond ? 'x' : 'y');"), vec!["x", "y"]);
}

#[test]
fn extracts_template_with_wildcard_separator() {
    assert_eq!(keys("i18n(`namespace.${key}.title`);"), vec!["namespace.*.title"]);
}

#[test]
fn extracts_wildcard_for_dynamic_argument() {
    assert_eq!(keys("i18n(getKey());"), vec!["*"]);
}

#[test]
fn logical_and_keeps_right_operand_only() {
    assert_eq!(keys("i18n(ready && 'loaded.title');"), vec!["loaded.title"]);
}

#[test]
fn logical_or_merges_both_operands() {
    assert_eq!(keys("i18n(override || 'fallback.title');"), vec!["*", "fallback.title"]);
}

#[test]
fn nullish_coalescing_yields_no_record() {
    assert!(keys("i18n(override ?? 'fallback');").is_empty());
}

#[test]
fn missing_key_argument_yields_no_record() {
    assert!(keys("i18n();").is_empty());
}

#[test]
fn disable_line_comment_suppresses_matching_call() {
    let code = "\
i18n('visible.key');
i18n('hidden.key'); // i18n-extract-disable-line
";
    assert_eq!(keys(code), vec!["visible.key"]);
}

#[test]
fn comment_declaration_produces_record_without_calls() {
    let code = "// i18n-extract greeting.hello\nconst unused = 1;\n";
    let records = extract(code, &ExtractOptions::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "greeting.hello");
    assert_eq!(records[0].translate, None);
    assert_eq!(records[0].loc.start.line, 1);
}

#[test]
fn records_carry_call_location() {
    let code = "const x = 1;\nconst y = i18n('located.key');\n";
    let records = extract(code, &ExtractOptions::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].loc.start.line, 2);
    assert_eq!(records[0].loc.end.line, 2);
}

#[test]
fn translate_argument_is_resolved() {
    let records = extract("i18n('key', count, 'Hello world');", &ExtractOptions::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].translate, Some("Hello world".to_string()));
}

#[test]
fn negative_indices_count_from_argument_end() {
    let options = ExtractOptions {
        key_loc: -2,
        key_tr: -1,
        ..Default::default()
    };
    let records = extract("i18n(count, 'key', 'Hello');", &options).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "key");
    assert_eq!(records[0].translate, Some("Hello".to_string()));
}

#[test]
fn typescript_dialect_parses_annotated_source() {
    let options = ExtractOptions {
        dialect: Dialect::Typescript,
        ..Default::default()
    };
    let code = "function greet(name: string): string { return i18n('greet.hello'); }";
    let records = extract(code, &options).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "greet.hello");
}

#[test]
fn unknown_dialect_fails_before_parsing() {
    // Even unparseable source must not reach the parser.
    let err = "flow".parse::<Dialect>().unwrap_err();
    assert!(matches!(err, ExtractError::InvalidOption(_)));
}

#[test]
fn parse_failure_is_propagated() {
    let err = extract("const = ;", &ExtractOptions::default()).unwrap_err();
    assert!(matches!(err, ExtractError::ParseFailure(_)));
}

#[test]
fn one_bad_call_site_does_not_discard_others() {
    let code = "\
i18n('first.key');
i18n(() => 'not a key');
i18n('last.key');
";
    assert_eq!(keys(code), vec!["first.key", "last.key"]);
}

#[test]
fn extraction_works_inside_jsx() {
    let code = "const view = <p>{i18n('jsx.key')}</p>;";
    assert_eq!(keys(code), vec!["jsx.key"]);
}

#[test]
fn simple_mode_returns_deduplicated_keys() {
    let code = "\
i18n('hello');
i18n('world');
i18n('hello');
i18n(cond ? 'hello' : 'bye');
";
    assert_eq!(
        extract_keys(code, &ExtractOptions::default()).unwrap(),
        vec!["hello", "world", "bye"]
    );
}

#[test]
fn simple_mode_shares_the_resolution_core() {
    assert_eq!(
        extract_keys("i18n(`a${x}b`);", &ExtractOptions::default()).unwrap(),
        vec!["a*b"]
    );
}
