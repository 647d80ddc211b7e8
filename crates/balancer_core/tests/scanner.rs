use balancer_core::core_api::CoreErrorCode;
use balancer_core::document::Document;
use balancer_core::scanner::{
    self, ABSENT, MinMaxPair, ability_exists, ability_magnitude, locate_and_extract_int,
    locate_min_max_pair, replace_min_max_pair, replace_scalar_field,
};
use proptest::prelude::*;

const CREATURE: &str = r#"{
	"pikeman" :
	{
		"level" : 1,
		"sound" :
		{
			"attack": "PIKEATTK.wav"
		},
		"graphics" :
		{
			"hitPoints" : 99
		},
		// "speed" : 9,
		"speed" : 4,
		"attack" : 4,
		"defense" : 5, // keep
		"hitPoints" : 10,
		"damage" :
		{
			"min" : 1,
			"max" : 3
		},
		"advMapAmount" : { "min" : 20, "max" : 50 },
		"fightValue" : 100
	}
}
"#;

fn creature() -> Document {
    Document::from_text(CREATURE)
}

#[test]
fn two_fields_on_one_line_are_both_extracted() {
    let doc = Document::from_text("{\n\"attack\": 5, \"defense\": 7,\n}\n");
    assert_eq!(locate_and_extract_int(&doc, "attack"), Ok(5));
    assert_eq!(locate_and_extract_int(&doc, "defense"), Ok(7));
}

#[test]
fn string_valued_and_nested_occurrences_are_skipped() {
    let doc = creature();
    assert_eq!(locate_and_extract_int(&doc, "attack"), Ok(4));
    assert_eq!(locate_and_extract_int(&doc, "hitPoints"), Ok(10));
}

#[test]
fn commented_out_fields_are_skipped() {
    let doc = creature();
    assert_eq!(locate_and_extract_int(&doc, "speed"), Ok(4));
    assert_eq!(locate_and_extract_int(&doc, "defense"), Ok(5));
}

#[test]
fn missing_field_is_reported() {
    let err = locate_and_extract_int(&creature(), "aiValue").unwrap_err();
    assert_eq!(err.code, CoreErrorCode::FieldNotFound);
}

#[test]
fn non_numeric_value_is_a_parse_error() {
    let doc = Document::from_text("{\n\"level\": seven,\n}\n");
    let err = locate_and_extract_int(&doc, "level").unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Parse);
}

#[test]
fn min_max_pair_across_lines() {
    let pair = locate_min_max_pair(&creature(), "damage").unwrap();
    assert_eq!(pair, MinMaxPair { max: 3, min: 1 });
}

#[test]
fn min_max_pair_on_one_line() {
    let pair = locate_min_max_pair(&creature(), "advMapAmount").unwrap();
    assert_eq!(pair, MinMaxPair { max: 50, min: 20 });
}

#[test]
fn min_max_pair_absent_values_are_sentinels() {
    let doc = Document::from_text("\"damage\" : {\n\"max\" : 3\n}\n");
    let pair = locate_min_max_pair(&doc, "damage").unwrap();
    assert_eq!(pair.max, 3);
    assert_eq!(pair.min, ABSENT);
    assert_eq!(
        locate_min_max_pair(&doc, "advMapAmount").unwrap(),
        MinMaxPair::ABSENT
    );
}

#[test]
fn ability_presence_ignores_comments() {
    let doc = Document::from_text("\"type\" : \"FLYING\"\n// \"type\" : \"SHOOTER\"\n");
    assert!(ability_exists(&doc, "FLYING"));
    assert!(!ability_exists(&doc, "SHOOTER"));
}

#[test]
fn ability_magnitude_reads_first_value_in_abilities() {
    let doc = Document::from_text(
        "\"val\" : 1,\n\"abilities\":\n{\n\"poison\" :\n{\n\"type\" : \"POISON\",\n\"val\" : 30\n},\n\"acid\" : { \"type\" : \"ACID_BREATH\", \"val\" : 5 }\n}\n",
    );
    assert_eq!(ability_magnitude(&doc), Ok(30));
}

#[test]
fn ability_magnitude_stops_at_first_closing_brace() {
    let doc = Document::from_text(
        "\"abilities\":\n{\n\"fly\" : { \"type\" : \"FLYING\" },\n\"val\" : 12\n}\n",
    );
    assert_eq!(ability_magnitude(&doc), Ok(ABSENT));
}

#[test]
fn scalar_rewrite_keeps_indent_comma_and_comment() {
    let mut doc = creature();
    replace_scalar_field(&mut doc, "defense", 7);
    assert!(doc.lines().contains(&"\t\t\"defense\" : 7, // keep".to_string()));

    replace_scalar_field(&mut doc, "fightValue", 1234);
    assert!(doc.lines().contains(&"\t\t\"fightValue\" : 1234".to_string()));
}

#[test]
fn scalar_rewrite_only_touches_the_target_line() {
    let before = creature();
    let mut after = before.clone();
    replace_scalar_field(&mut after, "hitPoints", 11);

    assert_eq!(before.len(), after.len());
    let changed: Vec<usize> = (0..before.len())
        .filter(|&i| before.line(i) != after.line(i))
        .collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(after.line(changed[0]), Some("\t\t\"hitPoints\" : 11,"));
}

#[test]
fn scalar_rewrite_on_shared_line_keeps_neighbour() {
    let mut doc = Document::from_text("{\n\"attack\": 5, \"defense\": 7,\n}\n");
    replace_scalar_field(&mut doc, "defense", 3);
    assert_eq!(doc.line(1), Some("\"attack\": 5, \"defense\": 3,"));
}

#[test]
fn scalar_rewrite_of_missing_field_is_a_no_op() {
    let mut doc = creature();
    replace_scalar_field(&mut doc, "aiValue", 5);
    assert_eq!(doc, creature());
}

#[test]
fn min_max_rewrite_normalizes_spaces_in_block_lines() {
    let mut doc = creature();
    assert!(replace_min_max_pair(&mut doc, "damage", 2, 4).unwrap());
    let text = doc.to_text();
    assert!(text.contains("\t\t\t\"min\": 2,\n\t\t\t\"max\": 4\n"));
    assert_eq!(
        locate_min_max_pair(&doc, "damage").unwrap(),
        MinMaxPair { max: 4, min: 2 }
    );
}

#[test]
fn min_max_rewrite_on_one_line_block() {
    let mut doc = creature();
    replace_min_max_pair(&mut doc, "advMapAmount", 12, 25).unwrap();
    assert!(
        doc.lines()
            .contains(&"\t\t\"advMapAmount\":{\"min\": 12,\"max\":25},".to_string())
    );
}

#[test]
fn min_max_rewrite_without_block_changes_nothing() {
    let mut doc = Document::from_text("{\n\"level\": 1\n}\n");
    assert!(!replace_min_max_pair(&mut doc, "damage", 1, 2).unwrap());
    assert_eq!(doc.to_text(), "{\n\"level\": 1\n}\n");
}

#[test]
fn predicates_are_usable_on_their_own() {
    assert!(scanner::is_string_valued("\"animation\": \"CPKMAN.DEF\"", "animation"));
    assert!(scanner::is_within_field_depth(2));
    assert_eq!(scanner::brace_delta("{ {"), 2);
}

proptest! {
    #[test]
    fn rewritten_scalar_reads_back(value in -10_000i32..10_000, comment in proptest::bool::ANY) {
        let line = if comment { "\t\t\"speed\" : 4, // fast" } else { "\t\t\"speed\" : 4," };
        let mut doc = Document::from_lines(["{", line, "}"]);
        replace_scalar_field(&mut doc, "speed", value);
        prop_assert_eq!(locate_and_extract_int(&doc, "speed"), Ok(value));
    }
}
