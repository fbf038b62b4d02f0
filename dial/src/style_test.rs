#![allow(clippy::float_cmp)]

use super::*;

fn base_hand() -> StyleSpec {
    StyleSpec {
        stroke_style: Some("#111".to_owned()),
        shadow_color: Some("rgba(0, 0, 0, 0.4)".to_owned()),
        shadow_blur: Some(12.0),
        shadow_offset: Some(Vector2::new(3.0, 3.0)),
        ..StyleSpec::default()
    }
}

#[test]
fn merge_keeps_own_fields_and_fills_the_rest() {
    let second = StyleSpec {
        length: Some(400.0),
        stroke_style: Some("red".to_owned()),
        ..StyleSpec::default()
    };
    let merged = second.merged_over(&base_hand());
    assert_eq!(merged.length, Some(400.0));
    assert_eq!(merged.stroke_style.as_deref(), Some("red"));
    assert_eq!(merged.shadow_blur, Some(12.0));
    assert_eq!(merged.fill_style, None);
}

#[test]
fn merge_does_not_touch_base() {
    let base = base_hand();
    let _merged = StyleSpec { line_width: Some(9.0), ..StyleSpec::default() }.merged_over(&base);
    assert_eq!(base, base_hand());
}

#[test]
fn without_shadow_clears_only_shadow() {
    let plain = base_hand().without_shadow();
    assert_eq!(plain.shadow_color, None);
    assert_eq!(plain.shadow_blur, None);
    assert_eq!(plain.shadow_offset, None);
    assert_eq!(plain.stroke_style.as_deref(), Some("#111"));
}

#[test]
fn shadow_defaults_are_invisible() {
    let s = StyleSpec::default();
    assert_eq!(s.shadow_color_or_transparent(), TRANSPARENT);
    assert_eq!(s.shadow_blur_or_zero(), 0.0);
    assert_eq!(s.shadow_offset_or_zero(), Vector2::ZERO);
}

#[test]
fn zero_is_distinct_from_absent() {
    let zero = StyleSpec { line_width: Some(0.0), ..StyleSpec::default() };
    assert_eq!(zero.line_width, Some(0.0));
    assert_eq!(StyleSpec::default().line_width, None);
}

#[test]
fn deserializes_camel_case_with_missing_fields() {
    let spec: StyleSpec = serde_json::from_str(r#"{"lineWidth": 4, "shadowOffset": {"x": 1, "y": 2}}"#)
        .unwrap();
    assert_eq!(spec.line_width, Some(4.0));
    assert_eq!(spec.shadow_offset, Some(Vector2::new(1.0, 2.0)));
    assert_eq!(spec.stroke_style, None);
}

#[test]
fn rejects_unknown_attributes() {
    assert!(serde_json::from_str::<StyleSpec>(r#"{"lineWdith": 4}"#).is_err());
}

#[test]
fn line_defaults_apply_only_when_unset() {
    let unset = StyleSpec::default();
    assert_eq!(unset.line_width_or_default(), DEFAULT_LINE_WIDTH);
    assert_eq!(unset.stroke_style_or_default(), DEFAULT_STROKE_STYLE);

    let set = StyleSpec { line_width: Some(0.0), stroke_style: Some("#123".into()), ..StyleSpec::default() };
    assert_eq!(set.line_width_or_default(), 0.0);
    assert_eq!(set.stroke_style_or_default(), "#123");
}
