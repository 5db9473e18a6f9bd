use rs_domext::dom::{self, first_node};
use rs_domext::{escape_html, DomExt, EscapeMode, Options};

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert_eq!(options.escape_mode, EscapeMode::Extended);
    assert!(options.warn_on_invalid_selector);
}

#[test]
fn options_load_from_json_with_missing_fields_defaulted() {
    let options: Options =
        serde_json::from_str(r#"{"escape_mode": "minimal"}"#).expect("valid options");

    assert_eq!(options.escape_mode, EscapeMode::Minimal);
    assert!(options.warn_on_invalid_selector);
}

#[test]
fn options_serialize_to_json() {
    let options = Options {
        warn_on_invalid_selector: false,
        ..Options::default()
    };

    let json = serde_json::to_value(&options).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({"escape_mode": "extended", "warn_on_invalid_selector": false})
    );
}

#[test]
fn unknown_escape_mode_is_rejected() {
    assert!(serde_json::from_str::<Options>(r#"{"escape_mode": "none"}"#).is_err());
}

#[test]
fn dom_ext_keeps_its_options() {
    let options = Options {
        escape_mode: EscapeMode::Minimal,
        ..Options::default()
    };
    let ext = DomExt::new(options.clone());
    assert_eq!(ext.options(), &options);
}

#[test]
fn escape_mode_only_changes_the_escaped_characters_not_the_result_text() {
    let doc = dom::parse(r#"<div id="x"></div><div id="y"></div>"#);
    let x = first_node(&doc, "#x").expect("x");
    let y = first_node(&doc, "#y").expect("y");

    DomExt::default().append(&x, "</div>".into(), true);
    DomExt::new(Options {
        escape_mode: EscapeMode::Minimal,
        ..Options::default()
    })
    .append(&y, "</div>".into(), true);

    assert_eq!(x.text(), y.text());
    assert_ne!(
        escape_html("</div>", EscapeMode::Extended),
        escape_html("</div>", EscapeMode::Minimal)
    );
}
