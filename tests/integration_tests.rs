use kvconf::{
    config, parse, parse_reader, tokenize, ConfigMap, ConfigValue, Document, Error, Number,
    TokenKind, Tokenizer,
};
use std::io::Cursor;

#[test]
fn test_well_formed_line_token_shape() {
    let mut lex = Tokenizer::new("port=8080");

    let key = lex.next_token().unwrap();
    assert_eq!(key.kind(), TokenKind::Name);
    assert_eq!(key.literal(), &ConfigValue::from("port"));

    assert_eq!(lex.next_token().unwrap().kind(), TokenKind::Equals);

    let value = lex.next_token().unwrap();
    assert_eq!(value.kind(), TokenKind::Number);
    assert_eq!(value.literal(), &ConfigValue::Number(Number::Integer(8080)));

    for _ in 0..3 {
        assert_eq!(lex.next_token().unwrap().kind(), TokenKind::EndOfInput);
    }
}

#[test]
fn test_literal_classification() {
    let cases = vec![
        ("1653", ConfigValue::from(1653)),
        ("12.23", ConfigValue::from(12.23)),
        ("on", ConfigValue::Bool(true)),
        ("Yes", ConfigValue::Bool(true)),
        ("TRUE", ConfigValue::Bool(true)),
        ("off", ConfigValue::Bool(false)),
        ("No", ConfigValue::Bool(false)),
        ("False", ConfigValue::Bool(false)),
        ("/var/log/app.log", ConfigValue::from("/var/log/app.log")),
        ("api.example.com", ConfigValue::from("api.example.com")),
        ("user@host", ConfigValue::from("user@host")),
    ];

    for (input, expected) in cases {
        let tokens = tokenize(&format!("key = {}", input)).unwrap();
        assert_eq!(tokens.len(), 3, "{}", input);
        assert_eq!(tokens[2].literal(), &expected, "{}", input);
    }
}

#[test]
fn test_comment_only_line() {
    let mut lex = Tokenizer::new("# comment");
    assert!(lex.next_token().unwrap().is_end_of_input());
    assert!(tokenize("   # comment = with $ junk").unwrap().is_empty());
}

#[test]
fn test_bad_config_file() {
    let err = Document::parse("bad config file").unwrap_err();
    assert!(matches!(err, Error::Parsing { .. }));
    assert!(err.to_string().contains("assignment operator"));
}

#[test]
fn test_missing_key() {
    let doc = parse("just_chilling=1").unwrap();
    let err = doc.get("missing").unwrap_err();
    assert!(matches!(err, Error::InvalidKey(ref key) if key == "missing"));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_invalid_token_on_third_token() {
    let mut lex = Tokenizer::new("invalid = $bad");
    assert_eq!(lex.next_token().unwrap().kind(), TokenKind::Name);
    assert_eq!(lex.next_token().unwrap().kind(), TokenKind::Equals);
    assert!(matches!(
        lex.next_token(),
        Err(Error::InvalidToken { ch: '$', .. })
    ));

    assert!(matches!(
        parse("invalid = $bad"),
        Err(Error::InvalidToken { line: 1, col: 11, ch: '$' })
    ));
}

#[test]
fn test_to_map_and_text_round_trip() {
    let doc = parse("api_key = FDA23E8B9C987D\nemail = a@b.com").unwrap();
    let map = doc.to_map();
    assert_eq!(
        map,
        config!({
            "api_key": "FDA23E8B9C987D",
            "email": "a@b.com",
        })
    );

    for indent in [None, Some(0), Some(2), Some(4)] {
        let text = doc.to_text(indent).unwrap();
        let decoded: ConfigMap = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, map);
    }
}

#[test]
fn test_exports_to_native_types() {
    let config = "
    api_key = FDA23E8B9C987D
    email = devs@einsteinmedical.com
    website = https://www.einsteinindustries.com
    ";
    let doc = parse(config).unwrap();
    let map = doc.to_map();
    assert_eq!(map.get("api_key").and_then(ConfigValue::as_str), Some("FDA23E8B9C987D"));
    assert_eq!(
        map.get("email").and_then(ConfigValue::as_str),
        Some("devs@einsteinmedical.com")
    );
    assert_eq!(
        map.get("website").and_then(ConfigValue::as_str),
        Some("https://www.einsteinindustries.com")
    );

    let json: serde_json::Value = serde_json::from_str(&doc.to_text(None).unwrap()).unwrap();
    assert!(json.is_object());
    assert_eq!(json["website"], "https://www.einsteinindustries.com");
}

#[test]
fn test_mixed_types_to_json() {
    let doc = parse("a = 1\nb = 2.5\nc = no\nd = text").unwrap();
    let json: serde_json::Value = serde_json::from_str(&doc.to_text(Some(4)).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "a": 1, "b": 2.5, "c": false, "d": "text" })
    );
}

#[test]
fn test_duplicate_key_asymmetry() {
    let doc = parse("level = 1\nlevel = 2").unwrap();
    assert_eq!(doc.get("level").unwrap(), &ConfigValue::from(1));
    assert_eq!(doc.to_text(None).unwrap(), r#"{"level":2}"#);
    assert_eq!(doc.len(), 2);
}

#[test]
fn test_keys_with_equal_literals_collide() {
    let doc = parse("on = a\nyes = b").unwrap();
    assert_eq!(doc.get("true").unwrap(), &ConfigValue::from("a"));
    assert_eq!(doc.to_text(None).unwrap(), r#"{"true":"b"}"#);

    let doc = parse("1 = a\n01 = b").unwrap();
    assert_eq!(doc.to_map(), config!({ "1": "b" }));
}

#[test]
fn test_document_serializes_as_map() {
    let doc = parse("x = 1\ny = on").unwrap();
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"x":1,"y":true}"#);
}

#[test]
fn test_parse_reader() {
    let doc = parse_reader(Cursor::new("# header\nname = demo\r\nsize = 3\n")).unwrap();
    assert_eq!(doc.get("size").unwrap().as_i64(), Some(3));

    let lines: Vec<_> = doc.iter().map(|d| d.line()).collect();
    assert_eq!(lines, vec![2, 3]);
}

#[test]
fn test_no_partial_document() {
    let result = parse("good = 1\nalso_good = 2\nbroken line\n");
    assert!(matches!(result, Err(Error::Parsing { line: 3, .. })));
}

#[test]
fn test_document_is_shareable_across_threads() {
    let doc = std::sync::Arc::new(parse("workers = 4").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = std::sync::Arc::clone(&doc);
            std::thread::spawn(move || doc.get("workers").unwrap().as_i64())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(4));
    }
}
