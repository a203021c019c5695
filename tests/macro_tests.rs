use kvconf::{config, parse, ConfigMap, ConfigValue, Number};

#[test]
fn test_config_macro_empty() {
    let map = config!({});
    assert_eq!(map, ConfigMap::new());
}

#[test]
fn test_config_macro_scalars() {
    let map = config!({
        "name": "demo",
        "port": 8080,
        "ratio": 0.5,
        "debug": false
    });

    assert_eq!(map.get("name"), Some(&ConfigValue::String("demo".to_string())));
    assert_eq!(map.get("port"), Some(&ConfigValue::Number(Number::Integer(8080))));
    assert_eq!(map.get("ratio"), Some(&ConfigValue::Number(Number::Float(0.5))));
    assert_eq!(map.get("debug"), Some(&ConfigValue::Bool(false)));
}

#[test]
fn test_config_macro_keeps_order_and_last_value() {
    let map = config!({ "b": 1, "a": 2, "b": 3 });
    let keys: Vec<_> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(map.get("b"), Some(&ConfigValue::from(3)));
}

#[test]
fn test_config_macro_matches_parsed_document() {
    let doc = parse("host = localhost\nport = 5432\nssl = yes\n").unwrap();
    assert_eq!(
        doc.to_map(),
        config!({ "host": "localhost", "port": 5432, "ssl": true })
    );
}
