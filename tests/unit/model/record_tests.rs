use std::collections::HashSet;

use entity_showcase::TitledDescription;

#[test]
fn test_equal_fields_are_equal() {
    let a = TitledDescription::new("Title", "Body");
    let b = TitledDescription::new("Title", "Body");
    assert_eq!(a, b);
}

#[test]
fn test_differing_description_not_equal() {
    let a = TitledDescription::new("Title", "Body");
    let b = TitledDescription::new("Title", "Other");
    assert_ne!(a, b);
}

#[test]
fn test_hash_follows_equality() {
    let mut set = HashSet::new();
    set.insert(TitledDescription::new("Title", "Body"));
    set.insert(TitledDescription::new("Title", "Body"));
    set.insert(TitledDescription::new("Title", "Other"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_record_json() {
    let record = TitledDescription::new("Title", "Body");
    let serialized = serde_json::to_string(&record).unwrap();
    assert_eq!(serialized, r#"{"title":"Title","description":"Body"}"#);

    let deserialized: TitledDescription = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, record);
    assert_eq!(deserialized.to_string(), "Title: Body");
}
