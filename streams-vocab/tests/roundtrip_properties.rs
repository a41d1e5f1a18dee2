use proptest::prelude::*;
use serde_json::{Map, Value, json};
use streams_vocab::{AnyLink, AnyObject, Iri, Link, Note, ObjectOrLink, Resource, Vocabulary};

fn collapse(values: Vec<Value>) -> Option<Value> {
    match values.len() {
        0 => None,
        1 => values.into_iter().next(),
        _ => Some(Value::Array(values)),
    }
}

fn iri_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|path| format!("https://example.com/{path}"))
}

// No ':' so plain text is never read as an IRI.
fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.!?]{0,24}"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        text_strategy().prop_map(Value::from),
        Just(Value::Null),
    ]
}

// Objects carry no "type" and strings no ':', so nothing here resolves.
fn unknown_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar_strategy(),
        prop::collection::vec(scalar_strategy(), 0..4).prop_map(Value::Array),
        prop::collection::btree_map("k[a-z]{0,4}", scalar_strategy(), 0..3)
            .prop_map(|fields| Value::Object(fields.into_iter().collect())),
    ]
}

fn element_strategy() -> impl Strategy<Value = ObjectOrLink> {
    prop_oneof![
        iri_strategy().prop_map(|s| ObjectOrLink::from(Iri::parse(&s).unwrap())),
        unknown_strategy().prop_map(ObjectOrLink::Unknown),
        text_strategy().prop_map(|text| {
            let mut note = Note::new();
            note.types.push("Note");
            note.object.content.values.append(text.as_str());
            ObjectOrLink::from(AnyObject::from(note))
        }),
        iri_strategy().prop_map(|href| {
            let mut link = Link::new();
            link.types.push("Link");
            link.link.href.set(Iri::parse(&href).unwrap());
            ObjectOrLink::from(AnyLink::from(link))
        }),
    ]
}

prop_compose! {
    // Decoding fills in `types`, so built objects name themselves up front.
    fn built_note_strategy()(
        to in prop::collection::vec(element_strategy(), 0..4),
        cc in prop::collection::vec(element_strategy(), 0..3),
        names in prop::collection::vec(text_strategy(), 0..3),
        extra in prop::collection::btree_map("x-[a-z]{1,6}", scalar_strategy(), 0..3),
    ) -> Note {
        let mut note = Note::new();
        note.types.push("Note");
        note.object.to = to.into_iter().collect();
        note.object.cc = cc.into_iter().collect();
        for name in &names {
            note.object.name.values.append(name.as_str());
        }
        for (key, value) in extra {
            note.unknown.add(key, value);
        }
        note
    }
}

prop_compose! {
    fn note_strategy()(
        to in prop::collection::vec(iri_strategy(), 0..4),
        cc in prop::collection::vec(iri_strategy(), 0..3),
        names in prop::collection::vec(text_strategy(), 0..3),
        name_map in prop::option::of(prop::collection::btree_map("[a-z]{2}", text_strategy(), 0..3)),
        content in prop::option::of(text_strategy()),
        extra_types in prop::collection::vec("[a-z]{1,6}", 0..2),
        extra in prop::collection::btree_map("x-[a-z]{1,6}", scalar_strategy(), 0..4),
    ) -> Value {
        let mut map = Map::new();
        let mut types = vec![Value::from("Note")];
        types.extend(extra_types.into_iter().map(|t| Value::from(format!("ext{t}"))));
        map.insert("type".into(), collapse(types).unwrap_or_default());
        if let Some(v) = collapse(to.into_iter().map(Value::from).collect()) {
            map.insert("to".into(), v);
        }
        if let Some(v) = collapse(cc.into_iter().map(Value::from).collect()) {
            map.insert("cc".into(), v);
        }
        if let Some(v) = collapse(names.into_iter().map(Value::from).collect()) {
            map.insert("name".into(), v);
        }
        if let Some(lang) = name_map {
            map.insert("nameMap".into(), json!(lang));
        }
        if let Some(text) = content {
            map.insert("content".into(), Value::from(text));
        }
        for (key, value) in extra {
            map.insert(key, value);
        }
        Value::Object(map)
    }
}

proptest! {
    #[test]
    fn normalized_note_round_trips(input in note_strategy()) {
        let note = Note::from_value(&input).unwrap();
        prop_assert_eq!(note.to_value().unwrap(), input);
    }

    #[test]
    fn decode_encode_is_idempotent(input in note_strategy()) {
        let once = Note::from_value(&input).unwrap();
        let twice = Note::from_value(&once.to_value().unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn one_element_arrays_collapse(iris in prop::collection::vec(iri_strategy(), 1..5)) {
        let input = json!({"type": "Note", "to": iris.clone()});
        let out = Note::from_value(&input).unwrap().to_value().unwrap();
        if iris.len() == 1 {
            prop_assert_eq!(&out["to"], &Value::from(iris[0].clone()));
        } else {
            prop_assert_eq!(&out["to"], &json!(iris));
        }
    }

    #[test]
    fn built_note_round_trips(note in built_note_strategy()) {
        let back = Note::from_value(&note.to_value().unwrap()).unwrap();
        prop_assert_eq!(back, note);
    }

    #[test]
    fn built_sequences_keep_their_length(elements in prop::collection::vec(element_strategy(), 0..5)) {
        let mut note = Note::new();
        note.object.to = elements.iter().cloned().collect();
        let back = Note::from_value(&note.to_value().unwrap()).unwrap();
        prop_assert_eq!(back.object.to.len(), elements.len());
        prop_assert_eq!(back.object.to.as_slice(), elements.as_slice());
    }

    #[test]
    fn resource_and_concrete_decode_agree(input in note_strategy()) {
        let resource = Resource::from_value(&input).unwrap();
        prop_assert_eq!(resource.to_value().unwrap(), Note::from_value(&input).unwrap().to_value().unwrap());
    }
}
