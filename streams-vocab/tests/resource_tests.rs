use pretty_assertions::assert_eq;
use serde_json::json;
use streams_vocab::{
    Announce, AnyLink, AnyObject, Category, Collection, Create, Error, Link, Note, OrderedCollectionPage, Place,
    Resource, Vocabulary, is_known_type,
};

// ── Resolution ───────────────────────────────────────────────────

#[test]
fn resolves_first_known_type() {
    let resource = Resource::from_value(&json!({"type": ["toot:Emoji", "Image", "Document"]})).unwrap();
    assert_eq!(resource.type_name(), "Image");
    assert_eq!(resource.category(), Category::Object);
    assert_eq!(resource.types().len(), 3);
}

#[test]
fn unknown_types_are_reported() {
    let err = Resource::from_value(&json!({"type": "Emoji"})).unwrap_err();
    match err {
        Error::UnrecognizedType { found } => assert_eq!(found, vec!["Emoji".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn resource_without_type_is_rejected() {
    assert!(matches!(
        Resource::from_value(&json!({"id": "https://example.com/x"})),
        Err(Error::MissingType)
    ));
    assert!(matches!(Resource::from_value(&json!([1])), Err(Error::NotAnObject(_))));
}

#[test]
fn known_type_names() {
    assert!(is_known_type("OrderedCollectionPage"));
    assert!(is_known_type("Mention"));
    assert!(!is_known_type("Emoji"));
    assert!(!is_known_type("note"));
    assert_eq!(Resource::category_of("Link"), Some(Category::Link));
    assert!(Resource::NAMES.contains(&"TentativeReject"));
}

#[test]
fn odd_type_tokens_in_nested_objects_are_not_an_error() {
    let input = json!({
        "type": "Create",
        "object": {"type": ["Note", 5]},
    });
    let resource = Resource::from_value(&input).unwrap();
    assert_eq!(resource.to_value().unwrap(), input);
}

#[test]
fn nested_encode_error_names_the_property() {
    let mut place = Place::new();
    place.place.latitude.set(f64::NAN);
    let mut create = Create::new();
    create.activity.object.append(AnyObject::from(place));

    match create.to_value().unwrap_err() {
        Error::Property { property, source } => {
            assert_eq!(property, "object");
            match *source {
                Error::Property { property, source } => {
                    assert_eq!(property, "latitude");
                    assert!(matches!(*source, Error::NonFiniteFloat(_)));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nested_error_names_the_outer_property_path() {
    let mut place = Place::new();
    place.place.radius.set(f64::INFINITY);
    let mut create = Create::new();
    create.activity.object.append(AnyObject::from(place));
    let mut announce = Announce::new();
    announce.activity.object.append(AnyObject::from(create));

    let err = Resource::from(announce).to_value().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("\"object\""), "{message}");
    match err {
        Error::Property { source, .. } => assert!(matches!(*source, Error::Property { .. })),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_nested_type_is_not_an_error() {
    let resource = Resource::from_value(&json!({
        "type": "Create",
        "object": {"type": "Emoji", "name": ":x:"},
    }))
    .unwrap();
    let parts = resource.parts();
    let object = parts.activity.unwrap().object.get(0).unwrap();
    assert!(object.is_unknown());
}

// ── Capability wrappers ──────────────────────────────────────────

#[test]
fn any_object_rejects_links() {
    let link = Resource::from(Link::new());
    match AnyObject::new(link).unwrap_err() {
        Error::Incapable { type_name, capability } => {
            assert_eq!(type_name, "Link");
            assert_eq!(capability, "an Object");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn any_link_accepts_links() {
    let link = AnyLink::try_from(Resource::from(Link::new())).unwrap();
    assert_eq!(link.type_name(), "Link");
    assert!(AnyLink::new(Resource::from(Note::new())).is_err());
}

#[test]
fn any_object_from_concrete_type() {
    let mut object = AnyObject::from(Note::new());
    object.downcast_mut::<Note>().unwrap().object.content.values.append("hi");
    assert!(object.downcast_ref::<Collection>().is_none());
    assert_eq!(object.get().to_value().unwrap(), json!({"type": "Note", "content": "hi"}));
}

// ── Parts ────────────────────────────────────────────────────────

#[test]
fn ordered_collection_page_has_no_items() {
    let resource = Resource::from_value(&json!({
        "type": "OrderedCollectionPage",
        "orderedItems": ["https://example.com/1", "https://example.com/2"],
    }))
    .unwrap();
    let parts = resource.parts();
    assert!(parts.collection.is_none());
    assert_eq!(parts.items_len(), 0);
    assert_eq!(parts.ordered_items_len(), 2);
}

#[test]
fn items_len_is_zero_for_types_without_collections() {
    let note = Note::new();
    assert_eq!(note.parts().items_len(), 0);
    assert_eq!(note.parts().ordered_items_len(), 0);
}

#[test]
fn parts_mut_reaches_the_same_groups() {
    let mut page = OrderedCollectionPage::new();
    {
        let parts = page.parts_mut();
        assert!(parts.collection.is_none());
        parts.ordered_page.unwrap().start_index.set(5u64);
    }
    assert_eq!(page.to_value().unwrap(), json!({"type": "OrderedCollectionPage", "startIndex": 5}));
}

#[test]
fn parts_of_question() {
    let resource = Resource::from_value(&json!({"type": "Question"})).unwrap();
    let parts = resource.parts();
    assert!(parts.object.is_some());
    assert!(parts.intransitive.is_some());
    assert!(parts.question.is_some());
    assert!(parts.activity.is_none());
    assert!(parts.link.is_none());
}

#[test]
fn link_parts() {
    let resource = Resource::from(Link::new());
    assert!(resource.is_link());
    assert!(resource.parts().object.is_none());
    assert!(resource.parts().link.is_some());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn resource_serde_round_trip() {
    let input = json!({"type": "Collection", "totalItems": 0, "items": []});
    let resource: Resource = serde_json::from_value(input).unwrap();
    assert!(resource.downcast_ref::<Collection>().is_some());
    // An empty array decodes to an empty sequence, which is not written.
    assert_eq!(serde_json::to_value(&resource).unwrap(), json!({"type": "Collection", "totalItems": 0}));
}

#[test]
fn id_of_link_and_object() {
    let link = Resource::from_value(&json!({"type": "Link", "id": "https://example.com/l"})).unwrap();
    assert_eq!(link.id().unwrap().as_str(), "https://example.com/l");
    let note = Resource::from_value(&json!({"type": "Note"})).unwrap();
    assert!(note.id().is_none());
}
