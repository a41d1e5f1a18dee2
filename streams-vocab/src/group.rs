//! Property groups.
//!
//! A group is the set of properties one level of the vocabulary adds:
//! everything an `Object` has, what an `Activity` adds on top, and so on.
//! Each vocabulary type is a composition of groups, so a property is
//! declared exactly once no matter how many types carry it.

use streams_types::Result;

use crate::codec::{Functional, JsonMap, NaturalLanguage, Property, Sequence};
use crate::value::{
    BooleanValue, ClosedValue, CollectionRef, DateTimeValue, DurationValue, FloatValue, FormerType, ImageOrLink,
    IriValue, LanguageTagValue, LinkOrIri, MediaTypeValue, NonNegativeIntegerValue, ObjectOrLink, ObjectRef, PageRef,
    RelValue, Text, UnitValue,
};

macro_rules! property_group {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident: $ty:ty => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $(#[$field_meta])* pub $field: $ty, )+
        }

        impl $name {
            /// The JSON keys this group owns, not counting `<name>Map`
            /// siblings.
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            pub(crate) fn decode_from(map: &mut JsonMap) -> Result<Self> {
                Ok(Self {
                    $( $field: <$ty as Property>::decode_from($key, map)?, )+
                })
            }

            pub(crate) fn encode_into(&self, map: &mut JsonMap) -> Result<()> {
                $( Property::encode_into(&self.$field, $key, map)?; )+
                Ok(())
            }
        }
    };
}

/// A natural-language text property such as `name` or `content`.
pub type Texts = NaturalLanguage<Sequence<Text>>;

property_group! {
    /// Properties of every object.
    ObjectProperties {
        attachment: Sequence<ObjectOrLink> => "attachment",
        attributed_to: Sequence<ObjectOrLink> => "attributedTo",
        audience: Sequence<ObjectOrLink> => "audience",
        bcc: Sequence<ObjectOrLink> => "bcc",
        bto: Sequence<ObjectOrLink> => "bto",
        cc: Sequence<ObjectOrLink> => "cc",
        content: Texts => "content",
        context: Sequence<ObjectOrLink> => "context",
        duration: Functional<DurationValue> => "duration",
        end_time: Functional<DateTimeValue> => "endTime",
        generator: Sequence<ObjectOrLink> => "generator",
        icon: Sequence<ImageOrLink> => "icon",
        id: Functional<IriValue> => "id",
        image: Sequence<ImageOrLink> => "image",
        in_reply_to: Sequence<ObjectOrLink> => "inReplyTo",
        likes: Functional<CollectionRef> => "likes",
        location: Sequence<ObjectOrLink> => "location",
        media_type: Functional<MediaTypeValue> => "mediaType",
        name: Texts => "name",
        preview: Sequence<ObjectOrLink> => "preview",
        published: Functional<DateTimeValue> => "published",
        replies: Functional<CollectionRef> => "replies",
        sensitive: Functional<BooleanValue> => "sensitive",
        shares: Functional<CollectionRef> => "shares",
        source: Functional<ObjectRef> => "source",
        start_time: Functional<DateTimeValue> => "startTime",
        summary: Texts => "summary",
        tag: Sequence<ObjectOrLink> => "tag",
        to: Sequence<ObjectOrLink> => "to",
        updated: Functional<DateTimeValue> => "updated",
        url: Sequence<LinkOrIri> => "url",
    }
}

property_group! {
    /// Properties of every link.
    LinkProperties {
        attributed_to: Sequence<ObjectOrLink> => "attributedTo",
        height: Functional<NonNegativeIntegerValue> => "height",
        href: Functional<IriValue> => "href",
        hreflang: Functional<LanguageTagValue> => "hreflang",
        id: Functional<IriValue> => "id",
        media_type: Functional<MediaTypeValue> => "mediaType",
        name: Texts => "name",
        preview: Sequence<ObjectOrLink> => "preview",
        rel: Sequence<RelValue> => "rel",
        summary: Texts => "summary",
        width: Functional<NonNegativeIntegerValue> => "width",
    }
}

property_group! {
    /// Properties of transitive activities.
    ActivityProperties {
        actor: Sequence<ObjectOrLink> => "actor",
        instrument: Sequence<ObjectOrLink> => "instrument",
        object: Sequence<ObjectOrLink> => "object",
        origin: Sequence<ObjectOrLink> => "origin",
        result: Sequence<ObjectOrLink> => "result",
        target: Sequence<ObjectOrLink> => "target",
    }
}

property_group! {
    /// Properties of intransitive activities: an activity without `object`.
    IntransitiveProperties {
        actor: Sequence<ObjectOrLink> => "actor",
        instrument: Sequence<ObjectOrLink> => "instrument",
        origin: Sequence<ObjectOrLink> => "origin",
        result: Sequence<ObjectOrLink> => "result",
        target: Sequence<ObjectOrLink> => "target",
    }
}

property_group! {
    QuestionProperties {
        any_of: Sequence<ObjectOrLink> => "anyOf",
        closed: Functional<ClosedValue> => "closed",
        one_of: Sequence<ObjectOrLink> => "oneOf",
    }
}

property_group! {
    /// Properties of unordered collections.
    CollectionProperties {
        current: Functional<PageRef> => "current",
        first: Functional<PageRef> => "first",
        items: Sequence<ObjectOrLink> => "items",
        last: Functional<PageRef> => "last",
        total_items: Functional<NonNegativeIntegerValue> => "totalItems",
    }
}

property_group! {
    /// Properties of ordered collections. Members live in `orderedItems`.
    OrderedCollectionProperties {
        current: Functional<PageRef> => "current",
        first: Functional<PageRef> => "first",
        last: Functional<PageRef> => "last",
        ordered_items: Sequence<ObjectOrLink> => "orderedItems",
        total_items: Functional<NonNegativeIntegerValue> => "totalItems",
    }
}

property_group! {
    PageProperties {
        next: Functional<PageRef> => "next",
        part_of: Functional<CollectionRef> => "partOf",
        prev: Functional<PageRef> => "prev",
    }
}

property_group! {
    OrderedPageProperties {
        next: Functional<PageRef> => "next",
        part_of: Functional<CollectionRef> => "partOf",
        prev: Functional<PageRef> => "prev",
        start_index: Functional<NonNegativeIntegerValue> => "startIndex",
    }
}

property_group! {
    /// ActivityPub actor endpoints.
    ActorProperties {
        followers: Functional<CollectionRef> => "followers",
        following: Functional<CollectionRef> => "following",
        inbox: Functional<CollectionRef> => "inbox",
        liked: Functional<CollectionRef> => "liked",
        outbox: Functional<CollectionRef> => "outbox",
        preferred_username: NaturalLanguage<Functional<Text>> => "preferredUsername",
        streams: Sequence<CollectionRef> => "streams",
    }
}

property_group! {
    PlaceProperties {
        accuracy: Functional<FloatValue> => "accuracy",
        altitude: Functional<FloatValue> => "altitude",
        latitude: Functional<FloatValue> => "latitude",
        longitude: Functional<FloatValue> => "longitude",
        radius: Functional<FloatValue> => "radius",
        units: Functional<UnitValue> => "units",
    }
}

property_group! {
    ProfileProperties {
        describes: Functional<ObjectRef> => "describes",
    }
}

property_group! {
    RelationshipProperties {
        object: Sequence<ObjectRef> => "object",
        relationship: Sequence<ObjectRef> => "relationship",
        subject: Functional<ObjectOrLink> => "subject",
    }
}

property_group! {
    TombstoneProperties {
        deleted: Functional<DateTimeValue> => "deleted",
        former_type: Sequence<FormerType> => "formerType",
    }
}
