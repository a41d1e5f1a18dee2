//! The ActivityStreams 2.0 core and extended types.
//!
//! Every type is a `types` list, the property groups it is built from, and
//! an `unknown` bag for everything else. The groups fix which properties a
//! type has; inheritance in the vocabulary becomes composition here.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use streams_types::{Alternative, Result};

use crate::codec::{CONTEXT_KEY, ExtraFields, JsonMap, TypeList};
use crate::group::{
    ActivityProperties, ActorProperties, CollectionProperties, IntransitiveProperties, LinkProperties,
    ObjectProperties, OrderedCollectionProperties, OrderedPageProperties, PageProperties, PlaceProperties,
    ProfileProperties, QuestionProperties, RelationshipProperties, TombstoneProperties,
};
use crate::resource::{AnyLink, AnyObject, Category, Parts, PartsMut, Vocabulary};

macro_rules! vocabulary {
    (@capable Object $name:ident) => {
        impl From<$name> for AnyObject {
            fn from(value: $name) -> Self {
                AnyObject::wrap(Resource::$name(value))
            }
        }
    };

    (@capable Link $name:ident) => {
        impl From<$name> for AnyLink {
            fn from(value: $name) -> Self {
                AnyLink::wrap(Resource::$name(value))
            }
        }
    };

    (
        $(
            $(#[$meta:meta])*
            $name:ident: $category:ident { $( $part:ident: $group:ty ),* $(,)? }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                pub types: TypeList,
                $( pub $part: $group, )*
                pub unknown: ExtraFields,
            }

            impl $name {
                /// Creates an empty instance. `type` is filled in on encode.
                #[must_use]
                pub fn new() -> Self {
                    Self {
                        types: TypeList::new(),
                        $( $part: <$group>::default(), )*
                        unknown: ExtraFields::new(),
                    }
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl Vocabulary for $name {
                const NAME: &'static str = stringify!($name);
                const CATEGORY: Category = Category::$category;

                fn from_map(map: &JsonMap) -> Result<Self> {
                    let mut map = map.clone();
                    map.remove(CONTEXT_KEY);
                    let types = TypeList::decode_from(&mut map)?;
                    types.require(Self::NAME)?;
                    $( let $part = <$group>::decode_from(&mut map)?; )*
                    Ok(Self {
                        types,
                        $( $part, )*
                        unknown: ExtraFields::from_json(map),
                    })
                }

                fn to_map(&self) -> Result<JsonMap> {
                    let mut map = JsonMap::new();
                    $( self.$part.encode_into(&mut map)?; )*
                    self.types.encode_into(Self::NAME, &mut map);
                    self.unknown.encode_into(&mut map)?;
                    Ok(map)
                }

                fn types(&self) -> &TypeList {
                    &self.types
                }

                fn types_mut(&mut self) -> &mut TypeList {
                    &mut self.types
                }

                fn unknown(&self) -> &ExtraFields {
                    &self.unknown
                }

                fn unknown_mut(&mut self) -> &mut ExtraFields {
                    &mut self.unknown
                }

                #[allow(clippy::needless_update)]
                fn parts(&self) -> Parts<'_> {
                    Parts {
                        $( $part: Some(&self.$part), )*
                        ..Parts::default()
                    }
                }

                #[allow(clippy::needless_update)]
                fn parts_mut(&mut self) -> PartsMut<'_> {
                    PartsMut {
                        $( $part: Some(&mut self.$part), )*
                        ..PartsMut::default()
                    }
                }

                fn into_resource(self) -> Resource {
                    Resource::$name(self)
                }

                fn from_resource(resource: &Resource) -> Option<&Self> {
                    match resource {
                        Resource::$name(v) => Some(v),
                        _ => None,
                    }
                }

                fn from_resource_mut(resource: &mut Resource) -> Option<&mut Self> {
                    match resource {
                        Resource::$name(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$name> for Resource {
                fn from(value: $name) -> Self {
                    Resource::$name(value)
                }
            }

            vocabulary!(@capable $category $name);

            /// Matches objects whose `type` names this type.
            impl Alternative for Box<$name> {
                fn decode(value: &Value) -> Result<Option<Self>> {
                    let Some(map) = value.as_object() else {
                        return Ok(None);
                    };
                    if !TypeList::names_in(map).any(|t| t == $name::NAME) {
                        return Ok(None);
                    }
                    $name::from_map(map).map(|v| Some(Box::new(v)))
                }

                fn encode(&self) -> Result<Value> {
                    self.to_value()
                }
            }

            impl Serialize for $name {
                fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    self.to_map().map_err(serde::ser::Error::custom)?.serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                    let map = JsonMap::deserialize(deserializer)?;
                    $name::from_map(&map).map_err(serde::de::Error::custom)
                }
            }
        )+

        /// Any vocabulary object.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Resource {
            $( $name($name), )+
        }

        impl Resource {
            /// Every canonical type token.
            pub const NAMES: &'static [&'static str] = &[$( stringify!($name) ),+];

            /// The canonical name of the concrete type.
            #[must_use]
            pub fn type_name(&self) -> &'static str {
                match self {
                    $( Self::$name(_) => $name::NAME, )+
                }
            }

            #[must_use]
            pub fn category(&self) -> Category {
                match self {
                    $( Self::$name(_) => $name::CATEGORY, )+
                }
            }

            /// The category of a type token, if it names a vocabulary type.
            #[must_use]
            pub fn category_of(name: &str) -> Option<Category> {
                $(
                    if name == $name::NAME {
                        return Some($name::CATEGORY);
                    }
                )+
                None
            }

            pub(crate) fn decode_as(name: &str, map: &JsonMap) -> Option<Result<Self>> {
                $(
                    if name == $name::NAME {
                        return Some($name::from_map(map).map(Self::$name));
                    }
                )+
                None
            }

            pub fn to_map(&self) -> Result<JsonMap> {
                match self {
                    $( Self::$name(v) => v.to_map(), )+
                }
            }

            #[must_use]
            pub fn types(&self) -> &TypeList {
                match self {
                    $( Self::$name(v) => &v.types, )+
                }
            }

            pub fn types_mut(&mut self) -> &mut TypeList {
                match self {
                    $( Self::$name(v) => &mut v.types, )+
                }
            }

            #[must_use]
            pub fn unknown(&self) -> &ExtraFields {
                match self {
                    $( Self::$name(v) => &v.unknown, )+
                }
            }

            pub fn unknown_mut(&mut self) -> &mut ExtraFields {
                match self {
                    $( Self::$name(v) => &mut v.unknown, )+
                }
            }

            /// The property groups this resource carries.
            #[must_use]
            pub fn parts(&self) -> Parts<'_> {
                match self {
                    $( Self::$name(v) => v.parts(), )+
                }
            }

            pub fn parts_mut(&mut self) -> PartsMut<'_> {
                match self {
                    $( Self::$name(v) => v.parts_mut(), )+
                }
            }
        }
    };
}

vocabulary! {
    /// The root of every non-link type.
    Object: Object { object: ObjectProperties }
    Article: Object { object: ObjectProperties }
    Audio: Object { object: ObjectProperties }
    Document: Object { object: ObjectProperties }
    Event: Object { object: ObjectProperties }
    Image: Object { object: ObjectProperties }
    Note: Object { object: ObjectProperties }
    Page: Object { object: ObjectProperties }
    Video: Object { object: ObjectProperties }

    /// A physical or logical location.
    Place: Object { object: ObjectProperties, place: PlaceProperties }
    /// Content about another object, usually an actor.
    Profile: Object { object: ObjectProperties, profile: ProfileProperties }
    Relationship: Object { object: ObjectProperties, relationship: RelationshipProperties }
    /// Stands in for a deleted object.
    Tombstone: Object { object: ObjectProperties, tombstone: TombstoneProperties }

    Application: Object { object: ObjectProperties, actor: ActorProperties }
    Group: Object { object: ObjectProperties, actor: ActorProperties }
    Organization: Object { object: ObjectProperties, actor: ActorProperties }
    Person: Object { object: ObjectProperties, actor: ActorProperties }
    Service: Object { object: ObjectProperties, actor: ActorProperties }

    /// An action taken by an actor on an object.
    Activity: Object { object: ObjectProperties, activity: ActivityProperties }
    Accept: Object { object: ObjectProperties, activity: ActivityProperties }
    Add: Object { object: ObjectProperties, activity: ActivityProperties }
    Announce: Object { object: ObjectProperties, activity: ActivityProperties }
    Block: Object { object: ObjectProperties, activity: ActivityProperties }
    Create: Object { object: ObjectProperties, activity: ActivityProperties }
    Delete: Object { object: ObjectProperties, activity: ActivityProperties }
    Dislike: Object { object: ObjectProperties, activity: ActivityProperties }
    Flag: Object { object: ObjectProperties, activity: ActivityProperties }
    Follow: Object { object: ObjectProperties, activity: ActivityProperties }
    Ignore: Object { object: ObjectProperties, activity: ActivityProperties }
    Invite: Object { object: ObjectProperties, activity: ActivityProperties }
    Join: Object { object: ObjectProperties, activity: ActivityProperties }
    Leave: Object { object: ObjectProperties, activity: ActivityProperties }
    Like: Object { object: ObjectProperties, activity: ActivityProperties }
    Listen: Object { object: ObjectProperties, activity: ActivityProperties }
    Move: Object { object: ObjectProperties, activity: ActivityProperties }
    Offer: Object { object: ObjectProperties, activity: ActivityProperties }
    Read: Object { object: ObjectProperties, activity: ActivityProperties }
    Reject: Object { object: ObjectProperties, activity: ActivityProperties }
    Remove: Object { object: ObjectProperties, activity: ActivityProperties }
    TentativeAccept: Object { object: ObjectProperties, activity: ActivityProperties }
    TentativeReject: Object { object: ObjectProperties, activity: ActivityProperties }
    Undo: Object { object: ObjectProperties, activity: ActivityProperties }
    Update: Object { object: ObjectProperties, activity: ActivityProperties }
    View: Object { object: ObjectProperties, activity: ActivityProperties }

    /// An activity with no direct object.
    IntransitiveActivity: Object { object: ObjectProperties, intransitive: IntransitiveProperties }
    Arrive: Object { object: ObjectProperties, intransitive: IntransitiveProperties }
    Travel: Object { object: ObjectProperties, intransitive: IntransitiveProperties }
    /// A poll. Options live in either `oneOf` or `anyOf`.
    Question: Object {
        object: ObjectProperties,
        intransitive: IntransitiveProperties,
        question: QuestionProperties,
    }

    Collection: Object { object: ObjectProperties, collection: CollectionProperties }
    OrderedCollection: Object { object: ObjectProperties, ordered_collection: OrderedCollectionProperties }
    CollectionPage: Object {
        object: ObjectProperties,
        collection: CollectionProperties,
        page: PageProperties,
    }
    /// A page of an ordered collection. Members are in `orderedItems`;
    /// there is no `items`.
    OrderedCollectionPage: Object {
        object: ObjectProperties,
        ordered_collection: OrderedCollectionProperties,
        ordered_page: OrderedPageProperties,
    }

    /// A reference to a resource by URL, with metadata about the target.
    Link: Link { link: LinkProperties }
    /// A link to an actor mentioned in content.
    Mention: Link { link: LinkProperties }
}
