//! Vocabulary objects as a closed set, and the capabilities they expose.
//!
//! [`Resource`] holds any vocabulary type. Code that needs one property
//! family asks for it through [`Resource::parts`] instead of matching on the
//! concrete type: an `OrderedCollectionPage` simply has no `collection`
//! part, so there is nothing to call `items` on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use streams_types::{Alternative, Error, Iri, Result};

use crate::codec::{ExtraFields, JsonMap, TYPE_KEY, TypeList};
use crate::group::{
    ActivityProperties, ActorProperties, CollectionProperties, IntransitiveProperties, LinkProperties,
    ObjectProperties, OrderedCollectionProperties, OrderedPageProperties, PageProperties, PlaceProperties,
    ProfileProperties, QuestionProperties, RelationshipProperties, TombstoneProperties,
};
use crate::value::IriValue;

pub use crate::vocab::Resource;

/// The two roots of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Object,
    Link,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Object => "an Object",
            Category::Link => "a Link",
        }
    }
}

/// Read access to the property groups a type carries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parts<'a> {
    pub object: Option<&'a ObjectProperties>,
    pub link: Option<&'a LinkProperties>,
    pub activity: Option<&'a ActivityProperties>,
    pub intransitive: Option<&'a IntransitiveProperties>,
    pub question: Option<&'a QuestionProperties>,
    pub collection: Option<&'a CollectionProperties>,
    pub ordered_collection: Option<&'a OrderedCollectionProperties>,
    pub page: Option<&'a PageProperties>,
    pub ordered_page: Option<&'a OrderedPageProperties>,
    pub actor: Option<&'a ActorProperties>,
    pub place: Option<&'a PlaceProperties>,
    pub profile: Option<&'a ProfileProperties>,
    pub relationship: Option<&'a RelationshipProperties>,
    pub tombstone: Option<&'a TombstoneProperties>,
}

/// Write access to the property groups a type carries.
#[derive(Debug, Default)]
pub struct PartsMut<'a> {
    pub object: Option<&'a mut ObjectProperties>,
    pub link: Option<&'a mut LinkProperties>,
    pub activity: Option<&'a mut ActivityProperties>,
    pub intransitive: Option<&'a mut IntransitiveProperties>,
    pub question: Option<&'a mut QuestionProperties>,
    pub collection: Option<&'a mut CollectionProperties>,
    pub ordered_collection: Option<&'a mut OrderedCollectionProperties>,
    pub page: Option<&'a mut PageProperties>,
    pub ordered_page: Option<&'a mut OrderedPageProperties>,
    pub actor: Option<&'a mut ActorProperties>,
    pub place: Option<&'a mut PlaceProperties>,
    pub profile: Option<&'a mut ProfileProperties>,
    pub relationship: Option<&'a mut RelationshipProperties>,
    pub tombstone: Option<&'a mut TombstoneProperties>,
}

impl Parts<'_> {
    /// Number of members in `items`, or zero for types without it.
    #[must_use]
    pub fn items_len(&self) -> usize {
        self.collection.map_or(0, |c| c.items.len())
    }

    /// Number of members in `orderedItems`, or zero for types without it.
    #[must_use]
    pub fn ordered_items_len(&self) -> usize {
        self.ordered_collection.map_or(0, |c| c.ordered_items.len())
    }

    /// Names of the groups present, in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        [
            ("object", self.object.is_some()),
            ("link", self.link.is_some()),
            ("activity", self.activity.is_some()),
            ("intransitive", self.intransitive.is_some()),
            ("question", self.question.is_some()),
            ("collection", self.collection.is_some()),
            ("ordered_collection", self.ordered_collection.is_some()),
            ("page", self.page.is_some()),
            ("ordered_page", self.ordered_page.is_some()),
            ("actor", self.actor.is_some()),
            ("place", self.place.is_some()),
            ("profile", self.profile.is_some()),
            ("relationship", self.relationship.is_some()),
            ("tombstone", self.tombstone.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

/// A concrete vocabulary type.
pub trait Vocabulary: Sized {
    /// The canonical `type` token.
    const NAME: &'static str;
    const CATEGORY: Category;

    /// Decodes from a JSON map. `type` must contain [`Self::NAME`].
    fn from_map(map: &JsonMap) -> Result<Self>;

    /// Encodes to a JSON map, adding [`Self::NAME`] to `type` if missing.
    fn to_map(&self) -> Result<JsonMap>;

    fn types(&self) -> &TypeList;
    fn types_mut(&mut self) -> &mut TypeList;

    /// Keys outside the vocabulary.
    fn unknown(&self) -> &ExtraFields;
    fn unknown_mut(&mut self) -> &mut ExtraFields;

    fn parts(&self) -> Parts<'_>;
    fn parts_mut(&mut self) -> PartsMut<'_>;

    fn into_resource(self) -> Resource;
    fn from_resource(resource: &Resource) -> Option<&Self>;
    fn from_resource_mut(resource: &mut Resource) -> Option<&mut Self>;

    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_object()
            .ok_or(Error::NotAnObject(Self::NAME))
            .and_then(Self::from_map)
    }

    fn to_value(&self) -> Result<Value> {
        self.to_map().map(Value::Object)
    }

    /// The `id` of this object or link.
    fn id(&self) -> Option<&Iri> {
        let parts = self.parts();
        parts
            .object
            .map(|o| &o.id)
            .or(parts.link.map(|l| &l.id))
            .and_then(|id| id.get())
            .and_then(IriValue::as_iri)
    }

    /// True if the public collection is among the recipients. Types without
    /// addressing are never public.
    fn is_public(&self) -> bool {
        self.parts().object.is_some_and(ObjectProperties::is_public)
    }
}

/// Returns true if `name` is the canonical token of a vocabulary type.
#[must_use]
pub fn is_known_type(name: &str) -> bool {
    Resource::category_of(name).is_some()
}

/// Decodes `map` as the first known type among its tokens, optionally
/// restricted to one category. `Ok(None)` if no token qualifies.
pub(crate) fn resolve(map: &JsonMap, category: Option<Category>) -> Result<Option<Resource>> {
    let wanted = TypeList::names_in(map).find(|name| {
        Resource::category_of(name).is_some_and(|found| category.is_none_or(|c| c == found))
    });
    match wanted {
        Some(name) => Resource::decode_as(name, map).transpose(),
        None => Ok(None),
    }
}

impl Resource {
    /// Decodes a map as whichever vocabulary type it names first.
    pub fn from_map(map: &JsonMap) -> Result<Self> {
        if let Some(resource) = resolve(map, None)? {
            return Ok(resource);
        }
        let types = TypeList::from_value(map.get(TYPE_KEY).ok_or(Error::MissingType)?);
        Err(Error::UnrecognizedType { found: types.to_vec() })
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        value
            .as_object()
            .ok_or(Error::NotAnObject("a vocabulary object"))
            .and_then(Self::from_map)
    }

    pub fn to_value(&self) -> Result<Value> {
        self.to_map().map(Value::Object)
    }

    #[must_use]
    pub fn is_link(&self) -> bool {
        self.category() == Category::Link
    }

    #[must_use]
    pub fn id(&self) -> Option<&Iri> {
        let parts = self.parts();
        parts
            .object
            .map(|o| &o.id)
            .or(parts.link.map(|l| &l.id))
            .and_then(|id| id.get())
            .and_then(IriValue::as_iri)
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.parts().object.is_some_and(ObjectProperties::is_public)
    }

    /// Borrows the concrete type, if this is one.
    #[must_use]
    pub fn downcast_ref<T: Vocabulary>(&self) -> Option<&T> {
        T::from_resource(self)
    }

    pub fn downcast_mut<T: Vocabulary>(&mut self) -> Option<&mut T> {
        T::from_resource_mut(self)
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = JsonMap::deserialize(deserializer)?;
        Resource::from_map(&map).map_err(serde::de::Error::custom)
    }
}

macro_rules! capable {
    ($(#[$meta:meta])* $name:ident, $category:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Box<Resource>);

        impl $name {
            /// Wraps a resource, failing if it belongs to the other category.
            pub fn new(resource: Resource) -> Result<Self> {
                if resource.category() == Category::$category {
                    Ok(Self(Box::new(resource)))
                } else {
                    Err(Error::Incapable {
                        type_name: resource.type_name(),
                        capability: Category::$category.as_str(),
                    })
                }
            }

            #[must_use]
            pub fn get(&self) -> &Resource {
                &self.0
            }

            #[must_use]
            pub fn into_inner(self) -> Resource {
                *self.0
            }

            #[must_use]
            pub fn type_name(&self) -> &'static str {
                self.0.type_name()
            }

            #[must_use]
            pub fn parts(&self) -> Parts<'_> {
                self.0.parts()
            }

            pub fn parts_mut(&mut self) -> PartsMut<'_> {
                self.0.parts_mut()
            }

            #[must_use]
            pub fn downcast_ref<T: Vocabulary>(&self) -> Option<&T> {
                T::from_resource(&self.0)
            }

            pub fn downcast_mut<T: Vocabulary>(&mut self) -> Option<&mut T> {
                T::from_resource_mut(&mut self.0)
            }
        }

        impl TryFrom<Resource> for $name {
            type Error = Error;

            fn try_from(resource: Resource) -> Result<Self> {
                Self::new(resource)
            }
        }

        impl Alternative for $name {
            fn decode(value: &Value) -> Result<Option<Self>> {
                let Some(map) = value.as_object() else {
                    return Ok(None);
                };
                Ok(resolve(map, Some(Category::$category))?.map(|r| Self(Box::new(r))))
            }

            fn encode(&self) -> Result<Value> {
                self.0.to_value()
            }
        }
    };
}

capable! {
    /// Any vocabulary type that descends from `Object`.
    AnyObject, Object
}

capable! {
    /// `Link` or one of its subtypes.
    AnyLink, Link
}

impl AnyObject {
    pub(crate) fn wrap(resource: Resource) -> Self {
        Self(Box::new(resource))
    }
}

impl AnyLink {
    pub(crate) fn wrap(resource: Resource) -> Self {
        Self(Box::new(resource))
    }
}
