//! Property value ranges.
//!
//! Each range is an enum with one variant per permitted value shape, tried
//! top to bottom on decode, plus `Unknown` for anything else. Embedded
//! vocabulary objects come first, then IRI references, then literals.

use serde_json::Value;
use streams_types::{
    Alternative, DateTime, Duration, Iri, LangMap, LanguageTag, LinkRelation, MediaType, Result, Unit,
};

use crate::codec::PropertyValue;
use crate::resource::{AnyLink, AnyObject};
use crate::vocab::{Collection, CollectionPage, Image, OrderedCollection, OrderedCollectionPage};

macro_rules! property_value {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident($ty:ty) => $is:ident, $as:ident; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $( $variant($ty), )+
            /// A value that matched no alternative, kept verbatim.
            Unknown(Value),
        }

        impl $name {
            $(
                #[must_use]
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[must_use]
                pub fn $as(&self) -> Option<&$ty> {
                    match self {
                        Self::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            )+

            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl PropertyValue for $name {
            fn decode(value: &Value) -> Result<Self> {
                $(
                    if let Some(v) = <$ty as Alternative>::decode(value)? {
                        return Ok(Self::$variant(v));
                    }
                )+
                tracing::trace!(range = stringify!($name), %value, "no alternative matched; keeping unknown value");
                Ok(Self::Unknown(value.clone()))
            }

            fn encode(&self) -> Result<Value> {
                match self {
                    $( Self::$variant(v) => Alternative::encode(v), )+
                    Self::Unknown(v) => Ok(v.clone()),
                }
            }

            fn unknown(value: Value) -> Self {
                Self::Unknown(value)
            }

            fn as_unknown(&self) -> Option<&Value> {
                match self {
                    Self::Unknown(v) => Some(v),
                    _ => None,
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

property_value! {
    /// An embedded object, an embedded link, or a reference to either.
    ObjectOrLink {
        Object(AnyObject) => is_object, as_object;
        Link(AnyLink) => is_link, as_link;
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    LinkOrIri {
        Link(AnyLink) => is_link, as_link;
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    /// An embedded object or a reference to one.
    ObjectRef {
        Object(AnyObject) => is_object, as_object;
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    /// `icon` and `image`.
    ImageOrLink {
        Image(Box<Image>) => is_image, as_image;
        Link(AnyLink) => is_link, as_link;
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    /// Any collection flavour, a link to one, or a reference.
    CollectionRef {
        Collection(Box<Collection>) => is_collection, as_collection;
        OrderedCollection(Box<OrderedCollection>) => is_ordered_collection, as_ordered_collection;
        CollectionPage(Box<CollectionPage>) => is_collection_page, as_collection_page;
        OrderedCollectionPage(Box<OrderedCollectionPage>) => is_ordered_collection_page, as_ordered_collection_page;
        Link(AnyLink) => is_link, as_link;
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    PageRef {
        CollectionPage(Box<CollectionPage>) => is_collection_page, as_collection_page;
        OrderedCollectionPage(Box<OrderedCollectionPage>) => is_ordered_collection_page, as_ordered_collection_page;
        Link(AnyLink) => is_link, as_link;
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    /// `xsd:string` or `rdf:langString`.
    Text {
        String(String) => is_string, as_string;
        LangString(LangMap) => is_lang_string, as_lang_string;
    }
}

property_value! {
    IriValue {
        Iri(Iri) => is_iri, as_iri;
    }
}

property_value! {
    DateTimeValue {
        DateTime(DateTime) => is_date_time, as_date_time;
    }
}

property_value! {
    DurationValue {
        Duration(Duration) => is_duration, as_duration;
    }
}

property_value! {
    FloatValue {
        Float(f64) => is_float, as_float;
    }
}

property_value! {
    NonNegativeIntegerValue {
        NonNegativeInteger(u64) => is_non_negative_integer, as_non_negative_integer;
    }
}

property_value! {
    BooleanValue {
        Boolean(bool) => is_boolean, as_boolean;
    }
}

property_value! {
    MediaTypeValue {
        MediaType(MediaType) => is_media_type, as_media_type;
    }
}

property_value! {
    LanguageTagValue {
        LanguageTag(LanguageTag) => is_language_tag, as_language_tag;
    }
}

property_value! {
    RelValue {
        Rel(LinkRelation) => is_rel, as_rel;
    }
}

property_value! {
    /// `units`: one of the unit names, or an IRI for anything else.
    UnitValue {
        Iri(Iri) => is_iri, as_iri;
        Unit(Unit) => is_unit, as_unit;
    }
}

property_value! {
    /// `formerType` of a tombstone.
    FormerType {
        Object(AnyObject) => is_object, as_object;
        Iri(Iri) => is_iri, as_iri;
        String(String) => is_string, as_string;
    }
}

property_value! {
    /// `closed` of a question: when it closed, what closed it, or a flag.
    ClosedValue {
        Object(AnyObject) => is_object, as_object;
        Link(AnyLink) => is_link, as_link;
        Iri(Iri) => is_iri, as_iri;
        DateTime(DateTime) => is_date_time, as_date_time;
        Boolean(bool) => is_boolean, as_boolean;
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl Text {
    /// Returns the plain string, or the text for `tag` of a language map.
    #[must_use]
    pub fn text(&self, tag: &str) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::LangString(map) => map.get(tag),
            Self::Unknown(_) => None,
        }
    }
}

impl ObjectOrLink {
    /// The IRI this value points at: the reference itself, or the `id` of
    /// the embedded object.
    #[must_use]
    pub fn id(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Object(object) => object.get().id(),
            Self::Link(link) => link.get().id(),
            Self::Unknown(_) => None,
        }
    }
}
