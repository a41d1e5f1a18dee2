//! Recipient queries over `to`, `bto`, `cc` and `bcc`.

use streams_types::Iri;

use crate::codec::Sequence;
use crate::group::ObjectProperties;
use crate::value::ObjectOrLink;

impl ObjectProperties {
    fn addressing(&self) -> [&Sequence<ObjectOrLink>; 4] {
        [&self.to, &self.bto, &self.cc, &self.bcc]
    }

    /// True if any addressing property holds the public collection IRI.
    ///
    /// Only bare IRI references are checked, not embedded objects.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.addressing()
            .into_iter()
            .flat_map(Sequence::iter)
            .filter_map(ObjectOrLink::as_iri)
            .any(Iri::is_public)
    }

    /// Every recipient id across the addressing properties, in
    /// `to`, `bto`, `cc`, `bcc` order. Embedded recipients contribute
    /// their `id`; recipients without one are skipped.
    pub fn recipients(&self) -> impl Iterator<Item = &Iri> {
        self.addressing()
            .into_iter()
            .flat_map(Sequence::iter)
            .filter_map(ObjectOrLink::id)
    }

    /// Drops `bto` and `bcc`, which must not leave the sending server.
    pub fn strip_hidden_recipients(&mut self) {
        self.bto.clear();
        self.bcc.clear();
    }
}
