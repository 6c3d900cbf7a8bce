use super::{Link, Links};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Link-only representation, e.g. a discovery document
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepresentationModel {
    #[serde(rename = "_links")]
    links: Links,
}

impl RepresentationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.add(link);
        self
    }

    pub fn links(&self) -> &Links {
        &self.links
    }
}

/// A single entity with its fields inlined next to `_links`
#[derive(Debug, Clone, Serialize)]
pub struct EntityModel<T> {
    #[serde(flatten)]
    content: T,

    #[serde(rename = "_links", skip_serializing_if = "Links::is_empty")]
    links: Links,
}

impl<T> EntityModel<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            links: Links::new(),
        }
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.add(link);
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.add_link(link);
        self
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

/// A collection of representations embedded under one relation
///
/// An empty collection omits `_embedded` but keeps its links.
#[derive(Debug, Clone)]
pub struct CollectionModel<T> {
    rel: String,
    content: Vec<T>,
    links: Links,
}

impl<T> CollectionModel<T> {
    pub fn new(rel: impl Into<String>, content: Vec<T>) -> Self {
        Self {
            rel: rel.into(),
            content,
            links: Links::new(),
        }
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.links.add(link);
        self
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn links(&self) -> &Links {
        &self.links
    }
}

impl<T: Serialize> Serialize for CollectionModel<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if !self.content.is_empty() {
            let embedded = BTreeMap::from([(self.rel.as_str(), self.content.as_slice())]);
            map.serialize_entry("_embedded", &embedded)?;
        }
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}
