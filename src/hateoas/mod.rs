//! HAL-style hypermedia representations
//!
//! Representations are computed per response and never stored. Links are
//! serialized as `"_links": { "<rel>": { "href": "<uri>" } }`, embedded
//! collections as `"_embedded": { "<rel>": [ ... ] }`.

mod link;
mod model;

pub use link::{Link, Links, SELF_REL};
pub use model::{CollectionModel, EntityModel, RepresentationModel};
