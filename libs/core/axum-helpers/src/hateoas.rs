//! HAL-style hypermedia wrappers.
//!
//! A [`Resource`] is an entity flattened next to a `_links` map; a
//! [`Resources`] collection nests its members under `_embedded.{rel}`.
//! Links are produced from route templates such as `/cars/{id}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Link relation pointing at the resource itself.
pub const SELF_REL: &str = "self";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// Relation name to link.
pub type Links = BTreeMap<String, Link>;

/// Substitutes `id` for the `{id}` placeholder of a route template.
///
/// ```rust
/// use axum_helpers::hateoas::expand;
///
/// assert_eq!(expand("/cars/{id}", 7), "/cars/7");
/// ```
pub fn expand(template: &str, id: impl std::fmt::Display) -> String {
    template.replace("{id}", &id.to_string())
}

/// Single entity with its links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub content: T,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> Resource<T> {
    pub fn new(content: T) -> Self {
        Self {
            content,
            links: Links::new(),
        }
    }

    pub fn with_link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.insert(rel.into(), Link::new(href));
        self
    }

    pub fn self_href(&self) -> Option<&str> {
        self.links.get(SELF_REL).map(|link| link.href.as_str())
    }
}

/// Collection of resources embedded under a relation name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Resources<T> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<String, Vec<Resource<T>>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> Resources<T> {
    /// The relation key is always present, even for an empty collection.
    pub fn new(rel: impl Into<String>, items: Vec<Resource<T>>) -> Self {
        let mut embedded = BTreeMap::new();
        embedded.insert(rel.into(), items);
        Self {
            embedded,
            links: Links::new(),
        }
    }

    pub fn with_link(mut self, rel: impl Into<String>, href: impl Into<String>) -> Self {
        self.links.insert(rel.into(), Link::new(href));
        self
    }
}

/// Turns entities into linked resources.
///
/// Implementors provide the route templates; the provided methods build the
/// `self` link and the link back to the collection.
pub trait ResourceAssembler {
    type Entity;

    /// Relation name for the collection, e.g. `"cars"`.
    const REL: &'static str;
    /// Collection path, e.g. `"/cars"`.
    const COLLECTION: &'static str;
    /// Item template containing `{id}`, e.g. `"/cars/{id}"`.
    const ITEM: &'static str;

    fn id_of(entity: &Self::Entity) -> i64;

    fn to_model(entity: Self::Entity) -> Resource<Self::Entity> {
        let href = expand(Self::ITEM, Self::id_of(&entity));
        Resource::new(entity)
            .with_link(SELF_REL, href)
            .with_link(Self::REL, Self::COLLECTION)
    }

    fn to_collection(entities: Vec<Self::Entity>) -> Resources<Self::Entity> {
        let items = entities.into_iter().map(Self::to_model).collect();
        Resources::new(Self::REL, items).with_link(SELF_REL, Self::COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: i64,
        name: String,
    }

    struct WidgetAssembler;

    impl ResourceAssembler for WidgetAssembler {
        type Entity = Widget;
        const REL: &'static str = "widgets";
        const COLLECTION: &'static str = "/widgets";
        const ITEM: &'static str = "/widgets/{id}";

        fn id_of(entity: &Widget) -> i64 {
            entity.id
        }
    }

    fn widget(id: i64) -> Widget {
        Widget {
            id,
            name: format!("w{id}"),
        }
    }

    #[test]
    fn test_resource_flattens_content_next_to_links() {
        let json = serde_json::to_value(WidgetAssembler::to_model(widget(3))).unwrap();
        assert_eq!(
            json,
            json!({
                "id": 3,
                "name": "w3",
                "_links": {
                    "self": {"href": "/widgets/3"},
                    "widgets": {"href": "/widgets"}
                }
            })
        );
    }

    #[test]
    fn test_collection_embeds_items_under_rel() {
        let json =
            serde_json::to_value(WidgetAssembler::to_collection(vec![widget(1), widget(2)]))
                .unwrap();
        assert_eq!(json["_embedded"]["widgets"].as_array().unwrap().len(), 2);
        assert_eq!(json["_embedded"]["widgets"][1]["_links"]["self"]["href"], "/widgets/2");
        assert_eq!(json["_links"]["self"]["href"], "/widgets");
    }

    #[test]
    fn test_empty_collection_keeps_embedded_key() {
        let json = serde_json::to_value(WidgetAssembler::to_collection(vec![])).unwrap();
        assert_eq!(json["_embedded"]["widgets"], json!([]));
    }

    #[test]
    fn test_resource_round_trips_through_json() {
        let resource = WidgetAssembler::to_model(widget(9));
        let text = serde_json::to_string(&resource).unwrap();
        let back: Resource<Widget> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.self_href(), Some("/widgets/9"));
        assert_eq!(back.content, widget(9));
    }
}
