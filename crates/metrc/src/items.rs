//! Items accessor.

use bytes::Bytes;
use metrc_core::Method;

use crate::client::{license, MetrcClient};
use crate::models::{Item, ItemCategory, ItemPost};
use crate::Result;

/// Operations on `items/v1`.
#[derive(Debug, Clone, Copy)]
pub struct Items<'a> {
    client: &'a MetrcClient,
}

impl<'a> Items<'a> {
    pub(crate) const fn new(client: &'a MetrcClient) -> Self {
        Self { client }
    }

    /// Fetch a single item.
    pub async fn get(&self, id: i64, license_number: Option<&str>) -> Result<Item> {
        let endpoint = license(license_number).append_to(&format!("items/v1/{id}"));
        self.client
            .get_json(&endpoint, "could not get items by id")
            .await
    }

    /// List active items.
    pub async fn active(&self, license_number: Option<&str>) -> Result<Vec<Item>> {
        let endpoint = license(license_number).append_to("items/v1/active");
        self.client
            .get_json(&endpoint, "could not get active items")
            .await
    }

    /// List item categories.
    pub async fn categories(&self, license_number: Option<&str>) -> Result<Vec<ItemCategory>> {
        let endpoint = license(license_number).append_to("items/v1/categories");
        self.client
            .get_json(&endpoint, "could not get item categories")
            .await
    }

    /// Create items.
    pub async fn create(&self, items: &[ItemPost], license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to("items/v1/create");
        self.client
            .send_json(Method::Post, &endpoint, items, "could not create items")
            .await
    }

    /// Update items; each record must carry its `id`.
    pub async fn update(&self, items: &[ItemPost], license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to("items/v1/update");
        self.client
            .send_json(Method::Post, &endpoint, items, "could not update items")
            .await
    }

    /// Delete an item.
    pub async fn delete(&self, id: i64, license_number: Option<&str>) -> Result<Bytes> {
        let endpoint = license(license_number).append_to(&format!("items/v1/{id}"));
        self.client
            .delete(&endpoint, "could not delete item")
            .await
    }
}
