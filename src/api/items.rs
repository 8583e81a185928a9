//! Item Endpoints
//!
//! Frontend bindings for the four collection operations.

use gloo_net::http::Request;

use super::{api_url, item_url};
use crate::models::{CheckedPatch, Item, NewItem};

/// GET the whole collection
pub async fn list_items() -> Result<Vec<Item>, String> {
    let response = Request::get(api_url())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err("Failed to fetch items".to_string());
    }
    response.json::<Vec<Item>>().await.map_err(|e| e.to_string())
}

/// POST a new unchecked entry; the server assigns the id
pub async fn create_item(name: &str) -> Result<Item, String> {
    let response = Request::post(api_url())
        .json(&NewItem::named(name))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err("Failed to add item".to_string());
    }
    response.json::<Item>().await.map_err(|e| e.to_string())
}

/// PUT the checked flag to the per-item endpoint (response body unused)
pub async fn set_item_checked(id: &str, checked: bool) -> Result<(), String> {
    let response = Request::put(&item_url(id))
        .json(&CheckedPatch { checked })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Failed to update item with ID {id}"));
    }
    Ok(())
}

/// DELETE the per-item endpoint (response body unused)
pub async fn delete_item(id: &str) -> Result<(), String> {
    let response = Request::delete(&item_url(id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("Failed to delete item with ID {id}"));
    }
    Ok(())
}
