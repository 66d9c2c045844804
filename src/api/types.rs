//! Listing API response type definitions.

use serde::Deserialize;

/// One page of the paginated house listing.
///
/// `ok == false` means the page is not ready yet and should be fetched
/// again later; the `houses` array is meaningless in that case.
#[derive(Debug, Deserialize)]
pub struct ListingPage {
    #[serde(default)]
    pub houses: Vec<House>,
    #[serde(default)]
    pub ok: bool,
}

/// A single house listing record.
#[derive(Debug, Clone, Deserialize)]
pub struct House {
    pub id: i64,
    pub address: String,
    pub homeowner: String,
    pub price: i64,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}
