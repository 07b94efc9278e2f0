//! ItemSource port - where the selectable tree comes from
//!
//! The engine never fetches data itself; adapters load the forest ahead of time.

use crate::domain::entities::Item;
use crate::error::SkilltreeResult;

/// Supplies the full item forest for a session
pub trait ItemSource {
    fn load_items(&self) -> SkilltreeResult<Vec<Item>>;
}

/// A fixed, in-memory forest
impl ItemSource for Vec<Item> {
    fn load_items(&self) -> SkilltreeResult<Vec<Item>> {
        Ok(self.clone())
    }
}
