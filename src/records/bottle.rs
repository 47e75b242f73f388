//! Bottle record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single physical bottle, located by storage unit and bin position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottle {
    pub id: i64,
    pub wine_id: i64,
    pub storage_id: i64,
    pub storage_description: Option<String>,
    pub bin_x: i64,
    pub bin_y: i64,
    /// Position within the bin, front to back
    pub depth: i64,
    pub created_date: Option<DateTime<Utc>>,
}

crate::impl_record!(Bottle, resource: "bottles", default_sort: ("createdDate", Desc), fields: {
    "id" => Integer(|b: &Bottle| b.id.into()),
    "wineId" => Integer(|b: &Bottle| b.wine_id.into()),
    "storageId" => Integer(|b: &Bottle| b.storage_id.into()),
    "storageDescription" => Text(|b: &Bottle| b.storage_description.clone().into()),
    "binX" => Integer(|b: &Bottle| b.bin_x.into()),
    "binY" => Integer(|b: &Bottle| b.bin_y.into()),
    "depth" => Integer(|b: &Bottle| b.depth.into()),
    "createdDate" => DateTime(|b: &Bottle| b.created_date.into()),
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Record, SortDirection};

    #[test]
    fn test_bottle_registry() {
        let fields = Bottle::fields();
        assert_eq!(fields.len(), 8);
        assert!(fields.resolve("createdDate").is_some());
        assert!(fields.resolve("created_date").is_some());
        assert_eq!(Bottle::default_sort().field, "createdDate");
        assert_eq!(Bottle::default_sort().direction, SortDirection::Desc);
    }
}
