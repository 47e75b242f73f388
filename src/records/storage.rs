//! Storage bin record

use serde::{Deserialize, Serialize};

/// A bin within a storage unit, with its occupancy count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageBin {
    pub id: i64,
    pub bin_x: i64,
    pub bin_y: i64,
    pub count: i64,
}

crate::impl_record!(StorageBin, resource: "storage", default_sort: ("id", Asc), fields: {
    "id" => Integer(|s: &StorageBin| s.id.into()),
    "binX" => Integer(|s: &StorageBin| s.bin_x.into()),
    "binY" => Integer(|s: &StorageBin| s.bin_y.into()),
    "count" => Integer(|s: &StorageBin| s.count.into()),
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    #[test]
    fn test_storage_bin_registry() {
        let fields = StorageBin::fields();
        assert_eq!(fields.len(), 4);
        assert!(fields.resolve("binX").is_some());
        assert_eq!(StorageBin::resource_name(), "storage");
    }
}
