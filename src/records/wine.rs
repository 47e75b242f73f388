//! Wine catalog record

use serde::{Deserialize, Serialize};

/// A wine in the cellar catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wine {
    pub id: i64,
    pub varietal: Option<String>,
    pub vineyard: Option<String>,
    pub label: Option<String>,
    pub vintage: Option<i64>,
    pub notes: Option<String>,
    /// Number of bottles currently held
    pub count: i64,
}

crate::impl_record!(Wine, resource: "wines", default_sort: ("vintage", Asc), fields: {
    "id" => Integer(|w: &Wine| w.id.into()),
    "varietal" => Text(|w: &Wine| w.varietal.clone().into()),
    "vineyard" => Text(|w: &Wine| w.vineyard.clone().into()),
    "label" => Text(|w: &Wine| w.label.clone().into()),
    "vintage" => Integer(|w: &Wine| w.vintage.into()),
    "notes" => Text(|w: &Wine| w.notes.clone().into()),
    "count" => Integer(|w: &Wine| w.count.into()),
});
