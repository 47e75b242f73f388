//! User summary record

use serde::{Deserialize, Serialize};

/// Account summary exposed through the admin user listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    /// Most recent sign-in, RFC 3339; `None` for accounts that never
    /// signed in
    pub last_on: Option<String>,
    pub is_admin: bool,
}

crate::impl_record!(UserSummary, resource: "users", default_sort: ("username", Asc), fields: {
    "id" => Integer(|u: &UserSummary| u.id.into()),
    "username" => Text(|u: &UserSummary| u.username.clone().into()),
    "lastOn" => Text(|u: &UserSummary| u.last_on.clone().into()),
    "isAdmin" => Boolean(|u: &UserSummary| u.is_admin.into()),
});
