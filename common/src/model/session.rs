use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as asserted by the authenticating proxy.
///
/// Only the email and display name are ever copied onto stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    /// Avatar URL, when the identity provider supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
