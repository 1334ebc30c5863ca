//! Card identifier generation.

use uuid::Uuid;

/// Prefix shared by every card id.
pub const CARD_ID_PREFIX: &str = "card-";

/// Generate a new card id: `"card-"` followed by 8 lowercase hex characters.
pub fn generate_card_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{CARD_ID_PREFIX}{}", &hex[..8])
}
