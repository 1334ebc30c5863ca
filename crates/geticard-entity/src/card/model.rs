//! Card entity model and creation schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A business card, stored in the cards table keyed by `card_id`.
///
/// Field names follow the stored attribute names so records written by
/// earlier clients deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Generated identifier (`card-xxxxxxxx`); the partition key.
    pub card_id: String,
    /// Contact email; used as a lookup filter, not unique at the store level.
    #[serde(rename = "emailContato")]
    pub email_contato: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    /// Short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biografia: Option<String>,
    /// Company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    /// WhatsApp number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    /// Instagram profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Personal site URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Pix payment key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chave_pix: Option<String>,
    /// Reference to the stored profile photo (e.g. `/uploads/card-0a1b2c3d.png`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_perfil: Option<String>,
    /// References to stored gallery images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub galeria: Vec<String>,
}

/// Card creation schema.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewCard {
    /// Contact email.
    #[serde(rename = "emailContato")]
    #[validate(
        required(message = "emailContato is required"),
        email(message = "emailContato must be a valid address")
    )]
    pub email_contato: Option<String>,
    #[validate(length(max = 120))]
    pub nome: Option<String>,
    #[validate(length(max = 2000))]
    pub biografia: Option<String>,
    #[validate(length(max = 120))]
    pub empresa: Option<String>,
    #[validate(length(max = 40))]
    pub telefone: Option<String>,
    #[validate(length(max = 40))]
    pub whatsapp: Option<String>,
    #[validate(length(max = 500))]
    pub instagram: Option<String>,
    #[validate(length(max = 500))]
    pub linkedin: Option<String>,
    #[validate(length(max = 500))]
    pub site: Option<String>,
    #[validate(length(max = 140))]
    pub chave_pix: Option<String>,
    /// Profile photo as a data URL, bare base64, or an existing reference.
    pub foto_perfil: Option<String>,
    /// Gallery images, same encodings as `foto_perfil`.
    #[validate(length(max = 12, message = "galeria accepts at most 12 images"))]
    pub galeria: Option<Vec<String>>,
}

impl NewCard {
    /// Build the stored record. Image fields are expected to already hold
    /// storage references.
    pub fn into_card(self, card_id: String) -> Card {
        Card {
            card_id,
            email_contato: self.email_contato.unwrap_or_default(),
            nome: self.nome,
            biografia: self.biografia,
            empresa: self.empresa,
            telefone: self.telefone,
            whatsapp: self.whatsapp,
            instagram: self.instagram,
            linkedin: self.linkedin,
            site: self.site,
            chave_pix: self.chave_pix,
            foto_perfil: self.foto_perfil,
            galeria: self.galeria.unwrap_or_default(),
        }
    }
}
