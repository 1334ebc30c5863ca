//! Allow-listed in-place card updates.

use serde_json::{Map, Value};

use geticard_core::error::{AppError, FieldError};
use geticard_core::result::AppResult;

use super::model::Card;

/// The only attributes an update request may change.
pub const EDITABLE_FIELDS: [&str; 6] = [
    "nome",
    "biografia",
    "empresa",
    "telefone",
    "emailContato",
    "foto_perfil",
];

impl Card {
    /// Merge allow-listed attributes from `body` into this card.
    ///
    /// Attributes outside [`EDITABLE_FIELDS`] are ignored. A `null` clears an
    /// optional attribute. Returns the names of the attributes that were
    /// present in the body and applied. On error the card is left untouched.
    pub fn apply_update(&mut self, body: &Map<String, Value>) -> AppResult<Vec<&'static str>> {
        let mut next = self.clone();
        let mut errors = Vec::new();
        let mut applied = Vec::new();

        for field in EDITABLE_FIELDS {
            let Some(value) = body.get(field) else {
                continue;
            };
            let text = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                _ => {
                    errors.push(FieldError::new(field, "type", format!("{field} must be a string")));
                    continue;
                }
            };

            if field == "emailContato" {
                match text {
                    Some(email) if !email.trim().is_empty() => next.email_contato = email,
                    _ => {
                        errors.push(FieldError::new(
                            field,
                            "required",
                            "emailContato cannot be cleared",
                        ));
                        continue;
                    }
                }
            } else if let Some(slot) = next.optional_slot(field) {
                *slot = text;
            }
            applied.push(field);
        }

        if errors.is_empty() {
            *self = next;
            Ok(applied)
        } else {
            Err(AppError::invalid_fields("Invalid card update", errors))
        }
    }

    fn optional_slot(&mut self, field: &str) -> Option<&mut Option<String>> {
        match field {
            "nome" => Some(&mut self.nome),
            "biografia" => Some(&mut self.biografia),
            "empresa" => Some(&mut self.empresa),
            "telefone" => Some(&mut self.telefone),
            "foto_perfil" => Some(&mut self.foto_perfil),
            _ => None,
        }
    }
}
