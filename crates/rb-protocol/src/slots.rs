use serde::{Deserialize, Serialize};

/// A reservation field the dialogue must fill before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotField {
    Date,
    PartySize,
    CustomerName,
    Phone,
}

impl SlotField {
    /// The four required fields, in the canonical reporting order.
    /// Missing-field messages always enumerate in this order.
    pub const ALL: [SlotField; 4] = [
        SlotField::Date,
        SlotField::PartySize,
        SlotField::CustomerName,
        SlotField::Phone,
    ];

    /// User-facing French label, used in missing-field messages.
    pub fn label_fr(self) -> &'static str {
        match self {
            SlotField::Date => "date",
            SlotField::PartySize => "nombre de personnes",
            SlotField::CustomerName => "nom",
            SlotField::Phone => "numéro de téléphone",
        }
    }

    /// Slot name as known to the dialogue engine's tracker.
    pub fn slot_name(self) -> &'static str {
        match self {
            SlotField::Date => "date",
            SlotField::PartySize => "number_of_people",
            SlotField::CustomerName => "name",
            SlotField::Phone => "phone",
        }
    }
}

/// Per-conversation slot values, as known by the dialogue engine.
///
/// Serde field names follow the tracker's slot names. Any subset may be
/// absent mid-conversation; all four required fields must be present
/// before a reservation is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        rename = "number_of_people",
        skip_serializing_if = "Option::is_none"
    )]
    pub party_size: Option<String>,
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Set once a reservation has been confirmed; not a required field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_number: Option<String>,
}

impl ReservationSlots {
    pub fn get(&self, field: SlotField) -> Option<&str> {
        match field {
            SlotField::Date => self.date.as_deref(),
            SlotField::PartySize => self.party_size.as_deref(),
            SlotField::CustomerName => self.customer_name.as_deref(),
            SlotField::Phone => self.phone.as_deref(),
        }
    }

    pub fn set(&mut self, field: SlotField, value: String) {
        let slot = match field {
            SlotField::Date => &mut self.date,
            SlotField::PartySize => &mut self.party_size,
            SlotField::CustomerName => &mut self.customer_name,
            SlotField::Phone => &mut self.phone,
        };
        *slot = Some(value);
    }

    /// Required fields still unfilled, in the canonical order.
    pub fn missing(&self) -> Vec<SlotField> {
        SlotField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }

    /// True once all four required fields are present.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}
