//! Rate, discount, and rentable DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{AddOnId, Identified, Params, RoomId};
use domain_billing::Discount;
use domain_rental::{AddOn, Rate, Rentable, Room};

/// A rate definition: registered type name plus build params
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDto {
    pub rate_type: String,
    #[serde(default)]
    pub params: Params,
}

/// A discount definition: registered type name plus build params
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDto {
    pub discount_type: String,
    #[serde(default)]
    pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnDto {
    pub id: AddOnId,
    pub name: String,
    pub rate: RateDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: RoomId,
    pub name: String,
    pub rate: RateDto,
    /// Add-ons the room supports
    #[serde(default)]
    pub add_ons: Vec<AddOnDto>,
}

impl Identified for AddOnDto {
    const ENTITY: &'static str = "Add-On";

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl Identified for RoomDto {
    const ENTITY: &'static str = "Room";

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

// Rates and discounts are written back as their type name and params, which
// rebuilds them through the registry as long as names equal type names.

impl From<&Rate> for RateDto {
    fn from(rate: &Rate) -> Self {
        Self {
            rate_type: rate.name().to_string(),
            params: rate.params().clone(),
        }
    }
}

impl From<&Discount> for DiscountDto {
    fn from(discount: &Discount) -> Self {
        Self {
            discount_type: discount.name().to_string(),
            params: discount.params().clone(),
        }
    }
}

impl From<&AddOn> for AddOnDto {
    fn from(add_on: &AddOn) -> Self {
        Self {
            id: AddOnId::new(add_on.id()),
            name: add_on.name().to_string(),
            rate: RateDto::from(add_on.rate()),
        }
    }
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            id: RoomId::new(room.id()),
            name: room.name().to_string(),
            rate: RateDto::from(room.rate()),
            add_ons: room.add_ons().iter().map(AddOnDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_dto_uses_camel_case() {
        let dto: RoomDto = serde_json::from_value(json!({
            "id": "suite",
            "name": "Suite",
            "rate": { "rateType": "Fixed Rate", "params": { "Rate": 100 } },
            "addOns": [
                { "id": "wifi", "name": "WiFi", "rate": { "rateType": "Flat Rate", "params": { "Rate": 20 } } }
            ]
        }))
        .unwrap();

        assert_eq!(dto.id, RoomId::new("suite"));
        assert_eq!(dto.rate.rate_type, "Fixed Rate");
        assert_eq!(dto.add_ons.len(), 1);
        assert_eq!(Identified::id(&dto.add_ons[0]), "wifi");
    }

    #[test]
    fn test_add_ons_default_to_empty() {
        let dto: RoomDto = serde_json::from_value(json!({
            "id": "lounge",
            "name": "Lounge",
            "rate": { "rateType": "Flat Rate", "params": { "Rate": 80 } }
        }))
        .unwrap();

        assert!(dto.add_ons.is_empty());
    }

    #[test]
    fn test_rate_dto_serializes_type_name() {
        let dto = RateDto {
            rate_type: "Flat Rate".to_string(),
            params: Params::new().with("Rate", 20),
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({ "rateType": "Flat Rate", "params": { "Rate": 20 } })
        );
    }
}
