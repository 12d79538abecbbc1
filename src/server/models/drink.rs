use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of beverage a logged drink refers to.
///
/// Custom drinks carry their own name, display emoji and alcohol percentage;
/// the built-in kinds carry nothing. Modeling this as a tagged union makes a
/// custom payload on a built-in drink unrepresentable. On the wire the tag
/// serializes as `"type"` and the custom payload keeps the client-facing
/// `customName` / `customEmoji` / `customPercentage` field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrinkKind {
    Beer,
    Wine,
    Spirits,
    Water,
    Custom {
        #[serde(rename = "customName")]
        name: String,
        #[serde(rename = "customEmoji", skip_serializing_if = "Option::is_none")]
        emoji: Option<String>,
        #[serde(rename = "customPercentage")]
        percentage: f64,
    },
}

impl DrinkKind {
    /// Stable lowercase tag, matching the wire format and the storage column.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkKind::Beer => "beer",
            DrinkKind::Wine => "wine",
            DrinkKind::Spirits => "spirits",
            DrinkKind::Water => "water",
            DrinkKind::Custom { .. } => "custom",
        }
    }

    pub fn is_water(&self) -> bool {
        matches!(self, DrinkKind::Water)
    }

    /// Water is the only non-alcoholic kind.
    pub fn is_alcoholic(&self) -> bool {
        !self.is_water()
    }
}

/// A drink that has been persisted and assigned an id by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    pub id: i32,
    pub session_id: Uuid,
    #[serde(flatten)]
    pub kind: DrinkKind,
    /// Volume in deciliters.
    pub amount: f64,
    /// Score contribution attributed to this drink.
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// A drink as submitted by a client, before storage assigns an id and a
/// creation timestamp. Keeping drafts and persisted drinks as distinct types
/// makes the saved/unsaved state explicit instead of a nullable id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDrink {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub kind: DrinkKind,
    pub amount: f64,
    pub points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builtin_kind_serializes_without_custom_fields() {
        let drink = NewDrink {
            session_id: Uuid::nil(),
            kind: DrinkKind::Beer,
            amount: 5.0,
            points: 25,
        };

        let value = serde_json::to_value(&drink).unwrap();
        assert_eq!(value["type"], "beer");
        assert!(value.get("customName").is_none());
        assert!(value.get("customEmoji").is_none());
        assert!(value.get("customPercentage").is_none());
    }

    #[test]
    fn custom_drink_round_trips_all_fields() {
        let drink = Drink {
            id: 7,
            session_id: Uuid::new_v4(),
            kind: DrinkKind::Custom {
                name: "Negroni".to_string(),
                emoji: Some("\u{1F378}".to_string()),
                percentage: 24.0,
            },
            amount: 1.0,
            points: 24,
            created_at: Utc::now(),
        };

        let encoded = serde_json::to_string(&drink).unwrap();
        let decoded: Drink = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, drink);
    }

    #[test]
    fn custom_drink_uses_client_facing_field_names() {
        let value = serde_json::to_value(NewDrink {
            session_id: Uuid::nil(),
            kind: DrinkKind::Custom {
                name: "Mead".to_string(),
                emoji: None,
                percentage: 12.5,
            },
            amount: 2.0,
            points: 25,
        })
        .unwrap();

        assert_eq!(value["type"], "custom");
        assert_eq!(value["customName"], "Mead");
        assert_eq!(value["customPercentage"], 12.5);
        assert_eq!(value["sessionId"], Uuid::nil().to_string());
    }

    #[test]
    fn deserializes_client_payload() {
        let drink: NewDrink = serde_json::from_value(json!({
            "sessionId": "00000000-0000-0000-0000-000000000000",
            "type": "custom",
            "customName": "Glögg",
            "customEmoji": "\u{1F377}",
            "customPercentage": 15.0,
            "amount": 2.0,
            "points": 30
        }))
        .unwrap();

        match drink.kind {
            DrinkKind::Custom {
                ref name,
                ref emoji,
                percentage,
            } => {
                assert_eq!(name, "Glögg");
                assert_eq!(emoji.as_deref(), Some("\u{1F377}"));
                assert_eq!(percentage, 15.0);
            }
            other => panic!("expected custom kind, got {other:?}"),
        }
        assert_eq!(drink.points, 30);
    }

    #[test]
    fn water_is_not_alcoholic() {
        assert!(DrinkKind::Water.is_water());
        assert!(!DrinkKind::Water.is_alcoholic());
        assert!(DrinkKind::Spirits.is_alcoholic());
    }
}
