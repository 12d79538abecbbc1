use serde::{Deserialize, Serialize};

/// Display descriptor for a computed intoxication tier: a short label, the
/// color token for the level bar, and a longer message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsyLevel {
    pub text: String,
    pub bar_color: String,
    pub message: String,
}
