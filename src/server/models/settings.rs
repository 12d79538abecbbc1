use serde::{Deserialize, Serialize};

/// User-adjustable application settings: tipsy/drunk thresholds plus the
/// emergency contacts and taxi shortcuts shown alongside the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub tipsy_threshold: f64,
    pub drunk_threshold: f64,
    pub contacts: Vec<ContactInfo>,
    pub taxis: Vec<TaxiInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: String,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxiInfo {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub app_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tipsy_threshold: 40.0,
            drunk_threshold: 60.0,
            contacts: vec![ContactInfo {
                id: "1".to_string(),
                name: "Emergency Contact".to_string(),
                phone: "+4415664894".to_string(),
            }],
            taxis: vec![
                TaxiInfo {
                    id: "1".to_string(),
                    name: "Local Taxi".to_string(),
                    phone: String::new(),
                    app_url: String::new(),
                },
                TaxiInfo {
                    id: "2".to_string(),
                    name: "Uber".to_string(),
                    phone: String::new(),
                    app_url: "https://m.uber.com/".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_thresholds_apart() {
        let settings = AppSettings::default();
        assert_eq!(settings.tipsy_threshold, 40.0);
        assert_eq!(settings.drunk_threshold, 60.0);
        assert_eq!(settings.taxis.len(), 2);
    }

    #[test]
    fn settings_round_trip() {
        let settings = AppSettings::default();
        let encoded = serde_json::to_string(&settings).unwrap();
        let decoded: AppSettings = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, settings);
    }
}
