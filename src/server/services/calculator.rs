use crate::server::models::{DrinkKind, TipsyLevel};

/// Points per deciliter for the built-in drink kinds. A 5 dl beer is 25
/// points, a 2 dl glass of wine 24, a 0.5 dl shot of spirits 20. Water is
/// negative: it works the tipsy level back down.
pub const BEER_POINTS_PER_DL: f64 = 5.0;
pub const WINE_POINTS_PER_DL: f64 = 12.0;
pub const SPIRITS_POINTS_PER_DL: f64 = 40.0;
pub const WATER_POINTS_PER_DL: f64 = -5.0;

/// A logged glass of water is recorded with amount 1 and this flat score.
pub const WATER_GLASS_POINTS: i32 = -10;

/// How many waters count toward the hourly limit before further ones are
/// rejected.
pub const WATER_GLASSES_PER_HOUR: usize = 2;

/// Multiplier applied to a session total once it mixes alcoholic kinds.
pub const MIXED_DRINKS_MULTIPLIER: f64 = 1.2;

/// Tipsy/drunk cutoffs, in points. The pair is corrected before use so the
/// tipsy threshold always sits at least [`THRESHOLD_GAP`] under the drunk one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSettings {
    pub tipsy_threshold: f64,
    pub drunk_threshold: f64,
}

pub const THRESHOLD_GAP: f64 = 5.0;

impl Default for ThresholdSettings {
    fn default() -> Self {
        Self {
            tipsy_threshold: 40.0,
            drunk_threshold: 60.0,
        }
    }
}

impl ThresholdSettings {
    fn corrected(self) -> Self {
        Self {
            tipsy_threshold: self.tipsy_threshold.min(self.drunk_threshold - THRESHOLD_GAP),
            drunk_threshold: self.drunk_threshold.max(self.tipsy_threshold + THRESHOLD_GAP),
        }
    }
}

fn rate_per_dl(kind: &DrinkKind) -> f64 {
    match kind {
        DrinkKind::Beer => BEER_POINTS_PER_DL,
        DrinkKind::Wine => WINE_POINTS_PER_DL,
        DrinkKind::Spirits => SPIRITS_POINTS_PER_DL,
        DrinkKind::Water => WATER_POINTS_PER_DL,
        // A custom drink scores like a spirit of its own strength: the
        // alcohol percentage is the per-dl rate (40% at 1 dl = 40 points).
        DrinkKind::Custom { percentage, .. } => *percentage,
    }
}

/// Score contribution of a drink of the given kind and volume in deciliters.
pub fn drink_points(kind: &DrinkKind, amount_dl: f64) -> i32 {
    (rate_per_dl(kind) * amount_dl).round() as i32
}

/// Session total with the mixed-drinks penalty applied.
pub fn adjusted_points(total: f64, has_mixed_drinks: bool) -> f64 {
    if has_mixed_drinks {
        (total * MIXED_DRINKS_MULTIPLIER).round()
    } else {
        total
    }
}

/// Whether a set of logged kinds counts as mixing: more than one distinct
/// alcoholic kind. Water never counts.
pub fn has_mixed_drinks<'a, I>(kinds: I) -> bool
where
    I: IntoIterator<Item = &'a DrinkKind>,
{
    let mut seen: Option<&str> = None;
    for kind in kinds {
        if !kind.is_alcoholic() {
            continue;
        }
        match seen {
            None => seen = Some(kind.as_str()),
            Some(tag) if tag != kind.as_str() => return true,
            Some(_) => {}
        }
    }
    false
}

/// Look up the intoxication tier for a points total.
pub fn calculate_tipsy_level(points: f64, thresholds: ThresholdSettings) -> TipsyLevel {
    let thresholds = thresholds.corrected();

    if points >= thresholds.drunk_threshold {
        TipsyLevel {
            text: "Drunk".to_string(),
            bar_color: "bg-red-500".to_string(),
            message: "You should stop drinking and consider getting a ride home.".to_string(),
        }
    } else if points >= thresholds.tipsy_threshold {
        TipsyLevel {
            text: "Tipsy".to_string(),
            bar_color: "bg-amber-500".to_string(),
            message: "You're getting tipsy. Consider slowing down and having some water."
                .to_string(),
        }
    } else {
        TipsyLevel {
            text: "All Good".to_string(),
            bar_color: "bg-emerald-500".to_string(),
            message: "You're doing great! Have fun and stay safe!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_drink_points() {
        assert_eq!(drink_points(&DrinkKind::Beer, 5.0), 25);
        assert_eq!(drink_points(&DrinkKind::Wine, 2.0), 24);
        assert_eq!(drink_points(&DrinkKind::Spirits, 0.5), 20);
        assert_eq!(drink_points(&DrinkKind::Water, 2.0), -10);
    }

    #[test]
    fn custom_drink_scores_by_percentage() {
        let whiskey = DrinkKind::Custom {
            name: "Whiskey".to_string(),
            emoji: None,
            percentage: 40.0,
        };
        assert_eq!(drink_points(&whiskey, 1.0), 40);
        assert_eq!(drink_points(&whiskey, 0.5), 20);
    }

    #[test]
    fn points_round_to_nearest() {
        assert_eq!(drink_points(&DrinkKind::Beer, 3.3), 17); // 16.5 rounds up
        let weak = DrinkKind::Custom {
            name: "Shandy".to_string(),
            emoji: None,
            percentage: 2.6,
        };
        assert_eq!(drink_points(&weak, 1.0), 3);
    }

    #[test]
    fn mixed_penalty_rounds_total() {
        assert_eq!(adjusted_points(50.0, false), 50.0);
        assert_eq!(adjusted_points(50.0, true), 60.0);
        assert_eq!(adjusted_points(37.0, true), 44.0); // 44.4 rounds down
    }

    #[test]
    fn mixing_requires_two_alcoholic_kinds() {
        assert!(!has_mixed_drinks([&DrinkKind::Beer, &DrinkKind::Beer]));
        assert!(!has_mixed_drinks([&DrinkKind::Beer, &DrinkKind::Water]));
        assert!(has_mixed_drinks([&DrinkKind::Beer, &DrinkKind::Wine]));
        assert!(has_mixed_drinks([
            &DrinkKind::Water,
            &DrinkKind::Spirits,
            &DrinkKind::Beer
        ]));
        assert!(!has_mixed_drinks(std::iter::empty::<&DrinkKind>()));
    }

    #[test]
    fn level_boundaries() {
        let thresholds = ThresholdSettings::default();
        assert_eq!(calculate_tipsy_level(0.0, thresholds).text, "All Good");
        assert_eq!(calculate_tipsy_level(39.9, thresholds).text, "All Good");
        assert_eq!(calculate_tipsy_level(40.0, thresholds).text, "Tipsy");
        assert_eq!(calculate_tipsy_level(59.9, thresholds).text, "Tipsy");
        assert_eq!(calculate_tipsy_level(60.0, thresholds).text, "Drunk");
    }

    #[test]
    fn level_carries_color_tokens() {
        let thresholds = ThresholdSettings::default();
        assert_eq!(
            calculate_tipsy_level(10.0, thresholds).bar_color,
            "bg-emerald-500"
        );
        assert_eq!(
            calculate_tipsy_level(45.0, thresholds).bar_color,
            "bg-amber-500"
        );
        assert_eq!(
            calculate_tipsy_level(90.0, thresholds).bar_color,
            "bg-red-500"
        );
    }

    #[test]
    fn inverted_thresholds_are_corrected() {
        // Tipsy configured above drunk: the corrected pair keeps a gap of 5,
        // so 50 is tipsy (>= 45) but not drunk (< 60).
        let thresholds = ThresholdSettings {
            tipsy_threshold: 70.0,
            drunk_threshold: 50.0,
        };
        assert_eq!(calculate_tipsy_level(50.0, thresholds).text, "Tipsy");
        assert_eq!(calculate_tipsy_level(44.0, thresholds).text, "All Good");
    }
}
