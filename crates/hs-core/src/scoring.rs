//! Points rules.
//!
//! Base points come from the event type: scholarship and championship
//! events are worth the dance count of their parenthesized dance list,
//! everything else a flat amount. Placement or proficiency then adjusts
//! the total.

use crate::patterns;

/// Base for every event that is not a scholarship or championship
/// (individual heats, Solo, Novelty, Showcase).
const STANDARD_EVENT_POINTS: i64 = 11;

/// Base for a multi-dance event with no recognizable dance list.
const MULTI_DANCE_FLOOR: i64 = 2;

/// Base points for the full event text (heat label plus description).
///
/// A dance list like `(W/T/F/Q)` has one slash fewer than dances, so the
/// slash count plus two covers the list.
#[must_use]
pub fn base_points(event: &str) -> i64 {
    if !(event.contains("Schol") || event.contains("Champ")) {
        return STANDARD_EVENT_POINTS;
    }

    patterns::PAREN_GROUP.captures(event).map_or(MULTI_DANCE_FLOOR, |caps| {
        let slashes = i64::try_from(caps[1].matches('/').count()).unwrap_or(i64::MAX);
        slashes + MULTI_DANCE_FLOOR
    })
}

/// Adjustment from the proficiency score, or from placement when the sheet
/// shows no score.
///
/// A non-numeric place token is a callback code rather than a final
/// placement and costs a point.
#[must_use]
pub fn bonus_points(place: &str, proficiency: Option<&str>) -> i64 {
    if let Some(raw) = proficiency {
        return raw.parse::<f64>().map_or(0, |score| {
            if score >= 96.5 {
                3
            } else if score >= 93.5 {
                2
            } else if score >= 89.5 {
                1
            } else {
                0
            }
        });
    }

    match place.parse::<i64>() {
        Ok(1) => 3,
        Ok(2) => 2,
        Ok(3) => 1,
        Ok(_) => 0,
        Err(_) => -1,
    }
}

/// Total points for one entry.
#[must_use]
pub fn score(event: &str, place: &str, proficiency: Option<&str>) -> i64 {
    base_points(event) + bonus_points(place, proficiency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_events_get_flat_base() {
        assert_eq!(base_points("Heat 300 Bronze Foxtrot"), 11);
        assert_eq!(base_points("Solo 4 Showcase Rumba"), 11);
        assert_eq!(base_points("Heat 12 Novelty Hustle"), 11);
    }

    #[test]
    fn scholarship_counts_dances_in_paren_group() {
        // Three slashes, four dances.
        assert_eq!(base_points("Heat 50 (W/T/F/Q) Schol Smooth"), 5);
        assert_eq!(base_points("Heat 51 (A/B/C) Schol Smooth"), 4);
        assert_eq!(base_points("Heat 52 (W) Champ Rhythm"), 2);
    }

    #[test]
    fn multi_dance_without_paren_group_gets_floor() {
        assert_eq!(base_points("Heat 60 Schol Smooth"), 2);
        assert_eq!(base_points("Heat 61 Open Champ"), 2);
    }

    #[test]
    fn only_first_paren_group_counts() {
        assert_eq!(base_points("Heat 62 (W/T) Schol (F/Q/V)"), 3);
    }

    #[test]
    fn proficiency_boundaries_are_inclusive() {
        let cases = [
            ("89.4", 0),
            ("89.5", 1),
            ("93.4", 1),
            ("93.5", 2),
            ("96.4", 2),
            ("96.5", 3),
            ("99.0", 3),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                bonus_points("1", Some(raw)),
                expected,
                "proficiency {raw} should earn {expected}"
            );
        }
    }

    #[test]
    fn proficiency_supersedes_placement() {
        // Place 1 would earn +3, but the score decides.
        assert_eq!(bonus_points("1", Some("90.0")), 1);
    }

    #[test]
    fn placement_bonus_without_proficiency() {
        assert_eq!(bonus_points("1", None), 3);
        assert_eq!(bonus_points("2", None), 2);
        assert_eq!(bonus_points("3", None), 1);
        assert_eq!(bonus_points("4", None), 0);
        assert_eq!(bonus_points("12", None), 0);
        assert_eq!(bonus_points("*A", None), -1);
        assert_eq!(bonus_points("F", None), -1);
    }

    #[test]
    fn score_is_deterministic_over_generated_combinations() {
        let events = [
            "Heat 300 Bronze Foxtrot",
            "Heat 50 (W/T/F/Q) Schol Smooth",
            "Heat 61 Open Champ",
            "Solo 4 Showcase Rumba",
        ];
        let places = ["1", "2", "3", "4", "9", "*A"];
        let scores = [None, Some("89.5"), Some("93.5"), Some("96.5"), Some("88.0")];

        for event in events {
            for place in places {
                for proficiency in scores {
                    let first = score(event, place, proficiency);
                    let second = score(event, place, proficiency);
                    assert_eq!(first, second);
                    assert_eq!(
                        first,
                        base_points(event) + bonus_points(place, proficiency)
                    );
                }
            }
        }
    }
}
