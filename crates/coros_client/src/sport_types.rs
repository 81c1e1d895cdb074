//! Fixed catalog of vendor sport-type codes.

/// Sport-type codes as reported by `/activity/query`. Read-only; the
/// vendor occasionally adds codes, so lookups must tolerate gaps.
const SPORT_TYPES: &[(i64, &str)] = &[
    (100, "Run"),
    (101, "Indoor Run"),
    (102, "Trail Run"),
    (103, "Track Run"),
    (104, "Hike"),
    (105, "Mtn Climb"),
    (106, "Climb"),
    (200, "Road Bike"),
    (201, "Indoor Bike"),
    (202, "E-Bike"),
    (203, "Gravel Bike"),
    (204, "Mountain Bike"),
    (205, "E-MTB"),
    (299, "Helmet Riding"),
    (300, "Pool Swim"),
    (301, "Open Water"),
    (400, "Gym Cardio"),
    (401, "GPS Cardio"),
    (402, "Strength"),
    (500, "Ski"),
    (501, "Snowboard"),
    (502, "XC Ski"),
    (503, "Ski Touring"),
    (700, "Rowing"),
    (701, "Indoor Rower"),
    (702, "Whitewater"),
    (704, "Flatwater"),
    (705, "Windsurfing"),
    (706, "Speedsurfing"),
    (800, "Indoor Climb"),
    (801, "Bouldering"),
    (900, "Walk"),
    (901, "Jump Rope"),
    (902, "Floor Climb"),
    (10000, "Triathlon"),
    (10001, "Multisport"),
    (10002, "Ski Touring"),
    (10003, "Outdoor Climb"),
];

/// Display label for a sport-type code. Unknown codes degrade to a
/// generic `Type {code}` label rather than failing.
pub fn sport_label(code: i64) -> String {
    SPORT_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("Type {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_documented_labels() {
        for (code, label) in SPORT_TYPES {
            assert_eq!(sport_label(*code), *label);
            // Codes are unique; exactly one entry may claim each code.
            let hits = SPORT_TYPES.iter().filter(|(c, _)| c == code).count();
            assert_eq!(hits, 1, "duplicate entry for code {code}");
        }
    }

    #[test]
    fn unknown_code_degrades_to_generic_label() {
        assert_eq!(sport_label(9999), "Type 9999");
        assert!(sport_label(-3).contains("-3"));
    }

    #[test]
    fn spot_check_catalog() {
        assert_eq!(sport_label(100), "Run");
        assert_eq!(sport_label(301), "Open Water");
        assert_eq!(sport_label(10000), "Triathlon");
    }
}
