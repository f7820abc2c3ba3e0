// Lectionary readings attached to a celebration.
//
// The upstream API uses several shapes: a plain reference to the commons,
// ferial/festive blocks, Palm Sunday, the Easter Vigil, the three Christmas
// Masses, day and evening Masses, alternative schemas, and seasonal variants.

use serde_json::Value;

const STANDARD_FIELDS: [(&str, &str); 6] = [
    ("palm_gospel", "Palm Gospel"),
    ("first_reading", "First Reading"),
    ("responsorial_psalm", "Responsorial Psalm"),
    ("second_reading", "Second Reading"),
    ("gospel_acclamation", "Gospel Acclamation"),
    ("gospel", "Gospel"),
];

const VIGIL_ORDINALS: [&str; 7] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh",
];

const NESTED_INDENT: &str = "         ";

/// Render readings as indented lines.
pub fn format_readings(readings: &Value) -> Vec<String> {
    let object = match readings {
        Value::Null => return vec!["   Readings: N/A".to_string()],
        Value::String(s) if s.is_empty() => return vec!["   Readings: N/A".to_string()],
        Value::String(s) => return vec![format!("   Readings: {}", s)],
        Value::Object(object) if !object.is_empty() => object,
        _ => return vec!["   Readings: N/A".to_string()],
    };

    let has = |key: &str| object.contains_key(key);

    if has("first_reading") && has("seventh_reading") {
        return easter_vigil(readings);
    }
    if has("day") && has("evening") {
        return day_and_evening(readings);
    }
    if has("night") && has("dawn") && has("day") {
        return christmas(readings);
    }
    if ["schema_one", "schema_two", "schema_three"].iter().any(|k| has(*k)) {
        return multiple_schemas(readings);
    }
    if has("easter_season") || has("outside_easter_season") {
        return seasonal(readings);
    }

    let mut lines = vec!["   Readings:".to_string()];
    lines.extend(standard(readings, "      "));
    lines
}

fn field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Null) | None => "N/A".to_string(),
        Some(Value::String(_)) => "N/A".to_string(),
        Some(other) => other.to_string(),
    }
}

fn standard(block: &Value, indent: &str) -> Vec<String> {
    STANDARD_FIELDS
        .iter()
        .filter(|(key, _)| block.get(key).is_some())
        .map(|(key, label)| format!("{}{}: {}", indent, label, field(block.get(key))))
        .collect()
}

fn easter_vigil(readings: &Value) -> Vec<String> {
    let mut lines = vec!["   Readings (Easter Vigil):".to_string()];
    for (i, ordinal) in VIGIL_ORDINALS.iter().enumerate() {
        let number = i + 1;
        let psalm_key = if number == 1 {
            "responsorial_psalm".to_string()
        } else {
            format!("responsorial_psalm_{}", number)
        };
        lines.push(format!(
            "      Reading {}: {}",
            number,
            field(readings.get(format!("{}_reading", ordinal)))
        ));
        lines.push(format!(
            "      Responsorial Psalm {}: {}",
            number,
            field(readings.get(&psalm_key))
        ));
    }
    lines.push(format!("      Epistle: {}", field(readings.get("epistle"))));
    lines.push(format!(
        "      Responsorial Psalm (Epistle): {}",
        field(readings.get("responsorial_psalm_epistle"))
    ));
    lines.push(format!(
        "      Gospel Acclamation: {}",
        field(readings.get("gospel_acclamation"))
    ));
    lines.push(format!("      Gospel: {}", field(readings.get("gospel"))));
    lines
}

fn christmas(readings: &Value) -> Vec<String> {
    let mut lines = vec!["   Readings (Christmas):".to_string()];
    for (key, label) in [("night", "Night"), ("dawn", "Dawn"), ("day", "Day")] {
        if let Some(mass) = readings.get(key).filter(|m| is_non_empty_object(m)) {
            lines.push(format!("      {} Mass:", label));
            lines.extend(standard(mass, NESTED_INDENT));
        }
    }
    lines
}

fn day_and_evening(readings: &Value) -> Vec<String> {
    let mut lines = vec!["   Readings (Day and Evening):".to_string()];
    for (key, label) in [("day", "Day"), ("evening", "Evening")] {
        lines.push(format!("      {}:", label));
        if let Some(mass) = readings.get(key) {
            lines.extend(standard(mass, NESTED_INDENT));
        }
    }
    lines
}

fn multiple_schemas(readings: &Value) -> Vec<String> {
    let mut lines = vec!["   Readings (Multiple Options):".to_string()];
    for (key, label) in [
        ("schema_one", "Schema One"),
        ("schema_two", "Schema Two"),
        ("schema_three", "Schema Three"),
    ] {
        if let Some(schema) = readings.get(key).filter(|s| is_non_empty_object(s)) {
            lines.push(format!("      {}:", label));
            lines.extend(standard(schema, NESTED_INDENT));
        }
    }
    lines
}

fn seasonal(readings: &Value) -> Vec<String> {
    let mut lines = vec!["   Readings (Seasonal):".to_string()];
    for (key, label) in [
        ("easter_season", "Easter Season"),
        ("outside_easter_season", "Outside Easter Season"),
    ] {
        if let Some(block) = readings.get(key) {
            lines.push(format!("      {}:", label));
            lines.extend(standard(block, NESTED_INDENT));
        }
    }
    lines
}

fn is_non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|o| !o.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_reference_readings() {
        assert_eq!(format_readings(&Value::Null), vec!["   Readings: N/A"]);
        assert_eq!(
            format_readings(&json!("Common of Pastors")),
            vec!["   Readings: Common of Pastors"]
        );
    }

    #[test]
    fn test_festive_readings() {
        let lines = format_readings(&json!({
            "first_reading": "Is 9:1-6",
            "responsorial_psalm": "Ps 96",
            "second_reading": "Ti 2:11-14",
            "gospel_acclamation": "Lk 2:10-11",
            "gospel": null
        }));
        assert_eq!(
            lines,
            vec![
                "   Readings:",
                "      First Reading: Is 9:1-6",
                "      Responsorial Psalm: Ps 96",
                "      Second Reading: Ti 2:11-14",
                "      Gospel Acclamation: Lk 2:10-11",
                "      Gospel: N/A",
            ]
        );
    }

    #[test]
    fn test_palm_sunday_keeps_palm_gospel_first() {
        let lines = format_readings(&json!({
            "palm_gospel": "Lk 19:28-40",
            "first_reading": "Is 50:4-7",
            "gospel": "Lk 22:14-23:56"
        }));
        assert_eq!(lines[1], "      Palm Gospel: Lk 19:28-40");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_easter_vigil() {
        let lines = format_readings(&json!({
            "first_reading": "Gn 1:1-2:2",
            "responsorial_psalm": "Ps 104",
            "responsorial_psalm_2": "Ps 16",
            "seventh_reading": "Ez 36:16-28",
            "epistle": "Rom 6:3-11",
            "gospel": "Lk 24:1-12"
        }));
        assert_eq!(lines[0], "   Readings (Easter Vigil):");
        assert!(lines.contains(&"      Reading 1: Gn 1:1-2:2".to_string()));
        assert!(lines.contains(&"      Responsorial Psalm 2: Ps 16".to_string()));
        assert!(lines.contains(&"      Reading 3: N/A".to_string()));
        assert!(lines.contains(&"      Epistle: Rom 6:3-11".to_string()));
        // 7 readings with psalms, epistle, epistle psalm, acclamation, gospel
        assert_eq!(lines.len(), 1 + 14 + 4);
    }

    #[test]
    fn test_christmas_masses() {
        let lines = format_readings(&json!({
            "night": {"first_reading": "Is 9:1-6", "gospel": "Lk 2:1-14"},
            "dawn": {"gospel": "Lk 2:15-20"},
            "day": {"gospel": "Jn 1:1-18"}
        }));
        assert_eq!(lines[0], "   Readings (Christmas):");
        assert_eq!(lines[1], "      Night Mass:");
        assert_eq!(lines[2], "         First Reading: Is 9:1-6");
        assert!(lines.contains(&"      Dawn Mass:".to_string()));
        assert!(lines.contains(&"         Gospel: Jn 1:1-18".to_string()));
    }

    #[test]
    fn test_day_and_evening() {
        let lines = format_readings(&json!({
            "day": {"gospel": "Jn 20:1-9"},
            "evening": {"gospel": "Lk 24:13-35"}
        }));
        assert_eq!(
            lines,
            vec![
                "   Readings (Day and Evening):",
                "      Day:",
                "         Gospel: Jn 20:1-9",
                "      Evening:",
                "         Gospel: Lk 24:13-35",
            ]
        );
    }

    #[test]
    fn test_multiple_schemas_and_seasonal() {
        let schemas = format_readings(&json!({
            "schema_one": {"gospel": "Jn 6:37-40"},
            "schema_two": {}
        }));
        assert_eq!(
            schemas,
            vec![
                "   Readings (Multiple Options):",
                "      Schema One:",
                "         Gospel: Jn 6:37-40",
            ]
        );

        let seasonal = format_readings(&json!({
            "easter_season": {"first_reading": "Acts 2:1-11"},
            "outside_easter_season": {"first_reading": "Rv 21:1-5"}
        }));
        assert_eq!(seasonal[0], "   Readings (Seasonal):");
        assert_eq!(seasonal.len(), 5);
    }
}
