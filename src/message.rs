use serde::Serialize;
use std::fmt;

/// Rendered result of one workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_three_decimals() {
        let m = InfoMessage {
            training_type: "Swimming".to_string(),
            duration_h: 1.0,
            distance_km: 2.0,
            speed_kmh: 1.0,
            calories: 336.0,
        };
        assert_eq!(
            m.render_text(),
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 2.000 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn rounds_to_three_decimals() {
        let m = InfoMessage {
            training_type: "Walking".to_string(),
            duration_h: 0.75,
            distance_km: 0.993_6,
            speed_kmh: 5.85,
            calories: 349.251_747_5,
        };
        let text = m.render_text();
        assert!(text.contains("Duration: 0.750 h."));
        assert!(text.contains("Distance: 0.994 km"));
        assert!(text.contains("Calories burned: 349.252."));
        assert_eq!(text, m.render_text());
    }
}
