use std::io::Write;
use stridecalc::packages::{demo_packages, load_packages};
use stridecalc::{WorkoutError, WorkoutKind, create_workout};

fn render(code: &str, fields: &[f64]) -> String {
    create_workout(code, fields).unwrap().summary().render_text()
}

#[test]
fn demo_sessions_render_expected_lines() {
    let lines: Vec<String> = demo_packages()
        .iter()
        .map(|p| render(&p.code, &p.fields))
        .collect();

    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000.",
            "Workout type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg. speed: 9.750 km/h; Calories burned: 797.805.",
            "Workout type: Walking; Duration: 1.000 h.; Distance: 5.850 km; \
             Avg. speed: 5.850 km/h; Calories burned: 349.252.",
        ]
    );
}

#[test]
fn distance_follows_step_length_for_every_kind() {
    for (code, fields, step) in [
        ("RUN", vec![1234.0, 0.5, 70.0], 0.65),
        ("WLK", vec![1234.0, 0.5, 70.0, 175.0], 0.65),
        ("SWM", vec![1234.0, 0.5, 70.0, 25.0, 10.0], 1.38),
    ] {
        let w = create_workout(code, &fields).unwrap();
        assert!((w.distance_km() - 1234.0 * step / 1000.0).abs() < 1e-12, "{code}");
    }
}

#[test]
fn summary_is_idempotent() {
    let w = create_workout("WLK", &[9000.0, 1.25, 75.0, 180.0]).unwrap();
    let first = w.summary();
    assert_eq!(first, w.summary());
    assert_eq!(first.render_text(), w.summary().render_text());
    assert_eq!(first.render_text(), first.to_string());
}

#[test]
fn errors_surface_to_caller() {
    assert!(matches!(
        create_workout("XXX", &[1.0, 2.0, 3.0]),
        Err(WorkoutError::InvalidCode(_))
    ));
    assert!(matches!(
        create_workout("RUN", &[1.0, 2.0]),
        Err(WorkoutError::ArityMismatch { expected: 3, got: 2, .. })
    ));

    let err = create_workout("RUN", &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.to_string(), "RUN expects 3 fields, got 2");
}

#[test]
fn package_file_feeds_dispatcher() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        r#"[
            {{"code": "SWM", "fields": [720, 1, 80, 25, 40]}},
            {{"code": "RUN", "fields": [15000, 1, 75]}}
        ]"#
    )
    .unwrap();

    let kinds: Vec<WorkoutKind> = load_packages(f.path())
        .unwrap()
        .iter()
        .map(|p| create_workout(&p.code, &p.fields).unwrap().kind())
        .collect();
    assert_eq!(kinds, vec![WorkoutKind::Swimming, WorkoutKind::Running]);
}

#[test]
fn summary_serializes_to_json() {
    let info = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])
        .unwrap()
        .summary();
    let v: serde_json::Value = serde_json::to_value(&info).unwrap();
    assert_eq!(v["training_type"], "Swimming");
    assert!((v["speed_kmh"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    assert!((v["calories"].as_f64().unwrap() - 336.0).abs() < 1e-9);
}
