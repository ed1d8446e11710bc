use crate::dlog;
use crate::error::WorkoutError;
use crate::workout::{Session, Workout, WorkoutKind};

/// Build a workout from a sensor package.
///
/// `fields` are positional, in the order given by [`WorkoutKind::field_names`]:
/// - `SWM`: action, duration, weight, pool_length, pool_laps
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn create_workout(code: &str, fields: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = code.parse()?;

    if fields.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: kind.code(),
            expected: kind.arity(),
            got: fields.len(),
        });
    }

    let names = kind.field_names();
    for (&name, &value) in names.iter().zip(fields) {
        if !value.is_finite() {
            return Err(WorkoutError::InvalidField {
                field: name,
                value,
                reason: "not a finite number",
            });
        }
    }

    let session = Session {
        action: count(names[0], fields[0])?,
        duration_h: duration(fields[1])?,
        weight_kg: positive(names[2], fields[2])?,
    };

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(session),
        WorkoutKind::Walking => Workout::Walking {
            session,
            height_cm: positive(names[3], fields[3])?,
        },
        WorkoutKind::Swimming => Workout::Swimming {
            session,
            pool_length_m: positive(names[3], fields[3])?,
            pool_laps: count(names[4], fields[4])?,
        },
    };

    dlog!("created workout code={} fields={:?}", kind.code(), fields);
    Ok(workout)
}

fn duration(value: f64) -> Result<f64, WorkoutError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidDuration(value))
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "must be positive",
        })
    }
}

fn count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    // 2^53: above this not every integer is representable.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "must be a non-negative whole number",
        });
    }
    Ok(value as u64)
}
