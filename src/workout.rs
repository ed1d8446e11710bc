use crate::error::WorkoutError;
use crate::message::InfoMessage;
use std::fmt;
use std::str::FromStr;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Stride length in meters, used by running and walking.
const LEN_STEP: f64 = 0.65;
/// Swimming counts strokes; one stroke covers more ground than a stride.
const LEN_STROKE: f64 = 1.38;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
}

mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// Sensor package code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }

    /// Positional field layout of a sensor package for this kind.
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration", "weight"],
            Self::Walking => &["action", "duration", "weight", "height"],
            Self::Swimming => &["action", "duration", "weight", "pool_length", "pool_laps"],
        }
    }

    pub const fn arity(self) -> usize {
        self.field_names().len()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| WorkoutError::InvalidCode(s.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes counted by the sensor.
    pub action: u64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Session),
    Walking {
        session: Session,
        height_cm: f64,
    },
    Swimming {
        session: Session,
        pool_length_m: f64,
        pool_laps: u64,
    },
}

impl Workout {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub const fn session(&self) -> &Session {
        match self {
            Self::Running(session)
            | Self::Walking { session, .. }
            | Self::Swimming { session, .. } => session,
        }
    }

    const fn step_len_m(&self) -> f64 {
        match self {
            Self::Running(_) | Self::Walking { .. } => LEN_STEP,
            Self::Swimming { .. } => LEN_STROKE,
        }
    }

    pub fn distance_km(&self) -> f64 {
        self.session().action as f64 * self.step_len_m() / M_IN_KM
    }

    /// Swimming speed comes from pool geometry, not from the stroke count.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                session,
                pool_length_m,
                pool_laps,
            } => pool_length_m * *pool_laps as f64 / M_IN_KM / session.duration_h,
            _ => self.distance_km() / self.session().duration_h,
        }
    }

    pub fn calories_burned(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            Self::Running(s) => {
                (running::SPEED_MULTIPLIER * speed + running::SPEED_SHIFT) * s.weight_kg / M_IN_KM
                    * s.duration_h
                    * MIN_IN_H
            }
            Self::Walking { session: s, height_cm } => {
                let speed_ms = speed * walking::KMH_IN_MSEC;
                let height_m = height_cm / walking::CM_IN_M;
                (walking::WEIGHT_MULTIPLIER * s.weight_kg
                    + speed_ms.powi(2) / height_m * walking::SPEED_HEIGHT_MULTIPLIER * s.weight_kg)
                    * s.duration_h
                    * MIN_IN_H
            }
            Self::Swimming { session: s, .. } => {
                (speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * s.weight_kg
                    * s.duration_h
            }
        }
    }

    pub fn summary(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().label().to_string(),
            duration_h: self.session().duration_h,
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories: self.calories_burned(),
        }
    }
}
