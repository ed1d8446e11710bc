pub mod cli;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod packages;
pub mod run;
pub mod utils;
pub mod workout;

pub use dispatch::create_workout;
pub use error::WorkoutError;
pub use message::InfoMessage;
pub use packages::Package;
pub use workout::{Session, Workout, WorkoutKind};
