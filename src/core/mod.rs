pub mod catalog;
pub mod console;
pub mod convert;
pub mod runner;

pub use crate::domain::model::{ExerciseFile, ExerciseInfo, RuntimeInfo};
pub use crate::domain::ports::{ConfigProvider, Console, Exercise};
pub use crate::utils::error::Result;
