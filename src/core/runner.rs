use crate::app::exercises::{Greeter, InterpreterInfo, PersonalData};
use crate::core::ConfigProvider;
use crate::domain::ports::{Console, Exercise};
use crate::utils::error::{LessonError, Result};
use std::time::Instant;

pub struct ExerciseRegistry {
    exercises: Vec<Box<dyn Exercise>>,
}

impl ExerciseRegistry {
    pub fn new(exercises: Vec<Box<dyn Exercise>>) -> Self {
        Self { exercises }
    }

    /// The three lessons, configured from `config`.
    pub fn standard<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        let exercises: Vec<Box<dyn Exercise>> = vec![
            Box::new(InterpreterInfo::default()),
            Box::new(PersonalData),
            Box::new(Greeter::new(config.max_name_attempts())),
        ];
        Self::new(exercises)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Exercise> {
        self.exercises
            .iter()
            .find(|e| e.id() == id)
            .map(|e| &**e)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.exercises.iter().map(|e| e.id())
    }
}

pub struct ExerciseRunner {
    registry: ExerciseRegistry,
}

impl ExerciseRunner {
    pub fn new(registry: ExerciseRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ExerciseRegistry {
        &self.registry
    }

    pub fn run(&self, id: &str, console: &mut dyn Console) -> Result<()> {
        let exercise = self
            .registry
            .get(id)
            .ok_or_else(|| LessonError::UnknownExercise { id: id.to_string() })?;

        tracing::info!("Starting exercise {} ({})", exercise.id(), exercise.title());
        let started = Instant::now();

        match exercise.run(console) {
            Ok(()) => {
                tracing::info!("Exercise {} finished in {:?}", id, started.elapsed());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "Exercise {} failed: {} (Category: {:?}, Severity: {:?})",
                    id,
                    e,
                    e.category(),
                    e.severity()
                );
                Err(e)
            }
        }
    }
}
