use crate::domain::ports::{Console, Exercise};
use crate::utils::error::{LessonError, Result};

pub const EMPTY_NAME_WARNING: &str = "❗ Por favor, escribe al menos un carácter.";

pub fn build_greeting(name: &str) -> String {
    format!("Es un placer conocerte, {}.", name)
}

/// Lesson 05: greet the learner by name, split into small functions.
#[derive(Debug, Default)]
pub struct Greeter {
    max_attempts: Option<u32>,
}

impl Greeter {
    /// `None` keeps asking until a name arrives.
    pub fn new(max_attempts: Option<u32>) -> Self {
        Self { max_attempts }
    }

    pub fn ask_name(&self, console: &mut dyn Console) -> Result<String> {
        let mut attempts = 0u32;
        loop {
            let name = console.prompt("¿Cuál es tu nombre? ")?;
            if !name.is_empty() {
                return Ok(name);
            }
            console.say(EMPTY_NAME_WARNING)?;

            attempts += 1;
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    tracing::warn!("Gave up asking for a name after {} attempts", attempts);
                    return Err(LessonError::TooManyAttempts { attempts });
                }
            }
        }
    }
}

impl Exercise for Greeter {
    fn id(&self) -> &str {
        "clase-05"
    }

    fn title(&self) -> &str {
        "Saludador interactivo"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.say("Hola, mundo 👋")?;
        let name = self.ask_name(console)?;
        console.say(&build_greeting(&name))
    }
}
