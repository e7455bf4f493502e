use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid number for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Input ended while waiting for: {prompt}")]
    UnexpectedEof { prompt: String },

    #[error("Unknown exercise: {id}")]
    UnknownExercise { id: String },

    #[error("No valid answer after {attempts} attempts")]
    TooManyAttempts { attempts: u32 },

    #[error("Unsafe file path: {path}")]
    UnsafePath { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Catalog,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::InvalidNumber { .. }
            | LessonError::UnexpectedEof { .. }
            | LessonError::TooManyAttempts { .. } => ErrorCategory::Input,
            LessonError::ConfigError { .. } | LessonError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            LessonError::UnknownExercise { .. }
            | LessonError::UnsafePath { .. }
            | LessonError::SerializationError(_) => ErrorCategory::Catalog,
            LessonError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error; `Low` errors still count as success.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::InvalidNumber { field, value } => {
                format!("'{}' no es un número válido para {}.", value, field)
            }
            LessonError::UnexpectedEof { prompt } => {
                format!("La entrada terminó antes de responder: {}", prompt.trim())
            }
            LessonError::UnknownExercise { id } => {
                format!("No existe ningún ejercicio con id '{}'.", id)
            }
            LessonError::TooManyAttempts { attempts } => {
                format!("No se recibió una respuesta válida tras {} intentos.", attempts)
            }
            LessonError::UnsafePath { path } => {
                format!("La ruta '{}' sale de la carpeta de recursos.", path)
            }
            LessonError::ConfigError { message } => {
                format!("Error de configuración: {}", message)
            }
            LessonError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Valor inválido en {}: '{}' ({})", field, value, reason),
            LessonError::SerializationError(e) => format!("Catálogo JSON inválido: {}", e),
            LessonError::IoError(e) => format!("Error de entrada/salida: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LessonError::InvalidNumber { .. } => {
                "Escribe solo dígitos; para decimales puedes usar punto o coma."
            }
            LessonError::UnexpectedEof { .. } => {
                "Responde a todas las preguntas antes de cerrar la entrada."
            }
            LessonError::UnknownExercise { .. } => {
                "Ejecuta `lesson-exercises list` para ver los ids disponibles."
            }
            LessonError::TooManyAttempts { .. } => {
                "Escribe al menos un carácter o aumenta greeter.max_name_attempts."
            }
            LessonError::UnsafePath { .. } => {
                "Usa rutas relativas dentro de catalog.assets_root."
            }
            LessonError::ConfigError { .. } | LessonError::InvalidConfigValueError { .. } => {
                "Revisa el archivo de configuración TOML."
            }
            LessonError::SerializationError(_) => {
                "Comprueba que el catálogo sea un arreglo JSON de ejercicios."
            }
            LessonError::IoError(_) => "Comprueba que el archivo exista y sea legible.",
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
