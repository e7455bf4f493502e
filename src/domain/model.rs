use serde::{Deserialize, Serialize};

/// One file belonging to an exercise, relative to the assets root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseFile {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ruta")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "archivos", default)]
    pub files: Vec<ExerciseFile>,
}

/// What the running program reports about itself in the interpreter-info lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub version: String,
    pub target: String,
    pub executable: Option<String>,
}

impl RuntimeInfo {
    pub fn current() -> Self {
        let executable = std::env::current_exe()
            .ok()
            .map(|path| path.display().to_string());

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            target: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
            executable,
        }
    }

    pub fn version_line(&self) -> String {
        format!("{} ({})", self.version, self.target)
    }
}
