use crate::domain::model::{ExerciseFile, ExerciseInfo};
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};
use std::path::{Component, Path, PathBuf};

const EMBEDDED_CATALOG: &str = include_str!("../../assets/exercises.json");

/// Lesson files shipped with the binary, keyed by their catalog path.
const EMBEDDED_SOURCES: [(&str, &str); 3] = [
    ("clase-01/main.py", include_str!("../../assets/clase-01/main.py")),
    (
        "clase-04/ejercicio_clase_04.py",
        include_str!("../../assets/clase-04/ejercicio_clase_04.py"),
    ),
    (
        "clase-05/ex001_saludador.py",
        include_str!("../../assets/clase-05/ex001_saludador.py"),
    ),
];

/// Where `show --source` reads lesson files from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRoot<'a> {
    Embedded,
    Dir(&'a Path),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    exercises: Vec<ExerciseInfo>,
}

impl Catalog {
    pub fn new(exercises: Vec<ExerciseInfo>) -> Result<Self> {
        let catalog = Self { exercises };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let exercises: Vec<ExerciseInfo> = serde_json::from_str(content)?;
        Self::new(exercises)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn list(&self) -> &[ExerciseInfo] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&ExerciseInfo> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Reads one listed file as text. Paths must stay inside `root`.
    pub fn read_file_text<P: AsRef<Path>>(root: P, file: &ExerciseFile) -> Result<String> {
        let full_path = resolve_inside(root.as_ref(), &file.path)?;
        tracing::debug!("Reading {} from {}", file.name, full_path.display());
        Ok(std::fs::read_to_string(full_path)?)
    }

    /// Looks a listed file up among the sources compiled into the binary.
    pub fn embedded_file_text(file: &ExerciseFile) -> Result<String> {
        let relative = resolve_inside(Path::new(""), &file.path)?;
        EMBEDDED_SOURCES
            .iter()
            .find(|(path, _)| Path::new(path) == relative)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| {
                LessonError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("No embedded source for {}", file.path),
                ))
            })
    }

    pub fn read_source(root: SourceRoot<'_>, file: &ExerciseFile) -> Result<String> {
        match root {
            SourceRoot::Embedded => Self::embedded_file_text(file),
            SourceRoot::Dir(dir) => Self::read_file_text(dir, file),
        }
    }
}

fn resolve_inside(root: &Path, relative: &str) -> Result<PathBuf> {
    let candidate = Path::new(relative);
    let escapes = candidate
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if relative.is_empty() || escapes {
        return Err(LessonError::UnsafePath {
            path: relative.to_string(),
        });
    }

    Ok(root.join(candidate))
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        validate_unique_ids("catalog.id", self.exercises.iter().map(|e| e.id.as_str()))?;
        for exercise in &self.exercises {
            validate_non_empty_string("catalog.titulo", &exercise.title)?;
        }
        Ok(())
    }
}
