use crate::core::catalog::{Catalog, SourceRoot};
use crate::domain::ports::Console;
use crate::utils::error::{LessonError, Result};

/// One line per exercise: id, then title.
pub fn list(catalog: &Catalog, console: &mut dyn Console) -> Result<()> {
    let width = catalog.list().iter().map(|e| e.id.len()).max().unwrap_or(0);
    for exercise in catalog.list() {
        console.say(&format!("{:<width$}  {}", exercise.id, exercise.title, width = width))?;
    }
    Ok(())
}

/// Prints one catalog entry; with `sources`, also the text of its files.
pub fn show(
    catalog: &Catalog,
    id: &str,
    sources: Option<SourceRoot<'_>>,
    console: &mut dyn Console,
) -> Result<()> {
    let exercise = catalog
        .get(id)
        .ok_or_else(|| LessonError::UnknownExercise { id: id.to_string() })?;

    console.say(&exercise.title)?;
    console.say(&exercise.description)?;

    if exercise.files.is_empty() {
        return Ok(());
    }

    console.blank()?;
    console.say("Archivos:")?;
    for file in &exercise.files {
        console.say(&format!("- {} ({})", file.name, file.path))?;
    }

    if let Some(root) = sources {
        for file in &exercise.files {
            let text = Catalog::read_source(root, file)?;
            console.blank()?;
            console.say(&format!("--- {} ---", file.path))?;
            console.say(text.trim_end_matches('\n'))?;
        }
    }

    Ok(())
}
