use crate::core::convert::{format_decimal, month_name, parse_decimal, parse_integer};
use crate::domain::ports::{Console, Exercise};
use crate::utils::error::Result;

/// Lesson 04: read text, convert what needs converting, print it back.
#[derive(Debug, Default)]
pub struct PersonalData;

impl PersonalData {
    fn basic_data(&self, console: &mut dyn Console) -> Result<()> {
        let name = console.prompt("¿Cuál es tu nombre? ")?;
        let age_text = console.prompt("¿Cuántos años tienes? ")?;
        let weight_text = console.prompt("¿Cuánto pesas? (puedes usar punto o coma) ")?;

        let age = parse_integer("edad", &age_text)?;
        let weight = parse_decimal("peso", &weight_text)?;
        tracing::debug!("Converted age={} weight={}", age, weight);

        console.say(&format!("Hola {}, ¡placer en conocerte! 🤖", name))?;
        console.say(&format!(
            "Edad registrada: {} años | Peso registrado: {} kg",
            age,
            format_decimal(weight)
        ))
    }

    fn birth_date(&self, console: &mut dyn Console) -> Result<()> {
        let day = console.prompt("Día de nacimiento (número): ")?;
        let month = console.prompt("Mes de nacimiento (número o nombre): ")?;
        let year = console.prompt("Año de nacimiento (4 dígitos): ")?;

        console.say(&format!(
            "Naciste el día {} de {} de {} ¿correcto? 🗓️",
            day,
            month_name(&month),
            year
        ))
    }

    fn text_versus_number(&self, console: &mut dyn Console) -> Result<()> {
        let first_text = console.prompt("Escribe un número: ")?;
        let second_text = console.prompt("Escribe otro número: ")?;

        // Text addition concatenates: "6" + "3" is "63".
        console.say(&format!(
            "Demostración (sin conversión): {}{}",
            first_text, second_text
        ))?;

        let first = parse_decimal("primer número", &first_text)?;
        let second = parse_decimal("segundo número", &second_text)?;
        console.say(&format!(
            "La suma correcta es: {}",
            format_decimal(first + second)
        ))
    }
}

impl Exercise for PersonalData {
    fn id(&self) -> &str {
        "clase-04"
    }

    fn title(&self) -> &str {
        "print, variables e input"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        self.basic_data(console)?;
        self.birth_date(console)?;
        self.text_versus_number(console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::IoConsole;
    use crate::utils::error::LessonError;
    use std::io::Cursor;

    #[test]
    fn test_birth_date_maps_month_number() {
        let mut console = IoConsole::new(Cursor::new("3\n03\n1990\n"), Vec::new());
        PersonalData.birth_date(&mut console).unwrap();

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert!(out.ends_with("Naciste el día 3 de marzo de 1990 ¿correcto? 🗓️\n"));
    }

    #[test]
    fn test_text_versus_number() {
        let mut console = IoConsole::new(Cursor::new("6\n3\n"), Vec::new());
        PersonalData.text_versus_number(&mut console).unwrap();

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert!(out.contains("Demostración (sin conversión): 63\n"));
        assert!(out.ends_with("La suma correcta es: 9.0\n"));
    }

    #[test]
    fn test_bad_age_is_reported_not_panicked() {
        let mut console = IoConsole::new(Cursor::new("Ana\nveinte\n70\n"), Vec::new());
        let err = PersonalData.run(&mut console).unwrap_err();
        assert!(matches!(err, LessonError::InvalidNumber { ref field, .. } if field == "edad"));
    }
}
