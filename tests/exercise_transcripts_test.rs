use lesson_exercises::{ExerciseRegistry, ExerciseRunner, IoConsole, LessonError, TomlSettings};
use std::io::Cursor;

fn run_exercise(
    settings: &TomlSettings,
    id: &str,
    input: &str,
) -> (Result<(), LessonError>, String) {
    let runner = ExerciseRunner::new(ExerciseRegistry::standard(settings));
    let mut console = IoConsole::new(Cursor::new(input.to_string()), Vec::new());
    let result = runner.run(id, &mut console);
    let output = String::from_utf8(console.into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_personal_data_full_transcript() {
    let input = "Ana\n25\n70,5\n3\n03\n1990\n6\n3\n";
    let (result, output) = run_exercise(&TomlSettings::default(), "clase-04", input);

    assert!(result.is_ok());
    // Input is not echoed, so prompts and replies share lines.
    let expected = concat!(
        "¿Cuál es tu nombre? ¿Cuántos años tienes? ¿Cuánto pesas? (puedes usar punto o coma) ",
        "Hola Ana, ¡placer en conocerte! 🤖\n",
        "Edad registrada: 25 años | Peso registrado: 70.5 kg\n",
        "Día de nacimiento (número): Mes de nacimiento (número o nombre): ",
        "Año de nacimiento (4 dígitos): ",
        "Naciste el día 3 de marzo de 1990 ¿correcto? 🗓️\n",
        "Escribe un número: Escribe otro número: ",
        "Demostración (sin conversión): 63\n",
        "La suma correcta es: 9.0\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_personal_data_keeps_month_name_and_decimal_sum() {
    let input = "  Luis \n40\n80\nDiez\nOctubre\n1985\n2,5\n0.25\n";
    let (result, output) = run_exercise(&TomlSettings::default(), "clase-04", input);

    assert!(result.is_ok());
    assert!(output.contains("Hola Luis, ¡placer en conocerte! 🤖\n"));
    assert!(output.contains("Peso registrado: 80.0 kg\n"));
    assert!(output.contains("Naciste el día Diez de octubre de 1985"));
    assert!(output.contains("Demostración (sin conversión): 2,50.25\n"));
    assert!(output.ends_with("La suma correcta es: 2.75\n"));
}

#[test]
fn test_personal_data_bad_weight_stops_before_greeting() {
    let input = "Ana\n25\nmucho\n";
    let (result, output) = run_exercise(&TomlSettings::default(), "clase-04", input);

    match result {
        Err(LessonError::InvalidNumber { field, value }) => {
            assert_eq!(field, "peso");
            assert_eq!(value, "mucho");
        }
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
    assert!(!output.contains("Hola Ana"));
}

#[test]
fn test_personal_data_truncated_input() {
    let (result, _) = run_exercise(&TomlSettings::default(), "clase-04", "Ana\n25\n");
    assert!(matches!(result, Err(LessonError::UnexpectedEof { .. })));
}

#[test]
fn test_greeter_full_transcript() {
    let (result, output) = run_exercise(&TomlSettings::default(), "clase-05", "\nVictor\n");

    assert!(result.is_ok());
    let expected = concat!(
        "Hola, mundo 👋\n",
        "¿Cuál es tu nombre? ❗ Por favor, escribe al menos un carácter.\n",
        "¿Cuál es tu nombre? Es un placer conocerte, Victor.\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_greeter_attempt_cap_from_settings() {
    let settings = TomlSettings::from_toml_str("[greeter]\nmax_name_attempts = 1\n").unwrap();
    let (result, output) = run_exercise(&settings, "clase-05", "\nVictor\n");

    assert!(matches!(result, Err(LessonError::TooManyAttempts { attempts: 1 })));
    assert!(!output.contains("Victor"));
}

#[test]
fn test_greeter_without_answer_hits_eof() {
    let (result, _) = run_exercise(&TomlSettings::default(), "clase-05", "\n  \n");
    assert!(matches!(result, Err(LessonError::UnexpectedEof { .. })));
}

#[test]
fn test_interpreter_info_needs_no_input() {
    let (result, output) = run_exercise(&TomlSettings::default(), "clase-01", "");

    assert!(result.is_ok());
    assert!(output.starts_with("== Información del intérprete ==\nVersión: "));
    assert!(output.contains(&format!("Versión: {} (", env!("CARGO_PKG_VERSION"))));
    assert!(output.contains("\n2 + 5 = 7\n7 * 6 = 42\n"));
    assert!(output.contains("Readability counts.\n"));
    assert!(output.ends_with("Script ejecutado correctamente ✅\n"));
}

#[test]
fn test_unknown_exercise() {
    let (result, output) = run_exercise(&TomlSettings::default(), "clase-02", "");
    assert!(matches!(result, Err(LessonError::UnknownExercise { ref id }) if id == "clase-02"));
    assert!(output.is_empty());
}
