use crate::domain::model::RuntimeInfo;
use crate::domain::ports::{Console, Exercise};
use crate::utils::error::Result;

pub const ZEN_TITLE: &str = "The Zen of Python, by Tim Peters";

pub const ZEN_APHORISMS: [&str; 19] = [
    "Beautiful is better than ugly.",
    "Explicit is better than implicit.",
    "Simple is better than complex.",
    "Complex is better than complicated.",
    "Flat is better than nested.",
    "Sparse is better than dense.",
    "Readability counts.",
    "Special cases aren't special enough to break the rules.",
    "Although practicality beats purity.",
    "Errors should never pass silently.",
    "Unless explicitly silenced.",
    "In the face of ambiguity, refuse the temptation to guess.",
    "There should be one-- and preferably only one --obvious way to do it.",
    "Although that way may not be obvious at first unless you're Dutch.",
    "Now is better than never.",
    "Although never is often better than *right* now.",
    "If the implementation is hard to explain, it's a bad idea.",
    "If the implementation is easy to explain, it may be a good idea.",
    "Namespaces are one honking great idea -- let's do more of those!",
];

/// Lesson 01: who is running me, hello world, two operations and the zen.
pub struct InterpreterInfo {
    runtime: RuntimeInfo,
}

impl InterpreterInfo {
    pub fn new(runtime: RuntimeInfo) -> Self {
        Self { runtime }
    }
}

impl Default for InterpreterInfo {
    fn default() -> Self {
        Self::new(RuntimeInfo::current())
    }
}

impl Exercise for InterpreterInfo {
    fn id(&self) -> &str {
        "clase-01"
    }

    fn title(&self) -> &str {
        "Información del intérprete"
    }

    fn run(&self, console: &mut dyn Console) -> Result<()> {
        console.say("== Información del intérprete ==")?;
        console.say(&format!("Versión: {}", self.runtime.version_line()))?;
        let executable = self.runtime.executable.as_deref().unwrap_or("<desconocido>");
        console.say(&format!("Ejecutable: {}", executable))?;
        console.blank()?;

        console.say("== Hola y operaciones ==")?;
        console.say("Hola, mundo 👋")?;
        let sum = 2 + 5;
        console.say(&format!("2 + 5 = {}", sum))?;
        let product = 7 * 6;
        console.say(&format!("7 * 6 = {}", product))?;
        console.blank()?;

        console.say(ZEN_TITLE)?;
        console.blank()?;
        for aphorism in ZEN_APHORISMS {
            console.say(aphorism)?;
        }
        console.blank()?;

        console.say("Script ejecutado correctamente ✅")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::IoConsole;
    use std::io::Cursor;

    fn run_with(runtime: RuntimeInfo) -> String {
        let mut console = IoConsole::new(Cursor::new(""), Vec::new());
        InterpreterInfo::new(runtime).run(&mut console).unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn test_header_and_operations() {
        let out = run_with(RuntimeInfo {
            version: "0.1.0".to_string(),
            target: "linux/x86_64".to_string(),
            executable: Some("/usr/bin/lesson-exercises".to_string()),
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "== Información del intérprete ==");
        assert_eq!(lines[1], "Versión: 0.1.0 (linux/x86_64)");
        assert_eq!(lines[2], "Ejecutable: /usr/bin/lesson-exercises");
        assert_eq!(lines[3], "");
        assert_eq!(
            lines[4..8],
            [
                "== Hola y operaciones ==",
                "Hola, mundo 👋",
                "2 + 5 = 7",
                "7 * 6 = 42"
            ]
        );
        assert_eq!(lines.last(), Some(&"Script ejecutado correctamente ✅"));
    }

    #[test]
    fn test_unknown_executable() {
        let out = run_with(RuntimeInfo {
            version: "0.1.0".to_string(),
            target: "linux/x86_64".to_string(),
            executable: None,
        });
        assert!(out.contains("Ejecutable: <desconocido>\n"));
    }

    #[test]
    fn test_zen_is_printed_in_full() {
        let out = run_with(RuntimeInfo::current());
        assert!(out.contains(&format!("{}\n\n{}\n", ZEN_TITLE, ZEN_APHORISMS[0])));
        assert!(out.contains(&format!("{}\n\nScript", ZEN_APHORISMS[18])));
    }
}
