use chrono::Local;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

/// Line logger: `[HH:MM:SS][LEVEL][NAME] → message`.
#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn header(&self, level: Level) -> ColoredString {
        let (tag, color) = match level {
            Level::Info => ("INFO", self.info_color),
            Level::Warn => ("WARN", Color::Yellow),
            Level::Error => ("ERROR", Color::BrightRed),
        };
        format!("[{}][{}][{}]", Self::timestamp(), tag, self.name)
            .bold()
            .color(color)
    }

    fn line(&self, level: Level, msg: &str) -> String {
        format!("{} {} {}", self.header(level), "→".dimmed(), msg)
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        println!("{}", self.line(Level::Info, msg.as_ref()));
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        println!("{}", self.line(Level::Warn, msg.as_ref()));
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!("{}", self.line(Level::Error, msg.as_ref()));
    }
}
