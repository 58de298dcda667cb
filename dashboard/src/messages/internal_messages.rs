use actix::Message;
use common::types::order_status::OrderStatus;

/// A line typed by the user, already parsed.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
pub enum UiCommand {
    Search(String),
    Update(OrderStatus),
    Show,
    Help,
    Quit,
    /// Input that could not be understood, with the reason.
    Invalid(String),
}

impl UiCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<UiCommand> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "search" | "s" => UiCommand::Search(rest.to_string()),
            "set" | "update" | "u" => match rest.parse::<OrderStatus>() {
                Ok(status) => UiCommand::Update(status),
                Err(e) => UiCommand::Invalid(e.to_string()),
            },
            "show" => UiCommand::Show,
            "help" | "?" => UiCommand::Help,
            "quit" | "exit" | "q" => UiCommand::Quit,
            other => UiCommand::Invalid(format!("unknown command: {}", other)),
        };
        Some(command)
    }
}
