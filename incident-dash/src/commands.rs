use incident_model::Filter;
use incident_sync::DashboardState;

pub const QUICK_EXAMPLES: [&str; 3] = [
    "database timeout failure",
    "SSL certificate expired",
    "disk space almost full",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Submit(String),
    Send,
    Quick(usize),
    Filter(Filter),
    Refresh,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Submit(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    match (name, arg) {
        ("q" | "quit", None) => Command::Quit,
        ("h" | "help", None) => Command::Help,
        ("r" | "refresh", None) => Command::Refresh,
        ("send", None) => Command::Send,
        ("f" | "filter", Some(value)) => match value.parse() {
            Ok(filter) => Command::Filter(filter),
            Err(e) => Command::Invalid(e),
        },
        ("quick", Some(value)) => match value.parse::<usize>() {
            Ok(n) if (1..=QUICK_EXAMPLES.len()).contains(&n) => Command::Quick(n - 1),
            _ => Command::Invalid(format!("quick example must be 1..={}", QUICK_EXAMPLES.len())),
        },
        _ => Command::Invalid(format!("unknown command ':{rest}'")),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Submit,
    Blank,
    Busy,
}

// Typed text only becomes the draft when it will actually be sent.
pub fn entry(state: &DashboardState, text: &str) -> Entry {
    if text.trim().is_empty() {
        Entry::Blank
    } else if state.submission.is_pending() {
        Entry::Busy
    } else {
        Entry::Submit
    }
}

pub const HELP: &str = "\
commands:
  <text>             report a new incident
  :quick <n>         put quick example n in the draft
  :send              submit the draft
  :filter <name>     all | critical | high | medium | low
  :refresh           refresh now
  :quit              exit";
