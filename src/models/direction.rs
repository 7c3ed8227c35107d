use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, ValueEnum)]
pub enum Direction {
    #[value(name = "in")]
    Inbound,
    #[value(name = "out")]
    Outbound,
}

/// Outcome of reading the `Direction` column of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDirection {
    Call(Direction),
    /// Internal-to-internal leg ("Int"); not a customer call.
    Internal,
}

impl Direction {
    /// Convert export string → enum
    pub fn parse_export(s: &str) -> Option<ParsedDirection> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inbound" => Some(ParsedDirection::Call(Self::Inbound)),
            "out" | "outbound" => Some(ParsedDirection::Call(Self::Outbound)),
            "int" | "internal" => Some(ParsedDirection::Internal),
            _ => None,
        }
    }

    pub fn is_inbound(&self) -> bool {
        matches!(self, Direction::Inbound)
    }
}
