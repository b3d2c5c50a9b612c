//! Presence status display strings.

/// The fixed set of presence values the platform reports for a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Offline,
    Recently,
    LastWeek,
    LastMonth,
}

pub const UNKNOWN_STATUS: &str = "⚪️ Unknown";

impl Presence {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "recently" => Some(Self::Recently),
            "last_week" => Some(Self::LastWeek),
            "last_month" => Some(Self::LastMonth),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "✅ Online",
            Self::Offline => "❌ Offline",
            Self::Recently => "☑️ Recently online",
            Self::LastWeek => "✖️ Last seen within week",
            Self::LastMonth => "❎ Last seen within month",
        }
    }
}

/// Total mapping from an optional raw status string to a display string.
/// Unrecognized or absent values map to the fixed "Unknown" label.
pub fn status_display(status: Option<&str>) -> &'static str {
    status
        .and_then(Presence::parse)
        .map(Presence::label)
        .unwrap_or(UNKNOWN_STATUS)
}
