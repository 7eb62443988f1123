//! The fixed named-key table
//!
//! Names follow the console key-identity enumeration (`Enter`, `PageUp`, `D5`,
//! `NumPad3`, `F12`, ...). Lookup is an exact, ASCII case-insensitive match;
//! there is no prefix, fuzzy, or numeric matching.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A key identified by a fixed symbolic name
///
/// The parameterised variants are only meaningful inside the table ranges
/// (`A`-`Z`, `0`-`9`, `1`-`24`); conversion never produces other values. Use
/// [`NamedKey::is_in_table`] to check a hand-built key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Letter key `A`-`Z` (stored uppercase)
    Letter(char),
    /// Top-row digit key `D0`-`D9`
    Digit(u8),
    /// Function key `F1`-`F24`
    F(u8),
    /// Numeric keypad digit `NumPad0`-`NumPad9`
    NumPad(u8),

    Backspace,
    Tab,
    Clear,
    Enter,
    Pause,
    Escape,
    Spacebar,
    PageUp,
    PageDown,
    End,
    Home,
    LeftArrow,
    UpArrow,
    RightArrow,
    DownArrow,
    Select,
    Print,
    Execute,
    PrintScreen,
    Insert,
    Delete,
    Help,
    LeftWindows,
    RightWindows,
    Applications,
    Sleep,

    // Keypad operators
    Multiply,
    Add,
    Separator,
    Subtract,
    Decimal,
    Divide,

    // Browser, media and launch keys
    BrowserBack,
    BrowserForward,
    BrowserRefresh,
    BrowserStop,
    BrowserSearch,
    BrowserFavorites,
    BrowserHome,
    VolumeMute,
    VolumeDown,
    VolumeUp,
    MediaNext,
    MediaPrevious,
    MediaStop,
    MediaPlay,
    LaunchMail,
    LaunchMediaSelect,
    LaunchApp1,
    LaunchApp2,

    // OEM keys (layout dependent)
    Oem1,
    OemPlus,
    OemComma,
    OemMinus,
    OemPeriod,
    Oem2,
    Oem3,
    Oem4,
    Oem5,
    Oem6,
    Oem7,
    Oem8,
    Oem102,

    Process,
    Packet,
    Attention,
    CrSel,
    ExSel,
    EraseEndOfFile,
    Play,
    Zoom,
    NoName,
    Pa1,
    OemClear,
}

/// Keys without a numeric or letter parameter, by canonical name
const PLAIN_KEYS: &[(&str, NamedKey)] = &[
    ("Backspace", NamedKey::Backspace),
    ("Tab", NamedKey::Tab),
    ("Clear", NamedKey::Clear),
    ("Enter", NamedKey::Enter),
    ("Pause", NamedKey::Pause),
    ("Escape", NamedKey::Escape),
    ("Spacebar", NamedKey::Spacebar),
    ("PageUp", NamedKey::PageUp),
    ("PageDown", NamedKey::PageDown),
    ("End", NamedKey::End),
    ("Home", NamedKey::Home),
    ("LeftArrow", NamedKey::LeftArrow),
    ("UpArrow", NamedKey::UpArrow),
    ("RightArrow", NamedKey::RightArrow),
    ("DownArrow", NamedKey::DownArrow),
    ("Select", NamedKey::Select),
    ("Print", NamedKey::Print),
    ("Execute", NamedKey::Execute),
    ("PrintScreen", NamedKey::PrintScreen),
    ("Insert", NamedKey::Insert),
    ("Delete", NamedKey::Delete),
    ("Help", NamedKey::Help),
    ("LeftWindows", NamedKey::LeftWindows),
    ("RightWindows", NamedKey::RightWindows),
    ("Applications", NamedKey::Applications),
    ("Sleep", NamedKey::Sleep),
    ("Multiply", NamedKey::Multiply),
    ("Add", NamedKey::Add),
    ("Separator", NamedKey::Separator),
    ("Subtract", NamedKey::Subtract),
    ("Decimal", NamedKey::Decimal),
    ("Divide", NamedKey::Divide),
    ("BrowserBack", NamedKey::BrowserBack),
    ("BrowserForward", NamedKey::BrowserForward),
    ("BrowserRefresh", NamedKey::BrowserRefresh),
    ("BrowserStop", NamedKey::BrowserStop),
    ("BrowserSearch", NamedKey::BrowserSearch),
    ("BrowserFavorites", NamedKey::BrowserFavorites),
    ("BrowserHome", NamedKey::BrowserHome),
    ("VolumeMute", NamedKey::VolumeMute),
    ("VolumeDown", NamedKey::VolumeDown),
    ("VolumeUp", NamedKey::VolumeUp),
    ("MediaNext", NamedKey::MediaNext),
    ("MediaPrevious", NamedKey::MediaPrevious),
    ("MediaStop", NamedKey::MediaStop),
    ("MediaPlay", NamedKey::MediaPlay),
    ("LaunchMail", NamedKey::LaunchMail),
    ("LaunchMediaSelect", NamedKey::LaunchMediaSelect),
    ("LaunchApp1", NamedKey::LaunchApp1),
    ("LaunchApp2", NamedKey::LaunchApp2),
    ("Oem1", NamedKey::Oem1),
    ("OemPlus", NamedKey::OemPlus),
    ("OemComma", NamedKey::OemComma),
    ("OemMinus", NamedKey::OemMinus),
    ("OemPeriod", NamedKey::OemPeriod),
    ("Oem2", NamedKey::Oem2),
    ("Oem3", NamedKey::Oem3),
    ("Oem4", NamedKey::Oem4),
    ("Oem5", NamedKey::Oem5),
    ("Oem6", NamedKey::Oem6),
    ("Oem7", NamedKey::Oem7),
    ("Oem8", NamedKey::Oem8),
    ("Oem102", NamedKey::Oem102),
    ("Process", NamedKey::Process),
    ("Packet", NamedKey::Packet),
    ("Attention", NamedKey::Attention),
    ("CrSel", NamedKey::CrSel),
    ("ExSel", NamedKey::ExSel),
    ("EraseEndOfFile", NamedKey::EraseEndOfFile),
    ("Play", NamedKey::Play),
    ("Zoom", NamedKey::Zoom),
    ("NoName", NamedKey::NoName),
    ("Pa1", NamedKey::Pa1),
    ("OemClear", NamedKey::OemClear),
];

pub const FUNCTION_KEY_MAX: u8 = 24;

impl NamedKey {
    /// Named key for an ASCII letter or digit
    pub fn from_char(c: char) -> Option<NamedKey> {
        if c.is_ascii_alphabetic() {
            Some(NamedKey::Letter(c.to_ascii_uppercase()))
        } else if c.is_ascii_digit() {
            Some(NamedKey::Digit(c as u8 - b'0'))
        } else {
            None
        }
    }

    /// Check if this key is one the table can produce
    pub fn is_in_table(self) -> bool {
        match self {
            NamedKey::Letter(c) => c.is_ascii_uppercase(),
            NamedKey::Digit(d) | NamedKey::NumPad(d) => d <= 9,
            NamedKey::F(n) => (1..=FUNCTION_KEY_MAX).contains(&n),
            _ => true,
        }
    }

    /// Canonical spelling of this key's name
    pub fn name(self) -> Cow<'static, str> {
        match self {
            NamedKey::Letter(c) => Cow::Owned(c.to_string()),
            NamedKey::Digit(d) => Cow::Owned(format!("D{}", d)),
            NamedKey::F(n) => Cow::Owned(format!("F{}", n)),
            NamedKey::NumPad(n) => Cow::Owned(format!("NumPad{}", n)),
            plain => PLAIN_KEYS
                .iter()
                .find(|(_, key)| *key == plain)
                .map(|(name, _)| Cow::Borrowed(*name))
                .unwrap_or(Cow::Borrowed("")),
        }
    }

    /// Every key in the table: plain keys, then digits, letters, keypad digits and function keys
    pub fn all() -> impl Iterator<Item = NamedKey> {
        PLAIN_KEYS
            .iter()
            .map(|(_, key)| *key)
            .chain((0..=9).map(NamedKey::Digit))
            .chain((b'A'..=b'Z').map(|b| NamedKey::Letter(b as char)))
            .chain((0..=9).map(NamedKey::NumPad))
            .chain((1..=FUNCTION_KEY_MAX).map(NamedKey::F))
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl Serialize for NamedKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Look up a multi-character key name
///
/// Single letters are not matched here: a one-character token is always a
/// literal, handled by [`NamedKey::from_char`].
pub fn lookup_named_key(name: &str) -> Option<NamedKey> {
    if let Some((_, key)) = PLAIN_KEYS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
    {
        return Some(*key);
    }

    if let Some(rest) = strip_prefix_ignore_case(name, "numpad") {
        return parse_index(rest, 0, 9).map(NamedKey::NumPad);
    }
    if let Some(rest) = strip_prefix_ignore_case(name, "f") {
        return parse_index(rest, 1, FUNCTION_KEY_MAX).map(NamedKey::F);
    }
    if let Some(rest) = strip_prefix_ignore_case(name, "d") {
        return parse_index(rest, 0, 9).map(NamedKey::Digit);
    }
    None
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// Strict decimal index: digits only, no leading zero, within `min..=max`
fn parse_index(digits: &str, min: u8, max: u8) -> Option<u8> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    let value: u8 = digits.parse().ok()?;
    (min..=max).contains(&value).then_some(value)
}
