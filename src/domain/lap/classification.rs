//! Classification of free-text record attributes.
//!
//! Source data writes these attributes however the submitter liked
//! ("后驱", "RWD", "Rear-wheel drive"), so each class is recognised by
//! case-insensitive substring match. Classes drive presentation only;
//! filtering always compares raw values.

use serde::Serialize;

fn contains_any(text: &str, needles: &[&str]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Drivetrain {
    FrontWheel,
    RearWheel,
    AllWheel,
    Unknown,
}

impl Drivetrain {
    pub fn classify(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return Drivetrain::Unknown;
        };
        if contains_any(text, &["前驱", "fwd", "front"]) {
            Drivetrain::FrontWheel
        } else if contains_any(text, &["后驱", "rwd", "rear"]) {
            Drivetrain::RearWheel
        } else if contains_any(text, &["四驱", "awd", "4wd", "all-wheel", "all wheel"]) {
            Drivetrain::AllWheel
        } else {
            Drivetrain::Unknown
        }
    }

    /// Stable styling key, empty for unknown values.
    pub fn badge(&self) -> &'static str {
        match self {
            Drivetrain::FrontWheel => "drivetrain-fwd",
            Drivetrain::RearWheel => "drivetrain-rwd",
            Drivetrain::AllWheel => "drivetrain-awd",
            Drivetrain::Unknown => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlType {
    Wheel,
    Gamepad,
    Keyboard,
    Unknown,
}

impl ControlType {
    pub fn classify(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return ControlType::Unknown;
        };
        if contains_any(text, &["方向盘", "wheel"]) {
            ControlType::Wheel
        } else if contains_any(text, &["手柄", "gamepad", "controller"]) {
            ControlType::Gamepad
        } else if contains_any(text, &["键盘", "keyboard"]) {
            ControlType::Keyboard
        } else {
            ControlType::Unknown
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            ControlType::Wheel => "control-wheel",
            ControlType::Gamepad => "control-gamepad",
            ControlType::Keyboard => "control-keyboard",
            ControlType::Unknown => "",
        }
    }
}
