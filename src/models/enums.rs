use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(SeverityLevel {
    None => "None",
    Mild => "Mild",
    Moderate => "Moderate",
    Severe => "Severe",
});

impl SeverityLevel {
    /// Integer score: None=0, Mild=1, Moderate=2, Severe=3.
    pub fn score(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 3,
        }
    }

    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            0 => Some(Self::None),
            1 => Some(Self::Mild),
            2 => Some(Self::Moderate),
            3 => Some(Self::Severe),
            _ => None,
        }
    }
}

impl Default for SeverityLevel {
    fn default() -> Self {
        Self::None
    }
}

str_enum!(Symptom {
    Headache => "headache",
    Dizziness => "dizziness",
    Memory => "memory",
    Mood => "mood",
    Fatigue => "fatigue",
});

impl Symptom {
    /// Position of this symptom's column in the table (after `Day`).
    pub fn index(self) -> usize {
        match self {
            Self::Headache => 0,
            Self::Dizziness => 1,
            Self::Memory => 2,
            Self::Mood => 3,
            Self::Fatigue => 4,
        }
    }

    /// Table / CSV column header.
    pub fn column_header(self) -> &'static str {
        match self {
            Self::Headache => "Headache",
            Self::Dizziness => "Dizziness/Vertigo",
            Self::Memory => "Memory Problems",
            Self::Mood => "Mood Changes",
            Self::Fatigue => "Fatigue",
        }
    }

    /// Short label used on the per-day report lines.
    pub fn report_label(self) -> &'static str {
        match self {
            Self::Headache => "Headache",
            Self::Dizziness => "Dizziness",
            Self::Memory => "Memory",
            Self::Mood => "Mood",
            Self::Fatigue => "Fatigue",
        }
    }
}

str_enum!(RecoveryTier {
    Strong => "strong",
    Moderate => "moderate",
    Significant => "significant",
});

str_enum!(BannerKind {
    Success => "success",
    Warning => "warning",
    Error => "error",
});
