use std::fmt;

/// Signed percentage offset, rendered as `+N%` / `-N%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(pub i32);

/// Signed hertz offset, rendered as `+NHz` / `-NHz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hertz(pub i32);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}%", self.0)
    }
}

impl fmt::Display for Hertz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}Hz", self.0)
    }
}

/// Prosody adjustments in the provider's encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prosody {
    pub rate: Percent,
    pub volume: Percent,
    pub pitch: Hertz,
}

impl Prosody {
    /// Map user-facing multipliers (centred at 1.0) to provider offsets
    pub fn from_multipliers(speed: f64, volume: f64, pitch: f64) -> Self {
        Self {
            rate: percent_from_multiplier(speed),
            volume: percent_from_multiplier(volume),
            pitch: hertz_from_multiplier(pitch),
        }
    }
}

impl Default for Prosody {
    fn default() -> Self {
        Self::from_multipliers(1.0, 1.0, 1.0)
    }
}

/// `(value - 1) * 100`, truncated toward zero.
pub fn percent_from_multiplier(value: f64) -> Percent {
    Percent(((value - 1.0) * 100.0).trunc() as i32)
}

/// `value - 1`, truncated toward zero. Not scaled by 100.
pub fn hertz_from_multiplier(value: f64) -> Hertz {
    Hertz((value - 1.0).trunc() as i32)
}
