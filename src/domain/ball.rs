use serde::{Deserialize, Serialize};

/// The closed set of snooker balls with their fixed point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ball {
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

/// Potting order of the end-of-frame clearance.
pub const CLEARANCE_ORDER: [Ball; 6] = [
    Ball::Yellow,
    Ball::Green,
    Ball::Brown,
    Ball::Blue,
    Ball::Pink,
    Ball::Black,
];

impl Ball {
    pub fn value(self) -> u32 {
        match self {
            Ball::Red => 1,
            Ball::Yellow => 2,
            Ball::Green => 3,
            Ball::Brown => 4,
            Ball::Blue => 5,
            Ball::Pink => 6,
            Ball::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ball::Red => "red",
            Ball::Yellow => "yellow",
            Ball::Green => "green",
            Ball::Brown => "brown",
            Ball::Blue => "blue",
            Ball::Pink => "pink",
            Ball::Black => "black",
        }
    }

    /// Lookup by name. Unrecognized names yield None so callers can skip
    /// the item instead of failing the whole computation.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Ball::Red),
            "yellow" => Some(Ball::Yellow),
            "green" => Some(Ball::Green),
            "brown" => Some(Ball::Brown),
            "blue" => Some(Ball::Blue),
            "pink" => Some(Ball::Pink),
            "black" => Some(Ball::Black),
            _ => None,
        }
    }

    /// The color that follows this one in the clearance, if any.
    pub fn next_in_clearance(self) -> Option<Self> {
        let position = CLEARANCE_ORDER.iter().position(|b| *b == self)?;
        CLEARANCE_ORDER.get(position + 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_values() {
        assert_eq!(Ball::Red.value(), 1);
        assert_eq!(Ball::Black.value(), 7);
        let clearance_total: u32 = CLEARANCE_ORDER.iter().map(|b| b.value()).sum();
        assert_eq!(clearance_total, 27);
    }

    #[test]
    fn test_clearance_order() {
        assert_eq!(Ball::Yellow.next_in_clearance(), Some(Ball::Green));
        assert_eq!(Ball::Pink.next_in_clearance(), Some(Ball::Black));
        assert_eq!(Ball::Black.next_in_clearance(), None);
        assert_eq!(Ball::Red.next_in_clearance(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Ball::from_name("Blue"), Some(Ball::Blue));
        assert_eq!(Ball::from_name("  pink "), Some(Ball::Pink));
        assert_eq!(Ball::from_name("cue"), None);
    }
}
