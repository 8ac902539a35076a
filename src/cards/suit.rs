#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Suit {
    #[default]
    Diamond = 0,
    Club = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Diamond, Suit::Club, Suit::Heart, Suit::Spade]
    }

    /// long form used by RoundEnv::render
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
            Suit::Heart => "Hearts",
            Suit::Spade => "Spades",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Diamond,
            1 => Suit::Club,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
///
/// the 13 deck positions of this suit, one contiguous block
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1FFF << (13 * u8::from(s))
    }
}

/// str isomorphism
impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        match s {
            "d" => Suit::Diamond,
            "c" => Suit::Club,
            "h" => Suit::Heart,
            "s" => Suit::Spade,
            _ => panic!("Invalid suit str: {}", s),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Diamond => "d",
                Suit::Club => "c",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}
