// Errors raised by the simulation core

/// Everything that can stop a match from being built or a velocity from
/// being normalized
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Direction vector with zero magnitude
    DegenerateVector,
    /// Speed that is zero, negative or not finite
    InvalidSpeed(f32),
    /// World too small to hold a paddle or the ball
    InvalidWorld { width: u32, height: u32 },
    /// Winning score of zero
    InvalidWinningScore,
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateVector => write!(f, "cannot normalize a zero-length vector"),
            Self::InvalidSpeed(speed) => write!(f, "speed must be positive, got {}", speed),
            Self::InvalidWorld { width, height } => {
                write!(f, "world {}x{} is too small for the ball and paddles", width, height)
            }
            Self::InvalidWinningScore => write!(f, "winning score must be at least 1"),
        }
    }
}

impl std::error::Error for SimError {}

pub type Result<T> = std::result::Result<T, SimError>;
