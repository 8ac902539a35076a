pub mod action;
pub use action::*;

pub mod env;
pub use env::*;

pub mod payout;
pub use payout::*;

pub mod round;
pub use round::*;

pub mod showdown;
pub use showdown::*;
