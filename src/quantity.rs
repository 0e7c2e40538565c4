#[macro_use]
pub mod macros;

pub mod energy;
pub mod money;
pub mod percent;
pub mod power;
pub mod time;
