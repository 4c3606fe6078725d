pub mod generate;
pub mod message;
pub mod rng;

pub use generate::{generate_day, generate_plan};
pub use message::generate_message;
pub use rng::day_rng;
