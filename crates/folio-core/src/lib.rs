pub mod clock;
pub mod config;
pub mod constants;
pub mod contact;
pub mod counter;
pub mod easing;
pub mod error;
pub mod follower;
pub mod page;
pub mod scheduler;
pub mod throttle;
pub mod typewriter;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use counter::*;
pub use easing::*;
pub use error::*;
pub use follower::*;
pub use page::*;
pub use scheduler::*;
pub use throttle::*;
pub use typewriter::*;
