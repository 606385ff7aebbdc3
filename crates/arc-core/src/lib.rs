pub mod collection;
pub mod config;
pub mod controller;
pub mod error;
pub mod scale;
pub mod state;
pub mod surface;
pub mod timer;

pub use collection::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use scale::*;
pub use state::*;
pub use surface::*;
pub use timer::*;
