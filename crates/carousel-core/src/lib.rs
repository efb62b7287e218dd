pub mod carousel;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod loader;
pub mod pan;

pub use carousel::*;
pub use compositor::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use layout::*;
pub use loader::*;
pub use pan::*;
