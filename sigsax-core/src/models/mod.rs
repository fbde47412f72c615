pub mod region;
pub mod signal;

// re-export for cleaner imports
pub use self::region::Region;
pub use self::signal::{Section, Signal};
