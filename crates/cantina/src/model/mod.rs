//! Pure data structures (DTOs) managed by the resource actors.

pub mod customer;
pub mod menu;
pub mod order;

pub use customer::*;
pub use menu::*;
pub use order::*;
