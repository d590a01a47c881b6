//! Station module containing reading, staff and price management

pub mod core;
pub mod prices;
pub mod readings;
pub mod staff;
pub mod summary;

pub use core::*;
pub use prices::*;
pub use readings::*;
pub use staff::*;
pub use summary::*;
