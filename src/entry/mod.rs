//! Raw form input and its normalization into readings and prices

pub mod amount;
pub mod form;

pub use amount::*;
pub use form::*;
