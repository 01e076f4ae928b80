pub mod endpoint;
pub mod fetch;
pub mod film;
pub mod logging;
pub mod roster;
