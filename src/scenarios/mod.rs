//! goose transaction functions and weighted scenarios, one module per API
//! surface. Each module exposes `Scenario` constructors so the load binaries
//! (and the scenario tests) can register exactly the mix they want.

pub mod categories;
pub mod events;
pub mod payments;
pub mod search;
pub mod tickets;
