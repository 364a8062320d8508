/*
[INPUT]:  -
[OUTPUT]: Navigation module exports
[POS]:    Module organization for routes and the access guard
[UPDATE]: When navigation concerns are added or removed
*/

pub mod guard;
pub mod routes;

pub use guard::{evaluate, RouteDecision};
