//! Membership Function Library: pure `membership(shape, x) -> [0, 1]`.

pub mod sampling;
pub mod shape;

pub use sampling::sample;
pub use shape::{membership, MembershipShape};
