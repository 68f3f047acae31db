//! Request guards evaluated before handler logic runs.
//!
//! Authorization is explicit: each handler constructs an `AuthGuard` and
//! states the permissions the route requires, instead of relying on
//! declarative security rules.

pub mod auth;

#[cfg(test)]
mod test;
