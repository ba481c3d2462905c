//! Per-mode key handlers.

pub(crate) mod browse;
pub(crate) mod chat;
pub(crate) mod contact;
pub(crate) mod goto;
