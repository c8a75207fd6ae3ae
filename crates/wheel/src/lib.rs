pub mod config;
pub mod events;
pub mod selection;
pub mod session;
pub mod sys;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;
