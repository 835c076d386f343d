pub mod commands;
pub mod dialog;
