pub mod debug_echo;
pub mod inventory;
