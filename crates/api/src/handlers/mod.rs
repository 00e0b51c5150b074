pub mod car;
pub mod client;
pub mod crud;
pub mod dashboard;
pub mod order;
