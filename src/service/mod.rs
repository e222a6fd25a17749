pub mod ids;
pub mod users;
