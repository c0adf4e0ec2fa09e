pub mod block;
pub mod board;
pub mod dispatch;
pub mod export;
pub mod project;
pub mod schema;
pub mod settings;
pub mod ticket;
