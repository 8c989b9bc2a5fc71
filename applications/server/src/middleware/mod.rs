/// Request middleware and extractors
pub mod body;

pub use body::UserPayload;
