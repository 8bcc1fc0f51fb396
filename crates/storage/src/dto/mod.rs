pub mod category;
pub mod plan;
pub mod record;
pub mod social;
pub mod stats;
pub mod user;
