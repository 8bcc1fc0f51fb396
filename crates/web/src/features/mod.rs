pub mod account;
pub mod categories;
pub mod plans;
pub mod record;
pub mod social;
