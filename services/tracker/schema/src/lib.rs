//! SeaORM entities for the tracker service.

pub mod expenses;
pub mod login_codes;
