//! Application pages

pub mod analytics;
pub mod apply_credits;
pub mod circuit;
pub mod dashboard;
pub mod design;
pub mod errors;
pub mod login;
pub mod pricing;
pub mod register;
pub mod selection;
