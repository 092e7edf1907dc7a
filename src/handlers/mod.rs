pub mod notification;
pub mod pricing;
pub mod product;
pub mod settings;
