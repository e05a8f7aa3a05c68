// Domain layer - Dashboard data models and view models
pub mod catalog;
pub mod error;
pub mod page;
pub mod view;
