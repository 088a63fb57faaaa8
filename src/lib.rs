pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod nav;
pub mod render;
pub mod testimonials;
pub mod view;
pub mod viewport;
