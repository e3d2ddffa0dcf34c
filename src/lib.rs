pub mod app;
pub mod config;
pub mod data;
pub mod imaging;
pub mod model;
pub mod resolver;
pub mod rules;
pub mod session;
pub mod sound;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
