pub mod errors;
pub mod github;
pub mod gitlab;
pub mod project;
pub mod remote;
pub mod render;
pub mod service;
pub mod tokens;
