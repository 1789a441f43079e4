mod handler;
mod models;
mod parser;
mod validator;
mod version;

pub use handler::resolve_tag;
