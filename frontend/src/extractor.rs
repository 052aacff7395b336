pub mod api;
pub mod components;
pub mod page;
pub mod state;
pub mod url_parser;
pub mod variant;
pub mod view;
