pub mod constants;
pub mod editor;
pub mod layout;
pub mod render;
