pub mod category_list;
pub mod color;
pub mod field_preview;
pub mod help;
pub mod input;
pub mod status_bar;
