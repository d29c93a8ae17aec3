pub mod map_view;
pub mod sample_popup;
pub mod search_box;
