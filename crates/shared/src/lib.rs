pub mod atlas;
pub mod error;
pub mod grouping;
pub mod labels;
pub mod models;
pub mod numerals;
pub mod pager;
pub mod popup;
pub mod registry;
pub mod search;
pub mod sheet;
