pub mod export;
pub mod interactions;
pub mod selection;
pub mod stats;
pub mod view;
