pub mod image;
pub mod labels;
pub mod scores;
