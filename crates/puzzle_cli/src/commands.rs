pub mod animate;
pub mod examples;
pub mod letters;
