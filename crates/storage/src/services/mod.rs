pub mod handicap;
pub mod score_lifecycle;
