pub mod course;
pub mod leaderboard;
pub mod score;
pub mod tee_off;
pub mod user;
