pub mod courses;
pub mod leaderboard;
pub mod scores;
pub mod tee_offs;
pub mod users;
