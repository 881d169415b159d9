pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::commentary::Commentary;
pub use models::match_record::Match;
pub use models::match_status::MatchStatus;
pub use models::new_commentary::NewCommentary;
pub use models::new_match::NewMatch;
pub use models::score_update::ScoreUpdate;
