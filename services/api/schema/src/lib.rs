pub mod client_intakes;
pub mod feature_options;
pub mod messages;
pub mod properties;
pub mod reset_tokens;
pub mod track_views;
pub mod users;
