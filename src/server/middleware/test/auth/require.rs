use super::*;

mod require_invalid_token;
mod require_missing_token;
mod require_valid_token;
