/// Match configuration chosen on the setup screen.
///
/// Immutable for the duration of a match. `race_to` is the target score;
/// the first player to reach it wins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub player1_name: String,
    pub player2_name: String,
    pub race_to: u32,
}

impl MatchConfig {
    pub const DEFAULT_PLAYER1_NAME: &'static str = "Player 1";
    pub const DEFAULT_PLAYER2_NAME: &'static str = "Player 2";
    pub const DEFAULT_RACE_TO: u32 = 7;

    /// Target-score choices offered on the setup screen.
    pub const RACE_TO_OPTIONS: [u32; 7] = [3, 5, 7, 9, 11, 15, 21];

    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>, race_to: u32) -> Self {
        let player1_name = non_blank(player1_name.into(), Self::DEFAULT_PLAYER1_NAME);
        let player2_name = non_blank(player2_name.into(), Self::DEFAULT_PLAYER2_NAME);

        Self {
            player1_name,
            player2_name,
            race_to: race_to.max(1),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player1_name: Self::DEFAULT_PLAYER1_NAME.to_string(),
            player2_name: Self::DEFAULT_PLAYER2_NAME.to_string(),
            race_to: Self::DEFAULT_RACE_TO,
        }
    }
}

fn non_blank(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_setup_screen() {
        let config = MatchConfig::default();
        assert_eq!(config.player1_name, "Player 1");
        assert_eq!(config.player2_name, "Player 2");
        assert_eq!(config.race_to, 7);
    }

    #[test]
    fn blank_names_fall_back_to_defaults() {
        let config = MatchConfig::new("  ", "Bob", 5);
        assert_eq!(config.player1_name, "Player 1");
        assert_eq!(config.player2_name, "Bob");
    }

    #[test]
    fn race_to_is_clamped_to_at_least_one() {
        assert_eq!(MatchConfig::new("a", "b", 0).race_to, 1);
    }
}
