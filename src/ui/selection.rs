use crate::config::GameConfig;
use crate::core::PlayerId;
use crate::player::{MinimaxAI, PlayerController, TuiController};

pub const MODES: [&str; 3] = ["Human vs AI", "Human vs Human", "AI vs AI"];

/// Builds the two controllers for a menu choice (index into `MODES`).
pub fn create_player_controllers(
    choice: usize,
    config: &GameConfig,
) -> anyhow::Result<(Box<dyn PlayerController>, Box<dyn PlayerController>)> {
    let ai = |player: PlayerId, name: &str| -> Box<dyn PlayerController> {
        Box::new(MinimaxAI::with_searcher(player, name, config.searcher()))
    };
    let human = |player: PlayerId, name: &str| -> Box<dyn PlayerController> {
        Box::new(TuiController::new(player, name))
    };

    match choice {
        0 => match config.human_player {
            PlayerId::Player1 => Ok((human(PlayerId::Player1, "You"), ai(PlayerId::Player2, "AI"))),
            PlayerId::Player2 => Ok((ai(PlayerId::Player1, "AI"), human(PlayerId::Player2, "You"))),
        },
        1 => Ok((
            human(PlayerId::Player1, "Player 1"),
            human(PlayerId::Player2, "Player 2"),
        )),
        2 => Ok((ai(PlayerId::Player1, "AI-X"), ai(PlayerId::Player2, "AI-O"))),
        _ => Err(anyhow::anyhow!("Invalid selection")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_side_follows_config() {
        let mut config = GameConfig::default();
        let (p1, p2) = create_player_controllers(0, &config).unwrap();
        assert!(p1.is_human());
        assert!(!p2.is_human());

        config.human_player = PlayerId::Player2;
        let (p1, p2) = create_player_controllers(0, &config).unwrap();
        assert!(!p1.is_human());
        assert!(p2.is_human());

        assert!(create_player_controllers(MODES.len(), &config).is_err());
    }
}
