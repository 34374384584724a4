use serde::Serialize;
use uuid::Uuid;

/// A player from the user cache, enriched as the pipeline advances.
///
/// `offline_uuid` is always present once loaded. `online_uuid` stays `None`
/// until the resolver finds a match in the account directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub offline_uuid: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online_uuid: Option<Uuid>,
}

impl Player {
    pub fn new(name: impl Into<String>, offline_uuid: Uuid) -> Self {
        Self {
            name: name.into(),
            offline_uuid,
            online_uuid: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.online_uuid.is_some()
    }
}

/// Keep only players whose online UUID resolved.
///
/// Builds a new sequence rather than removing in place; order among retained
/// players is preserved.
pub fn resolved_only(players: Vec<Player>) -> Vec<Player> {
    players.into_iter().filter(Player::is_resolved).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unresolved(name: &str, id: u128) -> Player {
        Player::new(name, Uuid::from_u128(id))
    }

    fn resolved(name: &str, id: u128, online: u128) -> Player {
        let mut player = unresolved(name, id);
        player.online_uuid = Some(Uuid::from_u128(online));
        player
    }

    #[test]
    fn test_filter_preserves_order_of_retained() {
        let players = vec![
            resolved("alpha", 1, 101),
            unresolved("beta", 2),
            resolved("gamma", 3, 103),
            unresolved("delta", 4),
        ];

        let filtered = resolved_only(players);
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let players = vec![
            resolved("alpha", 1, 101),
            unresolved("beta", 2),
            resolved("gamma", 3, 103),
        ];

        let once = resolved_only(players);
        let names_once: Vec<String> = once.iter().map(|p| p.name.clone()).collect();
        let twice = resolved_only(once);
        let names_twice: Vec<String> = twice.iter().map(|p| p.name.clone()).collect();

        assert_eq!(names_once, names_twice);
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(resolved_only(Vec::new()).is_empty());
    }
}
