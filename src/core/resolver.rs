//! Online UUID resolution.
//!
//! Walks the loaded players in order and asks the account directory who owns
//! each name right now. Lookups are sequential, one request at a time; the
//! first service failure aborts the whole run before any remaining player is
//! processed. A name with no current owner is normal and leaves the player
//! unresolved.

use crate::error::Result;
use crate::lookup::ProfileLookup;
use crate::player::Player;

/// Resolve online UUIDs for every player, in order.
pub fn resolve_all(players: &mut [Player], lookup: &dyn ProfileLookup, at: u64) -> Result<()> {
    let total = players.len();

    for (i, player) in players.iter_mut().enumerate() {
        log_status!(
            "lookup",
            "({}/{}) Checking online UUID for {}...",
            i + 1,
            total,
            player.name
        );

        match lookup.lookup(&player.name, at)? {
            Some(uuid) => player.online_uuid = Some(uuid),
            None => {
                log_status!(
                    "lookup",
                    "Found no matching online UUID for {}, the player probably renamed themselves.",
                    player.name
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorCode};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use uuid::Uuid;

    struct StubLookup {
        responses: HashMap<String, Option<Uuid>>,
        fail_on: Option<String>,
        calls: RefCell<Vec<String>>,
    }

    impl StubLookup {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                fail_on: None,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn with_match(mut self, name: &str, id: &str) -> Self {
            self.responses
                .insert(name.to_string(), Some(Uuid::try_parse(id).unwrap()));
            self
        }

        fn with_no_match(mut self, name: &str) -> Self {
            self.responses.insert(name.to_string(), None);
            self
        }

        fn failing_on(mut self, name: &str) -> Self {
            self.fail_on = Some(name.to_string());
            self
        }
    }

    impl ProfileLookup for StubLookup {
        fn lookup(&self, name: &str, _at: u64) -> Result<Option<Uuid>> {
            self.calls.borrow_mut().push(name.to_string());
            if self.fail_on.as_deref() == Some(name) {
                return Err(Error::lookup_service_error(500, "Internal Server Error"));
            }
            Ok(self.responses.get(name).cloned().flatten())
        }
    }

    fn player(name: &str, id: u128) -> Player {
        Player::new(name, Uuid::from_u128(id))
    }

    #[test]
    fn test_resolves_and_normalizes_dashless_id() {
        // The directory hands back 32 hex chars without dashes.
        let stub = StubLookup::new().with_match("Alice", "22222222222222222222222222222222");
        let mut players = vec![player("Alice", 1)];

        resolve_all(&mut players, &stub, 0).unwrap();

        assert_eq!(
            players[0].online_uuid.unwrap().to_string(),
            "22222222-2222-2222-2222-222222222222"
        );
    }

    #[test]
    fn test_no_match_leaves_player_unresolved() {
        let stub = StubLookup::new()
            .with_no_match("Renamed")
            .with_match("Alice", "22222222-2222-2222-2222-222222222222");
        let mut players = vec![player("Renamed", 1), player("Alice", 2)];

        resolve_all(&mut players, &stub, 0).unwrap();

        assert!(players[0].online_uuid.is_none());
        assert!(players[1].online_uuid.is_some());
    }

    #[test]
    fn test_service_error_aborts_before_remaining_players() {
        let stub = StubLookup::new()
            .with_match("Alice", "22222222-2222-2222-2222-222222222222")
            .failing_on("Bob");
        let mut players = vec![player("Alice", 1), player("Bob", 2), player("Carol", 3)];

        let err = resolve_all(&mut players, &stub, 0).unwrap_err();

        assert_eq!(err.code, ErrorCode::LookupServiceError);
        assert_eq!(*stub.calls.borrow(), vec!["Alice", "Bob"]);
        assert!(players[2].online_uuid.is_none());
    }

    #[test]
    fn test_service_error_surfaces_body() {
        let stub = StubLookup::new().failing_on("Alice");
        let mut players = vec![player("Alice", 1)];

        let err = resolve_all(&mut players, &stub, 0).unwrap_err();

        assert_eq!(err.details["body"], "Internal Server Error");
        assert_eq!(err.details["status"], 500);
    }
}
