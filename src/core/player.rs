// ─── Move Player Menu ───
// Headless model of the "move player here" popup: one entry per movable
// player, each moving that player to the clicked coordinates.

use std::fmt;
use std::sync::Arc;

/// Block coordinates in the world (x, z) as shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinatesInWorld {
    pub x: i64,
    pub z: i64,
}

impl CoordinatesInWorld {
    pub fn new(x: i64, z: i64) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for CoordinatesInWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// What happens when a menu entry is chosen.
pub trait PlayerActions: Send + Sync {
    fn move_player(&self, player: &Player, target: CoordinatesInWorld);
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    label: String,
    player: Player,
}

impl MenuItem {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}

pub struct MovePlayerMenu {
    actions: Arc<dyn PlayerActions>,
    items: Vec<MenuItem>,
    target: CoordinatesInWorld,
}

impl MovePlayerMenu {
    pub fn new(
        actions: Arc<dyn PlayerActions>,
        players: &[Player],
        target: CoordinatesInWorld,
    ) -> Self {
        let items = players
            .iter()
            .map(|player| MenuItem {
                label: player.name().to_string(),
                player: player.clone(),
            })
            .collect();

        Self {
            actions,
            items,
            target,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn target(&self) -> CoordinatesInWorld {
        self.target
    }

    /// Run the entry at `index`. Returns `false` if there is none.
    pub fn activate(&self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                self.actions.move_player(&item.player, self.target);
                true
            }
            None => false,
        }
    }
}
