//! The player and the enemies they fight.
//!
//! Hit points are kept behind mutators so the "never negative" invariant
//! holds at every mutation site, not just the polite ones.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::{Item, ItemUse};
use crate::roster::Roster;

/// Starting hit points for a new player.
pub const PLAYER_START_HP: i32 = 25;
/// Starting attack power for a new player.
pub const PLAYER_START_ATTACK: i32 = 5;

/// Initial inventory capacity before the first growth.
const INVENTORY_CAPACITY: usize = 4;

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// The player's chosen name.
    pub name: String,
    hp: i32,
    attack: i32,
    /// Items the player carries, in pickup order.
    pub inventory: Roster<Item>,
}

impl Player {
    /// Create a fresh player with starting stats and an empty inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: PLAYER_START_HP,
            attack: PLAYER_START_ATTACK,
            inventory: Roster::with_capacity(INVENTORY_CAPACITY),
        }
    }

    /// Current hit points. Never negative.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Current attack power.
    pub fn attack(&self) -> i32 {
        self.attack
    }

    /// True while the player has hit points left.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract `amount` hit points, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    /// Restore `amount` hit points. There is no upper cap.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).max(0);
    }

    /// Permanently raise attack power by `bonus`.
    pub fn raise_attack(&mut self, bonus: i32) {
        self.attack += bonus;
    }

    /// Use the inventory item at `index`: apply its effect, then remove
    /// it iff it is consumable. An out-of-range index changes nothing.
    pub fn use_item(&mut self, index: usize) -> CoreResult<ItemUse> {
        let item = self
            .inventory
            .get(index)
            .ok_or(CoreError::not_found("item", index))?;
        let kind = item.kind;
        let consumed = item.consumable;

        let effect = kind.apply(self);
        if consumed {
            self.inventory.remove_at(index);
        }

        Ok(ItemUse { effect, consumed })
    }
}

/// A hostile occupant of a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    hp: i32,
    attack: i32,
}

impl Enemy {
    /// Create an enemy with the given stats. Negative hp is clamped to
    /// zero up front.
    pub fn new(name: impl Into<String>, hp: i32, attack: i32) -> Self {
        Self {
            name: name.into(),
            hp: hp.max(0),
            attack,
        }
    }

    /// Current hit points. Never negative.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Attack power.
    pub fn attack(&self) -> i32 {
        self.attack
    }

    /// True while the enemy has hit points left.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract `amount` hit points, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.hp = (self.hp - amount).max(0);
    }

    /// One-line summary for room listings.
    pub fn summary(&self) -> String {
        format!("{} (HP {}, ATK {})", self.name, self.hp, self.attack)
    }
}
