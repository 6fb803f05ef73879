//! Usable items and their effects.
//!
//! Items are a closed tagged variant rather than a trait object: the set
//! of kinds is small and the shell only ever branches on the returned
//! effect and the `consumable` flag. Whether an item survives being used
//! is decided once, at construction, and stored on the item itself.

use serde::{Deserialize, Serialize};

use crate::actor::Player;

/// The concrete kind of an item, carrying its variant-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores hit points when used.
    HealingPotion {
        /// Amount of hp restored per use.
        heal: i32,
    },
    /// Permanently raises attack power when used.
    ///
    /// Using a weapon again stacks its bonus again. That is the literal
    /// behavior of the game, not an oversight to guard against.
    Weapon {
        /// Attack power added per use.
        bonus: i32,
    },
}

impl ItemKind {
    /// Apply this item's effect to the player and report what happened.
    pub fn apply(self, player: &mut Player) -> ItemEffect {
        match self {
            Self::HealingPotion { heal } => {
                player.heal(heal);
                ItemEffect::Healed {
                    amount: heal,
                    hp: player.hp(),
                }
            }
            Self::Weapon { bonus } => {
                player.raise_attack(bonus);
                ItemEffect::AttackRaised {
                    bonus,
                    attack: player.attack(),
                }
            }
        }
    }
}

/// The observable result of applying an item to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Hit points were restored.
    Healed {
        /// How much was healed.
        amount: i32,
        /// The player's hp after healing.
        hp: i32,
    },
    /// Attack power was raised.
    AttackRaised {
        /// The bonus that was added.
        bonus: i32,
        /// The player's attack power after the raise.
        attack: i32,
    },
}

impl std::fmt::Display for ItemEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healed { amount, hp } => {
                write!(f, "You gained {amount} HP. Current HP: {hp}")
            }
            Self::AttackRaised { bonus, attack } => {
                write!(f, "Attack increased by {bonus}. New ATK: {attack}")
            }
        }
    }
}

/// The result of using an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUse {
    /// What the item did.
    pub effect: ItemEffect,
    /// True if the item was consumed and removed from the inventory.
    pub consumed: bool,
}

/// An item that can sit in a room or in the player's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// One-line flavor description.
    pub description: String,
    /// Variant tag with its effect data.
    pub kind: ItemKind,
    /// True if the item is discarded after a successful use.
    pub consumable: bool,
}

impl Item {
    /// A healing potion restoring `heal` hp. Consumable.
    pub fn healing_potion(heal: i32) -> Self {
        Self {
            name: "Healing Potion".to_string(),
            description: "Adds more HP.".to_string(),
            kind: ItemKind::HealingPotion { heal },
            consumable: true,
        }
    }

    /// A sword adding `bonus` attack power. Stays in the inventory after
    /// use.
    pub fn weapon(bonus: i32) -> Self {
        Self {
            name: "Sword".to_string(),
            description: "Increases attack damage.".to_string(),
            kind: ItemKind::Weapon { bonus },
            consumable: false,
        }
    }

    /// One-line summary for room and inventory listings.
    pub fn summary(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potion_is_consumable_weapon_is_not() {
        assert!(Item::healing_potion(6).consumable);
        assert!(!Item::weapon(4).consumable);
    }

    #[test]
    fn potion_heals() {
        let mut player = Player::new("Tester");
        player.take_damage(10);
        let hp_before = player.hp();

        let effect = ItemKind::HealingPotion { heal: 6 }.apply(&mut player);

        assert_eq!(player.hp(), hp_before + 6);
        assert_eq!(
            effect,
            ItemEffect::Healed {
                amount: 6,
                hp: hp_before + 6
            }
        );
    }

    #[test]
    fn weapon_raises_attack() {
        let mut player = Player::new("Tester");
        let attack_before = player.attack();

        let effect = ItemKind::Weapon { bonus: 4 }.apply(&mut player);

        assert_eq!(player.attack(), attack_before + 4);
        assert_eq!(
            effect,
            ItemEffect::AttackRaised {
                bonus: 4,
                attack: attack_before + 4
            }
        );
    }

    #[test]
    fn weapon_reuse_stacks() {
        let mut player = Player::new("Tester");
        let base = player.attack();
        let kind = ItemKind::Weapon { bonus: 3 };

        kind.apply(&mut player);
        kind.apply(&mut player);

        assert_eq!(player.attack(), base + 6);
    }

    #[test]
    fn effect_display() {
        let healed = ItemEffect::Healed { amount: 6, hp: 26 };
        assert_eq!(healed.to_string(), "You gained 6 HP. Current HP: 26");

        let raised = ItemEffect::AttackRaised { bonus: 4, attack: 9 };
        assert_eq!(raised.to_string(), "Attack increased by 4. New ATK: 9");
    }
}
