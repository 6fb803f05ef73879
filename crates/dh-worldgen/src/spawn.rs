//! Name pools and difficulty-scaled spawn formulas.

use rand::Rng;
use rand::rngs::StdRng;

use dh_core::{Enemy, Item};

/// Names the generator draws room names from, with replacement.
pub const ROOM_NAMES: [&str; 8] = [
    "Village",
    "Forest",
    "Old Castle",
    "Cave",
    "Old Lighthouse",
    "The Docks",
    "Abandoned Town",
    "Ruins",
];

/// Names the generator draws enemy names from, with replacement.
pub const ENEMY_NAMES: [&str; 12] = [
    "Rat",
    "Wolf",
    "Bandit",
    "Goblin",
    "Skeleton",
    "Troll",
    "Gool",
    "Dwarf",
    "Dark Knight",
    "Warlock",
    "Warewolf",
    "Witch",
];

/// Roll an enemy scaled to the room's difficulty tier.
///
/// hp = `8 + difficulty*6 + rand(0,6)`, attack = `2 + difficulty*2 +
/// rand(0,2)`.
pub fn random_enemy(difficulty: i32, rng: &mut StdRng) -> Enemy {
    let name = ENEMY_NAMES[rng.random_range(0..ENEMY_NAMES.len())];
    let hp = 8 + difficulty * 6 + rng.random_range(0..=6);
    let attack = 2 + difficulty * 2 + rng.random_range(0..=2);
    Enemy::new(name, hp, attack)
}

/// Roll a ground item scaled to the room's difficulty tier: 50/50 potion
/// vs weapon, heal = `4 + difficulty*3 + rand(0,4)`, bonus = `1 +
/// difficulty/2 + rand(0,2)`.
pub fn random_item(difficulty: i32, rng: &mut StdRng) -> Item {
    if rng.random_range(0..=1) == 0 {
        let heal = 4 + difficulty * 3 + rng.random_range(0..=4);
        Item::healing_potion(heal)
    } else {
        let bonus = 1 + difficulty / 2 + rng.random_range(0..=2);
        Item::weapon(bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dh_core::ItemKind;
    use rand::SeedableRng;

    #[test]
    fn enemy_stats_stay_in_formula_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in 0..8 {
            for _ in 0..50 {
                let enemy = random_enemy(difficulty, &mut rng);
                let hp_base = 8 + difficulty * 6;
                let atk_base = 2 + difficulty * 2;
                assert!((hp_base..=hp_base + 6).contains(&enemy.hp()));
                assert!((atk_base..=atk_base + 2).contains(&enemy.attack()));
                assert!(ENEMY_NAMES.contains(&enemy.name.as_str()));
            }
        }
    }

    #[test]
    fn item_stats_stay_in_formula_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in 0..8 {
            for _ in 0..50 {
                let item = random_item(difficulty, &mut rng);
                match item.kind {
                    ItemKind::HealingPotion { heal } => {
                        let base = 4 + difficulty * 3;
                        assert!((base..=base + 4).contains(&heal));
                        assert!(item.consumable);
                    }
                    ItemKind::Weapon { bonus } => {
                        let base = 1 + difficulty / 2;
                        assert!((base..=base + 2).contains(&bonus));
                        assert!(!item.consumable);
                    }
                }
            }
        }
    }

    #[test]
    fn both_item_kinds_appear() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut potions = 0;
        let mut weapons = 0;
        for _ in 0..100 {
            match random_item(1, &mut rng).kind {
                ItemKind::HealingPotion { .. } => potions += 1,
                ItemKind::Weapon { .. } => weapons += 1,
            }
        }
        assert!(potions > 0);
        assert!(weapons > 0);
    }
}
