//! The fight resolver.
//!
//! A fight is a sequence of exchange rounds between the player and one
//! enemy in the current room. The player always strikes first, and a
//! kill ends the round before the counter-strike — that ordering is what
//! makes fighting at low hp a gamble worth taking.

use serde::{Deserialize, Serialize};

use dh_core::{Player, Room};

use crate::variance::Variance;

/// Attack bonus granted for every victory.
pub const VICTORY_ATK_REWARD: i32 = 1;

/// A single strike in the fight transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The player hit the enemy.
    PlayerStrike {
        /// Damage dealt after variance, floored at 0.
        damage: i32,
        /// The enemy's hp after the hit.
        enemy_hp: i32,
    },
    /// The enemy hit the player.
    EnemyStrike {
        /// Damage dealt after variance, floored at 0.
        damage: i32,
        /// The player's hp after the hit.
        player_hp: i32,
    },
}

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    /// The enemy fell; it was removed from the room and rewards applied.
    Victory {
        /// Hp granted: `2 + enemy.attack / 2` (floor division).
        hp_reward: i32,
        /// Attack power granted.
        atk_reward: i32,
    },
    /// The player's hp hit zero; the enemy stays in the room.
    Defeat,
    /// No enemy at the given roster index; nothing happened.
    InvalidIndex,
}

/// The full record of one fight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightReport {
    /// Name of the engaged enemy, if the index was valid.
    pub enemy: Option<String>,
    /// Every strike, in order.
    pub rounds: Vec<RoundEvent>,
    /// How it ended.
    pub outcome: FightOutcome,
}

/// Resolve a fight between the player and the enemy at `enemy_index` in
/// `room`.
///
/// Each exchange round: the player strikes for `attack + variance`
/// (floored at 0); if the enemy survives it strikes back with the same
/// formula. Hp clamps at 0 on both sides. On victory the enemy is
/// removed from the room and the player gains `2 + enemy.attack / 2` hp
/// and [`VICTORY_ATK_REWARD`] attack. On defeat the enemy is left as it
/// stands. An invalid index mutates nothing.
pub fn fight(
    player: &mut Player,
    room: &mut Room,
    enemy_index: usize,
    variance: &mut dyn Variance,
) -> FightReport {
    let Some(enemy) = room.enemies.get_mut(enemy_index) else {
        return FightReport {
            enemy: None,
            rounds: Vec::new(),
            outcome: FightOutcome::InvalidIndex,
        };
    };
    let enemy_name = enemy.name.clone();
    let enemy_attack = enemy.attack();

    let mut rounds = Vec::new();
    while player.is_alive() && enemy.is_alive() {
        let damage = (player.attack() + variance.roll()).max(0);
        enemy.take_damage(damage);
        rounds.push(RoundEvent::PlayerStrike {
            damage,
            enemy_hp: enemy.hp(),
        });
        if !enemy.is_alive() {
            break;
        }

        let damage = (enemy_attack + variance.roll()).max(0);
        player.take_damage(damage);
        rounds.push(RoundEvent::EnemyStrike {
            damage,
            player_hp: player.hp(),
        });
    }

    if !player.is_alive() {
        return FightReport {
            enemy: Some(enemy_name),
            rounds,
            outcome: FightOutcome::Defeat,
        };
    }

    // Victory: the fallen enemy leaves the roster and pays out.
    room.enemies.remove_at(enemy_index);
    let hp_reward = 2 + enemy_attack / 2;
    player.heal(hp_reward);
    player.raise_attack(VICTORY_ATK_REWARD);

    FightReport {
        enemy: Some(enemy_name),
        rounds,
        outcome: FightOutcome::Victory {
            hp_reward,
            atk_reward: VICTORY_ATK_REWARD,
        },
    }
}
