//! Text rendering for the shell.
//!
//! Everything here formats core values into display strings; nothing
//! mutates game state.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use dh_combat::{FightOutcome, FightReport, RoundEvent};
use dh_core::{Player, RoomView};

/// The command list shown by `help` and at startup.
pub fn help_text() -> String {
    [
        "Commands:",
        "  help",
        "  stats",
        "  inv",
        "  look",
        "  go <north|south|east|west>",
        "  take <item number>",
        "  use <item number>",
        "  fight <enemy number>",
        "  quit",
    ]
    .join("\n")
}

/// The room header: name, indexed enemies and items, available exits.
pub fn room_view(view: &RoomView) -> String {
    let mut out = format!("== {} ==\n", view.name.bold());

    if view.enemies.is_empty() {
        out.push_str("Enemies: none\n");
    } else {
        out.push_str("Enemies:\n");
        for (i, summary) in view.enemies.iter().enumerate() {
            out.push_str(&format!("  [{i}] {summary}\n"));
        }
    }

    if view.items.is_empty() {
        out.push_str("Items on ground: none\n");
    } else {
        out.push_str("Items on ground:\n");
        for (i, summary) in view.items.iter().enumerate() {
            out.push_str(&format!("  [{i}] {summary}\n"));
        }
    }

    if view.exits.is_empty() {
        out.push_str("Exits: none");
    } else {
        let names: Vec<&str> = view.exits.iter().map(|d| d.name()).collect();
        out.push_str(&format!("Exits: {}", names.join(" ")));
    }
    out
}

/// One-line player summary.
pub fn stats_line(player: &Player) -> String {
    format!(
        "Player: {} | HP: {} | ATK: {}",
        player.name.bold(),
        player.hp(),
        player.attack()
    )
}

/// The inventory as an indexed table, or a placeholder when empty.
pub fn inventory_listing(player: &Player) -> String {
    if player.inventory.is_empty() {
        return "Inventory is empty.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Item", "Description"]);
    for (i, item) in player.inventory.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            item.name.clone(),
            item.description.clone(),
        ]);
    }
    table.to_string()
}

/// Render a full fight transcript with its outcome.
pub fn fight_report(player: &Player, report: &FightReport) -> String {
    let enemy_name = match (&report.outcome, &report.enemy) {
        (FightOutcome::InvalidIndex, _) | (_, None) => {
            return "Invalid enemy index.".yellow().to_string();
        }
        (_, Some(name)) => name,
    };

    let mut out = format!("You engage {} in combat.\n", enemy_name.bold());
    for event in &report.rounds {
        match event {
            RoundEvent::PlayerStrike { damage, enemy_hp } => {
                out.push_str(&format!(
                    "You hit {enemy_name} for {damage} damage. Enemy HP: {enemy_hp}\n"
                ));
            }
            RoundEvent::EnemyStrike { damage, player_hp } => {
                out.push_str(&format!(
                    "{enemy_name} hits you for {damage} damage. Your HP: {player_hp}\n"
                ));
            }
        }
    }

    match report.outcome {
        FightOutcome::Victory {
            hp_reward,
            atk_reward,
        } => {
            out.push_str(&format!(
                "{}\nHere are your rewards!\n +HP: {hp_reward} | +ATK: {atk_reward}\n",
                "You defeated the enemy.".green()
            ));
            out.push_str(&format!(
                "Current HP: {} | ATK: {}",
                player.hp(),
                player.attack()
            ));
        }
        FightOutcome::Defeat => {
            out.push_str(&"You have been defeated.".red().to_string());
        }
        FightOutcome::InvalidIndex => unreachable!("handled above"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dh_core::{Direction, Item};

    fn plain_view() -> RoomView {
        RoomView {
            name: "Village".to_string(),
            enemies: vec![],
            items: vec!["Sword - Increases attack damage.".to_string()],
            exits: vec![Direction::North],
        }
    }

    #[test]
    fn room_view_lists_indices_and_exits() {
        colored::control::set_override(false);
        let rendered = room_view(&plain_view());
        assert!(rendered.contains("== Village =="));
        assert!(rendered.contains("Enemies: none"));
        assert!(rendered.contains("[0] Sword - Increases attack damage."));
        assert!(rendered.contains("Exits: north"));
    }

    #[test]
    fn empty_room_renders_placeholders() {
        colored::control::set_override(false);
        let view = RoomView {
            name: "Cave".to_string(),
            enemies: vec![],
            items: vec![],
            exits: vec![],
        };
        let rendered = room_view(&view);
        assert!(rendered.contains("Items on ground: none"));
        assert!(rendered.contains("Exits: none"));
    }

    #[test]
    fn stats_line_contents() {
        colored::control::set_override(false);
        let player = Player::new("Ash");
        assert_eq!(stats_line(&player), "Player: Ash | HP: 25 | ATK: 5");
    }

    #[test]
    fn inventory_listing_empty_and_filled() {
        let mut player = Player::new("Ash");
        assert_eq!(inventory_listing(&player), "Inventory is empty.");

        player.inventory.add(Item::healing_potion(6));
        let listing = inventory_listing(&player);
        assert!(listing.contains("Healing Potion"));
        assert!(listing.contains("Adds more HP."));
    }

    #[test]
    fn invalid_index_report() {
        colored::control::set_override(false);
        let player = Player::new("Ash");
        let report = FightReport {
            enemy: None,
            rounds: vec![],
            outcome: FightOutcome::InvalidIndex,
        };
        assert_eq!(fight_report(&player, &report), "Invalid enemy index.");
    }

    #[test]
    fn victory_report_mentions_rewards() {
        colored::control::set_override(false);
        let player = Player::new("Ash");
        let report = FightReport {
            enemy: Some("Rat".to_string()),
            rounds: vec![RoundEvent::PlayerStrike {
                damage: 5,
                enemy_hp: 0,
            }],
            outcome: FightOutcome::Victory {
                hp_reward: 3,
                atk_reward: 1,
            },
        };
        let rendered = fight_report(&player, &report);
        assert!(rendered.contains("You engage Rat in combat."));
        assert!(rendered.contains("You hit Rat for 5 damage. Enemy HP: 0"));
        assert!(rendered.contains("+HP: 3 | +ATK: 1"));
    }
}
