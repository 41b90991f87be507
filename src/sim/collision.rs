//! Contact resolution
//!
//! Turns contact events from the physics world into score changes, entity
//! destruction and the game-over transition. Contacts that refer to bodies
//! the session no longer tracks are ignored, so replayed or duplicate events
//! are harmless.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameSession};
use crate::consts::ENEMY_REWARD;
use crate::physics::{Contact, Physics};

/// What resolving a contact did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactOutcome {
    /// Projectile left through the floor
    ProjectileLost,
    /// Enemy destroyed, score increased by `reward`
    EnemyDestroyed { reward: u64 },
    /// Enemy reached the floor, run is over
    GameOver,
    /// Stale or duplicate event, nothing changed
    Ignored,
}

/// Apply one contact event to the session
pub fn resolve_contact<P: Physics>(
    session: &mut GameSession,
    physics: &mut P,
    contact: Contact,
) -> ContactOutcome {
    if session.phase == GamePhase::GameOver {
        log::trace!("Ignoring {:?} after game over", contact);
        return ContactOutcome::Ignored;
    }

    match contact {
        Contact::ProjectileFloor { projectile } => {
            if session.destroy_projectile(physics, projectile) {
                ContactOutcome::ProjectileLost
            } else {
                log::trace!("Ignoring floor contact for dead projectile {:?}", projectile);
                ContactOutcome::Ignored
            }
        }

        Contact::ProjectileEnemy { projectile, enemy } => {
            if !session.is_projectile(projectile) {
                log::trace!("Ignoring hit from dead projectile {:?}", projectile);
                return ContactOutcome::Ignored;
            }
            if session.destroy_enemy(physics, enemy) {
                session.score += ENEMY_REWARD;
                log::debug!("Enemy {:?} destroyed, score {}", enemy, session.score);
                ContactOutcome::EnemyDestroyed { reward: ENEMY_REWARD }
            } else {
                log::trace!("Ignoring hit on dead enemy {:?}", enemy);
                ContactOutcome::Ignored
            }
        }

        Contact::EnemyFloor { enemy } => {
            if !session.is_enemy(enemy) {
                log::trace!("Ignoring floor contact for dead enemy {:?}", enemy);
                return ContactOutcome::Ignored;
            }
            session.clear_bodies(physics);
            session.is_aiming = false;
            session.phase = GamePhase::GameOver;
            log::info!("Game over! Final score: {}", session.score);
            ContactOutcome::GameOver
        }
    }
}

/// Apply a batch of contacts in order
pub fn resolve_contacts<P: Physics>(
    session: &mut GameSession,
    physics: &mut P,
    contacts: impl IntoIterator<Item = Contact>,
) -> Vec<ContactOutcome> {
    contacts
        .into_iter()
        .map(|contact| resolve_contact(session, physics, contact))
        .collect()
}
