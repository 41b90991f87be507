//! Minimal arcade physics world
//!
//! Axis-aligned play area, circular bodies, a horizontal floor band. Good
//! enough to run the game headless and to exercise the simulation in tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{BodyId, BodyKind, Contact, Physics};
use crate::Tuning;

/// Result of an overlap check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the shapes overlap
    pub hit: bool,
    /// Surface normal pointing from the obstacle toward the mover
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between a moving circle and an obstacle circle
pub fn circle_overlap(pos: Vec2, radius: f32, other_pos: Vec2, other_radius: f32) -> CollisionResult {
    let delta = pos - other_pos;
    let dist = delta.length();
    let reach = radius + other_radius;
    if dist >= reach {
        return CollisionResult::miss();
    }
    // Concentric circles have no meaningful normal, push straight up
    let normal = if dist > f32::EPSILON { delta / dist } else { Vec2::NEG_Y };
    CollisionResult {
        hit: true,
        normal,
        penetration: reach - dist,
    }
}

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Geometry of the arcade world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Center line of the floor band
    pub floor_y: f32,
    pub floor_half_thickness: f32,
    pub projectile_radius: f32,
    pub enemy_radius: f32,
    /// Speed kept by a projectile bouncing off an enemy (1.0 = elastic)
    pub enemy_restitution: f32,
}

impl WorldConfig {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            width: tuning.canvas_width,
            height: tuning.canvas_height,
            floor_y: tuning.floor_y,
            floor_half_thickness: 4.0,
            projectile_radius: 8.0,
            enemy_radius: 16.0,
            enemy_restitution: 1.0,
        }
    }

    fn radius_of(&self, kind: BodyKind) -> f32 {
        match kind {
            BodyKind::Projectile => self.projectile_radius,
            BodyKind::Enemy => self.enemy_radius,
            BodyKind::Floor | BodyKind::Launcher => 0.0,
        }
    }

    /// Whether a circle touches the floor band
    fn touches_floor(&self, pos: Vec2, radius: f32) -> bool {
        pos.y + radius >= self.floor_y - self.floor_half_thickness
            && pos.y - radius <= self.floor_y + self.floor_half_thickness
    }
}

/// A body in the arcade world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Deterministic kinematic world (bodies kept sorted by id)
#[derive(Debug, Clone)]
pub struct ArcadeWorld {
    config: WorldConfig,
    bodies: Vec<Body>,
    next_id: u32,
}

impl ArcadeWorld {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(WorldConfig::from_tuning(tuning))
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Count of live bodies of one kind
    pub fn count(&self, kind: BodyKind) -> usize {
        self.bodies.iter().filter(|b| b.kind == kind).count()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.find(id).is_some()
    }

    /// Teleport a body (scripted scenarios and tests)
    pub fn set_position(&mut self, id: BodyId, pos: Vec2) -> bool {
        match self.find_mut(id) {
            Some(body) => {
                body.pos = pos;
                true
            }
            None => false,
        }
    }

    fn find(&self, id: BodyId) -> Option<&Body> {
        let i = self.bodies.binary_search_by_key(&id, |b| b.id).ok()?;
        Some(&self.bodies[i])
    }

    fn find_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        let i = self.bodies.binary_search_by_key(&id, |b| b.id).ok()?;
        Some(&mut self.bodies[i])
    }

    /// Advance the world by `dt` seconds and report contacts.
    ///
    /// Contacts are reported in a fixed order: projectile/enemy hits first,
    /// then projectile/floor, then enemy/floor. A contact is reported on
    /// every step for as long as the overlap persists; consumers decide what
    /// to destroy. Enemies block each other silently.
    pub fn step(&mut self, dt: f32) -> Vec<Contact> {
        let cfg = self.config.clone();
        let floor_live = self.bodies.iter().any(|b| b.kind == BodyKind::Floor);

        for body in self.bodies.iter_mut().filter(|b| !b.kind.is_static()) {
            body.pos += body.vel * dt;
            match body.kind {
                BodyKind::Projectile => bounce_off_bounds(body, &cfg),
                BodyKind::Enemy => clamp_to_bounds(body, &cfg),
                _ => {}
            }
        }

        separate_enemies(&mut self.bodies, &cfg);

        let mut contacts = Vec::new();

        let enemies: Vec<(BodyId, Vec2, f32)> = self
            .bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Enemy)
            .map(|b| (b.id, b.pos, b.radius))
            .collect();

        for body in self.bodies.iter_mut().filter(|b| b.kind == BodyKind::Projectile) {
            for &(enemy_id, enemy_pos, enemy_radius) in &enemies {
                let hit = circle_overlap(body.pos, body.radius, enemy_pos, enemy_radius);
                if !hit.hit {
                    continue;
                }
                // Only bounce when approaching, otherwise a lingering overlap
                // would flip the velocity back and forth
                if body.vel.dot(hit.normal) < 0.0 {
                    body.vel = reflect_velocity(body.vel, hit.normal) * cfg.enemy_restitution;
                }
                body.pos += hit.normal * hit.penetration;
                contacts.push(Contact::ProjectileEnemy {
                    projectile: body.id,
                    enemy: enemy_id,
                });
            }
        }

        if floor_live {
            for body in &self.bodies {
                if body.kind == BodyKind::Projectile && cfg.touches_floor(body.pos, body.radius) {
                    contacts.push(Contact::ProjectileFloor { projectile: body.id });
                }
            }
            for body in &self.bodies {
                if body.kind == BodyKind::Enemy && cfg.touches_floor(body.pos, body.radius) {
                    contacts.push(Contact::EnemyFloor { enemy: body.id });
                }
            }
        }

        contacts
    }
}

/// Elastic bounce off the four world edges
fn bounce_off_bounds(body: &mut Body, cfg: &WorldConfig) {
    let r = body.radius;
    if body.pos.x - r < 0.0 {
        body.pos.x = r;
        body.vel.x = body.vel.x.abs();
    } else if body.pos.x + r > cfg.width {
        body.pos.x = cfg.width - r;
        body.vel.x = -body.vel.x.abs();
    }
    if body.pos.y - r < 0.0 {
        body.pos.y = r;
        body.vel.y = body.vel.y.abs();
    } else if body.pos.y + r > cfg.height {
        body.pos.y = cfg.height - r;
        body.vel.y = -body.vel.y.abs();
    }
}

/// Push overlapping enemies apart.
///
/// The upper enemy of a touching pair backs off along the contact normal and
/// can move down no faster than the one below it, so a fast enemy queues
/// behind a slow one in the same lane.
fn separate_enemies(bodies: &mut [Body], cfg: &WorldConfig) {
    let enemies: Vec<usize> = bodies
        .iter()
        .enumerate()
        .filter(|(_, b)| b.kind == BodyKind::Enemy)
        .map(|(i, _)| i)
        .collect();

    for (n, &a) in enemies.iter().enumerate() {
        for &b in &enemies[n + 1..] {
            let (upper, lower) = if bodies[a].pos.y <= bodies[b].pos.y { (a, b) } else { (b, a) };
            let (lower_pos, lower_radius, lower_vel) = (bodies[lower].pos, bodies[lower].radius, bodies[lower].vel);
            let body = &mut bodies[upper];
            let hit = circle_overlap(body.pos, body.radius, lower_pos, lower_radius);
            if !hit.hit {
                continue;
            }
            body.pos += hit.normal * hit.penetration;
            body.vel.y = body.vel.y.min(lower_vel.y);
            clamp_to_bounds(body, cfg);
        }
    }
}

/// Enemies stop at the world edges instead of bouncing
fn clamp_to_bounds(body: &mut Body, cfg: &WorldConfig) {
    let r = body.radius;
    body.pos.x = body.pos.x.clamp(r, (cfg.width - r).max(r));
    if body.pos.y + r > cfg.height {
        body.pos.y = cfg.height - r;
        body.vel.y = 0.0;
    }
}

impl Physics for ArcadeWorld {
    fn spawn(&mut self, kind: BodyKind, pos: Vec2, vel: Vec2) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        let vel = if kind.is_static() { Vec2::ZERO } else { vel };
        self.bodies.push(Body {
            id,
            kind,
            pos,
            vel,
            radius: self.config.radius_of(kind),
        });
        id
    }

    fn despawn(&mut self, id: BodyId) -> bool {
        match self.bodies.binary_search_by_key(&id, |b| b.id) {
            Ok(i) => {
                self.bodies.remove(i);
                true
            }
            Err(_) => false,
        }
    }

    fn position(&self, id: BodyId) -> Option<Vec2> {
        self.find(id).map(|b| b.pos)
    }

    fn velocity(&self, id: BodyId) -> Option<Vec2> {
        self.find(id).map(|b| b.vel)
    }

    fn set_velocity(&mut self, id: BodyId, vel: Vec2) -> bool {
        match self.find_mut(id) {
            Some(body) if !body.kind.is_static() => {
                body.vel = vel;
                true
            }
            _ => false,
        }
    }
}
