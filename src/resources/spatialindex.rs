//! Quad-tree spatial index over entity bounding boxes.
//!
//! The [`SpatialIndex`] resource maps world-space rectangles to entity ids
//! and answers region queries for collision resolution. A live table keeps
//! one authoritative rectangle per entity, so drift between an entity's
//! tracked bounds and the index surfaces as an [`IndexError`] instead of a
//! silent miss.
//!
//! Contract
//! - Every live entity appears in the index at exactly its current bounds.
//! - Relocation is remove-then-reinsert; there is no in-place move.
//! - [`SpatialIndex::query`] returns all entries intersecting a region, in
//!   unspecified order.
//!
//! The tree itself is a classic quad-tree: a node stores entries inline
//! until it exceeds [`NODE_CAPACITY`], then splits into four quadrants.
//! Entries straddling a quadrant seam stay at the interior node. The tree
//! shape is an implementation detail; only intersection correctness is part
//! of the contract.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::components::boxcollider::Rect;

/// Entries a node holds before subdividing.
const NODE_CAPACITY: usize = 8;
/// Subdivision limit; beyond this depth nodes grow without splitting.
const MAX_DEPTH: u8 = 8;

/// Consistency errors: drift between tracked entity bounds and the index.
#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    /// `insert` for an entity that already has a live entry.
    #[error("entity {0:?} already has a live index entry")]
    AlreadyIndexed(Entity),
    /// `remove` for an entity with no live entry.
    #[error("entity {0:?} has no live index entry")]
    NotIndexed(Entity),
    /// `remove` with bounds that do not match the live entry. The entry is
    /// left untouched.
    #[error("bounds {given:?} for entity {entity:?} do not match the live entry {live:?}")]
    StaleBounds {
        entity: Entity,
        given: Rect,
        live: Rect,
    },
}

#[derive(Debug, Clone, Copy)]
struct IndexEntry {
    entity: Entity,
    rect: Rect,
}

#[derive(Debug)]
struct QuadNode {
    bounds: Rect,
    entries: SmallVec<[IndexEntry; NODE_CAPACITY]>,
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            entries: SmallVec::new(),
            children: None,
        }
    }

    /// Child fully containing `rect`, if any. Straddling entries stay here.
    fn route(&mut self, rect: &Rect) -> Option<&mut QuadNode> {
        self.children
            .as_mut()
            .and_then(|children| children.iter_mut().find(|c| c.bounds.contains(rect)))
    }

    fn insert(&mut self, entry: IndexEntry, depth: u8) {
        if self.children.is_some() {
            if let Some(child) = self.route(&entry.rect) {
                child.insert(entry, depth + 1);
            } else {
                self.entries.push(entry);
            }
            return;
        }

        self.entries.push(entry);
        if self.entries.len() > NODE_CAPACITY && depth < MAX_DEPTH {
            self.split(depth);
        }
    }

    fn split(&mut self, depth: u8) {
        let b = self.bounds;
        let c = b.center();
        self.children = Some(Box::new([
            QuadNode::new(Rect::new(b.left(), b.top(), c.x, c.y)),
            QuadNode::new(Rect::new(c.x, b.top(), b.right(), c.y)),
            QuadNode::new(Rect::new(b.left(), c.y, c.x, b.bottom())),
            QuadNode::new(Rect::new(c.x, c.y, b.right(), b.bottom())),
        ]));

        let entries = std::mem::take(&mut self.entries);
        for entry in entries {
            if let Some(child) = self.route(&entry.rect) {
                child.insert(entry, depth + 1);
            } else {
                self.entries.push(entry);
            }
        }
    }

    /// Removal mirrors insertion routing, so an entry is always found where
    /// it was stored.
    fn remove(&mut self, entity: Entity, rect: &Rect) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.entity == entity) {
            self.entries.remove(pos);
            return true;
        }
        match self.route(rect) {
            Some(child) => child.remove(entity, rect),
            None => false,
        }
    }

    fn query(&self, region: &Rect, out: &mut Vec<Entity>) {
        for entry in &self.entries {
            if entry.rect.intersects(region) {
                out.push(entry.entity);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                if child.bounds.intersects(region) {
                    child.query(region, out);
                }
            }
        }
    }
}

/// Rectangle-keyed index of all live entities, covering a fixed world
/// rectangle.
#[derive(Resource, Debug)]
pub struct SpatialIndex {
    root: QuadNode,
    live: FxHashMap<Entity, Rect>,
}

impl SpatialIndex {
    /// Create an empty index covering `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            root: QuadNode::new(bounds),
            live: FxHashMap::default(),
        }
    }

    /// The world rectangle this index covers.
    pub fn bounds(&self) -> Rect {
        self.root.bounds
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Whether the entity has a live entry.
    pub fn contains(&self, entity: Entity) -> bool {
        self.live.contains_key(&entity)
    }

    /// The bounds the entity is currently indexed at, if any.
    pub fn bounds_of(&self, entity: Entity) -> Option<Rect> {
        self.live.get(&entity).copied()
    }

    /// Add an entity at the given bounds.
    pub fn insert(&mut self, entity: Entity, rect: Rect) -> Result<(), IndexError> {
        if self.live.contains_key(&entity) {
            return Err(IndexError::AlreadyIndexed(entity));
        }
        self.live.insert(entity, rect);
        self.root.insert(IndexEntry { entity, rect }, 0);
        Ok(())
    }

    /// Remove an entity; `rect` must match the bounds it was inserted at.
    pub fn remove(&mut self, entity: Entity, rect: Rect) -> Result<(), IndexError> {
        match self.live.get(&entity) {
            None => Err(IndexError::NotIndexed(entity)),
            Some(live) if *live != rect => Err(IndexError::StaleBounds {
                entity,
                given: rect,
                live: *live,
            }),
            Some(_) => {
                self.live.remove(&entity);
                let removed = self.root.remove(entity, &rect);
                debug_assert!(removed, "live table and quad-tree disagree on {entity:?}");
                Ok(())
            }
        }
    }

    /// All entities whose bounds intersect `region`, in unspecified order.
    pub fn query(&self, region: &Rect) -> Vec<Entity> {
        let mut out = Vec::new();
        self.root.query(region, &mut out);
        out
    }
}
