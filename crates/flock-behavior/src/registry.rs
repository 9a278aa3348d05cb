//! The capacity-bounded frozen-pair registry.
//!
//! Admission control for simultaneous pairwise freezes: the registry holds at
//! most `capacity` pairs and rejects admissions beyond that — rejection is
//! normal backpressure, not an error.  Membership is tracked in a side set so
//! the collision scan's "already paired?" test is O(1).

use flock_core::AgentId;
use rustc_hash::FxHashSet;

/// A timed mutual freeze between two agents after a detected collision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrozenPair {
    pub a: AgentId,
    pub b: AgentId,
    /// Clock value (ms) at which both members thaw.
    pub expires_at_ms: u64,
}

impl FrozenPair {
    /// The other member, or `None` if `agent` is not in this pair.
    #[inline]
    pub fn partner_of(&self, agent: AgentId) -> Option<AgentId> {
        if agent == self.a {
            Some(self.b)
        } else if agent == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Result of a pair admission attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdmitOutcome {
    Admitted,
    /// Capacity reached — the collision is simply not admitted this step.
    Rejected,
}

/// Fixed-capacity set of active [`FrozenPair`]s.
///
/// Invariants (upheld by this type, asserted in tests):
/// - an agent appears in at most one active pair;
/// - `len() <= capacity()` always.
///
/// Pair counts are small (default capacity 10), so the backing `Vec` with
/// linear removal beats any fancier structure.
pub struct PairRegistry {
    capacity: usize,
    pairs: Vec<FrozenPair>,
    members: FxHashSet<AgentId>,
}

impl PairRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pairs: Vec::with_capacity(capacity),
            members: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adjust the admission limit (config is mutable between steps).
    /// Shrinking below the current length strands no pairs — existing ones
    /// run to expiry; only new admissions are blocked.
    #[inline]
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.pairs.len() >= self.capacity
    }

    /// `true` if `agent` is a member of any active pair.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        self.members.contains(&agent)
    }

    /// Iterate active pairs in admission order.
    pub fn iter(&self) -> impl Iterator<Item = &FrozenPair> {
        self.pairs.iter()
    }

    /// Try to admit a new pair.
    ///
    /// Returns [`AdmitOutcome::Rejected`] at capacity; the caller stops
    /// admitting for the rest of its scan.  Admitting an agent that is
    /// already a member is a caller bug — checked in debug builds only, since
    /// the collision scan filters members before calling.
    pub fn admit(&mut self, a: AgentId, b: AgentId, expires_at_ms: u64) -> AdmitOutcome {
        if self.is_full() {
            return AdmitOutcome::Rejected;
        }
        debug_assert!(!self.contains(a) && !self.contains(b));
        self.pairs.push(FrozenPair { a, b, expires_at_ms });
        self.members.insert(a);
        self.members.insert(b);
        AdmitOutcome::Admitted
    }

    /// Remove and return every pair whose expiry has passed.
    pub fn drain_expired(&mut self, now_ms: u64) -> Vec<FrozenPair> {
        let mut expired = Vec::new();
        self.pairs.retain(|pair| {
            if now_ms > pair.expires_at_ms {
                expired.push(*pair);
                false
            } else {
                true
            }
        });
        for pair in &expired {
            self.members.remove(&pair.a);
            self.members.remove(&pair.b);
        }
        expired
    }

    /// Force-remove the pair containing `agent` (e.g. a seek override
    /// redirecting one member mid-freeze).  Returns the removed pair so the
    /// caller can release the partner.
    pub fn remove_containing(&mut self, agent: AgentId) -> Option<FrozenPair> {
        let idx = self.pairs.iter().position(|p| p.partner_of(agent).is_some())?;
        let pair = self.pairs.swap_remove(idx);
        self.members.remove(&pair.a);
        self.members.remove(&pair.b);
        Some(pair)
    }
}
