#![forbid(unsafe_code)]

//! Trailing-edge debounced state cells.
//!
//! # Design
//!
//! [`Debounced<T>`] looks like a plain value slot with `get`/`set`, except
//! writes do not apply immediately: each `set` stores the value as the
//! cell's single pending update, due one [`DEBOUNCE_WINDOW`] after the
//! write. A later `set` inside the window discards the earlier pending
//! value and restarts the window, so a burst of writes collapses to its
//! last one. Commits happen on [`poll`](Debounced::poll), the host loop's
//! timer turn: the first poll at or past the due instant moves the pending
//! value into the committed slot.
//!
//! The `Option<PendingUpdate>` field is the whole state machine: `None` is
//! idle, `Some` is pending. There are no threads and no timers beyond the
//! host's own polling; a host that stops polling simply extends the window,
//! exactly like a busy event loop deferring its timer callbacks.
//!
//! # Invariants
//!
//! 1. At most one pending update exists per cell at any time.
//! 2. `get()` observes committed values only; a pending value becomes
//!    visible only through a commit on `poll`.
//! 3. Of the writes in one quiet period, exactly the temporally last one
//!    commits; superseded values are never observable.
//! 4. `poll` commits at or after the due instant, never before.
//! 5. Dropping the cell releases a pending update without committing it.
//!
//! # Failure Modes
//!
//! - None in the API itself: every operation is total and does no I/O.
//! - **Host never polls**: the pending update stays scheduled indefinitely
//!   and is released on drop. Nothing commits without a poll turn.
//!
//! # Example
//!
//! ```
//! use zentui_core::LabClock;
//! use zentui_reactive::{DEBOUNCE_WINDOW, Debounced};
//!
//! let clock = LabClock::new();
//! let mut query = Debounced::lab(String::new(), &clock);
//!
//! query.set("z".to_string());
//! query.set("ze".to_string());
//! query.set("zen".to_string());
//! assert_eq!(query.get(), ""); // nothing committed yet
//!
//! clock.advance(DEBOUNCE_WINDOW);
//! assert!(query.poll());
//! assert_eq!(query.get(), "zen"); // only the last write landed
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use web_time::{Duration, Instant};
use zentui_core::{Clock, LabClock};

/// Window between the last write and its commit.
///
/// Fixed for every cell; 250 ms sits in the conventional band for
/// coalescing keyboard-rate input bursts.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

// ─── Cell ID generation ──────────────────────────────────────────────────────

static NEXT_CELL_ID: AtomicU64 = AtomicU64::new(1);

fn next_cell_id() -> u64 {
    NEXT_CELL_ID.fetch_add(1, Ordering::Relaxed)
}

// ─── Metrics counters ────────────────────────────────────────────────────────

/// Total pending updates committed across all cells.
static DEBOUNCE_COMMITS_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Total pending updates discarded across all cells (superseded or dropped).
static DEBOUNCE_DISCARDS_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Read the total commit count (for diagnostics/telemetry).
#[must_use]
pub fn debounce_commits_total() -> u64 {
    DEBOUNCE_COMMITS_TOTAL.load(Ordering::Relaxed)
}

/// Read the total discard count (for diagnostics/telemetry).
#[must_use]
pub fn debounce_discards_total() -> u64 {
    DEBOUNCE_DISCARDS_TOTAL.load(Ordering::Relaxed)
}

// ─── Debounced ───────────────────────────────────────────────────────────────

/// A write scheduled but not yet committed.
struct PendingUpdate<T> {
    value: T,
    due: Instant,
}

/// A state cell whose writes commit one debounce window after the last
/// `set` of a burst.
///
/// The payload type carries no trait bounds; anything storable is
/// debounceable.
///
/// # Invariants
///
/// 1. `get()` returns the committed value; never a pending one.
/// 2. `set` replaces any pending update and restarts the window.
/// 3. `poll` is the only operation that commits.
pub struct Debounced<T> {
    id: u64,
    value: T,
    pending: Option<PendingUpdate<T>>,
    clock: Clock,
    commits: u64,
}

impl<T> Debounced<T> {
    /// Create an idle cell holding `initial`, on real time.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self::with_clock(initial, Clock::real())
    }

    /// Create an idle cell holding `initial`, on lab time.
    ///
    /// Timing-sensitive tests advance `clock` manually instead of sleeping.
    #[must_use]
    pub fn lab(initial: T, clock: &LabClock) -> Self {
        Self::with_clock(initial, Clock::lab(clock))
    }

    fn with_clock(initial: T, clock: Clock) -> Self {
        Self {
            id: next_cell_id(),
            value: initial,
            pending: None,
            clock,
            commits: 0,
        }
    }

    /// The committed value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Schedule `value` to commit one [`DEBOUNCE_WINDOW`] from now.
    ///
    /// A pending update from an earlier `set` is discarded, even when its
    /// own window has already expired: until a poll turn commits it, a
    /// newer write always wins.
    pub fn set(&mut self, value: T) {
        let due = self.clock.now() + DEBOUNCE_WINDOW;
        if self.pending.is_some() {
            DEBOUNCE_DISCARDS_TOTAL.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(message = "debounce.discard", cell = self.id, reason = "superseded");
        }
        self.pending = Some(PendingUpdate { value, due });
        tracing::trace!(message = "debounce.schedule", cell = self.id);
    }

    /// Commit the pending update if its window has elapsed.
    ///
    /// The host loop calls this once per turn. Returns `true` when a commit
    /// happened, so hosts know `get` changed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        let Some(update) = self.pending.take_if(|p| now >= p.due) else {
            return false;
        };
        self.value = update.value;
        self.commits += 1;
        DEBOUNCE_COMMITS_TOTAL.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(message = "debounce.commit", cell = self.id, commits = self.commits);
        true
    }

    /// Whether an update is waiting for its window.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the pending commit (saturates to zero once due).
    ///
    /// Returns `None` when the cell is idle.
    #[must_use]
    pub fn due_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .as_ref()
            .map(|p| p.due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }

    /// Number of commits this cell has performed.
    #[must_use]
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Cell id, as carried on this cell's trace events.
    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        if self.pending.take().is_some() {
            DEBOUNCE_DISCARDS_TOTAL.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(message = "debounce.discard", cell = self.id, reason = "dropped");
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Debounced<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("value", &self.value)
            .field("pending", &self.pending.is_some())
            .field("commits", &self.commits)
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
