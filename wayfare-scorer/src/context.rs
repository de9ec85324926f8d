//! User context consumed by the priority scorer.

use std::collections::HashSet;

use thiserror::Error;

/// Optional behavioural signals from a user's past sessions.
///
/// Each set holds POI ids. Viewed and bookmarked POIs receive additive
/// boosts; POIs from previously saved trips receive a multiplier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BehaviorSignals {
    /// POIs the user has previously viewed.
    pub viewed: HashSet<String>,
    /// POIs the user has bookmarked.
    pub collected: HashSet<String>,
    /// POIs included in a previously saved trip.
    pub trips: HashSet<String>,
}

impl BehaviorSignals {
    /// Construct an empty signal bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Errors returned by [`ScoreContext::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreContextError {
    /// The traveler count was zero.
    #[error("traveler count must be at least 1")]
    NoTravelers,
    /// The trip duration was zero days.
    #[error("trip duration must be at least 1 day")]
    NoTripDays,
}

/// The per-request context that shapes priority scores.
///
/// # Examples
/// ```
/// use wayfare_scorer::ScoreContext;
///
/// # fn main() -> Result<(), wayfare_scorer::ScoreContextError> {
/// let context = ScoreContext::new(vec!["Nature".into()], 2, 5)?
///     .with_preferred_names(vec!["Cameron Highlands".into()]);
/// assert_eq!(context.trip_days, 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreContext {
    /// Requested interest categories, e.g. `"Art"` or `"Nature"`.
    pub interests: Vec<String>,
    /// Group size; groups above two trigger the safety penalty for
    /// unproven venues.
    pub travelers: u32,
    /// Trip duration in days; short trips boost recognised landmarks.
    pub trip_days: u32,
    /// Free-text names of POIs the user explicitly asked for.
    pub preferred_names: Vec<String>,
    /// Optional behavioural signals.
    pub behavior: Option<BehaviorSignals>,
}

impl ScoreContext {
    /// Validate and construct a scoring context.
    ///
    /// # Errors
    /// Returns [`ScoreContextError`] when the traveler count or trip
    /// duration is zero.
    pub fn new(
        interests: Vec<String>,
        travelers: u32,
        trip_days: u32,
    ) -> Result<Self, ScoreContextError> {
        if travelers == 0 {
            return Err(ScoreContextError::NoTravelers);
        }
        if trip_days == 0 {
            return Err(ScoreContextError::NoTripDays);
        }
        Ok(Self {
            interests,
            travelers,
            trip_days,
            preferred_names: Vec::new(),
            behavior: None,
        })
    }

    /// Attach explicitly requested POI names, consuming `self` for chaining.
    #[must_use]
    pub fn with_preferred_names(mut self, names: Vec<String>) -> Self {
        self.preferred_names = names;
        self
    }

    /// Attach behavioural signals, consuming `self` for chaining.
    #[must_use]
    pub fn with_behavior(mut self, behavior: BehaviorSignals) -> Self {
        self.behavior = Some(behavior);
        self
    }
}
