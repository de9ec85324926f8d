use geo::Coord;

/// A candidate point of interest, as read from the external datastore.
///
/// Records are read-only once fetched; the scorer produces annotated
/// [`ScoredPoi`] copies rather than mutating them in place.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfare_core::PointOfInterest;
///
/// let poi = PointOfInterest::new("p1", "Kek Lok Si Temple", Coord { x: 100.27, y: 5.40 })
///     .with_popularity(80.0)
///     .with_categories(["temple", "place_of_worship"]);
/// assert_eq!(poi.id, "p1");
/// assert_eq!(poi.categories.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Stable identifier, unique within a planning run.
    pub id: String,
    /// Display name, used for fuzzy matching against user requests.
    pub name: String,
    /// WGS84 position with `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Base popularity score; a value of 0 excludes the POI from scoring.
    pub popularity: f32,
    /// Free-form category tags.
    pub categories: Vec<String>,
    /// Aggregate visitor rating, when known.
    pub rating: Option<f32>,
    /// Review count, used as a crowd-validation signal.
    pub review_count: u32,
    /// Reference-recognition count, used as a landmark signal.
    pub sitelink_count: u32,
}

impl PointOfInterest {
    /// Construct a POI with no attributes beyond identity and position.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            popularity: 0.0,
            categories: Vec::new(),
            rating: None,
            review_count: 0,
            sitelink_count: 0,
        }
    }

    /// Set the base popularity score, consuming `self` for chaining.
    #[must_use]
    pub fn with_popularity(mut self, popularity: f32) -> Self {
        self.popularity = popularity;
        self
    }

    /// Set the category tags, consuming `self` for chaining.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the quality signals, consuming `self` for chaining.
    #[must_use]
    pub fn with_signals(mut self, rating: Option<f32>, review_count: u32, sitelink_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self.sitelink_count = sitelink_count;
        self
    }
}

/// A POI annotated by the priority scorer.
///
/// `priority_score` is raw and unbounded above; values are only comparable
/// within a single planning run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredPoi {
    /// The underlying record.
    pub poi: PointOfInterest,
    /// Contextual priority; higher is more desirable.
    pub priority_score: f32,
    /// Whether this POI matched an explicit user request (an "anchor").
    pub is_preferred: bool,
}

impl ScoredPoi {
    /// Annotate a POI with its priority score.
    pub const fn new(poi: PointOfInterest, priority_score: f32, is_preferred: bool) -> Self {
        Self {
            poi,
            priority_score,
            is_preferred,
        }
    }
}

/// One sequenced stop within a [`DayPlan`](crate::DayPlan).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedStop {
    /// The scored POI being visited.
    pub poi: ScoredPoi,
    /// 1-based position within the day.
    pub sequence_no: u32,
    /// Travel distance from the previous stop; 0 for the day's first stop.
    pub distance_from_previous_meters: f64,
}
