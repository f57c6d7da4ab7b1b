use crate::utils::TimeRange;

/// Where a stage pulls its artists from before the global fallback kicks in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageSource {
    /// The day's primary ranked list.
    Primary,
    /// The recently-played-derived list, when it has enough unused members.
    Secondary,
    /// The mellow-genre subset of the primary list, when large enough.
    Chill,
}

#[derive(Debug, Clone)]
pub struct StagePlan {
    pub name: String,
    pub color: String,
    pub source: StageSource,
}

impl StagePlan {
    fn new(name: &str, color: &str, source: StageSource) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            source,
        }
    }
}

/// One day of the festival, described as data rather than code: which
/// ranked list feeds it and what its stages look like. The first stage of
/// every plan is the Main Stage and opens with the day's headliner.
#[derive(Debug, Clone)]
pub struct DayPlan {
    pub name: String,
    pub primary: TimeRange,
    pub stages: Vec<StagePlan>,
}

/// Tunable knobs of the festival generator.
///
/// The defaults describe the canonical three-day, three-stage festival.
/// `day_plans` must not name more days than `headliner_count` provides
/// headliners for; extra plans are dropped.
#[derive(Debug, Clone)]
pub struct FestivalConfig {
    pub headliner_count: usize,
    pub min_artists_required: usize,
    pub artists_per_stage: usize,
    /// Main Stage slots excluding the headliner.
    pub main_stage_artists: usize,
    pub top_genres_limit: usize,
    pub headliner_time_label: String,
    pub slot_duration_minutes: u32,
    /// Start time per stage index as (hour, minute).
    pub stage_start_times: Vec<(u32, u32)>,
    /// Case-insensitive substrings matched against genre tags.
    pub chill_genre_keywords: Vec<String>,
    pub day_plans: Vec<DayPlan>,
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            headliner_count: 3,
            min_artists_required: 10,
            artists_per_stage: 6,
            main_stage_artists: 5,
            top_genres_limit: 5,
            headliner_time_label: "9:30 PM".to_string(),
            slot_duration_minutes: 75,
            stage_start_times: vec![(14, 0), (15, 30), (16, 0)],
            chill_genre_keywords: [
                "indie",
                "folk",
                "acoustic",
                "chill",
                "ambient",
                "lofi",
                "jazz",
                "classical",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            day_plans: vec![
                DayPlan {
                    name: "Friday".to_string(),
                    primary: TimeRange::Short,
                    stages: vec![
                        StagePlan::new("Main Stage", "magenta", StageSource::Primary),
                        StagePlan::new("Sunset Stage", "red", StageSource::Primary),
                        StagePlan::new("Discovery Tent", "cyan", StageSource::Primary),
                    ],
                },
                DayPlan {
                    name: "Saturday".to_string(),
                    primary: TimeRange::Medium,
                    stages: vec![
                        StagePlan::new("Main Stage", "magenta", StageSource::Primary),
                        StagePlan::new("Grove Stage", "green", StageSource::Primary),
                        StagePlan::new("New Sounds Tent", "yellow", StageSource::Secondary),
                    ],
                },
                DayPlan {
                    name: "Sunday".to_string(),
                    primary: TimeRange::Long,
                    stages: vec![
                        StagePlan::new("Main Stage", "blue", StageSource::Primary),
                        StagePlan::new("Acoustic Grove", "green", StageSource::Chill),
                        StagePlan::new("Sundown Stage", "yellow", StageSource::Primary),
                    ],
                },
            ],
        }
    }
}
