use std::fmt;

use activity_roster_api::api::Activity;
use indexmap::IndexMap;

/// Exact name of an activity, the key of the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityName(String);

/// Email of a participant. Not validated, compared byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(String::from(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(ActivityName);
string_newtype!(Email);

/// In-memory mapping from activity name to activity.
///
/// The set of activities is fixed once constructed, only participant lists change.
/// Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    activities: IndexMap<ActivityName, Activity>,
}

impl ActivityStore {
    pub fn new(activities: IndexMap<ActivityName, Activity>) -> Self {
        Self { activities }
    }

    /// The activities the school offers at startup.
    pub fn seeded() -> Self {
        let seed = [
            (
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"][..],
            ),
            (
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"][..],
            ),
            (
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"][..],
            ),
            (
                "Basketball Team",
                "Competitive basketball team and training",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                15,
                &[][..],
            ),
            (
                "Tennis Club",
                "Tennis lessons and friendly matches",
                "Wednesdays and Saturdays, 3:00 PM - 4:30 PM",
                10,
                &[][..],
            ),
            (
                "Drama Club",
                "Acting, theater performances, and stage production",
                "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
                25,
                &[][..],
            ),
            (
                "Art Studio",
                "Painting, drawing, and visual arts exploration",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &[][..],
            ),
            (
                "Debate Club",
                "Develop public speaking and argumentation skills",
                "Mondays, 3:30 PM - 4:30 PM",
                16,
                &[][..],
            ),
            (
                "Science Club",
                "Explore physics, chemistry, and biology through experiments",
                "Thursdays, 3:30 PM - 4:30 PM",
                20,
                &[][..],
            ),
        ];

        let activities = seed
            .into_iter()
            .map(|(name, description, schedule, max_participants, participants)| {
                (
                    ActivityName::from(name),
                    Activity {
                        description: String::from(description),
                        schedule: String::from(schedule),
                        max_participants,
                        participants: participants.iter().map(|p| String::from(*p)).collect(),
                    },
                )
            })
            .collect();
        Self::new(activities)
    }

    pub fn get_all(&self) -> &IndexMap<ActivityName, Activity> {
        &self.activities
    }

    /// Exact match lookup, no case folding or trimming.
    pub fn get(&self, name: &ActivityName) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &ActivityName) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }
}
