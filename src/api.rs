use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The version of this api, reported by the server on startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A named extracurricular offering, as returned by `GET /activities`.
///
/// The name is not part of the struct, it is the key of the surrounding map.
///
/// # Serialized Example
/// ```
/// # let ser = r#"
/// {
///     "description": "Learn strategies and compete in chess tournaments",
///     "schedule": "Fridays, 3:30 PM - 5:00 PM",
///     "max_participants": 12,
///     "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
/// }
/// # "#;
/// # let deser: activity_roster_api::api::Activity
/// #    = serde_json::from_str(ser).expect("failed parsing");
/// # assert_eq!(deser.availability(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Human readable days and times, not meant to be parsed.
    pub schedule: String,
    pub max_participants: u32,
    /// Emails in the order they signed up.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining spots, `max_participants - participants.len()`.
    ///
    /// Negative if the roster was allowed to overflow.
    #[must_use]
    pub fn availability(&self) -> i64 {
        i64::from(self.max_participants)
            - i64::try_from(self.participants.len()).unwrap_or(i64::MAX)
    }
}

/// Response of `GET /activities`, keyed by activity name in the order the activities were created.
pub type ActivitiesResponse = IndexMap<String, Activity>;

/// Query string of `/activities/{name}/signup` and `/activities/{name}/unregister`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailQuery {
    /// Not validated, any string is accepted.
    pub email: String,
}

/// Body of a successful signup or unregister.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every `4xx` response of the activity endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_json_shape() {
        let activity = Activity {
            description: String::from("Acting, theater performances, and stage production"),
            schedule: String::from("Tuesdays and Fridays, 4:00 PM - 5:30 PM"),
            max_participants: 25,
            participants: vec![],
        };
        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "description": "Acting, theater performances, and stage production",
                "schedule": "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
                "max_participants": 25,
                "participants": [],
            })
        );
    }

    #[test]
    fn availability_can_go_negative() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec![String::from("a@x"), String::from("b@x")],
        };
        assert_eq!(activity.availability(), -1);
    }

    #[test]
    fn activities_keep_insertion_order() {
        let activity = |max_participants| Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants,
            participants: vec![],
        };
        let mut activities = ActivitiesResponse::new();
        activities.insert(String::from("Chess Club"), activity(12));
        activities.insert(String::from("Art Studio"), activity(18));

        let json = serde_json::to_string(&activities).unwrap();
        assert!(json.find("Chess Club").unwrap() < json.find("Art Studio").unwrap());

        let back: ActivitiesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.keys().collect::<Vec<_>>(),
            ["Chess Club", "Art Studio"]
        );
    }

    #[test]
    fn email_query_decodes_percent_encoding() {
        let query: EmailQuery =
            serde_urlencoded::from_str("email=alice%2Btest%40mergington.edu").unwrap();
        assert_eq!(query.email, "alice+test@mergington.edu");
    }

    #[test]
    fn email_query_requires_email() {
        assert!(serde_urlencoded::from_str::<EmailQuery>("mail=x").is_err());
    }
}
