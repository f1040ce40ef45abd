use activity_roster_api::api::{ActivitiesResponse, MessageResponse};

use crate::error::RosterError;
use crate::store::{ActivityName, ActivityStore, Email};

/// Whether signups check `max_participants`.
///
/// The published api never rejected a signup for capacity reasons,
/// so that stays the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Unenforced,
    Enforce,
}

/// Confirmation text of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation(String);

impl From<Confirmation> for MessageResponse {
    fn from(confirmation: Confirmation) -> Self {
        MessageResponse {
            message: confirmation.0,
        }
    }
}

/// Read and write operations on an owned [`ActivityStore`].
#[derive(Debug)]
pub struct RosterService {
    store: ActivityStore,
    capacity: CapacityPolicy,
}

impl RosterService {
    pub fn new(store: ActivityStore, capacity: CapacityPolicy) -> Self {
        Self { store, capacity }
    }

    /// All activities with their current participants.
    pub fn list_activities(&self) -> ActivitiesResponse {
        self.store
            .get_all()
            .iter()
            .map(|(name, activity)| (name.to_string(), activity.clone()))
            .collect()
    }

    /// Appends `email` to the participants of `activity_name`.
    ///
    /// # Errors
    /// [`RosterError::ActivityNotFound`], [`RosterError::AlreadyRegistered`],
    /// and with [`CapacityPolicy::Enforce`] also [`RosterError::ActivityFull`].
    pub fn signup(
        &mut self,
        activity_name: &ActivityName,
        email: Email,
    ) -> Result<Confirmation, RosterError> {
        self.check_signup(activity_name, &email)?;
        let activity = self
            .store
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        activity.participants.push(email.to_string());
        log::info!(
            activity:display = activity_name,
            email:display = email,
            participants = activity.participants.len();
            "signed up"
        );
        Ok(Confirmation(format!("Signed up {email} for {activity_name}")))
    }

    fn check_signup(
        &self,
        activity_name: &ActivityName,
        email: &Email,
    ) -> Result<(), RosterError> {
        let activity = self
            .store
            .get(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email.as_ref()) {
            return Err(RosterError::AlreadyRegistered);
        }
        if self.capacity == CapacityPolicy::Enforce && activity.availability() <= 0 {
            return Err(RosterError::ActivityFull);
        }
        Ok(())
    }

    /// Removes `email` from the participants of `activity_name`, keeping the order of the rest.
    ///
    /// # Errors
    /// [`RosterError::ActivityNotFound`] or [`RosterError::ParticipantNotFound`].
    pub fn unregister(
        &mut self,
        activity_name: &ActivityName,
        email: &Email,
    ) -> Result<Confirmation, RosterError> {
        let activity = self
            .store
            .get_mut(activity_name)
            .ok_or(RosterError::ActivityNotFound)?;

        let index = activity
            .participants
            .iter()
            .position(|p| p == email.as_ref())
            .ok_or(RosterError::ParticipantNotFound)?;
        activity.participants.remove(index);

        log::info!(
            activity:display = activity_name,
            email:display = email,
            participants = activity.participants.len();
            "unregistered"
        );
        Ok(Confirmation(format!(
            "Unregistered {email} from {activity_name}"
        )))
    }
}
