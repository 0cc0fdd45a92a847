// SPDX-License-Identifier: MIT
// Copyright 2026 Wanderly contributors

//! Preference wizard: intent, city, mood, budget, distance.
//!
//! `PreferenceFlow` owns every selection the wizard makes and only moves
//! forward on an explicit `start`/`next`. Each mutation publishes a
//! [`FlowSnapshot`] on a watch channel, so a UI renders from snapshots
//! instead of holding its own state.
//!
//! City searches and activity fetches are ticketed. Only the result for the
//! most recently issued ticket is applied; a slower, superseded response is
//! dropped when it arrives.

use crate::db::BucketListRepository;
use crate::error::{AppError, Result};
use crate::models::city::search_city;
use crate::models::{Activity, BucketListCity, BudgetTier, City, DestinationIntent, Mood};
use crate::services::activities::ActivityClient;
use crate::services::bucket_list::{BucketListStore, SaveOutcome};
use crate::services::city::CityClient;
use crate::services::classifier::{infer_budget, infer_mood_tags};
use serde::Serialize;
use std::collections::BTreeSet;
use tokio::sync::watch;

pub const DEFAULT_DISTANCE_KM: u32 = 50;
pub const MIN_DISTANCE_KM: u32 = 1;
pub const MAX_DISTANCE_KM: u32 = 500;

const NO_CITIES_FOUND: &str = "No cities found. Please try a different name.";
const NO_ACTIVITIES_FOUND: &str = "No activities available.";

/// Wizard steps in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FlowStep {
    Intent,
    CitySelection,
    MoodSelection,
    BudgetSelection,
    DistanceSelection,
    Complete,
}

/// Everything the user has picked so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selections {
    pub intent: Option<DestinationIntent>,
    pub city: Option<City>,
    pub mood: Mood,
    pub budget: BudgetTier,
    pub distance_km: u32,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            intent: None,
            city: None,
            mood: Mood::default(),
            budget: BudgetTier::default(),
            distance_km: DEFAULT_DISTANCE_KM,
        }
    }
}

/// Message for the user after a failed or empty fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// Shown next to the list.
    Inline(String),
    /// Shown as a blocking alert (authentication failures).
    Alert(String),
}

impl Notice {
    fn from_error(context: &str, err: &AppError) -> Self {
        let message = format!("{}: {}", context, err);
        if err.is_auth_error() {
            Notice::Alert(message)
        } else {
            Notice::Inline(message)
        }
    }
}

/// Handle for one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Monotonic counter deciding which fetch result is still wanted.
#[derive(Debug, Default)]
struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Activity search composed from a completed "have a destination" flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityQuery {
    pub city_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: u32,
    pub mood: Mood,
    pub budget: BudgetTier,
}

/// City suggestion criteria from a completed "explore" flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationQuery {
    pub mood: Mood,
    pub budget: BudgetTier,
    pub radius_km: u32,
}

impl DestinationQuery {
    /// A city fits when its inferred budget is the chosen one and its
    /// inferred moods include the chosen mood.
    pub fn matches(&self, city: &City) -> bool {
        infer_budget(city) == self.budget && infer_mood_tags(city).contains(&self.mood)
    }

    pub fn suggest(&self, candidates: Vec<City>) -> Vec<City> {
        candidates.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// What a completed flow asks for next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlanQuery {
    Activities(ActivityQuery),
    Destinations(DestinationQuery),
}

/// Read-only view of the flow, published after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowSnapshot {
    pub step: FlowStep,
    pub selections: Selections,
    pub cities: Vec<City>,
    pub activities: Vec<Activity>,
    pub selected_activity_ids: BTreeSet<String>,
    pub notice: Option<Notice>,
}

/// Wizard state machine.
pub struct PreferenceFlow {
    step: FlowStep,
    selections: Selections,
    cities: Vec<City>,
    activities: Vec<Activity>,
    selected_activity_ids: BTreeSet<String>,
    notice: Option<Notice>,
    city_searches: FetchGeneration,
    activity_fetches: FetchGeneration,
    updates: watch::Sender<FlowSnapshot>,
}

impl Default for PreferenceFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceFlow {
    pub fn new() -> Self {
        let initial = FlowSnapshot {
            step: FlowStep::Intent,
            selections: Selections::default(),
            cities: Vec::new(),
            activities: Vec::new(),
            selected_activity_ids: BTreeSet::new(),
            notice: None,
        };
        let (updates, _) = watch::channel(initial);

        Self {
            step: FlowStep::Intent,
            selections: Selections::default(),
            cities: Vec::new(),
            activities: Vec::new(),
            selected_activity_ids: BTreeSet::new(),
            notice: None,
            city_searches: FetchGeneration::default(),
            activity_fetches: FetchGeneration::default(),
            updates,
        }
    }

    /// Receive a snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<FlowSnapshot> {
        self.updates.subscribe()
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            step: self.step,
            selections: self.selections.clone(),
            cities: self.cities.clone(),
            activities: self.activities.clone(),
            selected_activity_ids: self.selected_activity_ids.clone(),
            notice: self.notice.clone(),
        }
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }

    // ─── Transitions ─────────────────────────────────────────────

    /// Answer the intent question. Always starts over: every earlier
    /// selection is discarded first.
    pub fn start(&mut self, intent: DestinationIntent) -> FlowStep {
        self.reset_state();
        self.selections.intent = Some(intent);
        self.step = match intent {
            DestinationIntent::HaveDestination => FlowStep::CitySelection,
            DestinationIntent::Explore => FlowStep::MoodSelection,
        };
        tracing::debug!(intent = ?intent, step = ?self.step, "Preference flow started");
        self.publish();
        self.step
    }

    /// Go back to the intent question with all selections at defaults.
    pub fn return_to_intent(&mut self) {
        self.reset_state();
        self.publish();
    }

    fn reset_state(&mut self) {
        self.step = FlowStep::Intent;
        self.selections = Selections::default();
        self.cities.clear();
        self.activities.clear();
        self.selected_activity_ids.clear();
        self.notice = None;
        // Outstanding fetches belong to the abandoned run.
        self.city_searches.issue();
        self.activity_fetches.issue();
    }

    /// Confirm the current step and move to the next one.
    pub fn next(&mut self) -> Result<FlowStep> {
        let next = match self.step {
            FlowStep::Intent => {
                return Err(AppError::Validation(
                    "Answer the destination question first".to_string(),
                ))
            }
            FlowStep::CitySelection => {
                if self.selections.city.is_none() {
                    return Err(AppError::Validation("Select a city first".to_string()));
                }
                FlowStep::MoodSelection
            }
            FlowStep::MoodSelection => FlowStep::BudgetSelection,
            FlowStep::BudgetSelection => FlowStep::DistanceSelection,
            FlowStep::DistanceSelection => FlowStep::Complete,
            FlowStep::Complete => {
                return Err(AppError::Validation(
                    "Preference flow is already complete".to_string(),
                ))
            }
        };

        self.step = next;
        tracing::debug!(step = ?next, "Preference flow advanced");
        self.publish();
        Ok(next)
    }

    // ─── Selections ──────────────────────────────────────────────

    fn require_reached(&self, step: FlowStep) -> Result<()> {
        if self.step < step {
            return Err(AppError::Validation(format!(
                "{:?} has not been reached yet",
                step
            )));
        }
        Ok(())
    }

    /// Pick the destination city. Activities loaded for a previous city
    /// are dropped.
    pub fn select_city(&mut self, city: City) -> Result<()> {
        if self.selections.intent != Some(DestinationIntent::HaveDestination) {
            return Err(AppError::Validation(
                "City selection needs a destination in mind".to_string(),
            ));
        }
        self.require_reached(FlowStep::CitySelection)?;

        tracing::debug!(
            city = %city.name,
            latitude = city.latitude,
            longitude = city.longitude,
            "City selected"
        );
        self.selections.city = Some(city);
        self.activities.clear();
        self.selected_activity_ids.clear();
        self.activity_fetches.issue();
        self.publish();
        Ok(())
    }

    /// Pick the first listed search result whose name contains `name`.
    pub fn select_listed_city(&mut self, name: &str) -> Result<()> {
        let city = search_city(&self.cities, name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("City matching '{}'", name)))?;
        self.select_city(city)
    }

    pub fn select_mood(&mut self, mood: Mood) -> Result<()> {
        self.require_reached(FlowStep::MoodSelection)?;
        self.selections.mood = mood;
        self.publish();
        Ok(())
    }

    pub fn select_budget(&mut self, budget: BudgetTier) -> Result<()> {
        self.require_reached(FlowStep::BudgetSelection)?;
        self.selections.budget = budget;
        self.publish();
        Ok(())
    }

    pub fn set_distance(&mut self, distance_km: u32) -> Result<()> {
        self.require_reached(FlowStep::DistanceSelection)?;
        if !(MIN_DISTANCE_KM..=MAX_DISTANCE_KM).contains(&distance_km) {
            return Err(AppError::Validation(format!(
                "Distance must be between {} and {} km",
                MIN_DISTANCE_KM, MAX_DISTANCE_KM
            )));
        }
        self.selections.distance_km = distance_km;
        self.publish();
        Ok(())
    }

    /// The composed query, once the flow is complete.
    pub fn query(&self) -> Option<PlanQuery> {
        if self.step != FlowStep::Complete {
            return None;
        }

        let s = &self.selections;
        match s.intent? {
            DestinationIntent::HaveDestination => {
                let city = s.city.as_ref()?;
                Some(PlanQuery::Activities(ActivityQuery {
                    city_name: city.name.clone(),
                    latitude: city.latitude,
                    longitude: city.longitude,
                    radius_km: s.distance_km,
                    mood: s.mood,
                    budget: s.budget,
                }))
            }
            DestinationIntent::Explore => Some(PlanQuery::Destinations(DestinationQuery {
                mood: s.mood,
                budget: s.budget,
                radius_km: s.distance_km,
            })),
        }
    }

    // ─── City search ─────────────────────────────────────────────

    /// Issue a ticket for a city search.
    ///
    /// A blank name clears the results and returns `None`; nothing should
    /// be requested.
    pub fn begin_city_search(&mut self, name: &str) -> Option<FetchTicket> {
        if name.trim().is_empty() {
            self.city_searches.issue();
            self.cities.clear();
            self.notice = None;
            self.publish();
            return None;
        }
        Some(self.city_searches.issue())
    }

    /// Apply a city search result. Returns false if the ticket was
    /// superseded and the result dropped.
    ///
    /// A failure keeps the previous results and sets a notice.
    pub fn apply_city_results(&mut self, ticket: FetchTicket, result: Result<Vec<City>>) -> bool {
        if !self.city_searches.is_current(ticket) {
            tracing::debug!(?ticket, "Dropping superseded city search result");
            return false;
        }

        match result {
            Ok(cities) => {
                self.notice = cities
                    .is_empty()
                    .then(|| Notice::Inline(NO_CITIES_FOUND.to_string()));
                self.cities = cities;
            }
            Err(e) => {
                tracing::warn!(error = %e, "City search failed");
                self.notice = Some(Notice::from_error("Error fetching cities", &e));
            }
        }
        self.publish();
        true
    }

    /// Search cities through `client` and apply the result.
    ///
    /// Holds `&mut self` across the request, so no second search can start
    /// meanwhile. Callers with overlapping searches use `begin_city_search`
    /// and `apply_city_results` to get last-issued-wins.
    pub async fn search_cities(&mut self, client: &CityClient, name: &str) {
        let Some(ticket) = self.begin_city_search(name) else {
            return;
        };
        let result = client.find_cities(name).await;
        self.apply_city_results(ticket, result);
    }

    // ─── Activities ──────────────────────────────────────────────

    /// Issue a ticket for an activity fetch. Needs a completed flow with a
    /// chosen city.
    pub fn begin_activity_fetch(&mut self) -> Result<(FetchTicket, ActivityQuery)> {
        match self.query() {
            Some(PlanQuery::Activities(query)) => Ok((self.activity_fetches.issue(), query)),
            _ => Err(AppError::Validation(
                "Activities need a completed flow with a city".to_string(),
            )),
        }
    }

    /// Apply an activity fetch result; same rules as city results.
    /// Selected activities that are no longer listed are deselected.
    pub fn apply_activities(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Activity>>,
    ) -> bool {
        if !self.activity_fetches.is_current(ticket) {
            tracing::debug!(?ticket, "Dropping superseded activity result");
            return false;
        }

        match result {
            Ok(activities) => {
                self.notice = activities
                    .is_empty()
                    .then(|| Notice::Inline(NO_ACTIVITIES_FOUND.to_string()));
                let listed: BTreeSet<&str> =
                    activities.iter().filter_map(|a| a.id.as_deref()).collect();
                self.selected_activity_ids
                    .retain(|id| listed.contains(id.as_str()));
                self.activities = activities;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Activity fetch failed");
                self.notice = Some(Notice::from_error("Error fetching activities", &e));
            }
        }
        self.publish();
        true
    }

    /// Fetch activities for the completed flow and apply them.
    ///
    /// Holds `&mut self` across the request; overlapping fetches go through
    /// `begin_activity_fetch` and `apply_activities` instead.
    pub async fn load_activities(&mut self, client: &ActivityClient) -> Result<()> {
        let (ticket, query) = self.begin_activity_fetch()?;
        let result = client
            .find_activities(
                query.latitude,
                query.longitude,
                Some(query.radius_km),
                Some(query.mood),
            )
            .await;
        self.apply_activities(ticket, result);
        Ok(())
    }

    /// Select or deselect a listed activity. Returns whether it is now
    /// selected.
    pub fn toggle_activity(&mut self, activity_id: &str) -> Result<bool> {
        let listed = self
            .activities
            .iter()
            .any(|a| a.id.as_deref() == Some(activity_id));
        if !listed {
            return Err(AppError::NotFound(format!("Activity {}", activity_id)));
        }

        let selected = if self.selected_activity_ids.remove(activity_id) {
            false
        } else {
            self.selected_activity_ids.insert(activity_id.to_string());
            true
        };
        self.publish();
        Ok(selected)
    }

    pub fn selected_activities(&self) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| {
                a.id
                    .as_deref()
                    .is_some_and(|id| self.selected_activity_ids.contains(id))
            })
            .cloned()
            .collect()
    }

    // ─── Hand-off ────────────────────────────────────────────────

    /// Bucket list entry for the chosen city with a snapshot of the
    /// selected activities.
    pub fn bucket_list_entry(&self, image: &str, description: &str) -> Result<BucketListCity> {
        let city = self
            .selections
            .city
            .as_ref()
            .ok_or_else(|| AppError::Validation("No city selected".to_string()))?;

        let mut entry = BucketListCity::new(&city.name, city.latitude, city.longitude);
        entry.image = image.to_string();
        entry.description = description.to_string();
        entry.country = Some(city.country.clone());
        entry.activities = self.selected_activities();
        Ok(entry)
    }

    /// Save the chosen city and selected activities to the bucket list.
    pub async fn save_to_bucket_list<R: BucketListRepository>(
        &mut self,
        store: &BucketListStore<R>,
        image: &str,
        description: &str,
    ) -> Result<SaveOutcome> {
        let entry = self.bucket_list_entry(image, description)?;
        match store.save(&entry).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.notice = Some(Notice::from_error("Could not save to bucket list", &e));
                self.publish();
                Err(e)
            }
        }
    }
}
