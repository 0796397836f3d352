use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const GOAL_KEY: &str = "dailyGoal";
pub const DEFAULT_GOAL: u32 = 2000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MealError {
    #[error("meal name is empty")]
    MissingName,
    #[error("calories must be a positive whole number")]
    InvalidCalories,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub cals: u32,
    /// Wall-clock time the meal was logged, for display only.
    pub time: String,
}

/// Meals are kept per UTC day, e.g. `meals_2024-03-14`.
pub fn meals_key(day: NaiveDate) -> String {
    format!("meals_{}", day.format("%Y-%m-%d"))
}

pub fn load_meals(store: &dyn KeyValueStore, day: NaiveDate) -> Vec<Meal> {
    store
        .get(&meals_key(day))
        .and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|err| log::debug!("Discarding malformed meal list: {err}"))
                .ok()
        })
        .unwrap_or_default()
}

fn save_meals(store: &mut dyn KeyValueStore, day: NaiveDate, meals: &[Meal]) {
    let result = serde_json::to_string(meals)
        .map_err(Into::into)
        .and_then(|raw| store.set(&meals_key(day), raw));
    if let Err(err) = result {
        log::warn!("Failed to persist meals: {err}");
    }
}

/// Reads the leading integer of `raw`, so "12.5" is 12 and "250 kcal" is 250.
pub fn parse_calories(raw: &str) -> Result<u32, MealError> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    match raw[..sign_len + digits_len].parse::<i64>() {
        Ok(cals) if cals > 0 => u32::try_from(cals).map_err(|_| MealError::InvalidCalories),
        _ => Err(MealError::InvalidCalories),
    }
}

/// Logs a meal as the newest entry of `day`.
pub fn add_meal(
    store: &mut dyn KeyValueStore,
    day: NaiveDate,
    name: &str,
    cals: u32,
    time: String,
) -> Result<Vec<Meal>, MealError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MealError::MissingName);
    }
    if cals == 0 {
        return Err(MealError::InvalidCalories);
    }

    let mut meals = load_meals(store, day);
    meals.insert(
        0,
        Meal {
            name: name.to_owned(),
            cals,
            time,
        },
    );
    save_meals(store, day, &meals);
    Ok(meals)
}

/// Removes the meal at `index`; out-of-range indices change nothing.
pub fn remove_meal(store: &mut dyn KeyValueStore, day: NaiveDate, index: usize) -> Vec<Meal> {
    let mut meals = load_meals(store, day);
    if index < meals.len() {
        meals.remove(index);
        save_meals(store, day, &meals);
    }
    meals
}

pub fn total_calories(meals: &[Meal]) -> u32 {
    meals.iter().map(|m| m.cals).sum()
}

/// Share of the goal consumed, capped at 100.
pub fn progress_percent(total: u32, goal: u32) -> u32 {
    let goal = goal.max(1);
    ((total as f64 / goal as f64) * 100.0).round().min(100.0) as u32
}

pub fn load_goal(store: &dyn KeyValueStore) -> u32 {
    store
        .get(GOAL_KEY)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&goal| goal > 0)
        .unwrap_or(DEFAULT_GOAL)
}

/// Persists a new daily goal; unusable input falls back to the default.
pub fn update_goal(store: &mut dyn KeyValueStore, raw: &str) -> u32 {
    let goal = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|g| g.is_finite() && *g >= 1.0)
        .map(|g| g.round() as u32)
        .unwrap_or(DEFAULT_GOAL);
    if let Err(err) = store.set(GOAL_KEY, goal.to_string()) {
        log::warn!("Failed to persist daily goal: {err}");
    }
    goal
}

/// Form state for today's meal list.
pub struct MealTracker {
    pub name: String,
    pub cals: String,
    pub goal_edit: Option<String>,
    pub message: Option<String>,
    pub meals: Vec<Meal>,
    pub goal: u32,
    day: Option<NaiveDate>,
}

impl Default for MealTracker {
    fn default() -> Self {
        Self {
            name: String::new(),
            cals: String::new(),
            goal_edit: None,
            message: None,
            meals: Vec::new(),
            goal: DEFAULT_GOAL,
            day: None,
        }
    }
}

impl MealTracker {
    /// Reloads from the store when the day rolls over or on first use.
    pub fn sync_day(&mut self, store: &dyn KeyValueStore, today: NaiveDate) {
        if self.day != Some(today) {
            self.day = Some(today);
            self.reload(store);
        }
    }

    pub fn reload(&mut self, store: &dyn KeyValueStore) {
        if let Some(day) = self.day {
            self.meals = load_meals(store, day);
        }
        self.goal = load_goal(store);
    }

    pub fn submit(&mut self, store: &mut dyn KeyValueStore, time: String) {
        let Some(day) = self.day else {
            return;
        };
        let result = parse_calories(&self.cals).and_then(|cals| add_meal(store, day, &self.name, cals, time));
        match result {
            Ok(meals) => {
                self.meals = meals;
                self.name.clear();
                self.cals.clear();
                self.message = None;
            }
            Err(_) => self.message = Some("Enter meal name and calories".to_owned()),
        }
    }

    pub fn remove(&mut self, store: &mut dyn KeyValueStore, index: usize) {
        if let Some(day) = self.day {
            self.meals = remove_meal(store, day, index);
        }
    }

    pub fn commit_goal(&mut self, store: &mut dyn KeyValueStore) {
        if let Some(raw) = self.goal_edit.take() {
            self.goal = update_goal(store, &raw);
        }
    }

    pub fn total(&self) -> u32 {
        total_calories(&self.meals)
    }

    pub fn progress(&self) -> u32 {
        progress_percent(self.total(), self.goal)
    }
}
