use mealdraft_catalog::Meal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Selecting,
    Reviewing,
    Error,
}

/// Where the current catalog came from, surfaced to the user so fallback
/// data is never mistaken for live data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// The whole drafting state, advanced only through [`Planner::apply`].
#[derive(Debug, Clone)]
pub struct Planner {
    pub phase: Phase,
    pub meals: Vec<Meal>,
    pub origin: DataOrigin,
    pub notice: Option<String>,
    pub selected: Vec<Meal>,
    pub accepted: Vec<Meal>,
}

#[derive(Debug, Clone)]
pub enum Event {
    FetchStarted,
    CatalogLoaded {
        meals: Vec<Meal>,
        origin: DataOrigin,
        notice: Option<String>,
    },
    PlanDrawn(Vec<Meal>),
    MealSwapped {
        slot: String,
        replacement: Meal,
    },
    PlanAccepted,
    ReturnedToSelection,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            meals: Vec::new(),
            origin: DataOrigin::Live,
            notice: None,
            selected: Vec::new(),
            accepted: Vec::new(),
        }
    }
}

impl Planner {
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::FetchStarted => {
                self.phase = Phase::Loading;
            }
            Event::CatalogLoaded {
                meals,
                origin,
                notice,
            } => {
                // A refetch leaves the current selection and accepted plan
                // alone; only the catalog and the notice change.
                self.phase = if meals.is_empty() {
                    Phase::Error
                } else if self.phase == Phase::Reviewing {
                    Phase::Reviewing
                } else {
                    Phase::Selecting
                };
                self.meals = meals;
                self.origin = origin;
                self.notice = notice;
            }
            Event::PlanDrawn(selection) => {
                self.selected = selection;
                self.phase = Phase::Selecting;
            }
            Event::MealSwapped { slot, replacement } => {
                if let Some(entry) = self.selected.iter_mut().find(|m| m.id == slot) {
                    *entry = replacement;
                }
            }
            Event::PlanAccepted => {
                self.accepted = self.selected.clone();
                self.phase = Phase::Reviewing;
            }
            Event::ReturnedToSelection => {
                // Accepted plan survives so the user can flip back to it.
                self.phase = Phase::Selecting;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str) -> Meal {
        Meal {
            id: id.to_owned(),
            meal_name: format!("meal {id}"),
            category: String::new(),
            specialist: String::new(),
            main_ingredient: String::new(),
            book: String::new(),
            page: String::new(),
            serves: String::new(),
            ingredients_list: String::new(),
        }
    }

    #[test]
    fn starts_idle() {
        let planner = Planner::default();
        assert_eq!(planner.phase, Phase::Idle);
        assert!(planner.meals.is_empty());
    }

    #[test]
    fn load_moves_to_selecting() {
        let mut planner = Planner::default();
        planner.apply(Event::FetchStarted);
        assert_eq!(planner.phase, Phase::Loading);

        planner.apply(Event::CatalogLoaded {
            meals: vec![meal("1")],
            origin: DataOrigin::Live,
            notice: None,
        });
        assert_eq!(planner.phase, Phase::Selecting);
        assert_eq!(planner.origin, DataOrigin::Live);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let mut planner = Planner::default();
        planner.apply(Event::CatalogLoaded {
            meals: Vec::new(),
            origin: DataOrigin::Live,
            notice: None,
        });
        assert_eq!(planner.phase, Phase::Error);
    }

    #[test]
    fn accept_freezes_selection_and_back_keeps_it() {
        let mut planner = Planner::default();
        planner.apply(Event::CatalogLoaded {
            meals: vec![meal("1"), meal("2")],
            origin: DataOrigin::Live,
            notice: None,
        });
        planner.apply(Event::PlanDrawn(vec![meal("1")]));
        planner.apply(Event::PlanAccepted);

        assert_eq!(planner.phase, Phase::Reviewing);
        assert_eq!(planner.accepted.len(), 1);

        planner.apply(Event::ReturnedToSelection);
        assert_eq!(planner.phase, Phase::Selecting);
        assert_eq!(planner.accepted.len(), 1);
    }

    #[test]
    fn swap_replaces_only_the_named_slot() {
        let mut planner = Planner::default();
        planner.apply(Event::PlanDrawn(vec![meal("1"), meal("2")]));
        planner.apply(Event::MealSwapped {
            slot: "2".to_owned(),
            replacement: meal("9"),
        });

        let ids: Vec<_> = planner.selected.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "9"]);

        // Unknown slot ids are ignored.
        planner.apply(Event::MealSwapped {
            slot: "404".to_owned(),
            replacement: meal("8"),
        });
        assert_eq!(planner.selected.len(), 2);
    }

    #[test]
    fn refetch_while_reviewing_stays_on_the_summary() {
        let mut planner = Planner::default();
        planner.apply(Event::PlanDrawn(vec![meal("1")]));
        planner.apply(Event::PlanAccepted);

        planner.apply(Event::CatalogLoaded {
            meals: vec![meal("3")],
            origin: DataOrigin::Fallback,
            notice: Some("using fallback data".to_owned()),
        });
        assert_eq!(planner.phase, Phase::Reviewing);
        assert!(planner.notice.is_some());
    }
}
