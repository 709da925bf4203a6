use std::{sync::Arc, time::Instant};

use tokio::sync::RwLock;
use tracing::log;

use crate::db::Db;
use crate::models::{Match, Scorer, Section, StoreKey, Team};
use crate::render_service::{self, RenderedViews};

/// All mutable state of the site: the three collections as last read
/// from the store, the section the visitor is on, the resolved main
/// logo and the fragments rendered from the collections.
pub struct LeagueService {
    pub matches: Vec<Match>,
    pub teams: Vec<Team>,
    pub scorers: Vec<Scorer>,
    pub current_section: Section,
    pub main_logo: String,
    pub views: RenderedViews,
}

pub type SafeLeagueService = Arc<RwLock<LeagueService>>;

impl LeagueService {
    pub fn new() -> SafeLeagueService {
        Arc::new(RwLock::new(LeagueService {
            matches: vec!(),
            teams: vec!(),
            scorers: vec!(),
            current_section: Section::Partidos,
            main_logo: String::new(),
            views: RenderedViews::default(),
        }))
    }

    /// Replaces each collection with the stored value under its key.
    /// A key that is absent (or unreadable) leaves the previous
    /// collection untouched.
    pub fn load(&mut self) {
        let before = Instant::now();
        if let Some(matches) = LeagueService::matches_db().read(&StoreKey::Matches) {
            self.matches = matches;
        }
        if let Some(teams) = LeagueService::teams_db().read(&StoreKey::Teams) {
            self.teams = teams;
        }
        if let Some(scorers) = LeagueService::scorers_db().read(&StoreKey::Scorers) {
            self.scorers = scorers;
        }
        log::info!("[STORE] Loaded {} matches, {} teams, {} scorers {:.2?}",
            self.matches.len(), self.teams.len(), self.scorers.len(), before.elapsed());
    }

    /// Sorts the collections in place and rebuilds all three fragments.
    pub fn render_all(&mut self) {
        sort_matches(&mut self.matches);
        sort_teams(&mut self.teams);
        sort_scorers(&mut self.scorers);
        self.views = render_service::render_all(&self.matches, &self.teams, &self.scorers);
    }

    /// One tick of the site: re-read the store, re-render every view.
    pub fn refresh(&mut self) {
        self.load();
        self.render_all();
    }

    pub fn show_section(&mut self, section: Section) {
        self.current_section = section;
    }

    pub fn read_raw(key: &StoreKey) -> String {
        let db: Db<StoreKey, serde_json::Value> = Db::new("site");
        db.read_raw(key)
    }

    fn matches_db() -> Db<StoreKey, Vec<Match>> {
        Db::new("site")
    }

    fn teams_db() -> Db<StoreKey, Vec<Team>> {
        Db::new("site")
    }

    fn scorers_db() -> Db<StoreKey, Vec<Scorer>> {
        Db::new("site")
    }
}

/// Chronological, earliest first. Unparsable schedules sort before
/// everything else and keep their relative order.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by_key(Match::start_instant);
}

/// League table order: points, then goal difference, then goals for,
/// all descending. Ties beyond that keep their stored order.
pub fn sort_teams(teams: &mut [Team]) {
    teams.sort_by(|a, b| {
        b.pts.cmp(&a.pts)
            .then_with(|| b.dg.cmp(&a.dg))
            .then_with(|| b.gf.cmp(&a.gf))
    });
}

pub fn sort_scorers(scorers: &mut [Scorer]) {
    scorers.sort_by(|a, b| b.goals.cmp(&a.goals));
}
