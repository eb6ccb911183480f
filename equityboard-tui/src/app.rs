//! Application state: the data feed, the style tokens and the last composed
//! dashboard (or the error that stopped it).

use equityboard_core::composer::{compose_from_source, DashboardSpec};
use equityboard_core::data::{DashboardSource, FixtureSource, SyntheticSource};
use equityboard_core::style::StyleTokens;

use crate::theme::Theme;

/// Where render cycles get their inputs.
pub enum Feed {
    /// Seeded generator; regeneration advances to the next iteration.
    Synthetic(SyntheticSource),
    /// Fixed inputs; regeneration recomposes the same data.
    Fixed(FixtureSource),
}

impl Feed {
    pub fn source(&self) -> &dyn DashboardSource {
        match self {
            Feed::Synthetic(s) => s,
            Feed::Fixed(s) => s,
        }
    }

    fn advance(&mut self) {
        if let Feed::Synthetic(s) = self {
            *s = s.next_iteration();
        }
    }

    /// Short description for the status line.
    pub fn describe(&self) -> String {
        match self {
            Feed::Synthetic(s) => format!(
                "synthetic | seed {} | iteration {} | {} points",
                s.config().seed,
                s.iteration(),
                s.config().points
            ),
            Feed::Fixed(s) => s.name().to_string(),
        }
    }
}

pub struct App {
    pub feed: Feed,
    pub style: StyleTokens,
    pub theme: Theme,
    /// Result of the latest render cycle; the error text on failure.
    pub dashboard: Result<DashboardSpec, String>,
    pub should_quit: bool,
}

impl App {
    /// Build the app and run the first render cycle.
    pub fn new(feed: Feed, style: StyleTokens) -> Self {
        let mut app = Self {
            feed,
            style,
            theme: Theme::from_tokens(&style),
            dashboard: Err(String::new()),
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Recompose from the current feed.
    pub fn refresh(&mut self) {
        self.dashboard =
            compose_from_source(self.feed.source(), &self.style).map_err(|e| e.to_string());
    }

    /// Advance the feed and recompose.
    pub fn regenerate(&mut self) {
        self.feed.advance();
        self.refresh();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
