// File: crates/story-core/src/controller.rs
// Summary: Scene controller (current scene, explorer selection, wipe-and-redraw) and the load-boundary session.

use crate::config::StoryConfig;
use crate::data::Dataset;
use crate::error::{StoryError, StoryResult};
use crate::geometry::Frame;
use crate::scene::{render_scene, Scene};

/// Mutable session state owned by the controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Active scene index, always in `0..Scene::COUNT`.
    pub current: usize,
    /// Explorer selection; only meaningful while the explorer is active.
    pub selected_country: Option<String>,
}

/// Owns the row set and the single canvas frame; every transition redraws from scratch.
pub struct SceneController {
    dataset: Dataset,
    config: StoryConfig,
    state: SessionState,
    frame: Frame,
}

impl SceneController {
    /// Start at scene 0 and draw it.
    pub fn new(dataset: Dataset, config: StoryConfig) -> Self {
        Self::with_state(dataset, config, SessionState::default())
    }

    /// Resume from an explicit state. An out-of-range index is clamped to the last scene.
    pub fn with_state(dataset: Dataset, config: StoryConfig, mut state: SessionState) -> Self {
        state.current = state.current.min(Scene::COUNT - 1);
        if state.current != Scene::CountryExplorer.index() {
            state.selected_country = None;
        }
        let frame = Frame::blank(config.width, config.height, config.theme.background);
        let mut ctl = Self { dataset, config, state, frame };
        ctl.redraw();
        ctl
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn config(&self) -> &StoryConfig { &self.config }
    pub fn state(&self) -> &SessionState { &self.state }
    pub fn frame(&self) -> &Frame { &self.frame }

    pub fn current_scene(&self) -> Scene {
        Scene::from_index(self.state.current).unwrap_or(Scene::GlobalTrend)
    }

    /// Move forward one scene; no-op at the last scene.
    pub fn advance(&mut self) -> bool {
        if self.state.current + 1 >= Scene::COUNT {
            return false;
        }
        self.enter(self.state.current + 1);
        true
    }

    /// Move back one scene; no-op at the first scene.
    pub fn retreat(&mut self) -> bool {
        if self.state.current == 0 {
            return false;
        }
        self.enter(self.state.current - 1);
        true
    }

    /// Wipe the canvas and draw scene `index`. Entering the explorer resets its selection.
    pub fn render(&mut self, index: usize) -> StoryResult<&Frame> {
        if index >= Scene::COUNT {
            return Err(StoryError::UnknownScene { index, count: Scene::COUNT });
        }
        self.enter(index);
        Ok(&self.frame)
    }

    pub fn show(&mut self, scene: Scene) -> &Frame {
        self.enter(scene.index());
        &self.frame
    }

    /// Dropdown change. Ignored unless the explorer is the active scene.
    pub fn on_country_selected(&mut self, country: &str) -> bool {
        if self.current_scene() != Scene::CountryExplorer {
            return false;
        }
        tracing::debug!(country, "country selected");
        self.state.selected_country = Some(country.to_string());
        self.redraw();
        true
    }

    /// Select the following country in discovery order, wrapping at the end.
    pub fn select_next_country(&mut self) -> bool {
        self.step_country(1)
    }

    /// Select the preceding country in discovery order, wrapping at the start.
    pub fn select_previous_country(&mut self) -> bool {
        self.step_country(-1)
    }

    fn step_country(&mut self, delta: isize) -> bool {
        let next = {
            let countries = self.dataset.countries();
            if countries.is_empty() {
                return false;
            }
            let n = countries.len() as isize;
            let cur = self
                .state
                .selected_country
                .as_deref()
                .and_then(|c| countries.iter().position(|o| *o == c))
                .unwrap_or(0) as isize;
            countries[(cur + delta).rem_euclid(n) as usize].to_string()
        };
        self.on_country_selected(&next)
    }

    fn enter(&mut self, index: usize) {
        let from = self.state.current;
        self.state.current = index;
        self.state.selected_country = if index == Scene::CountryExplorer.index() {
            self.dataset.countries().first().map(|c| c.to_string())
        } else {
            None
        };
        tracing::debug!(from, to = index, "scene transition");
        self.redraw();
    }

    fn redraw(&mut self) {
        let scene = self.current_scene();
        self.frame = render_scene(&self.dataset, scene, self.state.selected_country.as_deref(), &self.config);
    }
}

/// Session around the single asynchronous boundary: nothing renders until the dataset is in.
pub enum Session {
    Loading,
    Ready(SceneController),
    Failed(String),
}

impl Session {
    /// Resolve a load result into a ready or failed session.
    pub fn from_load(result: StoryResult<Dataset>, config: StoryConfig) -> Self {
        match result {
            Ok(ds) => Session::Ready(SceneController::new(ds, config)),
            Err(e) => {
                tracing::warn!(error = %e, "dataset load failed");
                Session::Failed(e.to_string())
            }
        }
    }

    /// Frame to show for the current session state.
    pub fn frame(&self, config: &StoryConfig) -> Frame {
        match self {
            Session::Loading => Frame::blank(config.width, config.height, config.theme.background),
            Session::Ready(ctl) => ctl.frame().clone(),
            Session::Failed(msg) => Frame::error(config.width, config.height, &config.theme, msg),
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut SceneController> {
        match self {
            Session::Ready(ctl) => Some(ctl),
            _ => None,
        }
    }

    pub fn advance(&mut self) -> bool {
        self.controller_mut().is_some_and(SceneController::advance)
    }

    pub fn retreat(&mut self) -> bool {
        self.controller_mut().is_some_and(SceneController::retreat)
    }
}
