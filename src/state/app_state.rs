//! Application state definitions

use super::forms::{LoginForm, RegisterForm};
use super::lookup_state::CountryLookup;

/// Named routes of the navigation shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Welcome,
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Welcome => "/",
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Header title shown above the screen
    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Get Started",
            Self::Login | Self::Register => "",
            Self::Dashboard => "Dashboard",
        }
    }

    pub fn header_shown(&self) -> bool {
        !matches!(self, Self::Welcome)
    }
}

/// Registration screen: form, country lookup and the open country picker
#[derive(Debug)]
pub struct RegisterScreen {
    pub form: RegisterForm,
    pub lookup: CountryLookup,
    /// Highlighted row while the country picker is open (0 is the placeholder)
    pub picker: Option<usize>,
}

impl RegisterScreen {
    pub fn new(lookup_id: u64) -> Self {
        Self {
            form: RegisterForm::new(),
            lookup: CountryLookup::new(lookup_id),
            picker: None,
        }
    }

    /// Rows of the picker: the placeholder followed by every fetched country
    pub fn picker_len(&self) -> usize {
        self.lookup.options.len() + 1
    }

    /// Open the picker on the currently selected country
    pub fn open_picker(&mut self) {
        let current = self.form.country.as_text();
        let row = self
            .lookup
            .options
            .iter()
            .position(|o| o.value == current)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.picker = Some(row);
    }

    pub fn picker_down(&mut self) {
        let len = self.picker_len();
        if let Some(row) = self.picker.as_mut() {
            if *row + 1 < len {
                *row += 1;
            }
        }
    }

    pub fn picker_up(&mut self) {
        if let Some(row) = self.picker.as_mut() {
            *row = row.saturating_sub(1);
        }
    }

    /// Pick the highlighted row and close the picker
    pub fn confirm_picker(&mut self) {
        let Some(row) = self.picker.take() else {
            return;
        };
        let value = match row {
            0 => String::new(),
            n => self
                .lookup
                .options
                .get(n - 1)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
        };
        self.form.country.set_text(value);
    }
}

/// A mounted screen. Screen-local state lives here and is dropped when the
/// screen leaves the navigation stack.
#[derive(Debug)]
pub enum Screen {
    Welcome,
    Login(LoginForm),
    Register(RegisterScreen),
    Dashboard,
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Self::Welcome => Route::Welcome,
            Self::Login(_) => Route::Login,
            Self::Register(_) => Route::Register,
            Self::Dashboard => Route::Dashboard,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Navigation stack, root first; never empty
    pub stack: Vec<Screen>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            stack: vec![Screen::Welcome],
        }
    }
}

impl AppState {
    pub fn current_route(&self) -> Route {
        self.stack.last().map(Screen::route).unwrap_or_default()
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.stack.last()
    }

    pub fn current_screen_mut(&mut self) -> Option<&mut Screen> {
        self.stack.last_mut()
    }

    /// Position of a route on the stack
    pub fn position_of(&self, route: Route) -> Option<usize> {
        self.stack.iter().position(|s| s.route() == route)
    }

    /// The mounted registration screen owning `lookup_id`, if it is still mounted
    pub fn register_screen_for(&mut self, lookup_id: u64) -> Option<&mut RegisterScreen> {
        self.stack.iter_mut().find_map(|s| match s {
            Screen::Register(screen) if screen.lookup.id() == lookup_id => Some(screen),
            _ => None,
        })
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }
}
