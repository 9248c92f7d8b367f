//! Application state and core logic

use crate::config::TuiConfig;
use crate::lookup::{CountrySource, RestCountriesClient};
use crate::platform;
use crate::state::{
    AppState, FieldKind, Form, FormField, LoginForm, LookupEvent, RegisterScreen, Route, Screen,
    SplashState,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where the registration screen gets its countries from
    countries: Arc<dyn CountrySource>,
    lookup_tx: mpsc::UnboundedSender<LookupEvent>,
    lookup_rx: mpsc::UnboundedReceiver<LookupEvent>,
    /// Id handed to the next registration screen mount
    next_lookup_id: u64,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen state, `None` once hidden
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create the app with the HTTP country source described by `config`
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = RestCountriesClient::new(config.countries_url(), config.request_timeout())?;
        let mut app = Self::with_source(Arc::new(client));

        // Stays unloaded until the terminal is up and has drawn a frame
        app.splash_state = Some(if config.skip_splash() {
            SplashState::without_animation()
        } else {
            SplashState::new()
        });

        Ok(app)
    }

    /// Startup work is done; the splash may hide once its animation completes
    pub fn finish_loading(&mut self) {
        if let Some(splash) = self.splash_state.as_mut() {
            if !splash.is_loaded() {
                tracing::debug!("startup finished");
                splash.mark_loaded();
            }
        }
    }

    /// Create the app on the welcome screen with a given country source
    pub fn with_source(countries: Arc<dyn CountrySource>) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            countries,
            lookup_tx,
            lookup_rx,
            next_lookup_id: 0,
            quit: false,
            splash_state: None,
        }
    }

    /// Update splash animation state.
    /// Returns true when the splash was hidden by this call.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                tracing::debug!("splash hidden");
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        self.splash_state.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the visible screen is waiting on the country list
    pub fn is_loading(&self) -> bool {
        matches!(self.state.current_screen(), Some(Screen::Register(screen)) if screen.lookup.loading)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
            return Ok(());
        }

        match self.state.current_route() {
            Route::Welcome => self.handle_welcome_key(key),
            Route::Login => self.handle_login_key(key),
            Route::Register => self.handle_register_key(key),
            Route::Dashboard => self.handle_dashboard_key(key),
        }

        Ok(())
    }

    /// Navigate to a route.
    ///
    /// A route already on the stack is returned to, unmounting everything
    /// above it; any other route is mounted and pushed.
    pub fn navigate(&mut self, route: Route) {
        if let Some(pos) = self.state.position_of(route) {
            self.state.stack.truncate(pos + 1);
        } else {
            let screen = self.mount(route);
            self.state.stack.push(screen);
        }
        tracing::debug!(
            path = route.path(),
            depth = self.state.stack.len(),
            "navigated"
        );
    }

    /// Pop the current screen
    pub fn go_back(&mut self) {
        if self.state.can_go_back() {
            self.state.stack.pop();
        }
    }

    /// Build fresh screen state for a route
    fn mount(&mut self, route: Route) -> Screen {
        match route {
            Route::Welcome => Screen::Welcome,
            Route::Login => Screen::Login(LoginForm::new()),
            Route::Register => {
                let lookup_id = self.next_lookup_id;
                self.next_lookup_id += 1;

                let mut screen = RegisterScreen::new(lookup_id);
                screen.lookup.begin(self.spawn_country_lookup(lookup_id));
                Screen::Register(screen)
            }
            Route::Dashboard => Screen::Dashboard,
        }
    }

    /// Fetch the country list in the background, reporting on the lookup channel
    fn spawn_country_lookup(&self, lookup_id: u64) -> JoinHandle<()> {
        let countries = Arc::clone(&self.countries);
        let tx = self.lookup_tx.clone();
        tokio::spawn(async move {
            let result = countries.fetch_countries().await;
            if tx.send(LookupEvent { lookup_id, result }).is_err() {
                tracing::debug!(lookup_id, "lookup channel closed");
            }
        })
    }

    /// Apply finished lookups to the screens that started them.
    /// Results for screens that are no longer mounted are dropped.
    pub fn poll_lookup_events(&mut self) {
        while let Ok(event) = self.lookup_rx.try_recv() {
            match self.state.register_screen_for(event.lookup_id) {
                Some(screen) => screen.lookup.apply(event.result),
                None => tracing::debug!(
                    lookup_id = event.lookup_id,
                    "discarding country list for unmounted screen"
                ),
            }
        }
    }

    /// Handle keys on the welcome screen
    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            // "Get Started"
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => {
                self.navigate(Route::Login)
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys on the dashboard
    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys on the login screen
    fn handle_login_key(&mut self, key: KeyEvent) {
        if platform::is_submit_key(&key) {
            self.submit_login();
            return;
        }
        let Some(Screen::Login(form)) = self.state.current_screen_mut() else {
            return;
        };
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Left | KeyCode::Right if on_buttons => form.next_button(),
            // Button order: 0=Sign In, 1=Sign Up
            KeyCode::Enter if on_buttons => {
                let sign_in = form.selected_button == 0;
                if sign_in {
                    self.submit_login();
                } else {
                    self.navigate(Route::Register);
                }
            }
            KeyCode::Enter => form.next_field(),
            _ => {
                if let Some(field) = form.get_active_field_mut() {
                    edit_field(field, key);
                }
            }
        }
    }

    /// Handle keys on the registration screen
    fn handle_register_key(&mut self, key: KeyEvent) {
        if platform::is_submit_key(&key) {
            self.submit_registration();
            return;
        }
        let Some(Screen::Register(screen)) = self.state.current_screen_mut() else {
            return;
        };

        // Country picker is modal while open
        if screen.picker.is_some() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => screen.picker_up(),
                KeyCode::Down | KeyCode::Char('j') => screen.picker_down(),
                KeyCode::Enter | KeyCode::Char(' ') => screen.confirm_picker(),
                KeyCode::Esc => screen.picker = None,
                _ => {}
            }
            return;
        }

        let on_buttons = screen.form.is_buttons_row_active();
        let on_dropdown = screen
            .form
            .get_field(screen.form.active_field())
            .is_some_and(|f| f.kind == FieldKind::Dropdown);

        match key.code {
            KeyCode::Tab | KeyCode::Down => screen.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => screen.form.prev_field(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter if on_buttons => self.submit_registration(),
            KeyCode::Enter | KeyCode::Char(' ') if on_dropdown => screen.open_picker(),
            KeyCode::Enter => screen.form.next_field(),
            _ => {
                if let Some(field) = screen.form.get_active_field_mut() {
                    edit_field(field, key);
                }
            }
        }
    }

    /// Validate the login form; on success go to the dashboard
    fn submit_login(&mut self) {
        let Some(Screen::Login(form)) = self.state.current_screen_mut() else {
            return;
        };
        match form.submit() {
            Some(credentials) => {
                tracing::info!(username = %credentials.username, "login accepted");
                self.navigate(Route::Dashboard);
            }
            None => tracing::debug!(
                attempt = form.status.submit_count,
                fields = ?form.errors().fields().collect::<Vec<_>>(),
                "login rejected"
            ),
        }
    }

    /// Validate the registration form; on success return to the welcome screen
    fn submit_registration(&mut self) {
        let Some(Screen::Register(screen)) = self.state.current_screen_mut() else {
            return;
        };
        match screen.form.submit() {
            Some(registration) => {
                tracing::info!(email = %registration.email, "registration accepted");
                self.navigate(Route::Welcome);
            }
            None => tracing::debug!(
                attempt = screen.form.status.submit_count,
                fields = ?screen.form.errors().fields().collect::<Vec<_>>(),
                "registration rejected"
            ),
        }
    }
}

/// Apply a key to the focused field according to its kind
fn edit_field(field: &mut FormField, key: KeyEvent) {
    match (field.kind, key.code) {
        (FieldKind::Text | FieldKind::Secret, KeyCode::Char(c))
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            field.push_char(c)
        }
        (FieldKind::Text | FieldKind::Secret, KeyCode::Backspace) => field.pop_char(),
        (FieldKind::Radio(_), KeyCode::Right | KeyCode::Char(' ')) => field.cycle_choice(true),
        (FieldKind::Radio(_), KeyCode::Left) => field.cycle_choice(false),
        (FieldKind::Checkbox, KeyCode::Char(' ')) => field.toggle(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{CountryOption, LookupError, MockCountrySource};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn submit(app: &mut App) {
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn app_with_countries(names: &'static [&'static str]) -> App {
        let mut source = MockCountrySource::new();
        source
            .expect_fetch_countries()
            .returning(move || Ok(names.iter().map(|n| CountryOption::new(*n)).collect()));
        App::with_source(Arc::new(source))
    }

    fn app_without_lookup() -> App {
        let mut source = MockCountrySource::new();
        source.expect_fetch_countries().never();
        App::with_source(Arc::new(source))
    }

    /// Let spawned lookups finish and deliver their results
    async fn settle(app: &mut App) {
        for _ in 0..20 {
            tokio::task::yield_now().await;
            app.poll_lookup_events();
        }
    }

    fn register_screen(app: &App) -> &RegisterScreen {
        match app.state.current_screen() {
            Some(Screen::Register(screen)) => screen,
            other => panic!("expected registration screen, got {other:?}"),
        }
    }

    fn login_form(app: &App) -> &LoginForm {
        match app.state.current_screen() {
            Some(Screen::Login(form)) => form,
            other => panic!("expected login screen, got {other:?}"),
        }
    }

    mod splash {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_no_splash_state_is_not_splash() {
            let mut app = app_without_lookup();
            assert!(!app.in_splash());
            assert!(!app.update_splash(24));
        }

        #[test]
        fn test_key_skips_splash_then_hides_once() {
            let mut app = app_without_lookup();
            let mut splash = SplashState::new();
            splash.mark_loaded();
            app.splash_state = Some(splash);

            press(&mut app, KeyCode::Enter);
            // The key only skipped the splash; it did not reach the welcome screen
            assert_eq!(app.state.current_route(), Route::Welcome);
            assert!(app.update_splash(24));
            assert!(!app.in_splash());
            assert!(!app.update_splash(24));
        }

        #[test]
        fn test_splash_waits_for_load() {
            let mut app = app_without_lookup();
            app.splash_state = Some(SplashState::without_animation());
            assert!(!app.update_splash(24));
            assert!(app.in_splash());

            if let Some(splash) = app.splash_state.as_mut() {
                splash.mark_loaded();
            }
            assert!(app.update_splash(24));
        }

        #[test]
        fn test_new_app_splash_loads_after_startup() {
            let mut app = App::new(&TuiConfig::default()).unwrap();
            assert!(app.splash_state.as_ref().is_some_and(|s| !s.is_loaded()));

            app.finish_loading();
            assert!(app.splash_state.as_ref().is_some_and(|s| s.is_loaded()));
        }

        #[test]
        fn test_skip_splash_hides_only_after_startup() {
            let config = TuiConfig {
                skip_splash: Some(true),
                ..TuiConfig::default()
            };
            let mut app = App::new(&config).unwrap();
            assert!(!app.update_splash(24));
            assert!(app.in_splash());

            app.finish_loading();
            assert!(app.update_splash(24));
            assert!(!app.in_splash());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_welcome() {
            let app = app_without_lookup();
            assert_eq!(app.state.current_route(), Route::Welcome);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_get_started_opens_login() {
            let mut app = app_without_lookup();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_route(), Route::Login);
            assert_eq!(app.state.stack.len(), 2);
        }

        #[test]
        fn test_escape_goes_back() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_route(), Route::Welcome);
        }

        #[test]
        fn test_go_back_on_root_does_nothing() {
            let mut app = app_without_lookup();
            app.go_back();
            assert_eq!(app.state.stack.len(), 1);
        }

        #[test]
        fn test_navigate_to_mounted_route_pops_back() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            app.navigate(Route::Dashboard);
            app.navigate(Route::Welcome);
            assert_eq!(app.state.stack.len(), 1);
            assert_eq!(app.state.current_route(), Route::Welcome);
        }

        #[test]
        fn test_remount_gets_fresh_form() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            type_text(&mut app, "alice");
            app.go_back();
            app.navigate(Route::Login);
            assert_eq!(login_form(&app).username.as_text(), "");
        }

        #[test]
        fn test_q_quits_from_welcome() {
            let mut app = app_without_lookup();
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }
    }

    mod login {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_login_navigates_to_dashboard() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            type_text(&mut app, "alice");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Passw0rd!");
            submit(&mut app);

            assert_eq!(app.state.current_route(), Route::Dashboard);
            match &app.state.stack[1] {
                Screen::Login(form) => assert!(form.errors().is_empty()),
                other => panic!("expected login below dashboard, got {other:?}"),
            }
        }

        #[test]
        fn test_empty_login_shows_both_errors() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            submit(&mut app);

            assert_eq!(app.state.current_route(), Route::Login);
            let form = login_form(&app);
            assert_eq!(form.error_for("username"), Some("Username is required"));
            assert_eq!(form.error_for("password"), Some("Password is required"));
        }

        #[test]
        fn test_sign_in_button_submits() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            type_text(&mut app, "alice");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "Passw0rd!");
            press(&mut app, KeyCode::Enter);
            // Buttons row, "Sign In" selected
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_route(), Route::Dashboard);
        }

        #[test]
        fn test_weak_password_blocks_navigation() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            type_text(&mut app, "alice");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "alllowercase1!");
            submit(&mut app);
            submit(&mut app);

            assert_eq!(app.state.current_route(), Route::Login);
            let form = login_form(&app);
            assert!(form.error_for("password").is_some());
            assert_eq!(form.status.submit_count, 2);
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = app_without_lookup();
            app.navigate(Route::Login);
            app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
                .unwrap();
            assert_eq!(login_form(&app).username.as_text(), "");
        }

        #[tokio::test]
        async fn test_sign_up_button_opens_registration() {
            let mut app = app_with_countries(&[]);
            app.navigate(Route::Login);
            press(&mut app, KeyCode::BackTab);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_route(), Route::Register);
        }
    }

    mod registration {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_mount_sorts_countries_from_any_source() {
            let mut app = app_with_countries(&["Zambia", "Aland"]);
            app.navigate(Route::Register);
            assert!(app.is_loading());

            settle(&mut app).await;

            let screen = register_screen(&app);
            assert!(!screen.lookup.loading);
            let labels: Vec<_> = screen.lookup.options.iter().map(|o| o.label.as_str()).collect();
            assert_eq!(labels, vec!["Aland", "Zambia"]);
        }

        #[tokio::test]
        async fn test_failed_fetch_leaves_empty_list() {
            let mut source = MockCountrySource::new();
            source.expect_fetch_countries().returning(|| {
                Err(LookupError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
            });
            let mut app = App::with_source(Arc::new(source));
            app.navigate(Route::Register);
            settle(&mut app).await;

            let screen = register_screen(&app);
            assert!(!screen.lookup.loading);
            assert!(screen.lookup.options.is_empty());
            assert!(!app.is_loading());
        }

        #[tokio::test]
        async fn test_result_for_unmounted_screen_is_discarded() {
            let mut app = app_with_countries(&["Aland"]);
            app.navigate(Route::Register);
            app.go_back();
            app.navigate(Route::Register);
            settle(&mut app).await;

            app.lookup_tx
                .send(LookupEvent {
                    lookup_id: 0,
                    result: Ok(vec![CountryOption::new("Stale")]),
                })
                .unwrap();
            app.poll_lookup_events();

            let screen = register_screen(&app);
            assert_eq!(screen.lookup.id(), 1);
            assert_eq!(screen.lookup.options, vec![CountryOption::new("Aland")]);
        }

        #[tokio::test]
        async fn test_empty_submit_reports_every_required_field() {
            let mut app = app_with_countries(&[]);
            app.navigate(Route::Register);
            submit(&mut app);

            assert_eq!(app.state.current_route(), Route::Register);
            let form = &register_screen(&app).form;
            for field in [
                "first_name",
                "last_name",
                "mobile",
                "email",
                "country",
                "password",
                "confirm_password",
                "terms",
            ] {
                assert!(form.error_for(field).is_some(), "{field}");
            }
        }

        #[tokio::test]
        async fn test_full_registration_flow() {
            let mut app = app_with_countries(&["Zambia", "Aland"]);
            app.navigate(Route::Login);
            app.navigate(Route::Register);
            settle(&mut app).await;

            type_text(&mut app, "Alice");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Liddell");
            press(&mut app, KeyCode::Tab);
            // Gender: male -> female
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "0123456789");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "alice@example.com");
            press(&mut app, KeyCode::Tab);
            // Country picker: placeholder -> Aland -> Zambia
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Passw0rd!");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Passw0rd!");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char(' '));

            let form = &register_screen(&app).form;
            assert_eq!(form.gender.as_text(), "female");
            assert_eq!(form.country.as_text(), "Zambia");
            assert!(form.terms.as_flag());

            submit(&mut app);
            assert_eq!(app.state.current_route(), Route::Welcome);
            assert_eq!(app.state.stack.len(), 1);
        }

        #[tokio::test]
        async fn test_mismatched_passwords_stay_on_screen() {
            let mut app = app_with_countries(&["Aland"]);
            app.navigate(Route::Register);
            settle(&mut app).await;

            if let Some(Screen::Register(screen)) = app.state.current_screen_mut() {
                let form = &mut screen.form;
                form.first_name.set_text("Alice");
                form.last_name.set_text("Liddell");
                form.mobile.set_text("0123456789");
                form.email.set_text("alice@example.com");
                form.country.set_text("Aland");
                form.password.set_text("Passw0rd!");
                form.confirm_password.set_text("Passw0rd!!");
                form.terms.toggle();
            }
            submit(&mut app);

            assert_eq!(app.state.current_route(), Route::Register);
            let form = &register_screen(&app).form;
            assert_eq!(form.error_for("confirm_password"), Some("Passwords do not match"));
            assert_eq!(form.error_for("password"), None);
        }

        #[tokio::test]
        async fn test_space_types_into_text_fields() {
            let mut app = app_with_countries(&[]);
            app.navigate(Route::Register);
            type_text(&mut app, "Mary Ann");
            assert_eq!(register_screen(&app).form.first_name.as_text(), "Mary Ann");
        }

        #[tokio::test]
        async fn test_escape_closes_picker_before_leaving() {
            let mut app = app_with_countries(&["Aland"]);
            app.navigate(Route::Register);
            settle(&mut app).await;
            if let Some(Screen::Register(screen)) = app.state.current_screen_mut() {
                screen.form.set_active_field(5);
            }
            press(&mut app, KeyCode::Enter);
            assert!(register_screen(&app).picker.is_some());

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_route(), Route::Register);
            assert!(register_screen(&app).picker.is_none());

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_route(), Route::Welcome);
        }
    }
}
