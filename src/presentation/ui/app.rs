//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tracing::{debug, info, warn};

use crate::application::dto::OrderDraft;
use crate::application::use_cases::{CreateOrderUseCase, ListOrdersUseCase};
use crate::domain::ports::OrderStorePort;
use crate::domain::validation::OrderSchema;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{HomeKeyResult, HomeScreen, Route, StubScreen};
use crate::presentation::widgets::Sidebar;

const SIDEBAR_WIDTH: u16 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Sidebar,
    Content,
}

/// Application orchestrator owning the layout, routing and screens.
pub struct App {
    state: AppState,
    route: Route,
    focus: Focus,
    sidebar_cursor: usize,
    home: HomeScreen,
    create_order: CreateOrderUseCase,
    list_orders: ListOrdersUseCase,
    theme: Theme,
}

impl App {
    /// Creates the application from its store port and configuration.
    #[must_use]
    pub fn new(store: Arc<dyn OrderStorePort>, config: &AppConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        let create_order = CreateOrderUseCase::new(store.clone(), OrderSchema::default());
        let list_orders = ListOrdersUseCase::new(store);
        let home = HomeScreen::new(config.ui.currency_symbol.clone(), theme.accent);

        let route = config
            .route
            .as_deref()
            .map_or(Route::Home, Route::from_path);

        Self {
            state: AppState::Running,
            route,
            focus: Focus::Content,
            sidebar_cursor: Self::route_index(route),
            home,
            create_order,
            list_orders,
            theme,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be drawn.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.refresh_orders().await;

        let mut terminal_events = EventStream::new();
        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            match terminal_events.next().await {
                Some(Ok(event)) => {
                    self.handle_terminal_event(event).await;
                    terminal.draw(|frame| self.render(frame))?;
                }
                Some(Err(e)) => {
                    warn!(error = %e, "Terminal event error");
                }
                None => break,
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    async fn handle_terminal_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            self.handle_key(key).await;
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if self.route == Route::Home && self.home.dialog_open() {
            if let HomeKeyResult::Submit(draft) = self.home.handle_key(key) {
                self.submit_order(draft).await;
            }
            return;
        }

        if EventHandler::is_quit_event(&key) {
            self.state = AppState::Exiting;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Content,
                    Focus::Content => Focus::Sidebar,
                };
            }
            _ => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(key),
                Focus::Content => {
                    if self.route == Route::Home {
                        let _ = self.home.handle_key(key);
                    }
                }
            },
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.sidebar_cursor = (self.sidebar_cursor + 1).min(Route::ALL.len() - 1);
            }
            KeyCode::Enter => {
                self.navigate(Route::ALL[self.sidebar_cursor]);
            }
            _ => {}
        }
    }

    fn navigate(&mut self, route: Route) {
        if self.route != route {
            debug!(path = route.path(), "Navigating");
            self.route = route;
            self.focus = Focus::Content;
        }
    }

    async fn submit_order(&mut self, draft: OrderDraft) {
        match self.create_order.execute(draft).await {
            Ok(order) => {
                self.home.order_created(&order);
                self.refresh_orders().await;
            }
            Err(e) => {
                warn!(error = %e, "Order submission rejected");
                self.home.submit_rejected(&e);
            }
        }
    }

    async fn refresh_orders(&mut self) {
        match self.list_orders.execute().await {
            Ok(orders) => self.home.set_orders(orders),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load orders");
                self.home.load_failed(&e);
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)]);
        let [sidebar_area, content_area] = layout.areas(frame.area());

        let sidebar = Sidebar::new(self.route)
            .cursor(Route::ALL[self.sidebar_cursor])
            .focused(self.focus == Focus::Sidebar)
            .accent(self.theme.accent);
        frame.render_widget(sidebar, sidebar_area);

        match self.route {
            Route::Home => frame.render_widget(&self.home, content_area),
            other => frame.render_widget(&StubScreen::new(other), content_area),
        }
    }

    const fn route_index(route: Route) -> usize {
        match route {
            Route::Home => 0,
            Route::Blogs => 1,
            Route::Contact => 2,
        }
    }
}
