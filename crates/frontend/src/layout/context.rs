use leptos::prelude::*;

/// Management screens of the console. Each one declares the permission
/// the session must hold for the sidebar to offer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Categories,
    Trades,
    Services,
    Materials,
    Roles,
    Users,
    Companies,
}

pub const NAV_SCREENS: &[Screen] = &[
    Screen::Categories,
    Screen::Trades,
    Screen::Services,
    Screen::Materials,
    Screen::Roles,
    Screen::Users,
    Screen::Companies,
];

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Categories => "Categories",
            Screen::Trades => "Trades",
            Screen::Services => "Services",
            Screen::Materials => "Materials",
            Screen::Roles => "Roles",
            Screen::Users => "Users",
            Screen::Companies => "Companies",
        }
    }

    pub fn nav_icon(&self) -> &'static str {
        match self {
            Screen::Categories => "grid",
            Screen::Trades => "briefcase",
            Screen::Services => "wrench",
            Screen::Materials => "package",
            Screen::Roles => "shield",
            Screen::Users => "users",
            Screen::Companies => "building",
        }
    }

    pub fn permission(&self) -> &'static str {
        match self {
            Screen::Categories | Screen::Trades | Screen::Services | Screen::Materials => {
                "catalog.manage"
            }
            Screen::Roles => "roles.manage",
            Screen::Users => "users.manage",
            Screen::Companies => "companies.manage",
        }
    }
}

/// Which screen fills the shell. Provided once per authenticated layout.
#[derive(Clone, Copy)]
pub struct ScreenContext {
    pub active: RwSignal<Screen>,
}

impl ScreenContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::Categories),
        }
    }

    pub fn open(&self, screen: Screen) {
        self.active.set(screen);
    }
}

impl Default for ScreenContext {
    fn default() -> Self {
        Self::new()
    }
}
