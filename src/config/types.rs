use serde::{Deserialize, Serialize};

use crate::ui::drawer::Easing;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub routes: RouteConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "default_destinations")]
    pub destinations: Vec<Destination>,
    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntry>,
}

/// Navigation shell and drawer animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Title shown in the header bar.
    #[serde(default = "default_title")]
    pub title: String,
    /// Drawer width as a fraction of the viewport width at mount time.
    #[serde(default = "default_drawer_width_ratio")]
    pub drawer_width_ratio: f32,
    /// Duration of one open/close transition in milliseconds (250..=300).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Easing curve applied to the transition.
    #[serde(default)]
    pub easing: Easing,
    /// Frame tick interval in milliseconds.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

/// Well-known locations used by the guard and the auth flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Entry screen and root of the unauthenticated section.
    #[serde(default = "default_entry_path")]
    pub entry: String,
    /// Location shown after a successful login or signup.
    #[serde(default = "default_home_path")]
    pub home: String,
}

/// Mock authentication backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated network latency in milliseconds.
    #[serde(default = "default_auth_latency_ms")]
    pub latency_ms: u64,
}

/// A top-level destination in the tab strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub label: String,
    pub glyph: Glyph,
    pub path: String,
}

/// A side-menu node. Children are only shown while the parent is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

/// Glyph ids for tab strip icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Dashboard,
    Users,
    Clipboard,
    Package,
    Home,
    Rupee,
}

impl Glyph {
    /// Single-cell symbol used in the terminal.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Dashboard => "▦",
            Glyph::Users => "☺",
            Glyph::Clipboard => "☰",
            Glyph::Package => "▣",
            Glyph::Home => "⌂",
            Glyph::Rupee => "₹",
        }
    }
}

impl Destination {
    fn new(label: &str, glyph: Glyph, path: &str) -> Self {
        Self {
            label: label.to_string(),
            glyph,
            path: path.to_string(),
        }
    }
}

impl MenuEntry {
    pub fn leaf(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            children: Vec::new(),
        }
    }

    pub fn parent(label: &str, path: &str, children: Vec<MenuEntry>) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

fn default_title() -> String {
    "TK Tech Kothari".to_string()
}

fn default_drawer_width_ratio() -> f32 {
    0.75
}

fn default_transition_ms() -> u64 {
    300
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_entry_path() -> String {
    "/(auth)".to_string()
}

fn default_home_path() -> String {
    "/dashboard".to_string()
}

fn default_auth_latency_ms() -> u64 {
    1000
}

fn default_destinations() -> Vec<Destination> {
    vec![
        Destination::new("Dashboard", Glyph::Dashboard, "/dashboard"),
        Destination::new("Dealers", Glyph::Users, "/dealers"),
        Destination::new("Orders", Glyph::Clipboard, "/orders"),
        Destination::new("Inventory", Glyph::Package, "/inventory"),
        Destination::new("Field Dev", Glyph::Home, "/field-development"),
        Destination::new("Settlement", Glyph::Rupee, "/settlement"),
    ]
}

fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::leaf("Dashboard", "/dashboard"),
        MenuEntry::parent(
            "Dealers",
            "/dealers",
            vec![
                MenuEntry::leaf("Dealer Info", "/dealers/info"),
                MenuEntry::leaf("Payment", "/dealers/payment"),
                MenuEntry::leaf("Dealer Outstanding", "/dealers/outstanding"),
                MenuEntry::leaf("Dealer History", "/dealers/history"),
                MenuEntry::leaf("Credit Note", "/dealers/credit-note"),
            ],
        ),
        MenuEntry::parent(
            "Orders",
            "/orders",
            vec![
                MenuEntry::leaf("Place Order", "/orders/place"),
                MenuEntry::leaf("My Orders", "/orders/my-orders"),
                MenuEntry::leaf("Track Order", "/orders/track"),
            ],
        ),
        MenuEntry::leaf("Inventory", "/inventory"),
        MenuEntry::leaf("Field Development", "/field-development"),
        MenuEntry::leaf("Settlement", "/settlement"),
    ]
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            drawer_width_ratio: default_drawer_width_ratio(),
            transition_ms: default_transition_ms(),
            easing: Easing::default(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            entry: default_entry_path(),
            home: default_home_path(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_auth_latency_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: ShellConfig::default(),
            routes: RouteConfig::default(),
            auth: AuthConfig::default(),
            destinations: default_destinations(),
            menu: default_menu(),
        }
    }
}
