use platform_host::{DesktopIcon, StoreItem};

pub const STORE_APP_ID: &str = "store";
pub const ICONS_UNAVAILABLE_MESSAGE: &str =
    "Desktop icons unavailable: is the companion service running?";
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalApp {
    Files,
    Terminal,
    Settings,
    Browser,
}

impl InternalApp {
    pub const ALL: [Self; 4] = [Self::Files, Self::Terminal, Self::Settings, Self::Browser];

    pub fn id(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Terminal => "terminal",
            Self::Settings => "settings",
            Self::Browser => "browser",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Files => "Files",
            Self::Terminal => "Terminal",
            Self::Settings => "Settings",
            Self::Browser => "Browser",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app| app.id() == id)
    }
}

/// What activating a desktop icon does, decided once when the icon list arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconTarget {
    Store,
    InternalApp(InternalApp),
    ExternalApp(String),
}

impl IconTarget {
    pub fn classify(app_id: &str) -> Self {
        if app_id == STORE_APP_ID {
            return Self::Store;
        }
        match InternalApp::from_id(app_id) {
            Some(app) => Self::InternalApp(app),
            None => Self::ExternalApp(app_id.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopIconEntry {
    pub icon: DesktopIcon,
    pub target: IconTarget,
}

impl DesktopIconEntry {
    pub fn new(icon: DesktopIcon) -> Self {
        let target = IconTarget::classify(&icon.id);
        Self { icon, target }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub w: i32,
    pub h: i32,
}

impl Viewport {
    /// Placement shared by every newly opened window.
    pub fn default_window_position(self) -> WindowPosition {
        WindowPosition {
            x: self.w / 4,
            y: self.h / 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub id: String,
    pub app: InternalApp,
    pub title: String,
    pub position: WindowPosition,
}

impl WindowState {
    pub fn new(app: InternalApp, position: WindowPosition) -> Self {
        Self {
            id: app.id().to_string(),
            app,
            title: app.title().to_string(),
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: String,
    /// Pointer position minus window position at drag start.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellView {
    #[default]
    Booting,
    Desktop,
    StoreOpen,
}

impl ShellView {
    pub fn token(self) -> &'static str {
        match self {
            Self::Booting => "booting",
            Self::Desktop => "desktop",
            Self::StoreOpen => "store",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreState {
    #[default]
    Loading,
    Loaded(Vec<StoreItem>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub view: ShellView,
    pub icons: Vec<DesktopIconEntry>,
    pub icons_requested: bool,
    /// Render order; the last window is on top.
    pub windows: Vec<WindowState>,
    pub banner: Option<String>,
    pub store: StoreState,
    pub store_generation: u64,
    pub assistant_open: bool,
}

impl DesktopState {
    pub fn window(&self, window_id: &str) -> Option<&WindowState> {
        self.windows.iter().find(|window| window.id == window_id)
    }

    pub fn icon(&self, icon_id: &str) -> Option<&DesktopIconEntry> {
        self.icons.iter().find(|entry| entry.icon.id == icon_id)
    }
}
