//! Configuration
//!
//! Options are layered: global defaults, then the behavior's defaults, then
//! whatever the caller supplied. The caller always wins.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, StickerError};
use crate::hooks::{AdjustHeight, FillCallback, FillTick, Hook, HookEvent, Hooks};

/// Class prefix used when the caller does not pick one
pub const DEFAULT_NAMESPACE: &str = "sticker";

/// The closed set of sticky behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BehaviorKind {
    /// Pin to the top of the viewport
    #[default]
    Top,
    /// Pin to the bottom of the viewport
    Bottom,
    /// Pin a footer to the bottom while the page is shorter than the viewport
    Fill,
    /// Push down inside a bounding container
    Sidebar,
}

impl BehaviorKind {
    pub fn name(self) -> &'static str {
        match self {
            BehaviorKind::Top => "top",
            BehaviorKind::Bottom => "bottom",
            BehaviorKind::Fill => "fill",
            BehaviorKind::Sidebar => "sidebar",
        }
    }

    /// Option defaults this behavior contributes
    pub fn defaults(self) -> BehaviorDefaults {
        match self {
            BehaviorKind::Top | BehaviorKind::Sidebar => BehaviorDefaults {
                top_space: Some(0.0),
                ..BehaviorDefaults::default()
            },
            BehaviorKind::Bottom => BehaviorDefaults {
                bottom_space: Some(0.0),
                ..BehaviorDefaults::default()
            },
            BehaviorKind::Fill => BehaviorDefaults {
                check: Some(true),
                ..BehaviorDefaults::default()
            },
        }
    }
}

impl FromStr for BehaviorKind {
    type Err = StickerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(BehaviorKind::Top),
            "bottom" => Ok(BehaviorKind::Bottom),
            "fill" => Ok(BehaviorKind::Fill),
            "sidebar" => Ok(BehaviorKind::Sidebar),
            other => Err(StickerError::UnknownBehavior(other.to_string())),
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-behavior option defaults; `None` means the behavior has no opinion
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BehaviorDefaults {
    pub top_space: Option<f64>,
    pub bottom_space: Option<f64>,
    pub check: Option<bool>,
}

/// Serializable part of the options, as it appears in JSON config
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerConfig {
    pub namespace: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub top_space: Option<f64>,
    pub bottom_space: Option<f64>,
    pub check: Option<bool>,
}

impl StickerConfig {
    /// Parse a JSON object such as `{"type": "sidebar", "topSpace": 30}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Caller-supplied options. Unset fields fall back to defaults.
#[derive(Clone)]
pub struct Options<N> {
    pub namespace: Option<String>,
    pub kind: Option<BehaviorKind>,
    pub top_space: Option<f64>,
    pub bottom_space: Option<f64>,
    /// Bounding container for `sidebar`; defaults to the wrapper's parent
    pub container: Option<N>,
    /// Poll document height for `fill`
    pub check: Option<bool>,
    pub adjust_height: Option<AdjustHeight>,
    pub callback: Option<FillCallback>,
    pub hooks: Hooks,
}

impl<N> Default for Options<N> {
    fn default() -> Self {
        Self {
            namespace: None,
            kind: None,
            top_space: None,
            bottom_space: None,
            container: None,
            check: None,
            adjust_height: None,
            callback: None,
            hooks: Hooks::new(),
        }
    }
}

impl<N> Options<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a given behavior
    pub fn of(kind: BehaviorKind) -> Self {
        Self::new().kind(kind)
    }

    /// Build options from parsed config, validating the behavior name
    pub fn from_config(config: StickerConfig) -> Result<Self> {
        let kind = config.kind.as_deref().map(str::parse).transpose()?;
        Ok(Self {
            namespace: config.namespace,
            kind,
            top_space: config.top_space,
            bottom_space: config.bottom_space,
            check: config.check,
            ..Self::default()
        })
    }

    /// Shorthand for `from_config(StickerConfig::from_json(json)?)`
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(StickerConfig::from_json(json)?)
    }

    pub fn kind(mut self, kind: BehaviorKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn top_space(mut self, px: f64) -> Self {
        self.top_space = Some(px);
        self
    }

    pub fn bottom_space(mut self, px: f64) -> Self {
        self.bottom_space = Some(px);
        self
    }

    pub fn container(mut self, container: N) -> Self {
        self.container = Some(container);
        self
    }

    pub fn check(mut self, check: bool) -> Self {
        self.check = Some(check);
        self
    }

    pub fn adjust_height(mut self, f: impl Fn(f64, f64) -> f64 + 'static) -> Self {
        self.adjust_height = Some(Rc::new(f));
        self
    }

    pub fn callback(mut self, f: impl Fn(&FillTick) + 'static) -> Self {
        self.callback = Some(Rc::new(f));
        self
    }

    /// Attach a hook handler
    pub fn on(mut self, hook: Hook, f: impl Fn(&HookEvent) + 'static) -> Self {
        self.hooks.on(hook, f);
        self
    }
}

impl<N: fmt::Debug> fmt::Debug for Options<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("top_space", &self.top_space)
            .field("bottom_space", &self.bottom_space)
            .field("container", &self.container)
            .field("check", &self.check)
            .field("adjust_height", &self.adjust_height.is_some())
            .field("callback", &self.callback.is_some())
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Fully merged options an instance runs with
#[derive(Clone)]
pub struct Settings<N> {
    pub namespace: String,
    pub kind: BehaviorKind,
    pub top_space: f64,
    pub bottom_space: f64,
    pub container: Option<N>,
    pub check: bool,
    pub adjust_height: Option<AdjustHeight>,
    pub callback: Option<FillCallback>,
    pub hooks: Hooks,
}

impl<N: Copy> Settings<N> {
    /// Merge global defaults < behavior defaults < caller options
    pub fn resolve(options: &Options<N>) -> Self {
        let kind = options.kind.unwrap_or_default();
        let defaults = kind.defaults();

        Self {
            namespace: options
                .namespace
                .clone()
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            kind,
            top_space: options.top_space.or(defaults.top_space).unwrap_or(0.0),
            bottom_space: options.bottom_space.or(defaults.bottom_space).unwrap_or(0.0),
            container: options.container,
            check: options.check.or(defaults.check).unwrap_or(false),
            adjust_height: options.adjust_height.clone(),
            callback: options.callback.clone(),
            hooks: options.hooks.clone(),
        }
    }

    /// Overwrite one option
    pub fn apply(&mut self, setting: Setting<N>) {
        match setting {
            Setting::TopSpace(px) => self.top_space = px,
            Setting::BottomSpace(px) => self.bottom_space = px,
            Setting::Container(container) => self.container = container,
            Setting::Check(check) => self.check = check,
            Setting::AdjustHeight(f) => self.adjust_height = f,
            Setting::Callback(f) => self.callback = f,
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Settings<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("top_space", &self.top_space)
            .field("bottom_space", &self.bottom_space)
            .field("container", &self.container)
            .field("check", &self.check)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// A single option change for `set`
#[derive(Clone)]
pub enum Setting<N> {
    TopSpace(f64),
    BottomSpace(f64),
    Container(Option<N>),
    Check(bool),
    AdjustHeight(Option<AdjustHeight>),
    Callback(Option<FillCallback>),
}
