use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use directories::ProjectDirs;
use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, de};
use tracing::warn;

use crate::{app::Mode, framework::Action, store::LowerBound};

const CONFIG: &str = include_str!("../.config/config.json5");

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
}

/// Initial state and decrement policy of the shared counter.
#[derive(Clone, Copy, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CounterConfig {
    #[serde(default)]
    pub initial: i64,
    #[serde(default)]
    pub lower_bound: LowerBound,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub counter: CounterConfig,
}

impl Config {
    /// Load the user's config file (if any) and fill in missing keybindings from the defaults.
    pub fn new() -> Result<Self> {
        Self::load(&get_config_dir(), &get_data_dir())
    }

    /// Layer the first config file found in `config_dir` over the embedded defaults.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self> {
        let default_config: Config = json5::from_str(CONFIG)?;
        let mut builder = config::Config::builder()
            .set_default("data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            warn!("No configuration file found in {config_dir:?}, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        if !found_config {
            cfg.counter = default_config.counter;
        }
        cfg.keybindings.merge_defaults(&default_config.keybindings);
        Ok(cfg)
    }
}

pub fn get_data_dir() -> PathBuf {
    if let Some(s) = DATA_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "bloodnighttw", env!("CARGO_PKG_NAME"))
}

/// Key sequence -> action, per mode.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Mode, HashMap<Vec<KeyEvent>, Action>>);

impl KeyBindings {
    /// Add every default binding the user did not override.
    pub fn merge_defaults(&mut self, defaults: &KeyBindings) {
        for (mode, default_bindings) in defaults.iter() {
            let user_bindings = self.entry(*mode).or_default();
            for (keys, action) in default_bindings {
                user_bindings
                    .entry(keys.clone())
                    .or_insert_with(|| action.clone());
            }
        }
    }

    /// Look up the action bound to a single key press in `mode`.
    pub fn action_for(&self, mode: Mode, key: KeyEvent) -> Option<&Action> {
        self.get(&mode)?.get(&vec![normalize_key(key)])
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Mode, HashMap<String, Action>>::deserialize(deserializer)?;

        let mut keybindings = HashMap::with_capacity(parsed_map.len());
        for (mode, inner_map) in parsed_map {
            let mut converted = HashMap::with_capacity(inner_map.len());
            for (key_str, action) in inner_map {
                let keys = parse_key_sequence(&key_str).map_err(de::Error::custom)?;
                converted.insert(keys, action);
            }
            keybindings.insert(mode, converted);
        }

        Ok(KeyBindings(keybindings))
    }
}

/// Strip what terminals report inconsistently: shift on character keys (the
/// character already carries it), the event kind and the lock-key state.
pub fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if matches!(key.code, KeyCode::Char(_)) {
        key.modifiers.remove(KeyModifiers::SHIFT);
    }
    key.kind = KeyEventKind::Press;
    key.state = KeyEventState::NONE;
    key
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "plus" => KeyCode::Char('+'),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(format!("Unable to parse `{raw}`")),
        },
        c if c.chars().count() == 1 => {
            let mut ch = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                ch = ch.to_ascii_uppercase();
            }
            KeyCode::Char(ch)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(normalize_key(KeyEvent::new(code, modifiers)))
}

/// Parse `<ctrl-a>` or `<g><g>` into the key events it names.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Unable to parse `{raw}`"))?;
    inner.split("><").map(parse_key_event).collect()
}
