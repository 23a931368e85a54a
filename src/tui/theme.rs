// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, ParseColorError, Style};
use thiserror::Error;

pub(crate) const PALETTE_ENV: &str = "HOLOCRON_TUI_PALETTE";

/// What a color is used for. `HOLOCRON_TUI_PALETTE` overrides any of these with
/// comma-separated `role=color` pairs, e.g. `accent=#33ff33,dim=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Fg,
    Bg,
    Accent,
    Tab,
    Heading,
    Label,
    Dim,
    Error,
}

const ROLES: usize = 8;

impl Role {
    const ALL: [Self; ROLES] = [
        Self::Fg,
        Self::Bg,
        Self::Accent,
        Self::Tab,
        Self::Heading,
        Self::Label,
        Self::Dim,
        Self::Error,
    ];

    const fn key(self) -> &'static str {
        match self {
            Self::Fg => "fg",
            Self::Bg => "bg",
            Self::Accent => "accent",
            Self::Tab => "tab",
            Self::Heading => "heading",
            Self::Label => "label",
            Self::Dim => "dim",
            Self::Error => "error",
        }
    }

    /// Terminal default colors leave fg/bg alone.
    const fn fallback(self) -> Option<Color> {
        match self {
            Self::Fg | Self::Bg => None,
            Self::Accent => Some(Color::LightGreen),
            Self::Tab => Some(Color::Yellow),
            Self::Heading => Some(Color::White),
            Self::Label => Some(Color::Cyan),
            Self::Dim => Some(Color::DarkGray),
            Self::Error => Some(Color::Red),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key().eq_ignore_ascii_case(key))
    }
}

#[derive(Debug, Error)]
pub(crate) enum ThemeError {
    #[error("HOLOCRON_TUI_PALETTE is not valid unicode")]
    NotUnicode,
    #[error("invalid HOLOCRON_TUI_PALETTE entry `{entry}` (expected role=color)")]
    Entry { entry: String },
    #[error(
        "unknown HOLOCRON_TUI_PALETTE role `{role}` (expected fg, bg, accent, tab, heading, label, dim or error)"
    )]
    Role { role: String },
    #[error("invalid HOLOCRON_TUI_PALETTE color `{value}` for {role}")]
    Color {
        role: &'static str,
        value: String,
        #[source]
        source: ParseColorError,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TuiTheme {
    overrides: [Option<Color>; ROLES],
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Result<String, env::VarError>,
    ) -> Result<Self, ThemeError> {
        match lookup(PALETTE_ENV) {
            Ok(value) => value.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(ThemeError::NotUnicode),
        }
    }

    fn color(&self, role: Role) -> Option<Color> {
        self.overrides[role as usize].or(role.fallback())
    }

    fn role_style(&self, role: Role) -> Style {
        let style = self.base_style();
        match self.color(role) {
            Some(color) => style.fg(color),
            None => style,
        }
    }

    pub(crate) fn base_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.color(Role::Fg) {
            style = style.fg(fg);
        }
        if let Some(bg) = self.color(Role::Bg) {
            style = style.bg(bg);
        }
        style
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.role_style(Role::Accent)
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn active_tab_style(&self) -> Style {
        self.role_style(Role::Tab).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn heading_style(&self) -> Style {
        self.role_style(Role::Heading).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn label_style(&self) -> Style {
        self.role_style(Role::Label)
    }

    pub(crate) fn dim_style(&self) -> Style {
        self.role_style(Role::Dim)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.role_style(Role::Error)
    }
}

impl FromStr for TuiTheme {
    type Err = ThemeError;

    /// Blank entries are skipped; a later entry for the same role wins.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut overrides = [None; ROLES];
        for entry in value.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let (key, raw) = entry
                .split_once('=')
                .ok_or_else(|| ThemeError::Entry { entry: entry.to_owned() })?;
            let role = Role::from_key(key.trim())
                .ok_or_else(|| ThemeError::Role { role: key.trim().to_owned() })?;
            let raw = raw.trim();
            let color = raw.parse::<Color>().map_err(|source| ThemeError::Color {
                role: role.key(),
                value: raw.to_owned(),
                source,
            })?;
            overrides[role as usize] = Some(color);
        }
        Ok(Self { overrides })
    }
}
