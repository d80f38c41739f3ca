//! The five pages selectable from the root shell.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five mutually exclusive pages of the app, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Setup,
    Simulation,
    Charts,
    Summary,
    Export,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Setup,
        Page::Simulation,
        Page::Charts,
        Page::Summary,
        Page::Export,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Setup => "setup",
            Page::Simulation => "simulation",
            Page::Charts => "charts",
            Page::Summary => "summary",
            Page::Export => "export",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Setup => "Configuração",
            Page::Simulation => "Simulação",
            Page::Charts => "Gráficos",
            Page::Summary => "Resumo",
            Page::Export => "Exportar",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Setup => "⚙️",
            Page::Simulation => "📊",
            Page::Charts => "📈",
            Page::Summary => "📋",
            Page::Export => "💾",
        }
    }

    /// 0-based position in [`Page::ALL`].
    pub fn index(self) -> usize {
        match self {
            Page::Setup => 0,
            Page::Simulation => 1,
            Page::Charts => 2,
            Page::Summary => 3,
            Page::Export => 4,
        }
    }

    /// The page after this one. `Export` is last.
    pub fn next(self) -> Option<Page> {
        Page::ALL.get(self.index() + 1).copied()
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Page::ALL.get(index).copied()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page '{0}'. Valid pages: setup, simulation, charts, summary, export")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}
