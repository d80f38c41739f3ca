use serde::{Deserialize, Serialize};

use crate::pages::Page;
use crate::types::SimulationConfig;

/// All operations that can be dispatched to the root shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Make `page` the current page. No ordering guard: any page is reachable
    /// from any other.
    Navigate { page: Page },
    /// Hand a submitted setup to the shell and move past the setup page.
    CompleteSetup { config: SimulationConfig },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_roundtrip() {
        let cmd = Command::Navigate {
            page: Page::Summary,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"Navigate":{"page":"summary"}}"#);
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
