//! Static team roster served by the about endpoint.

use serde::{Deserialize, Serialize};

/// Roster entry describing one of the application's authors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub first_name: String,
    pub last_name: String,
}

/// The development team, in presentation order.
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            first_name: "Yaakov".to_string(),
            last_name: "Israeli".to_string(),
        },
        TeamMember {
            first_name: "Koren".to_string(),
            last_name: "Abugov".to_string(),
        },
    ]
}
