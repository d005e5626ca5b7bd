use std::fmt;

use serde::Serialize;

use crate::ephemeris::TimeSnapshot;

/// The values shown in the published status block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub mars_sol: i64,
    pub curiosity_sol: i64,
    /// Curiosity local true solar time, `HH:MM`
    pub curiosity_ltst: String,
    pub opportunity_sol: i64,
}

impl From<&TimeSnapshot> for StatusReport {
    fn from(snapshot: &TimeSnapshot) -> Self {
        StatusReport {
            mars_sol: snapshot.mars_sol(),
            curiosity_sol: snapshot.curiosity.sol_index,
            curiosity_ltst: snapshot.curiosity.ltst_hm(),
            opportunity_sol: snapshot.opportunity.sol_index,
        }
    }
}

/// Renders the markdown list inserted between the document markers.
///
/// The block is framed by blank lines so it stays a separate list in the
/// surrounding markdown.
impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\n1. **Current Mars Sol Date**: {}\
             \n1. **Curiosity Mission Sol**: {}\
             \n1. **Curiosity Local True Solar Time**: {}\
             \n1. **Opportunity Mission Sol**: {}\n\n",
            self.mars_sol, self.curiosity_sol, self.curiosity_ltst, self.opportunity_sol
        )
    }
}

/// Status block for a snapshot
pub fn render_status(snapshot: &TimeSnapshot) -> String {
    StatusReport::from(snapshot).to_string()
}
