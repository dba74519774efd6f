//! Static table of games: flavor text and rule toggles per game id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// How a game expects answers to be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SolutionKind {
    Move,
    Square,
    Number,
}

impl SolutionKind {
    /// Guesses are squares clicked on the board and get highlighted there.
    pub fn marks_squares(self) -> bool {
        self == SolutionKind::Square
    }

    /// Guesses are typed in (SAN moves or numbers).
    pub fn accepts_typed_answers(self) -> bool {
        matches!(self, SolutionKind::Move | SolutionKind::Number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub title: String,
    pub rules: String,
    pub story: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogic {
    /// Move on as soon as every solution is found.
    pub auto_advance: bool,
    pub solution_kind: SolutionKind,
    /// "No solution" is a valid answer for some puzzles.
    #[serde(default)]
    pub allow_no_solution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub id: &'static str,
    pub flavor: Flavor,
    pub logic: GameLogic,
}

static GAMES: LazyLock<BTreeMap<&'static str, GameInfo>> = LazyLock::new(|| {
    [
        game(
            "knight-forks",
            "Catapult Knights",
            "Click a square that if you were to drop a knight on it, all pieces would be attacked. Otherwise click No Solution.",
            "The king and queen of the enemy army think they're safe chilling at the local outdoor pub. Catapult a knight across the kingdom (it's a Tactical Elements brand catapult) and cause mayhem!",
            GameLogic {
                auto_advance: true,
                solution_kind: SolutionKind::Square,
                allow_no_solution: true,
            },
        ),
        game(
            "checks-captures",
            "Checks/Captures",
            "By clicking squares, perform all legal captures and checks for either side.",
            "Tomorrow the war reaches your small village. Analyze the crawling battlefield to determine where destruction is inevitable.",
            GameLogic {
                auto_advance: false,
                solution_kind: SolutionKind::Move,
                allow_no_solution: false,
            },
        ),
        game(
            "counting",
            "Count Capture Points",
            "Watch the animation and determine the final change in material difference after all captures, using relative piece values. Captures of Pawns are worth 1 point, Knights and Bishops are worth 3 points, Rooks are worth 5 points, and Queens are worth 9 points. For example, if a pawn captures a knight and then the pawn is captured, the answer would be 2. If a queen captures a pawn and a pawn takes back, the total is -8",
            "The death toll from the war increases every day. The war has gone on far too long and soon will be the mutual ruin of both kingdoms. You must prepare a PowerPoint slide presentation to convince the ruling monarchs that peace is the best option.",
            GameLogic {
                auto_advance: true,
                solution_kind: SolutionKind::Number,
                allow_no_solution: false,
            },
        ),
        game(
            "undefended",
            "Enchant the Undefended",
            "Click undefended pieces. A piece is considered undefended if there are no allies who have sight on its square.",
            "The battlefield is littered with fallen chesspersons. Opposing forces clash, blinded by mutual hatred and pricked on by a thirst for blood. There is however a chance for peace. Find the chesspersons who are most vulnerable and pacify them to quell the cycle of violence.",
            GameLogic {
                auto_advance: false,
                solution_kind: SolutionKind::Square,
                allow_no_solution: false,
            },
        ),
    ]
    .into_iter()
    .map(|info| (info.id, info))
    .collect()
});

fn game(id: &'static str, title: &str, rules: &str, story: &str, logic: GameLogic) -> GameInfo {
    GameInfo {
        id,
        flavor: Flavor {
            title: title.to_string(),
            rules: rules.to_string(),
            story: story.to_string(),
        },
        logic,
    }
}

pub fn game_info(id: &str) -> Option<&'static GameInfo> {
    GAMES.get(id)
}

pub fn flavor(id: &str) -> Option<&'static Flavor> {
    game_info(id).map(|g| &g.flavor)
}

pub fn logic(id: &str) -> Option<&'static GameLogic> {
    game_info(id).map(|g| &g.logic)
}

/// Registered game ids, sorted.
pub fn game_ids() -> impl Iterator<Item = &'static str> {
    GAMES.keys().copied()
}
