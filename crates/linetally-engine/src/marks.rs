//! Rank → marks lookup tables.
//!
//! Tables are ordered configuration data rather than hard-coded
//! branching so tests (and a future settings page) can substitute
//! alternate point schemes. The defaults reproduce the floor scoring
//! sheet exactly.

use serde::{Deserialize, Serialize};

/// One scoring rule: ranks up to and including `max_rank` earn `marks`.
/// `max_rank: None` is an unbounded tail matching any rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkRule {
    pub max_rank: Option<u32>,
    pub marks: u32,
}

impl MarkRule {
    pub fn up_to(max_rank: u32, marks: u32) -> Self {
        Self { max_rank: Some(max_rank), marks }
    }

    pub fn otherwise(marks: u32) -> Self {
        Self { max_rank: None, marks }
    }
}

/// The four per-metric rule tables, each ordered by ascending ceiling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkTables {
    pub amount: Vec<MarkRule>,
    pub efficiency: Vec<MarkRule>,
    pub absenteeism: Vec<MarkRule>,
    pub rejection: Vec<MarkRule>,
}

impl Default for MarkTables {
    /// Floor scoring sheet values. Maximum attainable total is
    /// 25 + 10 + 15 + 25 = 75.
    fn default() -> Self {
        Self {
            amount: vec![
                MarkRule::up_to(2, 25),
                MarkRule::up_to(5, 10),
                MarkRule::up_to(10, 5),
            ],
            efficiency: vec![
                MarkRule::up_to(2, 10),
                MarkRule::up_to(5, 4),
                MarkRule::up_to(10, 2),
            ],
            absenteeism: vec![
                MarkRule::up_to(6, 15),
                MarkRule::up_to(9, 10),
                MarkRule::otherwise(4),
            ],
            rejection: vec![
                MarkRule::up_to(4, 25),
                MarkRule::otherwise(20),
            ],
        }
    }
}

/// Marks for a given dense rank. Rank 0 means unranked (inactive or
/// excluded from the metric) and always scores 0. A rank past every
/// finite ceiling scores 0 unless the table carries an unbounded tail.
pub fn marks_for_rank(rank: u32, rules: &[MarkRule]) -> u32 {
    if rank == 0 {
        return 0;
    }
    for rule in rules {
        match rule.max_rank {
            Some(ceiling) if rank <= ceiling => return rule.marks,
            Some(_) => continue,
            None => return rule.marks,
        }
    }
    0
}
