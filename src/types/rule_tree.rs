use serde::{Deserialize, Serialize};

/// The canonical, serializable form of a compiled keyword rule.
///
/// This is the structure the task-configuration layer stores next to the raw
/// expression and the matching engine later evaluates against content. The
/// JSON shape is `{"op":"KEYWORD","value":...}` for leaves and
/// `{"op":"OR"|"AND","children":[...]}` for operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "UPPERCASE")]
pub enum RuleTree {
    Keyword { value: String },
    Or { children: Vec<RuleTree> },
    And { children: Vec<RuleTree> },
}

impl RuleTree {
    /// All literal keyword values in the tree, left to right.
    #[must_use]
    pub fn keywords(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_keywords(&mut out);
        out
    }

    fn collect_keywords<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RuleTree::Keyword { value } => out.push(value),
            RuleTree::Or { children } | RuleTree::And { children } => {
                for child in children {
                    child.collect_keywords(out);
                }
            }
        }
    }
}
