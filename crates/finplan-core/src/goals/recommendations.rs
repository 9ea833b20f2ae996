use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::format_compact_inr;
use crate::types::Money;

/// Goal categories with dedicated guidance. Anything else maps to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalCategory {
    EmergencyFund,
    ChildEducation,
    HousePurchase,
    Retirement,
    Marriage,
    Business,
    Healthcare,
    General,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 8] = [
        GoalCategory::EmergencyFund,
        GoalCategory::ChildEducation,
        GoalCategory::HousePurchase,
        GoalCategory::Retirement,
        GoalCategory::Marriage,
        GoalCategory::Business,
        GoalCategory::Healthcare,
        GoalCategory::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GoalCategory::EmergencyFund => "Emergency Fund",
            GoalCategory::ChildEducation => "Child Education",
            GoalCategory::HousePurchase => "House Purchase",
            GoalCategory::Retirement => "Retirement",
            GoalCategory::Marriage => "Marriage",
            GoalCategory::Business => "Business",
            GoalCategory::Healthcare => "Healthcare",
            GoalCategory::General => "General",
        }
    }

    /// Look up a category by its exact display label; anything else becomes `General`.
    pub fn from_label(label: &str) -> Self {
        GoalCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == label)
            .unwrap_or(GoalCategory::General)
    }
}

impl From<String> for GoalCategory {
    fn from(label: String) -> Self {
        GoalCategory::from_label(&label)
    }
}

impl From<GoalCategory> for String {
    fn from(category: GoalCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A saved goal as handed over by the goal store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub target_amount: Money,
    pub target_date: NaiveDate,
    #[serde(default = "default_category")]
    pub category: GoalCategory,
}

fn default_category() -> GoalCategory {
    GoalCategory::General
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecommendationInput {
    pub category: GoalCategory,
    #[serde(default)]
    pub target_amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecommendationOutput {
    pub category: GoalCategory,
    pub recommendation: String,
}

/// Fixed guidance text for a goal category.
pub fn get_goal_recommendations(category: GoalCategory, target_amount: Money) -> String {
    let amount = format_compact_inr(target_amount);
    match category {
        GoalCategory::EmergencyFund => format!(
            "Build your emergency fund gradually. Aim for 6 months of expenses (₹{}). \
             Keep it in liquid funds or savings account for easy access.",
            amount
        ),
        GoalCategory::ChildEducation => "Education costs are rising at 10-12% annually. \
             Consider starting early with equity mutual funds through SIP. \
             Sukanya Samriddhi Yojana is excellent for girl child education."
            .to_string(),
        GoalCategory::HousePurchase => "Home buying requires 20% down payment plus registration costs. \
             Start with diversified equity funds for long-term wealth creation. \
             Consider home loan pre-approval."
            .to_string(),
        GoalCategory::Retirement => "Retirement planning needs 25-30 times your annual expenses. \
             Start early, use EPF, PPF, and equity mutual funds. \
             The power of compounding works best over 20+ years."
            .to_string(),
        GoalCategory::Marriage => "Wedding expenses can be significant. Plan 12-18 months ahead. \
             Use debt funds for short-term goals, equity funds for longer timelines."
            .to_string(),
        GoalCategory::Business => "Business goals need careful planning. Keep some money liquid, \
             research your market, and consider taking a business loan for remaining capital."
            .to_string(),
        GoalCategory::Healthcare => "Health expenses are unpredictable. \
             Maintain health insurance plus a separate medical emergency fund. \
             Consider investing in liquid or ultra-short-term funds."
            .to_string(),
        GoalCategory::General => format!(
            "Set up automatic monthly transfers towards your goal of ₹{}. \
             Review and adjust monthly based on your progress.",
            amount
        ),
    }
}

/// Recommendation for a saved goal.
pub fn recommend_for_goal(goal: &Goal) -> GoalRecommendationOutput {
    GoalRecommendationOutput {
        category: goal.category,
        recommendation: get_goal_recommendations(goal.category, goal.target_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_label_round_trip() {
        for category in GoalCategory::ALL {
            assert_eq!(GoalCategory::from_label(category.as_str()), category);
        }
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(GoalCategory::from_label("Vacation"), GoalCategory::General);
        assert_eq!(GoalCategory::from_label("retirement"), GoalCategory::General);
        assert_eq!(GoalCategory::from_label(" Retirement"), GoalCategory::General);
        let parsed: GoalCategory = serde_json::from_str(r#""Yacht""#).unwrap();
        assert_eq!(parsed, GoalCategory::General);
        let text = get_goal_recommendations(parsed, dec!(250_000));
        assert!(text.contains("₹2.5L"), "{}", text);
    }

    #[test]
    fn test_emergency_fund_mentions_amount() {
        let text = get_goal_recommendations(GoalCategory::EmergencyFund, dec!(300_000));
        assert!(text.starts_with("Build your emergency fund gradually."));
        assert!(text.contains("(₹3.0L)"));
    }

    #[test]
    fn test_category_serialises_as_label() {
        let json = serde_json::to_string(&GoalCategory::HousePurchase).unwrap();
        assert_eq!(json, r#""House Purchase""#);
    }

    #[test]
    fn test_recommend_for_goal() {
        let goal: Goal = serde_json::from_str(
            r#"{"target_amount":"50000","target_date":"2027-06-30","category":"Marriage"}"#,
        )
        .unwrap();
        let out = recommend_for_goal(&goal);
        assert_eq!(out.category, GoalCategory::Marriage);
        assert!(out.recommendation.starts_with("Wedding expenses"));
    }
}
