use serde::{Deserialize, Serialize};

/// Score bands, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditGrade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditGrade {
    pub fn from_score(score: i32) -> Self {
        if score >= 750 {
            CreditGrade::Excellent
        } else if score >= 700 {
            CreditGrade::Good
        } else if score >= 650 {
            CreditGrade::Fair
        } else {
            CreditGrade::Poor
        }
    }

    /// Inclusive score bounds of the band, as displayed.
    pub fn range(self) -> &'static str {
        match self {
            CreditGrade::Excellent => "750-850",
            CreditGrade::Good => "700-749",
            CreditGrade::Fair => "650-699",
            CreditGrade::Poor => "300-649",
        }
    }

    pub fn tips(self) -> &'static [&'static str] {
        match self {
            CreditGrade::Excellent => &[
                "Excellent credit score! Maintain your good financial habits.",
                "You qualify for the best interest rates on loans and credit cards.",
                "Continue monitoring your credit report regularly.",
            ],
            CreditGrade::Good => &[
                "Good credit score! Keep credit utilization below 30%.",
                "Pay all bills on time to maintain your score.",
                "Maintain older credit accounts for better credit history.",
            ],
            CreditGrade::Fair => &[
                "Fair credit score. Pay down existing debt.",
                "Never miss payment due dates.",
                "Don't apply for too many loans/cards at once.",
            ],
            CreditGrade::Poor => &[
                "Focus on paying all bills on time.",
                "Reduce your debt-to-income ratio.",
                "Build a longer credit history.",
                "Avoid loan defaults and late payments.",
            ],
        }
    }
}

impl std::fmt::Display for CreditGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreditGrade::Excellent => write!(f, "Excellent"),
            CreditGrade::Good => write!(f, "Good"),
            CreditGrade::Fair => write!(f, "Fair"),
            CreditGrade::Poor => write!(f, "Poor"),
        }
    }
}

/// Improvement tips for the band containing `score`.
pub fn get_improvement_tips(score: i32) -> Vec<String> {
    CreditGrade::from_score(score)
        .tips()
        .iter()
        .map(|t| t.to_string())
        .collect()
}
