use crate::errors::{Result, ValidationError};

/// One canned answer and the words that trigger it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRule {
    pub keywords: Vec<String>,
    pub template: String,
}

impl ChatRule {
    pub fn new(keywords: &[&str], template: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            template: template.to_string(),
        }
    }
}

/// Answers a message with the template of the first rule whose keywords
/// appear in it, or the fallback when none match.
///
/// Matching is on whole words after lowercasing; rule order decides ties.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    rules: Vec<ChatRule>,
    fallback: String,
}

impl ChatResponder {
    pub fn new(rules: Vec<ChatRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    pub fn respond(&self, message: &str) -> Result<String> {
        let message = message.trim().to_lowercase();
        if message.is_empty() {
            return Err(ValidationError::MissingField("message".to_string()).into());
        }

        let words: Vec<&str> = message
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let reply = self
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| words.contains(&k.as_str())))
            .map(|rule| rule.template.clone())
            .unwrap_or_else(|| self.fallback.clone());
        Ok(reply)
    }
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(
            vec![
                ChatRule::new(
                    &["hello", "hi", "hey"],
                    "Hello! I can talk about your portfolio, market trends, and investing basics. What would you like to know?",
                ),
                ChatRule::new(
                    &["portfolio", "holdings", "holding"],
                    "Your portfolio page shows each holding's cost basis, current value, and performance over the last six months.",
                ),
                ChatRule::new(
                    &["buy", "sell", "invest"],
                    "Decide on a plan before trading: know why you are buying, how much you are willing to risk, and when you would sell.",
                ),
                ChatRule::new(
                    &["risk", "diversify", "diversification"],
                    "Spreading money across sectors and asset types lowers the impact any single stock can have on your portfolio.",
                ),
                ChatRule::new(
                    &["trend", "trends", "market"],
                    "Long-term trends are easier to read on weekly or monthly charts; daily moves are mostly noise.",
                ),
                ChatRule::new(
                    &["dividend", "dividends", "yield"],
                    "Dividends are cash payments to shareholders. The yield is the annual dividend divided by the share price.",
                ),
                ChatRule::new(
                    &["price", "quote", "ticker"],
                    "Use the stock search page to see a ticker's last month of closing prices and its company profile.",
                ),
            ],
            "I'm not sure about that one. Try asking about your portfolio, market trends, risk, or dividends.",
        )
    }
}
