//! Handler for `getRecommendedArticles`.
//!
//! The search context names every directory company the article mentions
//! and every heading currently on screen. Four suggestions are derived from
//! it and stored for display.

use std::future::Future;
use std::pin::Pin;

use crate::state::{DeskContext, RecommendedArticle, Recommendations};
use crate::tools::{InputSchema, ToolArguments, ToolContext, ToolHandler, ToolResult};

pub struct RecommendedArticlesHandler {
    desk: DeskContext,
}

impl RecommendedArticlesHandler {
    pub fn new(desk: DeskContext) -> Self {
        Self { desk }
    }
}

/// `Companies: ...` and `Topics: ...`, each only when non-empty.
pub fn search_context(companies: &[String], topics: &[String]) -> String {
    let mut parts = Vec::new();
    if !companies.is_empty() {
        parts.push(format!("Companies: {}", companies.join(", ")));
    }
    if !topics.is_empty() {
        parts.push(format!("Topics: {}", topics.join(", ")));
    }
    parts.join(" | ")
}

pub fn suggest(companies: &[String], topics: &[String]) -> Vec<RecommendedArticle> {
    let first_company = companies.first().map(String::as_str).unwrap_or("Industry");
    let first_topic = topics.first().map(String::as_str).unwrap_or("Market");
    let second_topic = topics.get(1).map(String::as_str).unwrap_or("Strategic");
    let rivals = companies
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" vs ");

    let article = |title: String, date: &str, author: &str, kind: &str| RecommendedArticle {
        title,
        date: date.to_string(),
        authors: vec![author.to_string()],
        kind: kind.to_string(),
    };

    vec![
        article(
            format!("{} Market Analysis: Latest Trends and Insights", first_company),
            "Oct 14, 2025",
            "Michael Chen",
            "Analysis",
        ),
        article(
            format!("{} Deep Dive: Opportunities and Challenges", first_topic),
            "Oct 13, 2025",
            "Sarah Anderson",
            "Research",
        ),
        article(
            format!("Competitive Landscape: {}", rivals),
            "Oct 12, 2025",
            "David Thompson",
            "Industry Report",
        ),
        article(
            format!("{} Outlook 2026: Key Predictions", second_topic),
            "Oct 11, 2025",
            "Emma Rodriguez",
            "Forecast",
        ),
    ]
}

impl ToolHandler for RecommendedArticlesHandler {
    fn name(&self) -> &str {
        "getRecommendedArticles"
    }

    fn description(&self) -> &str {
        "Get article recommendations based on current content"
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::empty()
    }

    fn execute(
        &self,
        _args: ToolArguments,
        _ctx: &ToolContext,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + '_>> {
        Box::pin(async move {
            let mut state = self.desk.lock().await;
            let text = state.article.full_text();
            let companies: Vec<String> = self
                .desk
                .directory()
                .mentioned_in(&text)
                .into_iter()
                .map(|c| c.name.clone())
                .collect();
            let topics = state.visible_headings();

            let context = search_context(&companies, &topics);
            let articles = suggest(&companies, &topics);
            let reply = format!(
                "Found {} relevant articles based on current content. Context: {}",
                articles.len(),
                context
            );
            state.recommendations = Some(Recommendations {
                articles,
                search_context: context,
            });
            Ok(ToolResult::text(reply))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_context_parts() {
        assert_eq!(
            search_context(&strings(&["OpenAI", "NVIDIA"]), &strings(&["Executive Summary"])),
            "Companies: OpenAI, NVIDIA | Topics: Executive Summary"
        );
        assert_eq!(search_context(&[], &strings(&["Risks"])), "Topics: Risks");
        assert_eq!(search_context(&[], &[]), "");
    }

    #[test]
    fn test_suggestions_fall_back_without_context() {
        let articles = suggest(&[], &[]);
        assert_eq!(articles.len(), 4);
        assert_eq!(articles[0].title, "Industry Market Analysis: Latest Trends and Insights");
        assert_eq!(articles[1].title, "Market Deep Dive: Opportunities and Challenges");
        assert_eq!(articles[2].title, "Competitive Landscape: ");
        assert_eq!(articles[3].title, "Strategic Outlook 2026: Key Predictions");
    }

    #[test]
    fn test_suggestions_use_context() {
        let articles = suggest(
            &strings(&["OpenAI", "Anthropic", "NVIDIA"]),
            &strings(&["Executive Summary", "Infrastructure Expansion"]),
        );
        assert_eq!(articles[0].title, "OpenAI Market Analysis: Latest Trends and Insights");
        assert_eq!(articles[2].title, "Competitive Landscape: OpenAI vs Anthropic");
        assert_eq!(articles[3].title, "Infrastructure Expansion Outlook 2026: Key Predictions");
        assert_eq!(articles[3].kind, "Forecast");
    }
}
