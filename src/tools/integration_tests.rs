//! End-to-end dispatch through the default registry against a fresh desk.

use serde_json::{Value, json};

use super::*;
use crate::config::DeskConfig;
use crate::state::{DeskContext, DisplayMode};

fn desk() -> (DeskContext, ToolRegistry) {
    let desk = DeskContext::new(DeskConfig {
        seed: Some(42),
        ..Default::default()
    });
    let registry = default_registry(&desk).unwrap();
    (desk, registry)
}

fn invocation(name: &str, arguments: Value) -> ToolInvocation {
    let arguments = arguments.as_object().cloned().unwrap_or_default();
    ToolInvocation::new(name, arguments)
}

async fn call(registry: &ToolRegistry, name: &str, arguments: Value) -> ToolOutcome<ToolResult> {
    registry
        .dispatch(invocation(name, arguments), &ToolContext::new(Caller::Cli))
        .await
}

async fn reply(registry: &ToolRegistry, name: &str, arguments: Value) -> String {
    call(registry, name, arguments)
        .await
        .unwrap()
        .first_text()
        .unwrap()
        .to_string()
}

async fn annotate(desk: &DeskContext) -> String {
    desk.lock()
        .await
        .article
        .annotate("strong market leadership", "Worth watching", "tester")
        .unwrap()
        .into_inner()
}

fn valid_args(name: &str) -> Value {
    match name {
        "updateGraphForTicker" | "addToWatchlist" | "removeFromWatchlist" => json!({"ticker": "NVDA"}),
        "changeTitle" => json!({"title": "New Title"}),
        "scrollPage" => json!({"direction": "down"}),
        "autoScroll" => json!({"direction": "down", "speed": "normal"}),
        "showCompany" => json!({"companyName": "OpenAI"}),
        "highlightArticleContent" => json!({"term": "NVIDIA"}),
        "annotateText" => json!({"text": "strong market leadership", "note": "Worth watching"}),
        "updateAnnotation" => json!({"note": "Revised"}),
        "removeAnnotation" => json!({}),
        "saveSnippet" => json!({"text": "Key highlights include a $100 billion NVIDIA partnership"}),
        _ => json!({}),
    }
}

#[tokio::test]
async fn test_catalog_is_complete() {
    let (_desk, registry) = desk();
    let names: Vec<String> = registry.list_names().into_iter().map(|n| n.into_inner()).collect();
    for expected in [
        "toggleDayNightMode",
        "setNightMode",
        "setDayMode",
        "updateGraphForTicker",
        "changeTitle",
        "scrollPage",
        "autoScroll",
        "stopAutoScroll",
        "addToWatchlist",
        "removeFromWatchlist",
        "clearWatchlist",
        "subscribeToAuthor",
        "saveArticle",
        "emailArticle",
        "getRecommendedArticles",
        "showCompany",
        "highlightArticleContent",
        "annotateText",
        "updateAnnotation",
        "removeAnnotation",
        "saveSnippet",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {}", expected);
    }
    assert_eq!(registry.len(), 21);
}

#[tokio::test]
async fn test_every_tool_answers_with_text() {
    let (desk, registry) = desk();
    for name in registry.list_names() {
        let mut args = valid_args(name.as_str());
        if matches!(name.as_str(), "updateAnnotation" | "removeAnnotation") {
            args["id"] = json!(annotate(&desk).await);
        }
        let result = call(&registry, name.as_str(), args)
            .await
            .unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        let text = result.first_text().unwrap_or_default();
        assert!(!text.is_empty(), "{} returned no text", name);
    }
    desk.auto_scroller().stop().await;
}

#[tokio::test]
async fn test_unknown_tool() {
    let (_desk, registry) = desk();
    let err = call(&registry, "doesNotExist", json!({})).await.unwrap_err();
    assert_eq!(err, ToolError::UnknownTool("doesNotExist".into()));
}

#[tokio::test]
async fn test_change_title_requires_title() {
    let (desk, registry) = desk();
    let err = call(&registry, "changeTitle", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "title"));

    let err = call(&registry, "changeTitle", json!({"title": null})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "title"));
    assert_eq!(desk.lock().await.title, crate::config::DEFAULT_TITLE);
}

#[tokio::test]
async fn test_change_title() {
    let (desk, registry) = desk();
    let text = reply(&registry, "changeTitle", json!({"title": "Q4 Outlook"})).await;
    assert_eq!(text, "Title has been updated.");

    let state = desk.lock().await;
    assert_eq!(state.title, "Q4 Outlook");
    assert_eq!(
        state.notifications.back().unwrap().message,
        "Title has been updated successfully"
    );
}

#[tokio::test]
async fn test_clear_watchlist_is_idempotent() {
    let (desk, registry) = desk();
    for _ in 0..2 {
        let text = reply(&registry, "clearWatchlist", json!({})).await;
        assert_eq!(text, "Successfully cleared watchlist.");
        let state = desk.lock().await;
        assert!(state.watchlist.is_empty());
        assert_eq!(state.chart.label, "");
    }
}

#[tokio::test]
async fn test_stop_auto_scroll_without_scroll_is_noop() {
    let (desk, registry) = desk();
    for _ in 0..2 {
        let text = reply(&registry, "stopAutoScroll", json!({})).await;
        assert_eq!(text, "No auto-scroll in progress.");
    }
    assert_eq!(desk.lock().await.scroll.offset, 0.0);
}

#[tokio::test]
async fn test_add_to_watchlist_upserts() {
    let (desk, registry) = desk();
    let before = desk.lock().await.watchlist.len();

    reply(&registry, "addToWatchlist", json!({"ticker": "X"})).await;
    let first = desk.lock().await.watchlist.get("X").cloned().unwrap();
    let text = reply(&registry, "addToWatchlist", json!({"ticker": "X"})).await;
    assert_eq!(text, "Added X to watchlist and updated chart display.");

    let state = desk.lock().await;
    let entries: Vec<_> = state.watchlist.entries().iter().filter(|e| e.symbol.as_str() == "X").collect();
    assert_eq!(entries.len(), 1);
    assert_ne!(entries[0].price, first.price);
    assert_eq!(state.watchlist.len(), before + 1);
    assert_eq!(state.chart.label, "X");
}

#[tokio::test]
async fn test_add_known_company_uses_its_trend() {
    let (desk, registry) = desk();
    reply(&registry, "addToWatchlist", json!({"ticker": "nvidia"})).await;
    {
        let state = desk.lock().await;
        assert_eq!(state.chart.stroke, "#22c55e");
        let last = state.chart.series.last().unwrap();
        let entry = state.watchlist.get("nvidia").unwrap();
        assert!(last.value > entry.price);
        assert_eq!(state.chart.series.len(), 5);
    }

    reply(&registry, "addToWatchlist", json!({"ticker": "Oracle"})).await;
    assert_eq!(desk.lock().await.chart.stroke, "#ef4444");

    reply(&registry, "addToWatchlist", json!({"ticker": "ZZZZ"})).await;
    assert_eq!(desk.lock().await.chart.stroke, "#f59e42");
}

#[tokio::test]
async fn test_remove_from_watchlist() {
    let (desk, registry) = desk();
    reply(&registry, "addToWatchlist", json!({"ticker": "X"})).await;

    for _ in 0..2 {
        let text = reply(&registry, "removeFromWatchlist", json!({"ticker": "X"})).await;
        assert_eq!(text, "Removed X from watchlist.");
        let state = desk.lock().await;
        assert!(!state.watchlist.contains("X"));
        // Label falls back to the first remaining entry.
        assert_eq!(state.chart.label, "OPENAI");
    }
}

#[tokio::test]
async fn test_add_remove_clear_scenario() {
    let (desk, registry) = desk();
    reply(&registry, "addToWatchlist", json!({"ticker": "NVDA"})).await;
    reply(&registry, "removeFromWatchlist", json!({"ticker": "NVDA"})).await;
    reply(&registry, "clearWatchlist", json!({})).await;
    assert_eq!(desk.lock().await.watchlist.len(), 0);
}

#[tokio::test]
async fn test_toggle_twice_restores_mode() {
    let (desk, registry) = desk();
    let original = desk.lock().await.display_mode;

    let text = reply(&registry, "toggleDayNightMode", json!({})).await;
    assert_eq!(text, "Day/Night mode toggled for comfortable reading.");
    assert_eq!(desk.lock().await.display_mode, original.toggled());

    reply(&registry, "toggleDayNightMode", json!({})).await;
    assert_eq!(desk.lock().await.display_mode, original);
}

#[tokio::test]
async fn test_set_modes_are_absolute() {
    let (desk, registry) = desk();
    for _ in 0..2 {
        assert_eq!(
            reply(&registry, "setDayMode", json!({})).await,
            "Day mode toggled for comfortable reading."
        );
        assert_eq!(desk.lock().await.display_mode, DisplayMode::Day);
    }
    reply(&registry, "setNightMode", json!({})).await;
    assert_eq!(desk.lock().await.display_mode, DisplayMode::Night);
}

#[tokio::test]
async fn test_update_graph_for_ticker() {
    let (desk, registry) = desk();
    let before = desk.lock().await.chart.clone();

    let text = reply(&registry, "updateGraphForTicker", json!({"ticker": "ORCL"})).await;

    let state = desk.lock().await;
    assert_eq!(state.chart.label, "ORCL");
    assert_eq!(state.chart.series.len(), before.series.len());
    let times = |c: &crate::state::ChartState| c.series.iter().map(|p| p.time.clone()).collect::<Vec<_>>();
    assert_eq!(times(&state.chart), times(&before));
    assert!(state.chart.series.iter().all(|p| (0.0..=10000.0).contains(&p.value) && p.value.fract() == 0.0));
    assert_eq!(text, format!("Graph updated for ORCL with color {}.", state.chart.stroke));
    assert!(state.chart.stroke.starts_with('#') && state.chart.stroke.len() == 7);
}

#[tokio::test]
async fn test_scroll_page() {
    let (desk, registry) = desk();
    let viewport = desk.config().viewport_height;

    let text = reply(&registry, "scrollPage", json!({"direction": "down"})).await;
    assert_eq!(text, "Scrolled down by one page.");
    assert_eq!(desk.lock().await.scroll.offset, viewport);

    reply(&registry, "scrollPage", json!({"direction": "up"})).await;
    reply(&registry, "scrollPage", json!({"direction": "up"})).await;
    assert_eq!(desk.lock().await.scroll.offset, 0.0);

    let err = call(&registry, "scrollPage", json!({"direction": "left"})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "direction"));
}

#[tokio::test(start_paused = true)]
async fn test_auto_scroll_runs_until_stopped() {
    let (desk, registry) = desk();
    let text = reply(&registry, "autoScroll", json!({"direction": "down", "speed": "fast"})).await;
    assert_eq!(text, "Auto-scroll started (down, fast). Call stopAutoScroll to stop.");

    tokio::time::sleep(desk.auto_scroller().tick() * 10).await;
    assert!(desk.lock().await.scroll.offset > 0.0);

    assert_eq!(reply(&registry, "stopAutoScroll", json!({})).await, "Auto-scroll stopped.");
    assert_eq!(
        reply(&registry, "stopAutoScroll", json!({})).await,
        "No auto-scroll in progress."
    );
}

#[tokio::test]
async fn test_auto_scroll_rejects_unknown_speed() {
    let (desk, registry) = desk();
    let err = call(&registry, "autoScroll", json!({"direction": "down", "speed": "warp"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "speed"));
    assert!(desk.auto_scroller().status().await.is_none());
}

#[tokio::test]
async fn test_acknowledgements_notify() {
    let (desk, registry) = desk();
    assert_eq!(
        reply(&registry, "subscribeToAuthor", json!({})).await,
        "Successfully subscribed to author."
    );
    assert_eq!(
        reply(&registry, "saveArticle", json!({})).await,
        "Article saved to Read Later collection."
    );
    assert_eq!(reply(&registry, "emailArticle", json!({})).await, "Article sent to email.");

    let state = desk.lock().await;
    let messages: Vec<&str> = state.notifications.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "You have now been subscribed to the author of this article",
            "This article has been added to your Read Later collection",
            "This article has been delivered to your inbox",
        ]
    );
}

#[tokio::test]
async fn test_recommended_articles() {
    let (desk, registry) = desk();
    let text = reply(&registry, "getRecommendedArticles", json!({})).await;
    assert!(text.starts_with("Found 4 relevant articles based on current content. Context: "));
    assert!(text.contains("Companies: OpenAI, Anthropic, NVIDIA"));
    assert!(text.contains(" | Topics: Executive Summary"));

    let state = desk.lock().await;
    let recs = state.recommendations.as_ref().unwrap();
    assert_eq!(recs.articles.len(), 4);
    assert_eq!(recs.articles[0].title, "OpenAI Market Analysis: Latest Trends and Insights");
    assert_eq!(recs.articles[2].title, "Competitive Landscape: OpenAI vs Anthropic");
    assert!(text.ends_with(&recs.search_context));
}

#[tokio::test]
async fn test_show_company() {
    let (desk, registry) = desk();
    let text = reply(&registry, "showCompany", json!({"companyName": "nvidia"})).await;
    assert_eq!(text, "Showing profile for NVIDIA");
    {
        let state = desk.lock().await;
        let preview = state.company_preview.as_ref().unwrap();
        assert!(!preview.company.synthetic);
        assert!(!preview.sentences.is_empty());
    }

    let text = reply(&registry, "showCompany", json!({"companyName": "Acme Robotics"})).await;
    assert_eq!(text, "Showing profile for Acme Robotics");
    let state = desk.lock().await;
    let preview = state.company_preview.as_ref().unwrap();
    assert!(preview.company.synthetic);
    assert_eq!(preview.company.kind, "Emerging Technology");
    assert!(preview.sentences.is_empty());
}

#[tokio::test]
async fn test_highlight_article_content() {
    let (desk, registry) = desk();
    let text = reply(&registry, "highlightArticleContent", json!({"term": "oracle"})).await;
    assert_eq!(text, "Highlighted \"oracle\" in the article");

    let state = desk.lock().await;
    assert!(!state.article.highlights().is_empty());
    assert!(state
        .article
        .highlights()
        .iter()
        .all(|h| h.sentence.to_lowercase().contains("oracle")));
}

#[tokio::test]
async fn test_annotate_text() {
    let (desk, registry) = desk();
    let text = reply(
        &registry,
        "annotateText",
        json!({"text": "strong market leadership", "note": "Check Q3 numbers"}),
    )
    .await;
    assert!(text.starts_with("Annotation annotation-"));
    assert!(text.ends_with(" added."));

    let state = desk.lock().await;
    let annotation = state.article.annotations().next().unwrap();
    assert_eq!(annotation.note, "Check Q3 numbers");
    assert_eq!(annotation.author, "Brian Scott");
    assert_eq!(annotation.section_id.as_str(), "executive-summary");
}

#[tokio::test]
async fn test_annotate_missing_passage_is_handler_error() {
    let (desk, registry) = desk();
    let err = call(
        &registry,
        "annotateText",
        json!({"text": "not in the article at all", "note": "?"}),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ToolError::HandlerError(ref msg) if msg.contains("not in the article at all")));
    assert_eq!(desk.lock().await.article.annotations().count(), 0);
}

#[tokio::test]
async fn test_update_annotation() {
    let (desk, registry) = desk();
    let id = annotate(&desk).await;
    let text = reply(
        &registry,
        "updateAnnotation",
        json!({"id": id, "note": "Revised after earnings"}),
    )
    .await;
    assert_eq!(text, format!("Annotation {} updated.", id));

    let state = desk.lock().await;
    let annotation = state.article.annotation(&id).unwrap();
    assert_eq!(annotation.note, "Revised after earnings");
    assert_eq!(annotation.author, "Brian Scott");
    assert_eq!(annotation.passage, "strong market leadership");
}

#[tokio::test]
async fn test_remove_annotation() {
    let (desk, registry) = desk();
    let id = annotate(&desk).await;
    let text = reply(&registry, "removeAnnotation", json!({"id": id})).await;
    assert_eq!(text, format!("Annotation {} removed.", id));
    assert_eq!(desk.lock().await.article.annotations().count(), 0);

    let err = call(&registry, "removeAnnotation", json!({"id": id}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::HandlerError(ref msg) if msg.contains(&id)));
}

#[tokio::test]
async fn test_update_unknown_annotation_is_handler_error() {
    let (desk, registry) = desk();
    let err = call(
        &registry,
        "updateAnnotation",
        json!({"id": "annotation-missing", "note": "x"}),
    )
    .await
    .unwrap_err();
    assert_eq!(
        err,
        ToolError::HandlerError("Annotation not found: annotation-missing".to_string())
    );
    assert!(desk.lock().await.notifications.is_empty());
}

#[tokio::test]
async fn test_update_annotation_requires_note() {
    let (desk, registry) = desk();
    let id = annotate(&desk).await;
    let err = call(&registry, "updateAnnotation", json!({"id": id}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { ref field, .. } if field == "note"));
}

#[tokio::test]
async fn test_save_snippet_newest_first() {
    let (desk, registry) = desk();
    assert_eq!(reply(&registry, "saveSnippet", json!({"text": "first"})).await, "Snippet saved.");
    reply(&registry, "saveSnippet", json!({"text": "second"})).await;

    let state = desk.lock().await;
    let snippets = state.article.snippets();
    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0].text, "second");
    assert_eq!(snippets[0].summary, "Selected Text Summary: second...");
}

#[tokio::test]
async fn test_extra_arguments_are_ignored() {
    let (desk, registry) = desk();
    reply(&registry, "clearWatchlist", json!({"force": true})).await;
    reply(&registry, "changeTitle", json!({"title": "T", "subtitle": 3})).await;
    assert_eq!(desk.lock().await.title, "T");
}
