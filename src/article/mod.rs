//! The article being read: sections and their layout, the table of
//! contents, read tracking, term highlights, annotations and snippets.
//!
//! Layout is modelled, not rendered: every section has a `top` offset and a
//! `height` in pixels so scroll positions can be mapped to what is on screen.

mod content;
pub mod text;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types::{AnnotationId, SectionId};

pub use content::{ARTICLE_DATELINE, ARTICLE_HEADLINE};

/// Fraction of a section that must be on screen before it counts as read.
pub const READ_THRESHOLD: f64 = 0.8;

/// Errors raised by article mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleError {
    /// The passage does not occur in any section.
    PassageNotFound(String),
    /// No annotation with this id.
    AnnotationNotFound(String),
    /// Empty text where a passage was expected.
    EmptyText,
}

impl std::fmt::Display for ArticleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleError::PassageNotFound(text) => {
                write!(f, "Passage not found in article: {}", text)
            }
            ArticleError::AnnotationNotFound(id) => write!(f, "Annotation not found: {}", id),
            ArticleError::EmptyText => write!(f, "Text must not be empty"),
        }
    }
}

impl std::error::Error for ArticleError {}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub heading: String,
    pub level: u8,
    pub top: f64,
    pub height: f64,
    pub text: String,
}

impl Section {
    pub fn new(
        id: impl Into<SectionId>,
        heading: impl Into<String>,
        level: u8,
        top: f64,
        height: f64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            level,
            top,
            height,
            text: text.into(),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Portion of this section inside the viewport, relative to the
    /// smaller of its own height and the viewport height.
    pub fn visible_fraction(&self, offset: f64, viewport: f64) -> f64 {
        let overlap = (self.bottom().min(offset + viewport) - self.top.max(offset)).max(0.0);
        let basis = self.height.min(viewport);
        if basis <= 0.0 { 0.0 } else { overlap / basis }
    }

    /// Whether the section heading sits inside the viewport.
    pub fn heading_visible(&self, offset: f64, viewport: f64) -> bool {
        self.top >= offset && self.top <= offset + viewport
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    pub id: SectionId,
    pub title: String,
    pub level: u8,
    pub read: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Highlight {
    pub section_id: SectionId,
    pub term: String,
    pub sentence: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub section_id: SectionId,
    pub passage: String,
    pub note: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    pub id: Uuid,
    pub text: String,
    pub summary: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Article {
    sections: Vec<Section>,
    read: BTreeSet<SectionId>,
    highlights: Vec<Highlight>,
    annotations: BTreeMap<AnnotationId, Annotation>,
    snippets: Vec<Snippet>,
}

impl Article {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            read: BTreeSet::new(),
            highlights: Vec::new(),
            annotations: BTreeMap::new(),
            snippets: Vec::new(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(content::builtin_sections())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total laid-out height of the page.
    pub fn document_height(&self) -> f64 {
        self.sections
            .iter()
            .map(Section::bottom)
            .fold(content::HEADER_HEIGHT, f64::max)
    }

    /// Headings followed by bodies, for whole-article text search.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&section.heading);
            out.push('\n');
            out.push_str(&section.text);
            out.push_str("\n\n");
        }
        out
    }

    pub fn table_of_contents(&self) -> Vec<TocEntry> {
        self.sections
            .iter()
            .map(|s| TocEntry {
                id: s.id.clone(),
                title: s.heading.clone(),
                level: s.level,
                read: self.read.contains(&s.id),
            })
            .collect()
    }

    pub fn is_read(&self, id: &str) -> bool {
        self.read.contains(id)
    }

    pub fn read_count(&self) -> usize {
        self.read.len()
    }

    /// Mark every section that is sufficiently on screen as read.
    ///
    /// Returns the ids that became read by this call. Sections never become
    /// unread.
    pub fn mark_visible_read(&mut self, offset: f64, viewport: f64) -> Vec<SectionId> {
        let mut newly_read = Vec::new();
        for section in &self.sections {
            if section.visible_fraction(offset, viewport) >= READ_THRESHOLD
                && self.read.insert(section.id.clone())
            {
                newly_read.push(section.id.clone());
            }
        }
        newly_read
    }

    /// Headings currently inside the viewport, in reading order.
    pub fn visible_headings(&self, offset: f64, viewport: f64) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.heading_visible(offset, viewport))
            .map(|s| s.heading.as_str())
            .collect()
    }

    /// Sentences anywhere in the article that mention `name`.
    pub fn sentences_mentioning(&self, name: &str) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|s| text::sentences_containing(&s.text, name))
            .map(str::to_string)
            .collect()
    }

    /// Highlight every sentence containing `term`.
    ///
    /// `pick_color` is asked for one colour per newly highlighted sentence.
    /// Sentences already highlighted for the same term are left alone.
    /// Returns the number of sentences that mention the term.
    pub fn highlight<F>(&mut self, term: &str, mut pick_color: F) -> usize
    where
        F: FnMut() -> String,
    {
        let mut matched = 0;
        let folded = term.to_lowercase();
        for section in &self.sections {
            for sentence in text::sentences_containing(&section.text, term) {
                matched += 1;
                let already = self.highlights.iter().any(|h| {
                    h.section_id == section.id
                        && h.sentence == sentence
                        && h.term.to_lowercase() == folded
                });
                if !already {
                    self.highlights.push(Highlight {
                        section_id: section.id.clone(),
                        term: term.to_string(),
                        sentence: sentence.to_string(),
                        color: pick_color(),
                    });
                }
            }
        }
        matched
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Attach a note to the first section containing `passage` verbatim.
    pub fn annotate(
        &mut self,
        passage: &str,
        note: &str,
        author: &str,
    ) -> Result<AnnotationId, ArticleError> {
        let passage = passage.trim();
        if passage.is_empty() {
            return Err(ArticleError::EmptyText);
        }
        let section = self
            .sections
            .iter()
            .find(|s| s.text.contains(passage))
            .ok_or_else(|| ArticleError::PassageNotFound(passage.to_string()))?;

        let id = AnnotationId::new(format!("annotation-{}", Uuid::new_v4().simple()));
        self.annotations.insert(
            id.clone(),
            Annotation {
                id: id.clone(),
                section_id: section.id.clone(),
                passage: passage.to_string(),
                note: note.to_string(),
                author: author.to_string(),
                timestamp: Utc::now(),
            },
        );
        Ok(id)
    }

    /// Replace the note of an existing annotation, restamping author and time.
    pub fn update_annotation(
        &mut self,
        id: &str,
        note: &str,
        author: &str,
    ) -> Result<(), ArticleError> {
        let annotation = self
            .annotations
            .get_mut(id)
            .ok_or_else(|| ArticleError::AnnotationNotFound(id.to_string()))?;
        annotation.note = note.to_string();
        annotation.author = author.to_string();
        annotation.timestamp = Utc::now();
        Ok(())
    }

    pub fn remove_annotation(&mut self, id: &str) -> Result<Annotation, ArticleError> {
        self.annotations
            .remove(id)
            .ok_or_else(|| ArticleError::AnnotationNotFound(id.to_string()))
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.values()
    }

    pub fn annotation(&self, id: &str) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    /// Save a snippet; the newest snippet comes first.
    pub fn save_snippet(&mut self, selected: &str, author: &str) -> Result<&Snippet, ArticleError> {
        let selected = selected.trim();
        if selected.is_empty() {
            return Err(ArticleError::EmptyText);
        }
        self.snippets.insert(
            0,
            Snippet {
                id: Uuid::new_v4(),
                text: selected.to_string(),
                summary: text::summarize(selected),
                author: author.to_string(),
                timestamp: Utc::now(),
            },
        );
        Ok(&self.snippets[0])
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }
}
