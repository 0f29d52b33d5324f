//! The research article served by the desk.

use super::Section;

pub const ARTICLE_HEADLINE: &str = "OpenAI Market Analysis Report";
pub const ARTICLE_DATELINE: &str = "October 7, 2025 - Atlas Bank Markets Research";

/// Sections in reading order: (id, heading, layout height in px, body).
const SECTIONS: &[(&str, &str, f64, &str)] = &[
    (
        "executive-summary",
        "Executive Summary",
        420.0,
        "OpenAI continues to demonstrate strong market leadership with significant strategic \
         developments in infrastructure, product innovation, and market expansion. Key highlights \
         include a $100 billion NVIDIA partnership, expansion of data center capacity, and launch \
         of new consumer-facing products.",
    ),
    (
        "infrastructure-expansion",
        "Infrastructure Expansion",
        560.0,
        "In the past year, OpenAI has not only solidified its position as a leader in artificial \
         intelligence, but has also redefined the competitive landscape through bold infrastructure \
         investments and a relentless focus on product innovation. The company's landmark $100 \
         billion partnership with NVIDIA marks a pivotal moment, enabling the deployment of 10GW \
         computing systems and setting a new standard for data center capacity. This expansion, \
         complemented by strategic agreements with Oracle and CoreWeave, has created a robust \
         foundation for both consumer and enterprise growth.",
    ),
    (
        "product-innovation",
        "Product Innovation",
        480.0,
        "Product innovation remains at the heart of OpenAI's strategy. The launch of \"Instant \
         Checkout\" in ChatGPT introduced agentic shopping to millions, while the Sora social app \
         and ChatGPT Pulse have deepened user engagement and broadened the company's reach. These \
         developments are not isolated; they reflect a broader commitment to enhancing the user \
         experience and driving adoption across diverse demographics.",
    ),
    (
        "market-competition",
        "Market Competition",
        460.0,
        "Competition in the AI space has intensified, with Anthropic's Claude Opus 4.1 achieving \
         a notable 47.6% win rate against human experts. OpenAI's own GPT-5, with a 38.8% win/tie \
         rate, continues to push the boundaries of what is possible, while strategic partnerships \
         with industry leaders like Databricks further strengthen its market position.",
    ),
    (
        "financial-projections",
        "Financial Projections",
        500.0,
        "Financially, OpenAI is on a remarkable trajectory. Revenue is expected to reach $200 \
         billion by 2030, up from $13 billion in 2025, with a projected CAGR of 73% over the next \
         five years. However, this growth comes with significant infrastructure costs and an \
         anticipated cash burn of $115 billion between 2025 and 2029, a challenge the company is \
         addressing through careful planning and strategic investment.",
    ),
    (
        "market-position-strategy",
        "Market Position & Strategy",
        440.0,
        "The company's market strategy is multifaceted, balancing innovation in consumer-facing \
         products with the expansion of enterprise partnerships. OpenAI's focus on AI \
         infrastructure development and continuous product improvement has resulted in a growing \
         user base and enhanced capabilities for clients across industries.",
    ),
    (
        "risks-challenges",
        "Risks & Challenges",
        380.0,
        "Risks remain, including regulatory scrutiny, increasing competition, and the need for \
         ongoing innovation. Yet, OpenAI's commitment to technological leadership and its ability \
         to adapt to changing market conditions position it well for future success.",
    ),
    (
        "future-outlook",
        "Future Outlook",
        400.0,
        "Looking ahead, OpenAI is poised for continued growth, driven by strong partnerships, a \
         dynamic product pipeline, and a clear vision for the future of artificial intelligence. \
         The company's journey is far from over, and its impact on the industry will be felt for \
         years to come.",
    ),
];

/// Height of the page header above the first section.
pub const HEADER_HEIGHT: f64 = 240.0;

pub fn builtin_sections() -> Vec<Section> {
    let mut top = HEADER_HEIGHT;
    SECTIONS
        .iter()
        .map(|(id, heading, height, body)| {
            let section = Section::new(*id, *heading, 1, top, *height, *body);
            top += height;
            section
        })
        .collect()
}
